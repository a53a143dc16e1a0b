//! Asking the user before destructive actions.

use std::io::{self, BufRead, Write};

/// Asks a yes/no question before something irreversible.
///
/// Any `FnMut(&str) -> bool` closure works, which is what tests use.
pub trait Confirm {
    /// Returns `true` to go ahead.
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Says yes without asking (`--yes` on the command line).
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}

/// Prints the question and reads the answer from a line of input.
///
/// Only `y` or `yes` (any case) count as yes. Unreadable input counts as
/// no.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl Prompt<io::StdinLock<'static>, io::Stderr> {
    /// Asks on stderr and reads stdin.
    pub fn terminal() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Confirm for Prompt<R, W> {
    fn confirm(&mut self, prompt: &str) -> bool {
        let asked = write!(self.output, "{prompt} [y/N] ")
            .and_then(|()| self.output.flush());
        if asked.is_err() {
            return false;
        }

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => {
                let answer = answer.trim().to_ascii_lowercase();
                matches!(answer.as_str(), "y" | "yes")
            }
            Err(e) => {
                tracing::debug!(error = %e, "could not read confirmation");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_yes_confirms() {
        let mut out = Vec::new();
        let mut prompt = Prompt::new(Cursor::new("Yes\n"), &mut out);

        assert!(prompt.confirm("Delete this player?"));
        drop(prompt);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Delete this player? [y/N] "
        );
    }

    #[test]
    fn test_prompt_empty_answer_declines() {
        let mut prompt = Prompt::new(Cursor::new("\n"), Vec::new());
        assert!(!prompt.confirm("Delete?"));
    }

    #[test]
    fn test_prompt_eof_declines() {
        let mut prompt = Prompt::new(Cursor::new(""), Vec::new());
        assert!(!prompt.confirm("Delete?"));
    }

    #[test]
    fn test_closure_is_a_confirm() {
        let mut asked = Vec::new();
        let mut hook = |prompt: &str| {
            asked.push(prompt.to_string());
            false
        };

        assert!(!hook.confirm("Delete?"));
        assert_eq!(asked, ["Delete?"]);
    }

    #[test]
    fn test_assume_yes_always_confirms() {
        assert!(AssumeYes.confirm("anything"));
    }
}
