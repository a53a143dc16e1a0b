//! `roster`: the public roster and the admin console from a terminal.
//!
//! ```text
//! roster show [--check-avatars]
//! roster login --email admin@example.com
//! roster players create --username Notch --role <role-id> --status ativo
//! roster roles delete <role-id> --yes
//! roster settings set https://discord.gg/example
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use roster::prelude::*;
use roster_view::{render_player_rows, render_roles};
use tracing_subscriber::{EnvFilter, fmt};

type Console = AdminConsole<HttpTransport, FileTokenStore>;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "roster",
    version,
    about = "Public roster and admin console for the community server",
    long_about = None
)]
struct Cli {
    /// Backend base URL; the API lives under `/api` [env: ROSTER_BACKEND_URL]
    #[arg(long, global = true)]
    backend_url: Option<String>,

    /// Where the admin token is kept [env: ROSTER_TOKEN_FILE]
    #[arg(long, global = true)]
    token_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the public roster.
    Show {
        /// Check every avatar and use the default head for broken ones.
        #[arg(long)]
        check_avatars: bool,
    },
    #[command(flatten)]
    Admin(AdminCommand),
}

#[derive(Subcommand, Debug)]
enum AdminCommand {
    /// Log in as an admin. The password is read from stdin when omitted.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: Option<String>,
    },
    /// Forget the stored admin token.
    Logout,
    /// Manage players.
    #[command(subcommand)]
    Players(PlayerCommand),
    /// Manage roles.
    #[command(subcommand)]
    Roles(RoleCommand),
    /// Show or change the contact link.
    #[command(subcommand)]
    Settings(SettingsCommand),
}

#[derive(Subcommand, Debug)]
enum PlayerCommand {
    /// List every player with its role.
    List,
    /// Add a player.
    Create {
        #[arg(long)]
        username: String,
        /// Role id.
        #[arg(long)]
        role: String,
        #[arg(long, default_value_t = Status::Pendente)]
        status: Status,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Change a player. Fields left out keep their current value.
    Update {
        id: String,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        status: Option<Status>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Remove a player.
    Delete {
        id: String,
        /// Don't ask for confirmation.
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
enum RoleCommand {
    /// List every role.
    List,
    /// Add a role. Color defaults to `#8B5CF6` and order to "after the last
    /// role".
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        color: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        order: Option<i64>,
    },
    /// Change a role. Fields left out keep their current value.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        color: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        order: Option<i64>,
    },
    /// Remove a role. Its players are kept and show `N/A` as their role.
    Delete {
        id: String,
        /// Don't ask for confirmation.
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
enum SettingsCommand {
    /// Print the contact link.
    Show,
    /// Set the contact link. An empty link hides the contact button.
    Set { link: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            if matches!(e, RosterError::Session(SessionError::NotLoggedIn)) {
                eprintln!("hint: run `roster login --email <email>` first");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), RosterError> {
    let mut config = ClientConfig::from_env();
    if let Some(url) = cli.backend_url {
        config.backend_url = url;
    }
    if let Some(path) = cli.token_file {
        config.token_file = path;
    }
    tracing::debug!(
        api_root = %config.api_root(),
        token_file = %config.token_file.display(),
        "configured"
    );

    let client = ApiClient::new(HttpTransport::new(&config.api_root())?);

    match cli.command {
        Command::Show { check_avatars } => show(client, check_avatars).await,
        Command::Admin(command) => {
            let store = FileTokenStore::new(&config.token_file);
            let session = SessionManager::new(store)?;
            let mut console = AdminConsole::new(client, session);
            let result = admin(&mut console, command).await;
            print_notices(console.take_notices());
            result
        }
    }
}

// ---------------------------------------------------------------------------
// Public roster
// ---------------------------------------------------------------------------

async fn show(
    client: ApiClient<HttpTransport>,
    check_avatars: bool,
) -> Result<(), RosterError> {
    let mut page = RosterPage::new(client);
    let result = page.load().await;
    if result.is_ok() && check_avatars {
        page.check_avatars().await;
    }
    print!("{}", page.render());
    result
}

// ---------------------------------------------------------------------------
// Admin console
// ---------------------------------------------------------------------------

async fn admin(
    console: &mut Console,
    command: AdminCommand,
) -> Result<(), RosterError> {
    match command {
        AdminCommand::Login { email, password } => {
            let password = match password {
                Some(password) => password,
                None => read_password()?,
            };
            console.login(&Credentials::new(email, password)).await
        }
        AdminCommand::Logout => console.logout(),
        AdminCommand::Players(command) => players(console, command).await,
        AdminCommand::Roles(command) => roles(console, command).await,
        AdminCommand::Settings(command) => settings(console, command).await,
    }
}

async fn players(
    console: &mut Console,
    command: PlayerCommand,
) -> Result<(), RosterError> {
    match command {
        PlayerCommand::List => {
            console.refresh().await?;
            print!("{}", render_player_rows(&console.player_rows()));
        }
        PlayerCommand::Create {
            username,
            role,
            status,
            description,
        } => {
            require_login(console)?;
            let form = PlayerForm {
                minecraft_username: username,
                role_id: RoleId(role),
                status,
                description,
            };
            let player = console.create_player(&form).await?;
            println!("{}", player.id);
        }
        PlayerCommand::Update {
            id,
            username,
            role,
            status,
            description,
        } => {
            require_login(console)?;
            console.refresh().await?;
            let id = PlayerId(id);
            let mut form = console.edit_player_form(&id)?;
            if let Some(username) = username {
                form.minecraft_username = username;
            }
            if let Some(role) = role {
                form.role_id = RoleId(role);
            }
            if let Some(status) = status {
                form.status = status;
            }
            if let Some(description) = description {
                form.description = description;
            }
            console.update_player(&id, &form).await?;
        }
        PlayerCommand::Delete { id, yes } => {
            require_login(console)?;
            let id = PlayerId(id);
            let deleted = if yes {
                console.delete_player(&id, &mut AssumeYes).await?
            } else {
                console.delete_player(&id, &mut Prompt::terminal()).await?
            };
            if !deleted {
                println!("Cancelled.");
            }
        }
    }
    Ok(())
}

async fn roles(
    console: &mut Console,
    command: RoleCommand,
) -> Result<(), RosterError> {
    match command {
        RoleCommand::List => {
            console.refresh().await?;
            print!("{}", render_roles(console.roles()));
        }
        RoleCommand::Create { name, color, order } => {
            require_login(console)?;
            // The default order depends on how many roles exist.
            console.refresh().await?;
            let mut form = console.new_role_form();
            form.name = name;
            if let Some(color) = color {
                form.color = color;
            }
            if let Some(order) = order {
                form.order = order;
            }
            let role = console.create_role(&form).await?;
            println!("{}", role.id);
        }
        RoleCommand::Update {
            id,
            name,
            color,
            order,
        } => {
            require_login(console)?;
            console.refresh().await?;
            let id = RoleId(id);
            let mut form = console.edit_role_form(&id)?;
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(color) = color {
                form.color = color;
            }
            if let Some(order) = order {
                form.order = order;
            }
            console.update_role(&id, &form).await?;
        }
        RoleCommand::Delete { id, yes } => {
            require_login(console)?;
            let id = RoleId(id);
            let deleted = if yes {
                console.delete_role(&id, &mut AssumeYes).await?
            } else {
                console.delete_role(&id, &mut Prompt::terminal()).await?
            };
            if !deleted {
                println!("Cancelled.");
            }
        }
    }
    Ok(())
}

async fn settings(
    console: &mut Console,
    command: SettingsCommand,
) -> Result<(), RosterError> {
    match command {
        SettingsCommand::Show => {
            console.refresh().await?;
            match console.settings().contact() {
                Some(link) => println!("{link}"),
                None => println!("(no contact link)"),
            }
        }
        SettingsCommand::Set { link } => {
            require_login(console)?;
            console.update_settings(&link).await?;
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn require_login(console: &Console) -> Result<(), RosterError> {
    if console.is_logged_in() {
        Ok(())
    } else {
        Err(SessionError::NotLoggedIn.into())
    }
}

fn read_password() -> Result<String, RosterError> {
    eprint!("Password: ");
    io::stderr().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn print_notices(notices: Vec<Notice>) {
    for notice in notices {
        if notice.is_error() {
            eprintln!("{notice}");
        } else {
            println!("{notice}");
        }
    }
}
