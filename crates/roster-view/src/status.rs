//! How a status looks on screen.

use roster_protocol::Status;

/// Human label for a status.
pub fn status_label(status: Status) -> &'static str {
    match status {
        Status::Ativo => "Ativo",
        Status::Pendente => "Pendente",
        Status::Inativo => "Inativo",
    }
}

/// Indicator color for a status: green, amber, red.
pub fn status_color(status: Status) -> &'static str {
    match status {
        Status::Ativo => "#10B981",
        Status::Pendente => "#F59E0B",
        Status::Inativo => "#EF4444",
    }
}
