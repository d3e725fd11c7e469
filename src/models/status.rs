use serde::Serialize;

/// Lifecycle label of an appointment row (`Status` column).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Status {
    /// Booked through the quick agenda ("Agendado").
    Scheduled,
    /// Full intake form saved ("Completo").
    Complete,
    /// Any label found in older sheets.
    Other(String),
}

impl Status {
    pub fn label(&self) -> &str {
        match self {
            Status::Scheduled => "Agendado",
            Status::Complete => "Completo",
            Status::Other(s) => s.as_str(),
        }
    }

    pub fn from_label(s: &str) -> Self {
        match s.trim() {
            "Agendado" => Status::Scheduled,
            "Completo" => Status::Complete,
            other => Status::Other(other.to_string()),
        }
    }
}
