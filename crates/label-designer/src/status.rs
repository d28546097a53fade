use crate::constants::{STATUS_FAILURE, STATUS_IN_PROGRESS, STATUS_SUCCESS};
use serde::{Deserialize, Serialize};

/// JSON body of the print endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Result of one print attempt, whatever the transport did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintOutcome {
    Printed,
    Failed { message: String },
}

impl PrintOutcome {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, PrintOutcome::Printed)
    }
}

impl From<PrintResponse> for PrintOutcome {
    fn from(response: PrintResponse) -> Self {
        if response.success {
            PrintOutcome::Printed
        } else {
            PrintOutcome::Failed {
                message: response.message.unwrap_or_default(),
            }
        }
    }
}

/// Contents of the status panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintStatus {
    InProgress,
    Succeeded,
    Failed(String),
}

impl PrintStatus {
    /// Terminal states hand the print controls back to the user
    pub fn is_terminal(&self) -> bool {
        !matches!(self, PrintStatus::InProgress)
    }

    pub fn headline(&self) -> &'static str {
        match self {
            PrintStatus::InProgress => STATUS_IN_PROGRESS,
            PrintStatus::Succeeded => STATUS_SUCCESS,
            PrintStatus::Failed(_) => STATUS_FAILURE,
        }
    }

    pub fn message(&self) -> String {
        match self {
            PrintStatus::Failed(detail) => format!("{}\n{}", STATUS_FAILURE, detail),
            other => other.headline().to_string(),
        }
    }
}

impl From<PrintOutcome> for PrintStatus {
    fn from(outcome: PrintOutcome) -> Self {
        match outcome {
            PrintOutcome::Printed => PrintStatus::Succeeded,
            PrintOutcome::Failed { message } => PrintStatus::Failed(message),
        }
    }
}
