use thiserror::Error;

use crate::validation::ContactField;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid argument: {0} must not be empty")]
    InvalidArgument(ContactField),

    #[error("I/O error while accessing the terminal: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unrecognized command: '{0}'")]
    ParseCommand(String),

    #[error("Could not render contacts: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl AppError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, AppError::InvalidArgument(_))
    }
}
