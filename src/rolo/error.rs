use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoloError {
    #[error("Invalid phone number format.")]
    InvalidPhone,

    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidBirthday,

    #[error("{0}")]
    Usage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RoloError {
    /// Usage errors carry the full "Invalid command. Format: ..." line.
    pub fn usage(text: impl Into<String>) -> Self {
        RoloError::Usage(text.into())
    }
}

pub type Result<T> = std::result::Result<T, RoloError>;
