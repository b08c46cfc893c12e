use thiserror::Error;

/// Error type shared by the calculators, preference storage, and configuration.
#[derive(Debug, Error)]
pub enum SwitcherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Unknown period: {0}")]
    UnknownPeriod(String),
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
    #[error("No {0} selected")]
    MissingSelection(&'static str),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, SwitcherError>;
