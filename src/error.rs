use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignalInfoError {
    #[error("Malformed snapshot: {0}")]
    Snapshot(String),

    #[error("Snapshot too short: need {needed} fields, have {available}")]
    ShortSnapshot { needed: usize, available: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SignalInfoError>;
