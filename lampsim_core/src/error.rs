use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum LampError {
    #[error("power source error: {0}")]
    Source(String),
}

#[derive(Debug, Error, Clone)]
pub enum BuildError {
    #[error("missing power source")]
    MissingPower,
    #[error("missing lamp name")]
    MissingName,
    #[error("missing lamp profile")]
    MissingProfile,
    #[error("invalid profile: {0}")]
    InvalidProfile(&'static str),
}

pub type Result<T> = eyre::Result<T>;
pub use eyre::Report;
