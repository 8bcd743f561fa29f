//! Error type for the command-line runner.

use thiserror::Error;

use aeri_core::error::SimError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Sim(#[from] SimError),

    #[error("csv output failed: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("could not parse scenario: {0}")]
    Scenario(#[from] serde_json::Error),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
