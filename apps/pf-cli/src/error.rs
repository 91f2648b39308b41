//! Error type for the command-line front end.

use pf_core::PfError;
use pf_network::NetworkError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Numeric(#[from] PfError),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Failed to encode streams: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
