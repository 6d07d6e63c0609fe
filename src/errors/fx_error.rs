//! Custom error types for the FX analytics pipeline

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FxError {
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
        retry_count: u32,
    },

    #[error("Data parsing error: {context}")]
    DataParsing {
        context: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Invalid argument: {name} - {reason}")]
    InvalidArgument {
        name: String,
        reason: String,
    },

    #[error("Report generation failed for {path:?}: {message}")]
    Report {
        path: PathBuf,
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

pub type FxResult<T> = Result<T, FxError>;
