//! Fatal errors for the export pipeline.
//!
//! Anything in [`ExportError`] stops the run. Decode problems are deliberately
//! absent: they are logged by the decoder and the pipeline continues with
//! whatever records it has.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// The request could not be assembled (bad URL)
    #[error("Could not create request: {0}")]
    BuildRequest(#[source] reqwest::Error),

    /// Connection, TLS or transport failure
    #[error("Could not perform request: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Error creating file {}: {source}", .path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Error writing csv: {0}")]
    WriteRow(#[from] csv::Error),

    #[error("Error flushing csv: {0}")]
    Flush(#[from] std::io::Error),
}

/// Result type alias for the export pipeline
pub type ExportResult<T> = Result<T, ExportError>;
