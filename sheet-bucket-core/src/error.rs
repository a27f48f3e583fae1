//! Error taxonomy for the publish pipeline.
//!
//! Every fallible step has its own error type so callers can tell the
//! failure modes apart. In particular, a sheet that fetches successfully but
//! contains no rows is `Ok(vec![])`, never an error: only an actual
//! retrieval or parse problem produces a [`FetchError`].

use std::path::PathBuf;
use thiserror::Error;

/// Failure while retrieving or parsing the remote sheet.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("sheet export returned status {status}")]
    Status { status: u16 },

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),
}

/// Failure while mapping a row into a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("row {row}: missing expected column {column:?}")]
    MissingColumn { row: usize, column: String },
}

/// Failure while serializing or writing the local artifact.
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Failure while composing the viewer URL.
#[derive(Error, Debug)]
pub enum LinkError {
    #[error("invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}

/// Failure while uploading the artifact to the bucket.
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("local file not found: {path}")]
    LocalFileMissing { path: PathBuf },

    #[error("credentials rejected by storage service: {0}")]
    InvalidCredentials(String),

    #[error("storage service error: {0}")]
    Service(String),
}

/// Top-level error for one publish run; wraps whichever step failed.
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("fetch step failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("transform step failed: {0}")]
    Transform(#[from] TransformError),

    #[error("artifact step failed: {0}")]
    Artifact(#[from] ArtifactError),

    #[error("upload step failed: {0}")]
    Upload(#[from] UploadError),

    #[error("link step failed: {0}")]
    Link(#[from] LinkError),
}
