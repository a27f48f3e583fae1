#![allow(unused)]

//! # contract: interfaces between the pipeline and its collaborators
//!
//! This module defines the two seams of the pipeline as async traits:
//! [`SheetReader`] for the remote tabular source and [`BucketUploader`] for
//! object storage, plus the shared row/record data types.
//!
//! Both traits are annotated for `mockall` so consumers can generate
//! deterministic mocks for unit and integration tests. The real
//! implementations live in [`crate::fetch`] (reader) and in the binary
//! crate (uploader), keeping vendor SDKs out of the core.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use mockall::{automock, predicate::*};
use serde::{Deserialize, Serialize};

use crate::error::{FetchError, UploadError};

/// One row of the fetched sheet: column name to trimmed cell value.
///
/// Rows are an iteration view over the fetched table; they are consumed by
/// the transform step and not retained afterwards.
pub type Row = HashMap<String, String>;

/// The fixed six-field shape consumed by the downstream viewer.
///
/// Field order is part of the artifact contract; do not reorder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub title: String,
    pub price: String,
    pub address: String,
    pub image_url: String,
    pub video_m3u8: String,
    pub detail_url: String,
}

/// Returned by an uploader on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    /// Key the artifact was stored under, at the bucket root.
    pub object_key: String,
    /// Size of the uploaded file in bytes.
    pub bytes: u64,
}

/// Trait for fetching a remote sheet as cleaned rows.
///
/// Implementations must trim every cell and drop rows and columns that are
/// entirely empty. An empty sheet is `Ok(vec![])`; retrieval and parse
/// problems are typed errors, never silently mapped to an empty result.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait SheetReader: Send + Sync {
    /// Fetch all rows of the sheet identified by `sheet_id`.
    async fn fetch_rows(&self, sheet_id: &str) -> Result<Vec<Row>, FetchError>;
}

/// Trait for uploading one local file to the configured bucket.
///
/// The implementor owns the bucket name, endpoint and credentials; callers
/// only supply the local path and the object key. Known failure classes
/// (missing file, rejected credentials, service errors) come back as typed
/// [`UploadError`] variants rather than a printed boolean.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait BucketUploader: Send + Sync {
    /// Upload the file at `local_path` under `object_key` at the bucket root.
    async fn upload_file(
        &self,
        local_path: &Path,
        object_key: &str,
    ) -> Result<UploadReceipt, UploadError>;
}
