//! High-level pipeline: fetch → transform → persist → upload → compose link.
//!
//! This module owns the orchestration of one publish run for one source.
//! Every step is sequential; a failed step aborts the run with the typed
//! error for that step. The one deliberate exception is an empty dataset:
//! an empty sheet still produces and uploads an `[]` artifact (the viewer
//! treats it as "nothing listed today"), but the report flags it so callers
//! can surface the condition instead of mistaking it for a populated run.
//!
//! Callable from the CLI crate and from tests, with mock implementations of
//! [`SheetReader`] and [`BucketUploader`] injected at the seams.

use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::artifact::{write_artifact, ArtifactName};
use crate::config::SheetSource;
use crate::contract::{BucketUploader, SheetReader};
use crate::error::PublishError;
use crate::link::compose_view_url;
use crate::transform::transform_rows;

/// Run-level inputs that are not part of the source selection.
#[derive(Debug, Clone)]
pub struct PublishOptions {
    /// Directory the local artifact is written to.
    pub output_dir: PathBuf,
    /// Base URL of the downstream viewer.
    pub view_base_url: String,
    /// Calendar date stamped into the artifact name and viewer URL.
    pub date: NaiveDate,
}

/// What one publish run produced.
#[derive(Debug, Clone)]
pub struct PublishReport {
    pub source_name: String,
    pub record_count: usize,
    /// True when the sheet yielded zero rows and the artifact is `[]`.
    pub empty: bool,
    pub file_name: String,
    pub object_key: String,
    pub local_path: PathBuf,
    pub uploaded_bytes: u64,
    /// Shareable viewer URL for this run.
    pub view_url: String,
}

/// Publish one source: fetch its sheet, transform the rows, write the
/// date-stamped artifact, upload it and compose the viewer URL.
pub async fn publish<R, U>(
    reader: &R,
    uploader: &U,
    source: &SheetSource,
    opts: &PublishOptions,
) -> Result<PublishReport, PublishError>
where
    R: SheetReader + ?Sized,
    U: BucketUploader + ?Sized,
{
    info!(
        source = %source.name,
        sheet_id = %source.sheet_id,
        prefix = %source.prefix,
        date = %opts.date,
        "Starting publish run"
    );

    let rows = reader.fetch_rows(&source.sheet_id).await?;
    if rows.is_empty() {
        warn!(
            source = %source.name,
            "Sheet yielded zero rows; publishing an empty artifact"
        );
    }

    let records = transform_rows(&source.columns, &rows)?;
    info!(records = records.len(), "Rows transformed into records");

    let name = ArtifactName::new(&source.prefix, opts.date);
    let local_path = write_artifact(&opts.output_dir, &name, &records)?;

    let receipt = uploader.upload_file(&local_path, &name.object_key).await?;
    info!(
        object_key = %receipt.object_key,
        bytes = receipt.bytes,
        "Artifact uploaded"
    );

    let view_url = compose_view_url(&opts.view_base_url, &name.date_token, &source.prefix)?;
    info!(view_url = %view_url, "Publish run complete");

    Ok(PublishReport {
        source_name: source.name.clone(),
        record_count: records.len(),
        empty: records.is_empty(),
        file_name: name.file_name,
        object_key: name.object_key,
        local_path,
        uploaded_bytes: receipt.bytes,
        view_url: view_url.into(),
    })
}
