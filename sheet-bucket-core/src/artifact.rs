//! Deterministic artifact naming and local persistence.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::contract::Record;
use crate::error::ArtifactError;

/// Names derived for one run's artifact.
///
/// A pure function of (prefix, date): no randomness, no counters, no
/// collision avoidance. Rerunning on the same calendar day with the same
/// prefix reuses the same names, so last write wins both locally and in the
/// bucket. That overwrite is intended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactName {
    /// Local file name, `<prefix>-<YYYY-MM-DD>.json`.
    pub file_name: String,
    /// Upload key at the bucket root; identical to the file name.
    pub object_key: String,
    /// Compact date token `<YYYYMMDD>` for the viewer URL.
    pub date_token: String,
}

impl ArtifactName {
    pub fn new(prefix: &str, date: NaiveDate) -> Self {
        let file_name = format!("{prefix}-{}.json", date.format("%Y-%m-%d"));
        ArtifactName {
            object_key: file_name.clone(),
            file_name,
            date_token: date.format("%Y%m%d").to_string(),
        }
    }
}

/// Serialize the records to `<dir>/<file_name>` and return the full path.
///
/// The artifact is a UTF-8 JSON array with 4-space indentation and
/// multi-byte characters left unescaped, matching what the downstream
/// viewer consumes. The directory is created if it does not exist.
pub fn write_artifact(
    dir: &Path,
    name: &ArtifactName,
    records: &[Record],
) -> Result<PathBuf, ArtifactError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(&name.file_name);

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;
    fs::write(&path, &buf)?;

    info!(
        path = %path.display(),
        records = records.len(),
        bytes = buf.len(),
        "Artifact written"
    );
    Ok(path)
}
