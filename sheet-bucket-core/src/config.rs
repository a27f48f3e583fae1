//! Configuration types: the source selector enumeration and column mappings.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info};

/// Top-level pipeline configuration, typically deserialized from YAML by the
/// binary crate. Credentials are not part of this struct; they travel
/// separately so the config file stays free of secrets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Bucket the artifacts are uploaded to.
    pub bucket: String,
    /// Base URL of the downstream viewer.
    pub view_base_url: String,
    /// Directory the local artifact is written to before upload.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// The selectable sources, in operator-facing order.
    #[serde(default)]
    pub sources: Vec<SheetSource>,
}

impl Config {
    /// Look up a source by its human-readable selector name.
    pub fn source(&self, name: &str) -> Option<&SheetSource> {
        self.sources.iter().find(|s| s.name == name)
    }

    pub fn trace_loaded(&self) {
        info!(
            bucket = %self.bucket,
            output_dir = %self.output_dir.display(),
            sources_count = self.sources.len(),
            "Loaded Config"
        );
        debug!(?self, "Config loaded (full debug)");
    }
}

/// One selectable source: a human-readable category name mapped to a sheet
/// identifier, an upload-key prefix and the column mapping for its schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetSource {
    /// Operator-facing category name (e.g. "更新影片").
    pub name: String,
    /// Spreadsheet identifier for the public CSV export endpoint.
    pub sheet_id: String,
    /// Short machine-usable prefix, used in the artifact name and viewer URL.
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Source-column names for each record field.
    #[serde(default)]
    pub columns: ColumnMap,
}

/// Explicit source-column to record-field mapping, so a schema change in the
/// sheet is a one-line config edit rather than a code change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMap {
    pub title: String,
    pub price: String,
    pub address: String,
    pub image_url: String,
    pub video_m3u8: String,
    pub detail_url: String,
}

impl Default for ColumnMap {
    /// The standard schema: price and address come from distinct columns.
    fn default() -> Self {
        ColumnMap {
            title: "標題".to_string(),
            price: "價格".to_string(),
            address: "內容".to_string(),
            image_url: "圖片".to_string(),
            video_m3u8: "影片".to_string(),
            detail_url: "連結".to_string(),
        }
    }
}

impl ColumnMap {
    /// Mapping for sheets that carry no dedicated price column: both price
    /// and address are read from the content column. Only use this for
    /// sources whose schema actually lacks a price column.
    pub fn content_priced() -> Self {
        ColumnMap {
            price: "內容".to_string(),
            ..ColumnMap::default()
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_prefix() -> String {
    "video".to_string()
}
