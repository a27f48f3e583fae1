//! Sheet reader: fetches a public CSV export and cleans it into rows.

use std::time::Duration;

use tracing::{debug, info};

use crate::contract::{Row, SheetReader};
use crate::error::FetchError;

/// Public CSV export endpoint for Google Sheets.
const SHEETS_EXPORT_BASE: &str = "https://docs.google.com/spreadsheets/d";

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Reads a sheet over its unauthenticated CSV export endpoint.
///
/// Cleaning matches what the downstream transform expects: every cell is
/// trimmed, and rows and columns that are entirely empty are dropped. A
/// fetch or parse failure is a typed error; an empty sheet is an empty row
/// list. Callers can therefore tell "the sheet has no rows" apart from
/// "the fetch failed".
pub struct CsvSheetReader {
    client: reqwest::Client,
    base_url: String,
}

impl CsvSheetReader {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_base_url(SHEETS_EXPORT_BASE)
    }

    /// Use an alternative export endpoint. Tests point this at a local stub
    /// server.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
        Ok(CsvSheetReader {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait::async_trait]
impl SheetReader for CsvSheetReader {
    async fn fetch_rows(&self, sheet_id: &str) -> Result<Vec<Row>, FetchError> {
        let url = format!("{}/{}/export?format=csv", self.base_url, sheet_id);
        info!(url = %url, "Fetching sheet CSV export");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let rows = parse_rows(&body)?;
        info!(sheet_id = %sheet_id, rows = rows.len(), "Sheet fetched and cleaned");
        Ok(rows)
    }
}

/// Parse CSV text into cleaned rows.
///
/// Ragged records are tolerated (short rows are padded with empty cells);
/// all cells are trimmed; entirely empty rows are dropped first, then
/// columns that are empty in every remaining row.
fn parse_rows(text: &str) -> Result<Vec<Row>, FetchError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows: Vec<Vec<String>> = Vec::new();
    for result in reader.records() {
        let record = result?;
        let cells: Vec<String> = (0..headers.len())
            .map(|i| record.get(i).unwrap_or("").to_string())
            .collect();
        if cells.iter().all(|cell| cell.is_empty()) {
            continue;
        }
        rows.push(cells);
    }

    let keep: Vec<usize> = (0..headers.len())
        .filter(|&i| rows.iter().any(|cells| !cells[i].is_empty()))
        .collect();
    if keep.len() < headers.len() {
        debug!(
            total = headers.len(),
            kept = keep.len(),
            "Dropped entirely empty columns"
        );
    }

    Ok(rows
        .into_iter()
        .map(|cells| {
            keep.iter()
                .map(|&i| (headers[i].clone(), cells[i].clone()))
                .collect::<Row>()
        })
        .collect())
}
