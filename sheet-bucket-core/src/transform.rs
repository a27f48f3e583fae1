//! Row to record transformation over an explicit column mapping.

use crate::config::ColumnMap;
use crate::contract::{Record, Row};
use crate::error::TransformError;
use tracing::debug;

/// Map one row into a record using the given column mapping.
///
/// Pure and idempotent: cell values are trimmed strings and nothing else is
/// validated here. Entirely empty rows are expected to have been dropped by
/// the reader before this point. A missing source column is a typed error
/// carrying the row index and column name.
pub fn transform_row(
    columns: &ColumnMap,
    index: usize,
    row: &Row,
) -> Result<Record, TransformError> {
    let field = |column: &str| -> Result<String, TransformError> {
        row.get(column)
            .map(|value| value.trim().to_string())
            .ok_or_else(|| TransformError::MissingColumn {
                row: index,
                column: column.to_string(),
            })
    };

    Ok(Record {
        title: field(&columns.title)?,
        price: field(&columns.price)?,
        address: field(&columns.address)?,
        image_url: field(&columns.image_url)?,
        video_m3u8: field(&columns.video_m3u8)?,
        detail_url: field(&columns.detail_url)?,
    })
}

/// Map all rows, failing fast on the first bad row.
pub fn transform_rows(columns: &ColumnMap, rows: &[Row]) -> Result<Vec<Record>, TransformError> {
    let records = rows
        .iter()
        .enumerate()
        .map(|(index, row)| transform_row(columns, index, row))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(rows = rows.len(), records = records.len(), "Transformed rows into records");
    Ok(records)
}
