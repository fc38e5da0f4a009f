//! Unit lookup and record presentation
//!
//! A search resolves a serial number to the first matching row of the raw
//! result table and reads the selected variable's value there. The full
//! record of a located row can be presented column by column for display.

use thiserror::Error;

use crate::core::loader::RESULT_KEY_COLUMN;
use crate::core::table::DataTable;

/// The search key matched no row of the result table.
#[derive(Debug, Error)]
#[error("DUT_SN \"{0}\" not found in loaded results")]
pub struct NotFoundError(pub String);

/// A unit located on the histogram: its row index in the result table and
/// the selected variable's value there. The value stays `None` when the
/// measurement is missing or non-numeric.
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedPoint {
    pub row: usize,
    pub value: Option<f64>,
}

/// Find the first row whose `DUT_SN` equals `search_key` exactly.
///
/// Matching is case-sensitive with no partial matches. Duplicate serial
/// numbers resolve to the earliest occurrence.
pub fn locate(
    results: &DataTable,
    variable: &str,
    search_key: &str,
) -> Result<LocatedPoint, NotFoundError> {
    let not_found = || NotFoundError(search_key.to_string());
    let key_col = results.column_index(RESULT_KEY_COLUMN).ok_or_else(not_found)?;

    let row = results
        .rows()
        .position(|r| r.get(key_col).and_then(|c| c.as_str()) == Some(search_key))
        .ok_or_else(not_found)?;

    let value = results
        .column_index(variable)
        .and_then(|col| results.cell(row, col))
        .and_then(|c| c.numeric());

    Ok(LocatedPoint { row, value })
}

/// Every column of one row, in table column order, stringified for display.
/// Missing cells render as empty strings; an out-of-range row yields the
/// cleared (empty) presentation.
pub fn present_record(results: &DataTable, row: usize) -> Vec<(String, String)> {
    let Some(cells) = results.row(row) else {
        return Vec::new();
    };
    results
        .headers()
        .iter()
        .cloned()
        .zip(cells.iter().map(|c| c.display().to_string()))
        .collect()
}
