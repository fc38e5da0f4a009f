//! CSV loading for spec and result files
//!
//! Both file kinds are delimited text with a header row. Result files may
//! disagree on their column sets; concatenation aligns columns by name and
//! fills the gaps with missing cells.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::limits::SpecTable;
use crate::core::table::{Cell, DataTable};

/// Spec column holding the test variable names.
pub const SPEC_NAME_COLUMN: &str = "Test Names";
/// Spec column holding the upper specification limit.
pub const SPEC_USL_COLUMN: &str = "USL";
/// Spec column holding the lower specification limit.
pub const SPEC_LSL_COLUMN: &str = "LSL";
/// Result column holding the unit serial number.
pub const RESULT_KEY_COLUMN: &str = "DUT_SN";

/// A file could not be read or is missing a required column.
#[derive(Debug, Error)]
pub enum FileLoadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("{path} is missing required column \"{column}\"")]
    MissingColumn { path: String, column: String },
}

fn read_table(path: &Path) -> Result<DataTable, FileLoadError> {
    let display = path.display().to_string();
    let map_err = |source: csv::Error| FileLoadError::Read {
        path: display.clone(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(map_err)?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(map_err)?
        .iter()
        .map(str::to_string)
        .collect();

    let mut table = DataTable::new(headers);
    for record in reader.records() {
        let record = record.map_err(map_err)?;
        let row: Vec<Cell> = record
            .iter()
            .map(|field| {
                if field.is_empty() {
                    Cell::missing()
                } else {
                    Cell::text(field)
                }
            })
            .collect();
        table.push_row(row);
    }
    Ok(table)
}

fn require_column(table: &DataTable, path: &Path, column: &str) -> Result<(), FileLoadError> {
    if table.column_index(column).is_none() {
        return Err(FileLoadError::MissingColumn {
            path: path.display().to_string(),
            column: column.to_string(),
        });
    }
    Ok(())
}

/// Load a spec file. Requires the `Test Names`, `USL` and `LSL` columns.
pub fn load_spec(path: &Path) -> Result<SpecTable, FileLoadError> {
    let table = read_table(path)?;
    for column in [SPEC_NAME_COLUMN, SPEC_USL_COLUMN, SPEC_LSL_COLUMN] {
        require_column(&table, path, column)?;
    }
    Ok(SpecTable::new(table))
}

/// Load one or more result files and concatenate them in argument order.
///
/// Each file must carry a `DUT_SN` column. Rows keep file order, then
/// in-file order; column sets are unioned by name.
pub fn load_results(paths: &[PathBuf]) -> Result<DataTable, FileLoadError> {
    let mut merged: Option<DataTable> = None;
    for path in paths {
        let table = read_table(path)?;
        require_column(&table, path, RESULT_KEY_COLUMN)?;
        match merged.as_mut() {
            Some(m) => m.append(table),
            None => merged = Some(table),
        }
    }
    Ok(merged.unwrap_or_default())
}
