//! Spec-limit lookup and display-range derivation
//!
//! The spec table maps test names to their USL/LSL. Limits are coerced to
//! numbers on read; a non-numeric limit leaves the range undefined, which
//! downstream code reports as an un-plottable variable instead of crashing.

use thiserror::Error;

use crate::core::loader::{SPEC_LSL_COLUMN, SPEC_NAME_COLUMN, SPEC_USL_COLUMN};
use crate::core::table::DataTable;

/// Test-name prefixes that mark a spec row as a selectable variable.
pub const VARIABLE_PREFIXES: [&str; 2] = ["V_", "I_"];

/// One-sided padding factor applied to the USL-LSL span for the display
/// range, expanding the visible axis ~11% in total.
pub const DISPLAY_PAD_FACTOR: f64 = 0.055263;

/// The selected variable has no row in the spec table.
#[derive(Debug, Error)]
#[error("variable \"{0}\" not found in spec file")]
pub struct VariableNotFoundError(pub String);

/// Resolved specification limits for one variable.
///
/// A limit is `None` when its spec cell is missing or non-numeric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpecLimits {
    pub usl: Option<f64>,
    pub lsl: Option<f64>,
}

impl SpecLimits {
    /// The USL-LSL span, when both limits are defined.
    pub fn range(&self) -> Option<f64> {
        Some(self.usl? - self.lsl?)
    }
}

/// The loaded spec table.
#[derive(Debug, Clone)]
pub struct SpecTable {
    table: DataTable,
}

impl SpecTable {
    pub fn new(table: DataTable) -> Self {
        SpecTable { table }
    }

    pub fn table(&self) -> &DataTable {
        &self.table
    }

    /// Ordered list of selectable variables: test names starting with a
    /// voltage/current prefix, in spec-file row order.
    pub fn variables(&self) -> Vec<String> {
        let Some(name_col) = self.table.column_index(SPEC_NAME_COLUMN) else {
            return Vec::new();
        };
        self.table
            .rows()
            .filter_map(|row| row.get(name_col).and_then(|c| c.as_str()))
            .filter(|name| VARIABLE_PREFIXES.iter().any(|p| name.starts_with(p)))
            .map(str::to_string)
            .collect()
    }

    /// Look up USL/LSL for a variable. The first matching row wins when a
    /// test name is duplicated.
    pub fn resolve_limits(&self, variable: &str) -> Result<SpecLimits, VariableNotFoundError> {
        let not_found = || VariableNotFoundError(variable.to_string());
        let name_col = self.table.column_index(SPEC_NAME_COLUMN).ok_or_else(not_found)?;

        let row = self
            .table
            .rows()
            .position(|r| r.get(name_col).and_then(|c| c.as_str()) == Some(variable))
            .ok_or_else(not_found)?;

        let limit = |column: &str| {
            self.table
                .column_index(column)
                .and_then(|col| self.table.cell(row, col))
                .and_then(|c| c.numeric())
        };

        Ok(SpecLimits {
            usl: limit(SPEC_USL_COLUMN),
            lsl: limit(SPEC_LSL_COLUMN),
        })
    }
}

/// Padded axis range around the spec limits.
pub fn display_range(usl: f64, lsl: f64) -> (f64, f64) {
    let span = usl - lsl;
    (
        lsl - DISPLAY_PAD_FACTOR * span,
        usl + DISPLAY_PAD_FACTOR * span,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::Cell;

    fn spec_with_rows(rows: &[(&str, &str, &str)]) -> SpecTable {
        let mut table = DataTable::new(vec![
            SPEC_NAME_COLUMN.to_string(),
            SPEC_USL_COLUMN.to_string(),
            SPEC_LSL_COLUMN.to_string(),
        ]);
        for (name, usl, lsl) in rows {
            table.push_row(vec![Cell::text(*name), Cell::text(*usl), Cell::text(*lsl)]);
        }
        SpecTable::new(table)
    }

    #[test]
    fn test_variables_filters_by_prefix() {
        let spec = spec_with_rows(&[
            ("V_OUT", "5.1", "0.1"),
            ("T_AMBIENT", "85", "-40"),
            ("I_LOAD", "2.0", "0.5"),
        ]);
        assert_eq!(spec.variables(), vec!["V_OUT", "I_LOAD"]);
    }

    #[test]
    fn test_resolve_limits() {
        let spec = spec_with_rows(&[("V_OUT", "5.1", "0.1")]);
        let limits = spec.resolve_limits("V_OUT").unwrap();
        assert_eq!(limits.usl, Some(5.1));
        assert_eq!(limits.lsl, Some(0.1));
        assert!((limits.range().unwrap() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_resolve_limits_first_match_wins() {
        let spec = spec_with_rows(&[("V_OUT", "5.0", "0.0"), ("V_OUT", "9.9", "9.0")]);
        let limits = spec.resolve_limits("V_OUT").unwrap();
        assert_eq!(limits.usl, Some(5.0));
    }

    #[test]
    fn test_resolve_limits_unknown_variable() {
        let spec = spec_with_rows(&[("V_OUT", "5.1", "0.1")]);
        let err = spec.resolve_limits("V_MISSING").unwrap_err();
        assert!(err.to_string().contains("V_MISSING"));
    }

    #[test]
    fn test_non_numeric_limit_is_undefined() {
        let spec = spec_with_rows(&[("V_OUT", "TBD", "0.1")]);
        let limits = spec.resolve_limits("V_OUT").unwrap();
        assert_eq!(limits.usl, None);
        assert_eq!(limits.lsl, Some(0.1));
        assert_eq!(limits.range(), None);
    }

    #[test]
    fn test_display_range_padding() {
        let (lo, hi) = display_range(10.0, 0.0);
        assert!((lo - -0.55263).abs() < 1e-9);
        assert!((hi - 10.55263).abs() < 1e-9);
    }
}
