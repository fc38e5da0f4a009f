//! Duplicate-unit filtering
//!
//! Units can appear more than once across result files (retests). The
//! deduplicated view keeps the last occurrence per serial number.

use std::collections::HashMap;

use crate::core::table::DataTable;

/// Keep one row per `key_column` value, the last in load order.
///
/// Survivors keep their original relative order; the input table is left
/// untouched. Rows with a missing key collapse to a single group. A table
/// without the key column is returned as-is.
pub fn dedupe(table: &DataTable, key_column: &str) -> DataTable {
    let Some(key_col) = table.column_index(key_column) else {
        return table.clone();
    };

    let mut last_seen: HashMap<Option<&str>, usize> = HashMap::new();
    for (index, row) in table.rows().enumerate() {
        let key = row.get(key_col).and_then(|c| c.as_str());
        last_seen.insert(key, index);
    }

    let mut survivors: Vec<usize> = last_seen.into_values().collect();
    survivors.sort_unstable();

    let mut out = DataTable::new(table.headers().to_vec());
    for index in survivors {
        if let Some(row) = table.row(index) {
            out.push_row(row.to_vec());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::Cell;

    fn results(rows: &[(&str, &str)]) -> DataTable {
        let mut table = DataTable::new(vec!["DUT_SN".to_string(), "V_1".to_string()]);
        for (sn, v) in rows {
            table.push_row(vec![Cell::text(*sn), Cell::text(*v)]);
        }
        table
    }

    fn row_values(table: &DataTable) -> Vec<(String, String)> {
        table
            .rows()
            .map(|r| (r[0].display().to_string(), r[1].display().to_string()))
            .collect()
    }

    #[test]
    fn test_last_occurrence_wins() {
        let input = results(&[("A", "1"), ("B", "2"), ("A", "3")]);
        let out = dedupe(&input, "DUT_SN");

        assert_eq!(
            row_values(&out),
            vec![
                ("B".to_string(), "2".to_string()),
                ("A".to_string(), "3".to_string()),
            ]
        );
        // input untouched
        assert_eq!(input.n_rows(), 3);
    }

    #[test]
    fn test_no_duplicates_is_identity() {
        let input = results(&[("A", "1"), ("B", "2")]);
        let out = dedupe(&input, "DUT_SN");
        assert_eq!(row_values(&out), row_values(&input));
    }

    #[test]
    fn test_missing_keys_collapse_to_last() {
        let mut input = results(&[("A", "1")]);
        input.push_row(vec![Cell::missing(), Cell::text("7")]);
        input.push_row(vec![Cell::missing(), Cell::text("8")]);

        let out = dedupe(&input, "DUT_SN");
        assert_eq!(out.n_rows(), 2);
        assert_eq!(out.row(1).unwrap()[1].display(), "8");
    }

    #[test]
    fn test_unknown_key_column_returns_clone() {
        let input = results(&[("A", "1"), ("A", "2")]);
        let out = dedupe(&input, "SERIAL");
        assert_eq!(out.n_rows(), 2);
    }
}
