//! In-memory tabular data with named columns
//!
//! `DataTable` is the backing structure for both spec and result files.
//! Cells keep their raw text; numeric interpretation happens on read, so
//! missing and non-numeric values stay representable instead of failing
//! at parse time.

/// A single table cell: raw text, or missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell(Option<String>);

impl Cell {
    /// A cell holding text content.
    pub fn text(value: impl Into<String>) -> Self {
        Cell(Some(value.into()))
    }

    /// An empty (missing) cell.
    pub fn missing() -> Self {
        Cell(None)
    }

    pub fn is_missing(&self) -> bool {
        self.0.is_none()
    }

    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Coerce the cell to a number. Missing or non-numeric text yields None.
    pub fn numeric(&self) -> Option<f64> {
        self.0
            .as_deref()
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
    }

    /// Display form: the raw text, or empty string for a missing cell.
    pub fn display(&self) -> &str {
        self.0.as_deref().unwrap_or("")
    }
}

/// A table of rows with named columns.
///
/// Rows always have exactly as many cells as there are headers; short rows
/// are padded with missing cells and oversized rows are truncated on insert.
#[derive(Debug, Clone, Default)]
pub struct DataTable {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl DataTable {
    pub fn new(headers: Vec<String>) -> Self {
        DataTable {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Append a row, normalizing its width to the header count.
    pub fn push_row(&mut self, mut row: Vec<Cell>) {
        row.resize(self.headers.len(), Cell::missing());
        self.rows.push(row);
    }

    pub fn row(&self, index: usize) -> Option<&[Cell]> {
        self.rows.get(index).map(|r| r.as_slice())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(|r| r.as_slice())
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// All numeric values of a column, in row order, with missing and
    /// non-numeric cells dropped. An unknown column yields no values.
    pub fn column_numeric(&self, name: &str) -> Vec<f64> {
        match self.column_index(name) {
            Some(col) => self
                .rows
                .iter()
                .filter_map(|r| r.get(col).and_then(Cell::numeric))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Append another table's rows, aligning columns by name.
    ///
    /// Columns only present in `other` are added to this table (existing
    /// rows get missing cells there); columns absent from `other` yield
    /// missing cells for the appended rows.
    pub fn append(&mut self, other: DataTable) {
        for header in &other.headers {
            if self.column_index(header).is_none() {
                self.headers.push(header.clone());
                for row in &mut self.rows {
                    row.push(Cell::missing());
                }
            }
        }

        let mapping: Vec<Option<usize>> = self
            .headers
            .iter()
            .map(|h| other.column_index(h))
            .collect();

        for row in other.rows {
            let aligned: Vec<Cell> = mapping
                .iter()
                .map(|idx| match idx {
                    Some(i) => row.get(*i).cloned().unwrap_or_default(),
                    None => Cell::missing(),
                })
                .collect();
            self.rows.push(aligned);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str]) -> DataTable {
        DataTable::new(headers.iter().map(|h| h.to_string()).collect())
    }

    #[test]
    fn test_cell_numeric_coercion() {
        assert_eq!(Cell::text("3.5").numeric(), Some(3.5));
        assert_eq!(Cell::text(" 42 ").numeric(), Some(42.0));
        assert_eq!(Cell::text("abc").numeric(), None);
        assert_eq!(Cell::missing().numeric(), None);
        assert_eq!(Cell::text("NaN").numeric(), None);
    }

    #[test]
    fn test_push_row_normalizes_width() {
        let mut t = table(&["a", "b", "c"]);
        t.push_row(vec![Cell::text("1")]);
        t.push_row(vec![
            Cell::text("1"),
            Cell::text("2"),
            Cell::text("3"),
            Cell::text("4"),
        ]);

        assert_eq!(t.row(0).unwrap().len(), 3);
        assert!(t.cell(0, 2).unwrap().is_missing());
        assert_eq!(t.row(1).unwrap().len(), 3);
        assert_eq!(t.cell(1, 2).unwrap().as_str(), Some("3"));
    }

    #[test]
    fn test_append_aligns_columns_by_name() {
        let mut first = table(&["DUT_SN", "V_1"]);
        first.push_row(vec![Cell::text("A"), Cell::text("1.0")]);

        let mut second = table(&["V_2", "DUT_SN"]);
        second.push_row(vec![Cell::text("9.0"), Cell::text("B")]);

        first.append(second);

        assert_eq!(first.headers(), &["DUT_SN", "V_1", "V_2"]);
        assert_eq!(first.n_rows(), 2);
        // first file's row has no V_2
        assert!(first.cell(0, 2).unwrap().is_missing());
        // second file's row aligned by name, no V_1
        assert_eq!(first.cell(1, 0).unwrap().as_str(), Some("B"));
        assert!(first.cell(1, 1).unwrap().is_missing());
        assert_eq!(first.cell(1, 2).unwrap().as_str(), Some("9.0"));
    }

    #[test]
    fn test_column_numeric_drops_missing_and_text() {
        let mut t = table(&["V_1"]);
        t.push_row(vec![Cell::text("1.5")]);
        t.push_row(vec![Cell::missing()]);
        t.push_row(vec![Cell::text("bad")]);
        t.push_row(vec![Cell::text("2.5")]);

        assert_eq!(t.column_numeric("V_1"), vec![1.5, 2.5]);
        assert!(t.column_numeric("V_2").is_empty());
    }
}
