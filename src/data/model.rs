use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// RawGrid – decoded text cells before any interpretation
// ---------------------------------------------------------------------------

/// One line of the export split on tabs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// Cells, right-padded to the grid width.
    pub cells: Vec<String>,
}

/// Rectangular grid of text cells.  Every row has `width` cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawGrid {
    rows: Vec<RawRow>,
    width: usize,
}

impl RawGrid {
    /// Pad all rows with empty cells to the widest row.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let rows = rows
            .into_iter()
            .map(|mut cells| {
                cells.resize(width, String::new());
                RawRow { cells }
            })
            .collect();
        RawGrid { rows, width }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column count shared by every row.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn row(&self, index: usize) -> Option<&RawRow> {
        self.rows.get(index)
    }

    pub fn rows(&self) -> &[RawRow] {
        &self.rows
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.cells.get(col))
            .map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// CellValue – a single typed table cell
// ---------------------------------------------------------------------------

/// A table cell after type inference.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    /// Blank in the source file.
    Missing,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(v) => write!(f, "{v}"),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Missing => write!(f, "n/a"),
        }
    }
}

impl CellValue {
    /// Numeric view of the cell.  Text is parsed leniently (decimal comma
    /// allowed); anything else yields `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) => Some(*v),
            CellValue::Text(s) => parse_decimal(s),
            CellValue::Missing => None,
        }
    }
}

/// Parse a number that may use a comma as decimal separator.
pub fn parse_decimal(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .or_else(|| trimmed.replace(',', ".").parse::<f64>().ok())
}

// ---------------------------------------------------------------------------
// Column / ParsedTable – the typed dataset
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Numeric,
    Text,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Numeric => f.pad("numeric"),
            ColumnKind::Text => f.pad("text"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
    pub values: Vec<CellValue>,
}

impl Column {
    /// Values as numbers, `None` where a cell has no numeric reading.
    pub fn numeric_values(&self) -> Vec<Option<f64>> {
        self.values.iter().map(CellValue::as_f64).collect()
    }
}

/// The parsed log: typed columns plus the unit row of the export.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTable {
    /// Columns in header order, names unique.
    pub columns: Vec<Column>,
    /// Measurement headers as they appear in the parameter row, before
    /// de-duplication.  Units are aligned to these by position.
    pub measurement_headers: Vec<String>,
    /// Units from the unit row, aligned to `measurement_headers`.
    pub units: Vec<String>,
    row_count: usize,
}

impl ParsedTable {
    pub fn new(
        columns: Vec<Column>,
        measurement_headers: Vec<String>,
        units: Vec<String>,
        row_count: usize,
    ) -> Self {
        debug_assert!(columns.iter().all(|c| c.values.len() == row_count));
        ParsedTable {
            columns,
            measurement_headers,
            units,
            row_count,
        }
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Cells of row `index` in column order.
    pub fn row(&self, index: usize) -> Option<Vec<&CellValue>> {
        if index >= self.row_count {
            return None;
        }
        Some(self.columns.iter().map(|c| &c.values[index]).collect())
    }

    /// Unit of a measurement column, matched by its first position in the
    /// parameter row.  Empty units count as absent.
    pub fn unit_for(&self, name: &str) -> Option<&str> {
        let pos = self.measurement_headers.iter().position(|h| h == name)?;
        self.units
            .get(pos)
            .map(|u| u.trim())
            .filter(|u| !u.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn grid_pads_rows_to_widest() {
        let grid = RawGrid::from_rows(vec![
            vec!["a".into()],
            vec!["a".into(), "b".into(), "c".into()],
        ]);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.row(0).unwrap().cells, vec!["a", "", ""]);
        assert_eq!(grid.cell(1, 2), Some("c"));
        assert_eq!(grid.cell(2, 0), None);
    }

    proptest! {
        #[test]
        fn padded_rows_share_one_width_and_keep_their_cells(
            lengths in prop::collection::vec(0usize..12, 0..20)
        ) {
            let rows: Vec<Vec<String>> = lengths
                .iter()
                .enumerate()
                .map(|(r, &n)| (0..n).map(|c| format!("{r}.{c}")).collect())
                .collect();
            let grid = RawGrid::from_rows(rows.clone());
            prop_assert_eq!(grid.width(), lengths.iter().copied().max().unwrap_or(0));
            prop_assert_eq!(grid.len(), rows.len());
            for (padded, source) in grid.rows().iter().zip(&rows) {
                prop_assert_eq!(padded.cells.len(), grid.width());
                prop_assert_eq!(&padded.cells[..source.len()], &source[..]);
                prop_assert!(padded.cells[source.len()..].iter().all(String::is_empty));
            }
        }
    }

    #[test]
    fn parse_decimal_accepts_comma_separator() {
        assert_eq!(parse_decimal("1,5"), Some(1.5));
        assert_eq!(parse_decimal(" 42 "), Some(42.0));
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("12:30:01"), None);
    }

    #[test]
    fn unit_lookup_uses_first_position_and_ignores_blank_units() {
        let table = ParsedTable::new(
            Vec::new(),
            vec!["A".into(), "B".into(), "A".into()],
            vec!["V".into(), " ".into(), "mA".into()],
            0,
        );
        assert_eq!(table.unit_for("A"), Some("V"));
        assert_eq!(table.unit_for("B"), None);
        assert_eq!(table.unit_for("C"), None);
    }
}
