use std::collections::HashSet;

use crate::error::{LogError, LogResult};

use super::layout::{TexaLayout, TEXA_LAYOUT};
use super::model::{parse_decimal, CellValue, Column, ColumnKind, ParsedTable, RawGrid, RawRow};

// ---------------------------------------------------------------------------
// Header recovery + typed table construction
// ---------------------------------------------------------------------------

impl TexaLayout {
    /// Build the typed table from a validated grid.
    ///
    /// Data rows whose width differs from the time header row are dropped
    /// without error.  Widths are compared after padding, so short source
    /// lines are kept with blank trailing cells.
    pub fn build_table(&self, grid: &RawGrid) -> LogResult<ParsedTable> {
        let parameter_row = self.required_row(grid, self.parameter_row)?;
        let unit_row = self.required_row(grid, self.unit_row)?;
        let time_row = self.required_row(grid, self.time_header_row)?;

        let measurement_headers: Vec<String> = parameter_row
            .cells
            .iter()
            .skip(self.time_columns)
            .cloned()
            .collect();
        let units: Vec<String> = unit_row
            .cells
            .iter()
            .skip(self.time_columns)
            .cloned()
            .collect();
        let header: Vec<String> = time_row
            .cells
            .iter()
            .take(self.time_columns)
            .chain(measurement_headers.iter())
            .cloned()
            .collect();

        let data_rows: Vec<&RawRow> = grid
            .rows()
            .iter()
            .skip(self.first_data_row)
            .filter(|row| row.cells.len() == time_row.cells.len())
            .collect();
        let dropped = grid.len().saturating_sub(self.first_data_row) - data_rows.len();
        if dropped > 0 {
            log::debug!(
                "dropped {dropped} data rows with a width other than {}",
                time_row.cells.len()
            );
        }

        let mut seen = HashSet::new();
        let mut columns = Vec::new();
        for (idx, name) in header.iter().enumerate() {
            if !seen.insert(name.as_str()) {
                continue;
            }
            let cells: Vec<&str> = data_rows
                .iter()
                .map(|row| row.cells.get(idx).map(String::as_str).unwrap_or(""))
                .collect();
            if !cells.is_empty() && cells.iter().all(|c| c.trim().is_empty()) {
                continue;
            }
            columns.push(infer_column(name, &cells));
        }

        Ok(ParsedTable::new(
            columns,
            measurement_headers,
            units,
            data_rows.len(),
        ))
    }

    fn required_row<'a>(&self, grid: &'a RawGrid, index: usize) -> LogResult<&'a RawRow> {
        grid.row(index).ok_or_else(|| {
            LogError::format_mismatch(format!("header row {} is missing", index + 1))
        })
    }
}

/// Build the table using the standard TEXA layout.
pub fn build_table(grid: &RawGrid) -> LogResult<ParsedTable> {
    TEXA_LAYOUT.build_table(grid)
}

/// Type a column: numeric when every non-blank cell reads as a number
/// (decimal comma allowed), text otherwise.  Blank cells become
/// [`CellValue::Missing`] in both cases.
fn infer_column(name: &str, cells: &[&str]) -> Column {
    let parsed: Vec<Option<f64>> = cells.iter().map(|c| parse_decimal(c)).collect();
    let numeric = cells
        .iter()
        .zip(&parsed)
        .all(|(cell, value)| cell.trim().is_empty() || value.is_some());

    let (kind, values) = if numeric {
        let values = parsed
            .into_iter()
            .map(|v| v.map_or(CellValue::Missing, CellValue::Number))
            .collect();
        (ColumnKind::Numeric, values)
    } else {
        let values = cells
            .iter()
            .zip(parsed)
            .map(|(cell, value)| {
                if cell.trim().is_empty() {
                    CellValue::Missing
                } else if value.is_some() && cell.contains(',') {
                    CellValue::Text(cell.replace(',', "."))
                } else {
                    CellValue::Text((*cell).to_string())
                }
            })
            .collect();
        (ColumnKind::Text, values)
    };

    Column {
        name: name.to_string(),
        kind,
        values,
    }
}
