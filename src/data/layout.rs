use crate::error::{LogError, LogResult};

use super::model::RawGrid;

// ---------------------------------------------------------------------------
// Fixed row offsets of the TEXA export
// ---------------------------------------------------------------------------

/// Where the header metadata sits in an export.  The file carries no
/// schema of its own, so these offsets are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TexaLayout {
    /// Row holding `Parameter:` followed by the measurement names.
    pub parameter_row: usize,
    /// Row holding `Masseinheit:` followed by the units.
    pub unit_row: usize,
    /// Row holding the time column labels.
    pub time_header_row: usize,
    /// First data row.
    pub first_data_row: usize,
    /// Number of leading time columns; measurements start after them.
    pub time_columns: usize,
}

pub const TEXA_LAYOUT: TexaLayout = TexaLayout {
    parameter_row: 9,
    unit_row: 10,
    time_header_row: 11,
    first_data_row: 12,
    time_columns: 2,
};

const PARAMETER_LABEL: &str = "parameter:";
const UNIT_LABEL: &str = "masseinheit:";
const TIME_MARKER: &str = "zeit";

impl TexaLayout {
    /// Check that the label cells sit where the export puts them.
    pub fn validate(&self, grid: &RawGrid) -> LogResult<()> {
        if grid.len() < self.first_data_row {
            return Err(LogError::format_mismatch(format!(
                "expected at least {} rows, found {}",
                self.first_data_row,
                grid.len()
            )));
        }

        let parameter = self.label(grid, self.parameter_row)?;
        if parameter.trim().to_lowercase() != PARAMETER_LABEL {
            return Err(LogError::format_mismatch(format!(
                "row {} starts with '{parameter}', expected '{PARAMETER_LABEL}'",
                self.parameter_row + 1
            )));
        }

        let unit = self.label(grid, self.unit_row)?;
        if unit.trim().to_lowercase() != UNIT_LABEL {
            return Err(LogError::format_mismatch(format!(
                "row {} starts with '{unit}', expected '{UNIT_LABEL}'",
                self.unit_row + 1
            )));
        }

        let time = self.label(grid, self.time_header_row)?;
        if !time.to_lowercase().contains(TIME_MARKER) {
            return Err(LogError::format_mismatch(format!(
                "row {} starts with '{time}', expected a time column label",
                self.time_header_row + 1
            )));
        }

        Ok(())
    }

    fn label<'a>(&self, grid: &'a RawGrid, row: usize) -> LogResult<&'a str> {
        grid.cell(row, 0).ok_or_else(|| {
            LogError::format_mismatch(format!("row {} has no cells", row + 1))
        })
    }
}

/// Validate against the standard TEXA layout.
pub fn validate(grid: &RawGrid) -> LogResult<()> {
    TEXA_LAYOUT.validate(grid)
}
