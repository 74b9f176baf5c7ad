use std::path::Path;

use anyhow::{Context, Result};

use crate::error::LogResult;

use super::decoder::decode_grid;
use super::layout::validate;
use super::model::{ParsedTable, RawGrid};
use super::table::build_table;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// A decoded export: the raw grid and the table recovered from it.
/// Both are built once per file and only read afterwards.
#[derive(Debug, Clone)]
pub struct LoadedLog {
    pub grid: RawGrid,
    pub table: ParsedTable,
}

/// Decode, validate and tabulate an export held in memory.
pub fn load_bytes(bytes: &[u8]) -> LogResult<LoadedLog> {
    let grid = decode_grid(bytes)?;
    validate(&grid)?;
    let table = build_table(&grid)?;

    log::info!(
        "TEXA export recognised: {} rows, {} columns",
        table.len(),
        table.columns.len()
    );
    Ok(LoadedLog { grid, table })
}

/// Read and load an export from disk.
pub fn load_file(path: &Path) -> Result<LoadedLog> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let log = load_bytes(&bytes).with_context(|| format!("loading {}", path.display()))?;
    Ok(log)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::decoder::encode_utf16le;
    use crate::error::LogError;

    #[test]
    fn format_errors_stop_the_pipeline() {
        let text = (0..12).map(|i| format!("line {i}\n")).collect::<String>();
        let err = load_bytes(&encode_utf16le(&text)).unwrap_err();
        assert!(matches!(err, LogError::FormatMismatch { .. }));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_file(Path::new("/nonexistent/texa.csv")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/texa.csv"));
    }
}
