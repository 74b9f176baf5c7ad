use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;

use super::model::{CellValue, Column, ColumnKind, ParsedTable};

// ---------------------------------------------------------------------------
// ParsedTable → Arrow
// ---------------------------------------------------------------------------

impl ParsedTable {
    /// Convert the first `limit` rows (all rows when `None`) to a record
    /// batch.  Numeric columns become nullable Float64, text columns Utf8.
    pub fn to_record_batch(&self, limit: Option<usize>) -> Result<RecordBatch, ArrowError> {
        let rows = limit.map_or(self.len(), |n| n.min(self.len()));

        let fields: Vec<Field> = self
            .columns
            .iter()
            .map(|c| {
                let data_type = match c.kind {
                    ColumnKind::Numeric => DataType::Float64,
                    ColumnKind::Text => DataType::Utf8,
                };
                Field::new(&c.name, data_type, true)
            })
            .collect();
        let arrays: Vec<ArrayRef> = self.columns.iter().map(|c| column_array(c, rows)).collect();

        RecordBatch::try_new(Arc::new(Schema::new(fields)), arrays)
    }
}

fn column_array(column: &Column, rows: usize) -> ArrayRef {
    let cells = &column.values[..rows];
    match column.kind {
        ColumnKind::Numeric => Arc::new(
            cells
                .iter()
                .map(CellValue::as_f64)
                .collect::<Float64Array>(),
        ),
        ColumnKind::Text => Arc::new(
            cells
                .iter()
                .map(|cell| match cell {
                    CellValue::Missing => None,
                    other => Some(other.to_string()),
                })
                .collect::<StringArray>(),
        ),
    }
}

/// Render the first `rows` rows as a text table.
pub fn preview(table: &ParsedTable, rows: usize) -> Result<String, ArrowError> {
    let batch = table.to_record_batch(Some(rows))?;
    Ok(pretty_format_batches(&[batch])?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::Array;

    fn sample_table() -> ParsedTable {
        ParsedTable::new(
            vec![
                Column {
                    name: "Relative Zeit".into(),
                    kind: ColumnKind::Numeric,
                    values: vec![CellValue::Number(0.0), CellValue::Missing, CellValue::Number(1.0)],
                },
                Column {
                    name: "Uhrzeit".into(),
                    kind: ColumnKind::Text,
                    values: vec![
                        CellValue::Text("10:00:00".into()),
                        CellValue::Text("10:00:01".into()),
                        CellValue::Missing,
                    ],
                },
            ],
            Vec::new(),
            Vec::new(),
            3,
        )
    }

    #[test]
    fn record_batch_keeps_types_and_nulls() {
        let batch = sample_table().to_record_batch(None).unwrap();
        assert_eq!(batch.num_rows(), 3);
        assert_eq!(batch.schema().field(0).data_type(), &DataType::Float64);
        assert_eq!(batch.schema().field(1).data_type(), &DataType::Utf8);
        assert_eq!(batch.column(0).null_count(), 1);
        assert_eq!(batch.column(1).null_count(), 1);
    }

    #[test]
    fn preview_is_limited_to_requested_rows() {
        let text = preview(&sample_table(), 1).unwrap();
        assert!(text.contains("Relative Zeit"));
        assert!(text.contains("10:00:00"));
        assert!(!text.contains("10:00:01"));
    }
}
