use crate::error::{LogError, LogResult};

use super::model::RawGrid;

// ---------------------------------------------------------------------------
// UTF-16 text decoding
// ---------------------------------------------------------------------------

const BOM_LE: [u8; 2] = [0xFF, 0xFE];
const BOM_BE: [u8; 2] = [0xFE, 0xFF];

/// Decode a UTF-16 byte stream.  A byte order mark selects endianness and
/// is dropped; without one little-endian is assumed.
pub fn decode_utf16(bytes: &[u8]) -> LogResult<String> {
    let (body, big_endian) = match bytes.get(..2) {
        Some(bom) if bom == &BOM_LE[..] => (&bytes[2..], false),
        Some(bom) if bom == &BOM_BE[..] => (&bytes[2..], true),
        _ => (bytes, false),
    };

    if body.len() % 2 != 0 {
        return Err(LogError::decode(format!(
            "odd number of bytes ({}) in a 16-bit encoded stream",
            body.len()
        )));
    }

    let units = body.chunks_exact(2).map(|pair| {
        if big_endian {
            u16::from_be_bytes([pair[0], pair[1]])
        } else {
            u16::from_le_bytes([pair[0], pair[1]])
        }
    });

    char::decode_utf16(units)
        .collect::<Result<String, _>>()
        .map_err(|e| {
            LogError::decode(format!(
                "unpaired surrogate 0x{:04X}",
                e.unpaired_surrogate()
            ))
        })
}

// ---------------------------------------------------------------------------
// Line / tab splitting
// ---------------------------------------------------------------------------

/// Split decoded text into tab-separated rows.  Whitespace-only lines are
/// skipped; quotes carry no meaning in the export.
pub fn split_rows(text: &str) -> LogResult<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for (line_no, result) in reader.records().enumerate() {
        let record =
            result.map_err(|e| LogError::decode(format!("line {}: {e}", line_no + 1)))?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

/// Bytes → padded grid.
pub fn decode_grid(bytes: &[u8]) -> LogResult<RawGrid> {
    let text = decode_utf16(bytes)?;
    let rows = split_rows(&text)?;
    if rows.is_empty() {
        return Err(LogError::EmptyFile);
    }
    log::debug!("decoded {} non-blank lines", rows.len());
    Ok(RawGrid::from_rows(rows))
}

/// Encode text as UTF-16LE with a byte order mark, the way the tool
/// writes its exports.
pub fn encode_utf16le(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(2 + text.len() * 2);
    bytes.extend_from_slice(&BOM_LE);
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16be(text: &str) -> Vec<u8> {
        let mut bytes = BOM_BE.to_vec();
        for unit in text.encode_utf16() {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }
        bytes
    }

    #[test]
    fn decodes_both_byte_orders() {
        assert_eq!(decode_utf16(&encode_utf16le("Zeit ä")).unwrap(), "Zeit ä");
        assert_eq!(decode_utf16(&utf16be("Zeit ä")).unwrap(), "Zeit ä");
    }

    #[test]
    fn missing_bom_defaults_to_little_endian() {
        let bytes: Vec<u8> = "ab".encode_utf16().flat_map(u16::to_le_bytes).collect();
        assert_eq!(decode_utf16(&bytes).unwrap(), "ab");
    }

    #[test]
    fn odd_length_is_a_decode_error() {
        let mut bytes = encode_utf16le("abc");
        bytes.push(0x41);
        assert!(matches!(decode_utf16(&bytes), Err(LogError::Decode { .. })));
    }

    #[test]
    fn lone_surrogate_is_a_decode_error() {
        let bytes = [0xFF, 0xFE, 0x00, 0xD8, 0x41, 0x00];
        assert!(matches!(decode_utf16(&bytes), Err(LogError::Decode { .. })));
    }

    #[test]
    fn split_skips_blank_lines_and_handles_all_terminators() {
        let rows = split_rows("a\tb\r\n\r\n \t \nc\rd\t\"e\n").unwrap();
        assert_eq!(
            rows,
            vec![
                vec!["a".to_string(), "b".to_string()],
                vec!["c".to_string()],
                vec!["d".to_string(), "\"e".to_string()],
            ]
        );
    }

    #[test]
    fn blank_file_is_empty_error() {
        let bytes = encode_utf16le("\r\n  \r\n\t\r\n");
        assert_eq!(decode_grid(&bytes), Err(LogError::EmptyFile));
        assert_eq!(decode_grid(&[]), Err(LogError::EmptyFile));
    }

    #[test]
    fn grid_rows_share_one_width() {
        let grid = decode_grid(&encode_utf16le("a\nb\tc\td\ne\tf\n")).unwrap();
        assert_eq!(grid.len(), 3);
        assert!(grid.rows().iter().all(|r| r.cells.len() == 3));
        assert_eq!(grid.row(2).unwrap().cells, vec!["e", "f", ""]);
    }
}
