use texa_logview::chart::builder::build_render_spec;
use texa_logview::chart::resolver::{resolve, AxisSource};
use texa_logview::chart::selection::ChannelSelection;
use texa_logview::chart::spec::PanelMode;
use texa_logview::data::decoder::{decode_grid, encode_utf16le};
use texa_logview::data::model::CellValue;
use texa_logview::{load_bytes, DisplayOptions, HighlightRange, LogError, Session, Warning};

fn preamble() -> String {
    (0..9).map(|i| format!("Info {i}\tx\r\n")).collect()
}

/// 14 lines: preamble, three header rows, one full data row and one row
/// that is one cell short.
fn fourteen_row_export() -> Vec<u8> {
    let mut text = preamble();
    text.push_str("Parameter:\t\tDruck\tTemperatur\r\n");
    text.push_str("Masseinheit:\t\tbar\t°C\r\n");
    text.push_str("Zeit\tRelative Zeit [s]\t\t\r\n");
    text.push_str("1\t0,25\t1,5\t80\r\n");
    text.push_str("2\t0,5\t1,6\r\n");
    encode_utf16le(&text)
}

#[test]
fn fourteen_row_export_yields_two_channels_and_two_traces() {
    let log = load_bytes(&fourteen_row_export()).expect("load");
    assert_eq!(log.grid.len(), 14);
    assert_eq!(log.table.len(), 2);
    assert_eq!(log.table.columns.len(), 2 + 2);

    let series = resolve(&log.table);
    assert_eq!(series.channels, vec!["Zeit", "Druck", "Temperatur"]);

    let spec = build_render_spec(
        &log.table,
        &series,
        &ChannelSelection::from_names(["Druck", "Temperatur"]),
        &DisplayOptions::default(),
    );
    assert_eq!(spec.traces.len(), 2);
    assert_eq!(spec.traces[0].display_name, "Druck [bar]");
    assert_eq!(spec.traces[1].display_name, "Temperatur [°C]");
    assert_eq!(spec.traces[0].x, vec![Some(0.25), Some(0.5)]);
    assert!(spec.traces[0].normalized);
    assert_eq!(spec.traces[0].raw, vec![Some(1.5), Some(1.6)]);
    // one present value has no spread, so raw values pass through
    assert!(!spec.traces[1].normalized);
    assert_eq!(spec.traces[1].y, vec![Some(80.0), None]);
}

#[test]
fn padded_rows_are_kept_verbatim() {
    let bytes = fourteen_row_export();
    let grid = decode_grid(&bytes).expect("grid");
    let log = load_bytes(&bytes).expect("load");

    let source = &grid.row(12).expect("row 12").cells;
    let row = log.table.row(0).expect("row 0");
    assert_eq!(row.len(), source.len());
    assert_eq!(row[0], &CellValue::Number(1.0));
    assert_eq!(row[1], &CellValue::Number(0.25));
    assert_eq!(row[2], &CellValue::Number(1.5));
    assert_eq!(row[3], &CellValue::Number(80.0));

    let short = log.table.row(1).expect("row 1");
    assert_eq!(short[2], &CellValue::Number(1.6));
    assert_eq!(short[3], &CellValue::Missing);
    assert!(log.table.row(2).is_none());
}

#[test]
fn time_header_row_without_trailing_tabs_keeps_data() {
    let mut text = preamble();
    text.push_str("Parameter:\t\tDruck\tTemperatur\r\n");
    text.push_str("Masseinheit:\t\tbar\t°C\r\n");
    text.push_str("Zeit\tRelative Zeit [s]\r\n");
    text.push_str("1\t0,0\t1,5\t80\r\n");
    text.push_str("2\t0,5\t1,6\t82\r\n");

    let log = load_bytes(&encode_utf16le(&text)).expect("load");
    assert_eq!(log.table.len(), 2);
    assert_eq!(
        log.table.column("Druck").expect("Druck").values,
        vec![CellValue::Number(1.5), CellValue::Number(1.6)]
    );
    let series = resolve(&log.table);
    assert_eq!(series.time_axis.values, vec![Some(0.0), Some(0.5)]);
}

#[test]
fn structural_errors_are_reported_not_panicked() {
    let mut text = preamble();
    text.push_str("Parameter\t\tA\r\nMasseinheit:\t\tV\r\nZeit\tRelative Zeit\t\r\n");
    let err = load_bytes(&encode_utf16le(&text)).unwrap_err();
    assert!(matches!(err, LogError::FormatMismatch { .. }));
    assert!(err.to_string().contains("parameter:"));

    let err = load_bytes(b"\xFF\xFE\x41").unwrap_err();
    assert!(matches!(err, LogError::Decode { .. }));

    let err = load_bytes(&encode_utf16le("\r\n\r\n")).unwrap_err();
    assert_eq!(err, LogError::EmptyFile);
}

#[test]
fn export_without_time_column_uses_sample_index() {
    let mut text = preamble();
    text.push_str("Parameter:\t\tA\r\nMasseinheit:\t\tV\r\nZeit\tZeit absolut\t\r\n");
    text.push_str("1\t100\t3\r\n2\t101\t4\r\n3\t102\t5\r\n");

    let mut session =
        Session::from_bytes(&encode_utf16le(&text), DisplayOptions::default()).expect("session");
    assert_eq!(session.warnings(), [Warning::NoTimeAxis]);
    assert_eq!(session.series().time_axis.source, AxisSource::RowIndex);
    assert_eq!(
        session.series().time_axis.values,
        vec![Some(0.0), Some(1.0), Some(2.0)]
    );

    session.select_channels(["A"]);
    let spec = session.render_spec();
    assert_eq!(spec.traces[0].y, vec![Some(0.0), Some(0.5), Some(1.0)]);
    assert!(spec.highlight.is_none());
}

#[test]
fn stacked_layout_puts_highlight_on_last_panel() {
    let mut session =
        Session::from_bytes(&fourteen_row_export(), DisplayOptions::default()).expect("session");
    session.select_channels(["Temperatur", "Druck"]);
    session.update_options(|o| {
        o.multi_panel = true;
        o.highlight = HighlightRange { start: 2.0, end: 8.0 };
    });

    let spec = session.render_spec();
    assert_eq!(spec.layout.mode, PanelMode::Stacked);
    let region = spec.highlight.as_ref().expect("highlight");
    assert_eq!((region.x0, region.x1), (2.0, 8.0));
    assert_eq!(region.panel, 1);

    let json = serde_json::to_value(spec).expect("json");
    assert_eq!(json["traces"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["layout"]["mode"], "stacked");
}
