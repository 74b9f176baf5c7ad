use crate::color::generate_palette;
use crate::data::model::{CellValue, Column, ParsedTable};

use super::options::DisplayOptions;
use super::resolver::{ResolvedSeries, TimeAxis};
use super::selection::ChannelSelection;
use super::spec::{HighlightRegion, Layout, Panel, PanelMode, RenderSpec, Trace};

/// Label on the hover line carrying the wall-clock time.
const WALL_CLOCK_LABEL: &str = "Uhrzeit";
const HIGHLIGHT_LABEL: &str = "Highlighted";
const SHARED_PANEL_HEIGHT: u32 = 700;
const STACKED_PANEL_HEIGHT: u32 = 300;

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Min-max scale finite values to `0..=1`.
///
/// Returns `None` when the column has no spread (all values equal, or no
/// finite values at all); callers then plot the raw values.
pub fn min_max_normalize(values: &[Option<f64>]) -> Option<Vec<Option<f64>>> {
    let finite = || values.iter().flatten().copied().filter(|v| v.is_finite());
    let min = finite().fold(f64::INFINITY, f64::min);
    let max = finite().fold(f64::NEG_INFINITY, f64::max);
    if min >= max {
        return None;
    }
    let range = max - min;
    Some(
        values
            .iter()
            .map(|v| v.filter(|v| v.is_finite()).map(|v| (v - min) / range))
            .collect(),
    )
}

// ---------------------------------------------------------------------------
// Render spec construction
// ---------------------------------------------------------------------------

/// Build the chart description for the selected channels.
///
/// Pure: the same table, series, selection and options always produce the
/// same spec.  Selected names that are not plottable channels are skipped.
pub fn build_render_spec(
    table: &ParsedTable,
    series: &ResolvedSeries,
    selection: &ChannelSelection,
    options: &DisplayOptions,
) -> RenderSpec {
    let columns: Vec<&Column> = selection
        .iter()
        .filter_map(|name| {
            let column = series
                .channels
                .iter()
                .any(|c| c == name)
                .then(|| table.column(name))
                .flatten();
            if column.is_none() {
                log::warn!("channel '{name}' is not plottable, skipping");
            }
            column
        })
        .collect();

    let wall_clock = series
        .wall_clock
        .as_deref()
        .and_then(|name| table.column(name));
    let colors = generate_palette(columns.len());
    let mode = if options.multi_panel {
        PanelMode::Stacked
    } else {
        PanelMode::Shared
    };

    let traces: Vec<Trace> = columns
        .iter()
        .zip(colors)
        .enumerate()
        .map(|(i, (column, color))| {
            let panel = match mode {
                PanelMode::Shared => 0,
                PanelMode::Stacked => i,
            };
            build_trace(table, column, &series.time_axis, wall_clock, options, mode, panel, color)
        })
        .collect();

    let highlight = highlight_region(&traces, &series.time_axis, options, mode);
    let layout = build_layout(&traces, &series.time_axis, options, mode);

    RenderSpec {
        traces,
        highlight,
        layout,
    }
}

#[allow(clippy::too_many_arguments)]
fn build_trace(
    table: &ParsedTable,
    column: &Column,
    axis: &TimeAxis,
    wall_clock: Option<&Column>,
    options: &DisplayOptions,
    mode: PanelMode,
    panel: usize,
    color: String,
) -> Trace {
    let raw = column.numeric_values();
    let scaled = if options.normalize {
        min_max_normalize(&raw)
    } else {
        None
    };
    let normalized = scaled.is_some();
    let y = scaled.unwrap_or_else(|| raw.clone());

    // Stacked panels carry the plain name; the panel title identifies them.
    let unit = table.unit_for(&column.name).map(str::to_string);
    let display_name = match (&unit, mode) {
        (Some(unit), PanelMode::Shared) => format!("{} [{unit}]", column.name),
        _ => column.name.clone(),
    };

    Trace {
        name: column.name.clone(),
        display_name,
        unit,
        panel,
        color,
        x: axis.values.clone(),
        y,
        raw,
        normalized,
        hover: hover_text(column, axis, wall_clock, options),
    }
}

/// Per-point hover text: the value (optionally prefixed with the channel
/// name), then the time value, then the wall-clock time.
fn hover_text(
    column: &Column,
    axis: &TimeAxis,
    wall_clock: Option<&Column>,
    options: &DisplayOptions,
) -> Vec<String> {
    let wall_clock = wall_clock.filter(|_| options.show_wall_clock);
    column
        .values
        .iter()
        .enumerate()
        .map(|(row, value)| {
            let mut lines = Vec::with_capacity(3);
            if options.show_channel_label {
                lines.push(format!("{}: {value}", column.name));
            } else {
                lines.push(value.to_string());
            }
            if options.show_time {
                let time = axis
                    .values
                    .get(row)
                    .copied()
                    .flatten()
                    .map_or_else(|| CellValue::Missing.to_string(), |t| t.to_string());
                lines.push(format!("{}: {time}", axis.label));
            }
            if let Some(clock) = wall_clock {
                let time = clock
                    .values
                    .get(row)
                    .map_or_else(|| CellValue::Missing.to_string(), ToString::to_string);
                lines.push(format!("{WALL_CLOCK_LABEL}: {time}"));
            }
            lines.join(&options.hover_line_break)
        })
        .collect()
}

fn highlight_region(
    traces: &[Trace],
    axis: &TimeAxis,
    options: &DisplayOptions,
    mode: PanelMode,
) -> Option<HighlightRegion> {
    let range = options.highlight;
    if traces.is_empty() || !axis.is_numeric_column() || !range.is_valid() {
        return None;
    }
    let panel = match mode {
        PanelMode::Shared => 0,
        PanelMode::Stacked => traces.len() - 1,
    };
    Some(HighlightRegion {
        x0: range.start,
        x1: range.end,
        panel,
        label: HIGHLIGHT_LABEL.to_string(),
    })
}

fn build_layout(
    traces: &[Trace],
    axis: &TimeAxis,
    options: &DisplayOptions,
    mode: PanelMode,
) -> Layout {
    match mode {
        PanelMode::Shared => Layout {
            mode,
            title: "Multi-channel chart (shared panel)".to_string(),
            x_axis_title: axis.label.clone(),
            height: SHARED_PANEL_HEIGHT,
            panels: vec![Panel {
                title: None,
                y_axis_title: Some(
                    if options.normalize {
                        "Normalized (0-1)"
                    } else {
                        "Value"
                    }
                    .to_string(),
                ),
            }],
            shared_x_axis: true,
            spike_lines: options.spike_lines,
            range_slider: true,
        },
        PanelMode::Stacked => Layout {
            mode,
            title: "Synchronized channels".to_string(),
            x_axis_title: axis.label.clone(),
            height: STACKED_PANEL_HEIGHT * traces.len().max(1) as u32,
            panels: traces
                .iter()
                .map(|t| Panel {
                    title: Some(t.name.clone()),
                    y_axis_title: None,
                })
                .collect(),
            shared_x_axis: true,
            spike_lines: options.spike_lines,
            range_slider: false,
        },
    }
}
