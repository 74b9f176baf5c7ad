use serde::Serialize;

// ---------------------------------------------------------------------------
// Render spec – what the presentation layer draws
// ---------------------------------------------------------------------------

/// One line trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    /// Column name.
    pub name: String,
    /// Legend label, `name [unit]` when a unit is known.
    pub display_name: String,
    pub unit: Option<String>,
    /// Index into [`Layout::panels`].
    pub panel: usize,
    /// `#rrggbb`
    pub color: String,
    pub x: Vec<Option<f64>>,
    /// Plotted values: normalized when `normalized` is set, raw otherwise.
    pub y: Vec<Option<f64>>,
    pub raw: Vec<Option<f64>>,
    pub normalized: bool,
    /// Hover text, one entry per point.
    pub hover: Vec<String>,
}

/// Shaded band `[x0, x1)` on the x-axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightRegion {
    pub x0: f64,
    pub x1: f64,
    pub panel: usize,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelMode {
    /// All traces overlaid in one panel.
    Shared,
    /// One panel per trace, stacked vertically on a common x-axis.
    Stacked,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub title: Option<String>,
    pub y_axis_title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub mode: PanelMode,
    pub title: String,
    pub x_axis_title: String,
    /// Suggested total height in pixels.
    pub height: u32,
    pub panels: Vec<Panel>,
    /// Panels zoom and pan together.
    pub shared_x_axis: bool,
    pub spike_lines: bool,
    pub range_slider: bool,
}

/// Layout-agnostic chart description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSpec {
    pub traces: Vec<Trace>,
    pub highlight: Option<HighlightRegion>,
    pub layout: Layout,
}

impl RenderSpec {
    /// Nothing selected, nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }

    pub fn panel_count(&self) -> usize {
        self.layout.panels.len()
    }
}
