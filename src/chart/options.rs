use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Display options chosen by the user
// ---------------------------------------------------------------------------

/// Half-open x-range `[start, end)` to shade on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighlightRange {
    pub start: f64,
    pub end: f64,
}

impl Default for HighlightRange {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: 10.0,
        }
    }
}

impl HighlightRange {
    pub fn is_valid(&self) -> bool {
        self.end > self.start
    }
}

/// Every toggle that influences the render spec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Add the time axis value to the hover text.
    pub show_time: bool,
    /// Add the wall-clock value to the hover text.
    pub show_wall_clock: bool,
    /// Prefix the hovered value with the channel name.
    pub show_channel_label: bool,
    /// Min-max scale every channel to 0..1.
    pub normalize: bool,
    /// One stacked panel per channel instead of a shared one.
    pub multi_panel: bool,
    pub spike_lines: bool,
    pub highlight: HighlightRange,
    /// Separator between hover text lines.
    pub hover_line_break: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_time: true,
            show_wall_clock: false,
            show_channel_label: true,
            normalize: true,
            multi_panel: false,
            spike_lines: true,
            highlight: HighlightRange::default(),
            hover_line_break: "\n".to_string(),
        }
    }
}

impl DisplayOptions {
    /// Load options from a JSON file.  Missing keys keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading options file {}", path.display()))?;
        let options = serde_json::from_str(&text).context("parsing display options JSON")?;
        Ok(options)
    }
}
