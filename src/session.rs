use std::path::Path;

use anyhow::Result;

use crate::chart::builder::build_render_spec;
use crate::chart::options::{DisplayOptions, HighlightRange};
use crate::chart::resolver::{resolve, ResolvedSeries};
use crate::chart::selection::ChannelSelection;
use crate::chart::spec::RenderSpec;
use crate::data::loader::{load_bytes, load_file, LoadedLog};
use crate::data::model::ParsedTable;
use crate::error::{LogResult, Warning};

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// One loaded export plus the user's current view of it.
///
/// The file is decoded once; every mutator below rebuilds only the render
/// spec.
pub struct Session {
    log: LoadedLog,
    series: ResolvedSeries,
    options: DisplayOptions,
    selection: ChannelSelection,
    render: RenderSpec,
}

impl Session {
    /// Ingest a loaded export with nothing selected.
    pub fn new(log: LoadedLog, options: DisplayOptions) -> Self {
        let series = resolve(&log.table);
        let selection = ChannelSelection::new();
        let render = build_render_spec(&log.table, &series, &selection, &options);
        Self {
            log,
            series,
            options,
            selection,
            render,
        }
    }

    pub fn from_bytes(bytes: &[u8], options: DisplayOptions) -> LogResult<Self> {
        Ok(Self::new(load_bytes(bytes)?, options))
    }

    pub fn open(path: &Path, options: DisplayOptions) -> Result<Self> {
        Ok(Self::new(load_file(path)?, options))
    }

    pub fn table(&self) -> &ParsedTable {
        &self.log.table
    }

    pub fn log(&self) -> &LoadedLog {
        &self.log
    }

    pub fn series(&self) -> &ResolvedSeries {
        &self.series
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.series.warnings
    }

    pub fn options(&self) -> &DisplayOptions {
        &self.options
    }

    pub fn selection(&self) -> &ChannelSelection {
        &self.selection
    }

    /// Channels the user can pick from.
    pub fn available_channels(&self) -> &[String] {
        &self.series.channels
    }

    /// Render spec for the current options and selection.
    pub fn render_spec(&self) -> &RenderSpec {
        &self.render
    }

    /// Replace all display options.
    pub fn set_options(&mut self, options: DisplayOptions) {
        self.options = options;
        self.rebuild();
    }

    /// Change options in place.
    pub fn update_options(&mut self, update: impl FnOnce(&mut DisplayOptions)) {
        update(&mut self.options);
        self.rebuild();
    }

    pub fn set_highlight(&mut self, start: f64, end: f64) {
        self.update_options(|o| o.highlight = HighlightRange { start, end });
    }

    /// Replace the selection; names that are not channels are dropped.
    pub fn select_channels<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selection = ChannelSelection::from_names(names);
        self.selection.retain_available(&self.series.channels);
        self.rebuild();
    }

    pub fn toggle_channel(&mut self, name: &str) {
        if !self.selection.contains(name) && !self.series.channels.iter().any(|c| c == name) {
            log::warn!("ignoring unknown channel '{name}'");
            return;
        }
        self.selection.toggle(name);
        self.rebuild();
    }

    pub fn select_all(&mut self) {
        self.selection = ChannelSelection::from_names(self.series.channels.iter().cloned());
        self.rebuild();
    }

    pub fn select_none(&mut self) {
        self.selection.clear();
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.render = build_render_spec(&self.log.table, &self.series, &self.selection, &self.options);
    }
}
