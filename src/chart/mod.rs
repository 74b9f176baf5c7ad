/// Chart layer: from a parsed table to a layout-agnostic render spec.
///
/// `resolver` finds the time axis and the plottable channels once per file;
/// `builder` turns a selection plus display options into a [`spec::RenderSpec`]
/// and is re-run on every option change.

pub mod builder;
pub mod options;
pub mod resolver;
pub mod selection;
pub mod spec;
