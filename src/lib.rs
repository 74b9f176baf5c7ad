//! Parser and chart-spec builder for TEXA diagnostic log exports.
//!
//! A TEXA export is a UTF-16, tab-separated text file whose column names
//! and units sit at fixed rows (9, 10 and 11) below a free-form preamble.
//! [`data`] turns the raw bytes into a typed [`data::model::ParsedTable`];
//! [`chart`] resolves the time axis and produces a [`chart::spec::RenderSpec`]
//! for any charting front end.  [`session::Session`] keeps both together
//! and rebuilds the render spec when display options change.

pub mod chart;
pub mod color;
pub mod data;
pub mod error;
pub mod session;

pub use chart::options::{DisplayOptions, HighlightRange};
pub use chart::spec::RenderSpec;
pub use data::loader::{load_bytes, load_file, LoadedLog};
pub use error::{LogError, Warning};
pub use session::Session;
