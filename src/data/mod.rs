/// Data layer: decoding, layout checks and table construction.
///
/// Architecture:
/// ```text
///  UTF-16 bytes
///        │
///        ▼
///   ┌──────────┐
///   │ decoder   │  bytes → RawGrid (tab split, padded)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ layout    │  label cells at rows 9/10/11
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ table     │  header + units + typed columns → ParsedTable
///   └──────────┘
/// ```
/// `loader` runs the three stages; `arrow_view` renders a table preview.

pub mod arrow_view;
pub mod decoder;
pub mod layout;
pub mod loader;
pub mod model;
pub mod table;
