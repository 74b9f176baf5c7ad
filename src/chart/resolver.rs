use crate::data::model::ParsedTable;
use crate::error::Warning;

// ---------------------------------------------------------------------------
// Column-name heuristics
// ---------------------------------------------------------------------------

/// Substrings identifying the relative time column.
const TIME_AXIS_NEEDLES: &[&str] = &["relative", "zeit"];
/// Substring identifying the wall-clock column.
const WALL_CLOCK_NEEDLES: &[&str] = &["uhrzeit"];
/// Label of the synthetic axis used when no time column exists.
pub const INDEX_AXIS_LABEL: &str = "Sample index";

/// First name (in the given order) containing every needle,
/// case-insensitively.
pub fn find_column<'a, I>(names: I, needles: &[&str]) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    names.into_iter().find(|name| {
        let lower = name.to_lowercase();
        needles.iter().all(|needle| lower.contains(needle))
    })
}

// ---------------------------------------------------------------------------
// TimeAxis
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AxisSource {
    Column(String),
    RowIndex,
}

/// The x-axis of every trace.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeAxis {
    pub label: String,
    pub source: AxisSource,
    /// One entry per table row; `None` where the time cell is not a number.
    pub values: Vec<Option<f64>>,
}

impl TimeAxis {
    pub fn row_index(len: usize) -> Self {
        TimeAxis {
            label: INDEX_AXIS_LABEL.to_string(),
            source: AxisSource::RowIndex,
            values: (0..len).map(|i| Some(i as f64)).collect(),
        }
    }

    pub fn column_name(&self) -> Option<&str> {
        match &self.source {
            AxisSource::Column(name) => Some(name),
            AxisSource::RowIndex => None,
        }
    }

    /// A real time column with at least one usable value.
    pub fn is_numeric_column(&self) -> bool {
        matches!(self.source, AxisSource::Column(_))
            && self.values.iter().flatten().any(|v| v.is_finite())
    }
}

// ---------------------------------------------------------------------------
// ResolvedSeries
// ---------------------------------------------------------------------------

/// Time axis, optional wall-clock column and the channels left to plot.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSeries {
    pub time_axis: TimeAxis,
    pub wall_clock: Option<String>,
    /// Selectable channel names in table order.
    pub channels: Vec<String>,
    pub warnings: Vec<Warning>,
}

/// Pick the time and wall-clock columns from the table header.
pub fn resolve(table: &ParsedTable) -> ResolvedSeries {
    let mut warnings = Vec::new();

    let time_axis = match find_column(table.column_names(), TIME_AXIS_NEEDLES)
        .and_then(|name| table.column(name))
    {
        Some(column) => TimeAxis {
            label: column.name.clone(),
            source: AxisSource::Column(column.name.clone()),
            values: column.numeric_values(),
        },
        None => {
            log::warn!("no relative time column, plotting against the sample index");
            warnings.push(Warning::NoTimeAxis);
            TimeAxis::row_index(table.len())
        }
    };

    let wall_clock = find_column(table.column_names(), WALL_CLOCK_NEEDLES).map(str::to_string);

    let channels = table
        .column_names()
        .filter(|name| Some(*name) != time_axis.column_name())
        .filter(|name| Some(*name) != wall_clock.as_deref())
        .map(str::to_string)
        .collect();

    ResolvedSeries {
        time_axis,
        wall_clock,
        channels,
        warnings,
    }
}
