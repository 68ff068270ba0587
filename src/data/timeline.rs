use crate::error::{Result, TsxvError};
use crate::types::Bounds;
use chrono::{DateTime, Utc};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Wall-clock range covered by a window, both ends inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSpan {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Resolve the first and last timestamp of `bounds` from a datetime column
pub fn window_time_span(df: &DataFrame, column: &str, bounds: Bounds) -> Result<TimeSpan> {
    if bounds.is_empty() || bounds.end > df.height() {
        return Err(TsxvError::DataLoading(format!(
            "Window {} is outside the {} rows of the dataset",
            bounds,
            df.height()
        )));
    }

    let timestamps = df.column(column)?;
    let unit = match timestamps.dtype() {
        DataType::Datetime(unit, _) => *unit,
        other => {
            return Err(TsxvError::DataLoading(format!(
                "Column '{}' must be a datetime, found {:?}",
                column, other
            )))
        }
    };

    let physical = timestamps.cast(&DataType::Int64)?;
    let raw = physical.as_materialized_series().i64()?;

    Ok(TimeSpan {
        start: datetime_at_index(raw, unit, bounds.start)?,
        end: datetime_at_index(raw, unit, bounds.end - 1)?,
    })
}

pub fn datetime_at_index(raw: &Int64Chunked, unit: TimeUnit, idx: usize) -> Result<DateTime<Utc>> {
    let value = raw.get(idx).ok_or_else(|| {
        TsxvError::DataLoading(format!("Cannot get timestamp at index {}", idx))
    })?;

    let datetime = match unit {
        TimeUnit::Milliseconds => DateTime::<Utc>::from_timestamp_millis(value),
        TimeUnit::Microseconds => DateTime::<Utc>::from_timestamp_micros(value),
        TimeUnit::Nanoseconds => Some(DateTime::<Utc>::from_timestamp_nanos(value)),
    };

    datetime.ok_or_else(|| TsxvError::DataLoading(format!("Invalid timestamp: {}", value)))
}
