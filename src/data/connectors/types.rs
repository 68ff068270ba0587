use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata about a loaded CSV series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetMetadata {
    pub file_path: String,
    pub num_rows: usize,
    pub num_columns: usize,
    pub columns: Vec<String>,
    pub datetime_column: Option<String>,
    pub date_range: Option<(DateTime<Utc>, DateTime<Utc>)>,
}
