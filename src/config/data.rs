use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::error::TsxvError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub path: Option<PathBuf>, // None runs on the built-in 0..31 demo sequence
    pub value_column: String,
    pub timestamp_column: Option<String>,
    pub min_rows: usize,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: None,
            value_column: "close".to_string(),
            timestamp_column: None,
            min_rows: 1,
        }
    }
}

impl ConfigSection for DataConfig {
    fn section_name() -> &'static str {
        "data"
    }

    fn validate(&self) -> Result<(), TsxvError> {
        if self.value_column.trim().is_empty() {
            return Err(TsxvError::Configuration(
                "Value column name must not be empty".to_string(),
            ));
        }
        if self.min_rows == 0 {
            return Err(TsxvError::Configuration(
                "Minimum rows must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        ConfigManifest {
            section: Self::section_name().to_string(),
            fields: vec![
                FieldManifest::new(
                    "path",
                    "path",
                    serde_json::json!(self.path),
                    "CSV file holding the series",
                ),
                FieldManifest::new(
                    "value_column",
                    "string",
                    serde_json::json!(self.value_column),
                    "Numeric column to window over",
                ),
                FieldManifest::new(
                    "timestamp_column",
                    "string",
                    serde_json::json!(self.timestamp_column),
                    "Datetime column used to label fold spans",
                ),
                FieldManifest::new(
                    "min_rows",
                    "integer",
                    serde_json::json!(self.min_rows),
                    "Reject files with fewer rows",
                )
                .with_min(1.0),
            ],
        }
    }
}
