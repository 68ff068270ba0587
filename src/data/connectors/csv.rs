use crate::config::DataConfig;
use crate::data::timeline::window_time_span;
use crate::error::{Result, TsxvError};
use crate::types::Bounds;
use polars::prelude::*;
use std::path::Path;
use super::{types::DatasetMetadata, validator::DataValidator};

pub struct CsvConnector;

impl CsvConnector {
    /// Load CSV file into DataFrame, parsing date-like columns as datetimes
    pub fn load<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .map_parse_options(|options| options.with_try_parse_dates(true))
            .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))?
            .finish()
            .map_err(|e| TsxvError::DataLoading(format!("Failed to read CSV: {}", e)))?;

        Ok(df)
    }

    /// Load and validate CSV file against the data section of the config
    pub fn load_and_validate<P: AsRef<Path>>(path: P, config: &DataConfig) -> Result<DataFrame> {
        let df = Self::load(&path)?;

        DataValidator::validate_value_column(&df, &config.value_column)?;
        DataValidator::validate_minimum_rows(&df, config.min_rows)?;
        if let Some(timestamp_column) = &config.timestamp_column {
            DataValidator::validate_timestamp_column(&df, timestamp_column)?;
        }

        // Warn about nulls but don't fail
        let null_report = DataValidator::check_nulls(&df)?;
        if !null_report.is_empty() {
            log::warn!("Null values detected: {:?}", null_report);
        }

        Ok(df)
    }

    /// Extract the value column as a Float64 series
    pub fn value_series(df: &DataFrame, column: &str) -> Result<Series> {
        DataValidator::validate_value_column(df, column)?;
        let values = df.column(column)?.cast(&DataType::Float64)?;
        Ok(values.as_materialized_series().clone())
    }

    /// Create metadata for a loaded DataFrame
    pub fn create_metadata<P: AsRef<Path>>(path: P, df: &DataFrame) -> Result<DatasetMetadata> {
        let columns: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
        let datetime_column = Self::detect_datetime_column(df);

        let date_range = match &datetime_column {
            Some(column) if df.height() > 0 => {
                let span = window_time_span(df, column, Bounds::new(0, df.height()))?;
                Some((span.start, span.end))
            }
            _ => None,
        };

        Ok(DatasetMetadata {
            file_path: path.as_ref().to_string_lossy().to_string(),
            num_rows: df.height(),
            num_columns: df.width(),
            columns,
            datetime_column,
            date_range,
        })
    }

    /// First datetime column, preferring the usual timestamp names
    pub fn detect_datetime_column(df: &DataFrame) -> Option<String> {
        let datetime_aliases = ["timestamp", "datetime", "date", "time", "Date", "DateTime"];
        let is_datetime = |name: &str| {
            df.column(name)
                .map(|c| matches!(c.dtype(), DataType::Datetime(_, _)))
                .unwrap_or(false)
        };

        for alias in datetime_aliases {
            if is_datetime(alias) {
                return Some(alias.to_string());
            }
        }

        df.get_column_names()
            .into_iter()
            .find(|name| is_datetime(name.as_str()))
            .map(|name| name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("tsxv_{}_{}.csv", name, std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_and_extract_values() {
        let path = write_csv("values", "step,close\n0,1.5\n1,2.5\n2,3.5\n");
        let config = DataConfig {
            path: Some(path.clone()),
            value_column: "close".to_string(),
            timestamp_column: None,
            min_rows: 3,
        };

        let df = CsvConnector::load_and_validate(&path, &config).unwrap();
        let values = CsvConnector::value_series(&df, "close").unwrap();

        assert_eq!(values.len(), 3);
        assert_eq!(values.f64().unwrap().get(2), Some(3.5));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_min_rows_enforced() {
        let path = write_csv("short", "close\n1.0\n2.0\n");
        let config = DataConfig {
            path: Some(path.clone()),
            value_column: "close".to_string(),
            timestamp_column: None,
            min_rows: 10,
        };

        assert!(CsvConnector::load_and_validate(&path, &config).is_err());
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_integer_column_cast_to_float() {
        let path = write_csv("ints", "close\n1\n2\n3\n");
        let df = CsvConnector::load(&path).unwrap();
        let values = CsvConnector::value_series(&df, "close").unwrap();

        assert_eq!(values.dtype(), &DataType::Float64);
        std::fs::remove_file(path).ok();
    }
}
