use crate::error::{Result, TsxvError};
use polars::prelude::*;

pub struct DataValidator;

impl DataValidator {
    /// Validate that `column` exists and holds numbers
    pub fn validate_value_column(df: &DataFrame, column: &str) -> Result<()> {
        let series = Self::find_column(df, column)?;
        if !Self::is_numeric(series.dtype()) {
            return Err(TsxvError::DataLoading(format!(
                "Column '{}' must be numeric, found {:?}",
                column,
                series.dtype()
            )));
        }
        Ok(())
    }

    /// Validate that `column` exists and holds datetimes
    pub fn validate_timestamp_column(df: &DataFrame, column: &str) -> Result<()> {
        let series = Self::find_column(df, column)?;
        if !matches!(series.dtype(), DataType::Datetime(_, _)) {
            return Err(TsxvError::DataLoading(format!(
                "Column '{}' must be a datetime, found {:?}",
                column,
                series.dtype()
            )));
        }
        Ok(())
    }

    /// Check for minimum required rows
    pub fn validate_minimum_rows(df: &DataFrame, min_rows: usize) -> Result<()> {
        if df.height() < min_rows {
            return Err(TsxvError::DataLoading(format!(
                "Insufficient data: {} rows, minimum {} required",
                df.height(),
                min_rows
            )));
        }
        Ok(())
    }

    /// Null counts per column, only for columns that have nulls
    pub fn check_nulls(df: &DataFrame) -> Result<Vec<(String, usize)>> {
        let mut null_report = Vec::new();

        for col_name in df.get_column_names() {
            let series = df.column(col_name)?;
            let null_count = series.null_count();
            if null_count > 0 {
                null_report.push((col_name.to_string(), null_count));
            }
        }

        Ok(null_report)
    }

    fn find_column<'a>(df: &'a DataFrame, column: &str) -> Result<&'a Column> {
        df.column(column).map_err(|_| {
            let available: Vec<String> =
                df.get_column_names().iter().map(|c| c.to_string()).collect();
            TsxvError::DataLoading(format!(
                "Missing column: {} (available: {:?})",
                column, available
            ))
        })
    }

    fn is_numeric(dtype: &DataType) -> bool {
        dtype.is_primitive_numeric()
    }
}
