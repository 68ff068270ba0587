mod csv;
mod types;
mod validator;

pub use csv::CsvConnector;
pub use types::DatasetMetadata;
pub use validator::DataValidator;
