pub mod connectors;
pub mod sequence;
pub mod timeline;

pub use connectors::{CsvConnector, DataValidator, DatasetMetadata};
pub use sequence::Sequence;
pub use timeline::{window_time_span, TimeSpan};
