pub mod traits;
pub mod splitting;
pub mod data;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use splitting::{SplittingConfig, SplitStrategy};
pub use data::DataConfig;
pub use traits::{ConfigSection, ConfigManifest, FieldManifest};
