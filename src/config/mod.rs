//! TOML configuration: report identity, output defaults, and palette
//! overrides for chart colors.

mod loader;
mod model;

pub use loader::{ConfigLoader, FileConfigLoader};
pub use model::{Config, OutputConfig, ReportConfig, CONFIG_FILE_NAME};
