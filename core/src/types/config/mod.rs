mod app;
mod core;

pub use app::{AppConfig, AppConfigError, DefaultsConfig, GeneratorConfig, ScannerConfig};
pub use core::Config;
