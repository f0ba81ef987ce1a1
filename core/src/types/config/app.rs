use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::render::MAX_CANVAS;
use crate::types::customization::{DEFAULT_DARK, DEFAULT_LIGHT, DEFAULT_MARGIN, DEFAULT_SIZE};
use crate::types::{Colors, Customization, EcLevel, HexColor, ModulePattern};

/// User-facing application configuration, persisted as config.toml.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub scanner: ScannerConfig,
}

impl AppConfig {
    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, AppConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), AppConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !size_in_range(self.defaults.size) {
            errors.push(format!("defaults.size must be between 1 and {MAX_CANVAS}"));
        }

        if !margin_in_range(self.defaults.margin) {
            errors.push(format!("defaults.margin must be below {}", MAX_MARGIN + 1));
        }

        if let Err(e) = self.defaults.dark.parse::<HexColor>() {
            errors.push(format!("defaults.dark: {e}"));
        }

        if let Err(e) = self.defaults.light.parse::<HexColor>() {
            errors.push(format!("defaults.light: {e}"));
        }

        if self.scanner.fps == 0 {
            errors.push("scanner.fps must be at least 1".to_string());
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        let color_or = |value: &str, fallback: &str| {
            if value.parse::<HexColor>().is_ok() {
                value.to_string()
            } else {
                fallback.to_string()
            }
        };

        Self {
            defaults: DefaultsConfig {
                size: if size_in_range(self.defaults.size) {
                    self.defaults.size
                } else {
                    defaults.defaults.size
                },
                error_correction: self.defaults.error_correction,
                margin: if margin_in_range(self.defaults.margin) {
                    self.defaults.margin
                } else {
                    defaults.defaults.margin
                },
                dark: color_or(&self.defaults.dark, &defaults.defaults.dark),
                light: color_or(&self.defaults.light, &defaults.defaults.light),
                pattern: self.defaults.pattern,
            },
            generator: self.generator.clone(),
            scanner: ScannerConfig {
                fps: if self.scanner.fps == 0 {
                    defaults.scanner.fps
                } else {
                    self.scanner.fps
                },
            },
        }
    }
}

/// Customization applied to new codes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_size")]
    pub size: u32,
    #[serde(default)]
    pub error_correction: EcLevel,
    #[serde(default = "default_margin")]
    pub margin: u32,
    #[serde(default = "default_dark")]
    pub dark: String,
    #[serde(default = "default_light")]
    pub light: String,
    #[serde(default)]
    pub pattern: ModulePattern,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            error_correction: EcLevel::default(),
            margin: default_margin(),
            dark: default_dark(),
            light: default_light(),
            pattern: ModulePattern::default(),
        }
    }
}

impl DefaultsConfig {
    /// Builds a customization, falling back per field on invalid values.
    pub fn customization(&self) -> Customization {
        Customization {
            size: NonZeroU32::new(self.size).unwrap_or(DEFAULT_SIZE),
            error_correction_level: self.error_correction,
            margin: self.margin,
            color: Colors {
                dark: self.dark.parse().unwrap_or(DEFAULT_DARK),
                light: self.light.parse().unwrap_or(DEFAULT_LIGHT),
            },
            logo: None,
            pattern: self.pattern,
        }
    }
}

/// Live preview settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl GeneratorConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Scan loop settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannerConfig {
    #[serde(default = "default_fps")]
    pub fps: u32,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self { fps: default_fps() }
    }
}

impl ScannerConfig {
    /// Delay between decode attempts.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }
}

/// Largest margin that still leaves room for a symbol inside [`MAX_CANVAS`].
const MAX_MARGIN: u32 = MAX_CANVAS / 4;

fn size_in_range(size: u32) -> bool {
    (1..=MAX_CANVAS).contains(&size)
}

fn margin_in_range(margin: u32) -> bool {
    margin <= MAX_MARGIN
}

fn default_size() -> u32 {
    DEFAULT_SIZE.get()
}

fn default_margin() -> u32 {
    DEFAULT_MARGIN
}

fn default_dark() -> String {
    DEFAULT_DARK.to_string()
}

fn default_light() -> String {
    DEFAULT_LIGHT.to_string()
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_fps() -> u32 {
    10
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
