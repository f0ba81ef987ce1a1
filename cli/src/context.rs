//! Data directory, configuration and store setup shared by the commands.

use std::path::PathBuf;

use anyhow::{Context as _, Result, bail};
use log::warn;
use qrmaster_core::{AppConfig, Config, RecordId, RedbSlot, SavedCodeStore, Slot};

pub struct AppContext {
    pub config: Config,
    pub app_config: AppConfig,
}

impl AppContext {
    /// Resolves the data directory and loads config.toml, replacing invalid
    /// values with defaults.
    pub fn load(data_dir: Option<PathBuf>) -> Result<Self> {
        let base_path = match data_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        let config = Config::new(base_path);

        let loaded = AppConfig::load(&config.config_path())
            .with_context(|| format!("Failed to read {}", config.config_path().display()))?;
        for problem in loaded.validate() {
            warn!("config: {problem}; using the default");
        }

        Ok(Self {
            config,
            app_config: loaded.with_defaults_for_invalid(),
        })
    }

    pub fn open_store(&self) -> Result<SavedCodeStore<RedbSlot>> {
        SavedCodeStore::open(&self.config)
            .with_context(|| format!("Failed to open {}", self.config.db_path().display()))
    }
}

fn default_data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join("qrmaster"))
        .context("Failed to determine data directory; pass --data-dir")
}

/// Finds the saved code whose id starts with `prefix`.
pub fn resolve_id<S: Slot>(store: &SavedCodeStore<S>, prefix: &str) -> Result<RecordId> {
    let prefix = prefix.trim().to_ascii_lowercase();
    if prefix.is_empty() {
        bail!("Empty id");
    }

    let matches: Vec<RecordId> = store
        .list()
        .into_iter()
        .map(|record| record.id)
        .filter(|id| id.to_string().starts_with(&prefix))
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => bail!("No saved code matches '{prefix}'"),
        _ => bail!("'{prefix}' matches {} saved codes; use a longer prefix", matches.len()),
    }
}
