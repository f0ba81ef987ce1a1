use std::path::PathBuf;

/// Filesystem layout of a data directory.
#[derive(Clone, Debug)]
pub struct Config {
    pub base_path: PathBuf,
}

impl Config {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn db_path(&self) -> PathBuf {
        self.base_path.join("qrmaster.redb")
    }

    pub fn config_path(&self) -> PathBuf {
        self.base_path.join("config.toml")
    }

    pub fn exports_path(&self) -> PathBuf {
        self.base_path.join("exports")
    }
}
