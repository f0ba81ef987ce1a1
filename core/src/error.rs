use thiserror::Error;

use crate::render::error::RenderError;
use crate::scan::error::ScanError;
use crate::store::error::{SlotError, StoreError};
use crate::types::config::AppConfigError;
use crate::types::{FieldError, RecordNameError};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Slot error: {0}")]
    Slot(#[from] SlotError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Config error: {0}")]
    Config(#[from] AppConfigError),

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error("Invalid name: {0}")]
    Name(#[from] RecordNameError),
}
