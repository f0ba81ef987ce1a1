//! Command implementations for the qrmaster CLI.

pub mod config;
pub mod form;
pub mod records;
pub mod scan;

use anyhow::{Result, bail};
use qrmaster_core::{Notice, NoticeKind};

/// Prints a success notice or turns a failure into an error.
pub(crate) fn report(notice: Notice) -> Result<()> {
    match notice.kind {
        NoticeKind::Success => {
            println!("{}: {}", notice.title, notice.description);
            Ok(())
        }
        NoticeKind::Failure => bail!("{}", notice.description),
    }
}
