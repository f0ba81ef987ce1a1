//! Read-only derivations of a rendered bitmap.

use image::{ImageFormat, RgbaImage};
use std::fmt;
use std::io::{Cursor, Write};
use std::path::Path;
use std::str::FromStr;

use super::error::RenderError;

pub use super::pdf::write_pdf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    #[default]
    Png,
    Pdf,
}

impl ExportFormat {
    /// Guesses the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()?.to_str()?.parse().ok()
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Pdf => "pdf",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(ExportFormat::Png),
            "pdf" => Ok(ExportFormat::Pdf),
            _ => Err(format!("unsupported export format: {s}")),
        }
    }
}

pub fn png_bytes(image: &RgbaImage) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

pub fn write_png(image: &RgbaImage, path: &Path) -> Result<(), RenderError> {
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Writes `image` to `path` in `format`, creating parent directories.
pub fn write_file(image: &RgbaImage, path: &Path, format: ExportFormat) -> Result<(), RenderError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    match format {
        ExportFormat::Png => write_png(image, path),
        ExportFormat::Pdf => {
            let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
            write_pdf(image, &mut file)?;
            file.flush()?;
            Ok(())
        }
    }
}
