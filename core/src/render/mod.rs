//! Payload + customization → RGBA bitmap.

use image::{DynamicImage, Rgba, RgbaImage};
use qrcode::QrCode;
use std::path::Path;

use crate::types::{Customization, EcLevel, ModulePattern};
use error::RenderError;

pub mod export;
mod pdf;

pub use export::ExportFormat;

pub mod error {
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum RenderError {
        #[error("Nothing to encode")]
        EmptyPayload,

        #[error("Canvas side {side}px exceeds the {max}px limit")]
        CanvasTooLarge { side: u64, max: u32 },

        #[error("QR error: {0}")]
        Qr(#[from] qrcode::types::QrError),

        #[error("Image error: {0}")]
        Image(#[from] image::ImageError),

        #[error("Resize error: {0}")]
        Resize(#[from] fast_image_resize::ResizeError),

        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),
    }
}

/// Largest canvas side `render` will allocate, in pixels.
pub const MAX_CANVAS: u32 = 4096;

/// Logo side as a fraction of the canvas side.
const LOGO_FRACTION: u32 = 5;

/// Corner radius of rounded modules, in modules.
const ROUNDED_RADIUS: f32 = 0.3;

/// Side of a finder pattern, in modules.
const FINDER_SIZE: usize = 7;

impl From<EcLevel> for qrcode::EcLevel {
    fn from(level: EcLevel) -> Self {
        match level {
            EcLevel::L => qrcode::EcLevel::L,
            EcLevel::M => qrcode::EcLevel::M,
            EcLevel::Q => qrcode::EcLevel::Q,
            EcLevel::H => qrcode::EcLevel::H,
        }
    }
}

/// Renders `payload` as a square bitmap.
///
/// The canvas side is `customization.size`, grown when needed so every module
/// (quiet zone included) gets at least one pixel. Sides above [`MAX_CANVAS`]
/// are rejected.
pub fn render(payload: &str, customization: &Customization) -> Result<RgbaImage, RenderError> {
    if payload.is_empty() {
        return Err(RenderError::EmptyPayload);
    }

    let code = QrCode::with_error_correction_level(
        payload.as_bytes(),
        customization.error_correction_level.into(),
    )?;
    let qr_width = code.width();
    let colors = code.to_colors();

    let (side, total) = canvas_side(qr_width, customization)?;
    let margin = customization.margin as usize;

    let dark = Rgba(customization.color.dark.to_rgba());
    let light = Rgba(customization.color.light.to_rgba());

    let mut canvas = RgbaImage::from_pixel(side, side, light);
    let side = side as usize;

    for (py, row) in canvas.rows_mut().enumerate() {
        let (my, v) = module_at(py, total, side);
        for (px, pixel) in row.enumerate() {
            let (mx, u) = module_at(px, total, side);

            // Quiet zone.
            if mx < margin || my < margin || mx >= margin + qr_width || my >= margin + qr_width {
                continue;
            }

            let (x, y) = (mx - margin, my - margin);
            if colors[y * qr_width + x] != qrcode::Color::Dark {
                continue;
            }

            let pattern = if is_finder(x, y, qr_width) {
                ModulePattern::Square
            } else {
                customization.pattern
            };

            if covers(pattern, u, v) {
                *pixel = dark;
            }
        }
    }

    if let Some(logo) = &customization.logo {
        overlay_logo(&mut canvas, logo)?;
    }

    Ok(canvas)
}

/// Canvas side in pixels and symbol width in modules, quiet zone included.
fn canvas_side(qr_width: usize, customization: &Customization) -> Result<(u32, usize), RenderError> {
    let total = qr_width as u64 + 2 * u64::from(customization.margin);
    let side = u64::from(customization.size.get()).max(total);

    match u32::try_from(side) {
        Ok(px) if px <= MAX_CANVAS => Ok((px, total as usize)),
        _ => Err(RenderError::CanvasTooLarge {
            side,
            max: MAX_CANVAS,
        }),
    }
}

/// Module index for a pixel, plus where the pixel center falls inside it.
fn module_at(pixel: usize, total: usize, side: usize) -> (usize, f32) {
    let pos = (pixel as f32 + 0.5) * total as f32 / side as f32;
    let module = (pos as usize).min(total - 1);
    (module, pos - module as f32)
}

fn is_finder(x: usize, y: usize, width: usize) -> bool {
    let near = |c: usize| c < FINDER_SIZE;
    let far = |c: usize| c >= width - FINDER_SIZE;
    (near(x) && near(y)) || (far(x) && near(y)) || (near(x) && far(y))
}

/// Whether a point at `(u, v)` inside a module is painted for `pattern`.
fn covers(pattern: ModulePattern, u: f32, v: f32) -> bool {
    match pattern {
        ModulePattern::Square => true,
        ModulePattern::Circle => (u - 0.5).powi(2) + (v - 0.5).powi(2) <= 0.25,
        ModulePattern::Rounded => {
            let inner = 0.5 - ROUNDED_RADIUS;
            let dx = ((u - 0.5).abs() - inner).max(0.0);
            let dy = ((v - 0.5).abs() - inner).max(0.0);
            dx * dx + dy * dy <= ROUNDED_RADIUS * ROUNDED_RADIUS
        }
    }
}

/// Scales the logo to fit a fifth of the canvas and draws it centered.
fn overlay_logo(canvas: &mut RgbaImage, logo_path: &Path) -> Result<(), RenderError> {
    let src_image = image::open(logo_path)?;
    let (src_width, src_height) = (src_image.width(), src_image.height());

    let target = (canvas.width() / LOGO_FRACTION).max(1);
    let scale = target as f32 / src_width.max(src_height) as f32;
    let dst_width = ((src_width as f32 * scale) as u32).max(1);
    let dst_height = ((src_height as f32 * scale) as u32).max(1);

    let mut dst_image = DynamicImage::new(dst_width, dst_height, src_image.color());

    let mut resizer = fast_image_resize::Resizer::new();
    resizer.resize(
        &src_image,
        &mut dst_image,
        Some(&fast_image_resize::ResizeOptions::new().resize_alg(
            fast_image_resize::ResizeAlg::Convolution(fast_image_resize::FilterType::Lanczos3),
        )),
    )?;

    let logo = dst_image.to_rgba8();
    let x = (canvas.width() - dst_width) / 2;
    let y = (canvas.height() - dst_height) / 2;
    image::imageops::overlay(canvas, &logo, x as i64, y as i64);

    Ok(())
}
