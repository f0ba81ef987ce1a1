//! Decode codes from image files.

use std::path::PathBuf;

use anyhow::{Context as _, Result, bail};
use chrono::Utc;
use log::info;
use qrmaster_core::{Generator, GridDecoder, ImageFiles, RecordName, ScanSession, classify};

use crate::cli::StyleArgs;
use crate::context::AppContext;

/// Stops at the first decodable image. Saved codes with the same payload get
/// their scan counted.
pub fn run_scan(
    ctx: &AppContext,
    images: &[PathBuf],
    save: bool,
    name: Option<&str>,
    style: &StyleArgs,
) -> Result<()> {
    let mut session = ScanSession::new(ImageFiles::new(images.iter().cloned()), GridDecoder)
        .with_frame_interval(ctx.app_config.scanner.frame_interval());

    let mut decoded = None;
    session
        .run(|text| decoded = Some(text))
        .context("Failed to read image")?;
    let Some(text) = decoded else {
        bail!("No QR code found");
    };

    let content = classify(&text);
    println!("{text}");
    println!("type: {}", content.content_type());

    let mut store = ctx.open_store()?;
    let now = Utc::now();
    for record in store.list().into_iter().filter(|r| r.payload == text) {
        store.record_scan(record.id, now)?;
        info!("counted scan of {}", record.id);
    }

    if save {
        let mut generator = Generator::from_config(&ctx.app_config);
        generator.load_scanned(&text);
        let customization = style.apply(generator.customization().clone());
        generator.set_customization(customization);

        let name = RecordName::parse_optional(name.unwrap_or_default()).context("Invalid name")?;
        let Some(draft) = generator.draft(name) else {
            bail!("Scanned content is empty");
        };
        let record = store.save(draft, now)?;
        println!("Saved {} as {}", record.id, record.content_type);
    }

    Ok(())
}
