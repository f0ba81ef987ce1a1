//! Commands that work on a form without touching the collection.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context as _, Result, bail};
use qrmaster_core::render::export;
use qrmaster_core::{AppConfig, ExportFormat, Generator, classify, render};

use crate::cli::{FormArgs, StyleArgs};

/// Fills a generator from command-line fields and style overrides.
pub fn build_generator(config: &AppConfig, form: &FormArgs, style: &StyleArgs) -> Result<Generator> {
    let mut generator = Generator::from_config(config);
    generator.select_type(form.content_type);

    let now = Instant::now();
    for (field, value) in &form.fields {
        generator
            .set_field(field, value, now)
            .with_context(|| format!("Invalid field '{field}'"))?;
    }

    let customization = style.apply(generator.customization().clone());
    generator.set_customization(customization);
    Ok(generator)
}

fn require_payload(generator: &Generator) -> Result<String> {
    let payload = generator.payload();
    if payload.is_empty() {
        bail!(
            "Nothing to encode: fill in the required {} field",
            generator.content_type()
        );
    }
    Ok(payload)
}

pub fn run_encode(config: &AppConfig, form: &FormArgs) -> Result<()> {
    let generator = build_generator(config, form, &StyleArgs::default())?;
    println!("{}", require_payload(&generator)?);
    Ok(())
}

pub fn run_render(
    config: &AppConfig,
    form: &FormArgs,
    style: &StyleArgs,
    output: &Path,
    format: Option<ExportFormat>,
) -> Result<()> {
    let generator = build_generator(config, form, style)?;
    let payload = require_payload(&generator)?;

    let format = format
        .or_else(|| ExportFormat::from_path(output))
        .unwrap_or_default();
    let image = render(&payload, generator.customization()).context("Failed to render QR code")?;
    export::write_file(&image, output, format)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("Wrote {} ({}x{})", output.display(), image.width(), image.height());
    Ok(())
}

pub fn run_classify(text: &str) -> Result<()> {
    let content = classify(text);
    println!("type: {}", content.content_type());
    for (field, value) in content.fields() {
        println!("{field}: {value}");
    }
    Ok(())
}
