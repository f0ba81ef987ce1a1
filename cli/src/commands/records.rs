//! Commands over the saved collection.

use std::path::PathBuf;

use anyhow::{Context as _, Result, bail};
use chrono::Utc;
use qrmaster_core::{Dashboard, ExportFormat, RecordName};

use crate::cli::{FormArgs, StyleArgs};
use crate::commands::form::build_generator;
use crate::commands::report;
use crate::context::{AppContext, resolve_id};

pub fn run_save(
    ctx: &AppContext,
    form: &FormArgs,
    style: &StyleArgs,
    name: Option<&str>,
) -> Result<()> {
    let generator = build_generator(&ctx.app_config, form, style)?;
    let name = RecordName::parse_optional(name.unwrap_or_default()).context("Invalid name")?;

    let Some(draft) = generator.draft(name) else {
        bail!(
            "Nothing to save: fill in the required {} field",
            generator.content_type()
        );
    };

    let mut store = ctx.open_store()?;
    let record = store.save(draft, Utc::now())?;
    println!("Saved {} ({})", record.id, record.payload);
    Ok(())
}

pub fn run_list(ctx: &AppContext, json: bool) -> Result<()> {
    let mut store = ctx.open_store()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&store.list())?);
        return Ok(());
    }

    let entries = Dashboard::new(&mut store).entries();
    if entries.is_empty() {
        println!("No QR codes saved yet.");
        return Ok(());
    }

    println!("My QR Codes ({})", entries.len());
    for entry in entries {
        let id = entry.id.to_string();
        println!(
            "{}  {:<8}  {:>4} scans  {}  {}",
            &id[..8],
            entry.content_type,
            entry.scans,
            entry.title,
            entry.summary
        );
    }
    Ok(())
}

pub fn run_show(ctx: &AppContext, id: &str) -> Result<()> {
    let store = ctx.open_store()?;
    let id = resolve_id(&store, id)?;
    let record = store.get(id).context("Saved code disappeared")?;

    println!("id:       {}", record.id);
    println!("type:     {}", record.content_type);
    if let Some(name) = &record.name {
        println!("name:     {name}");
    }
    println!("created:  {}", record.created_at.to_rfc3339());
    println!("scans:    {}", record.scans);
    if let Some(last) = record.last_scanned {
        println!("last:     {}", last.to_rfc3339());
    }
    println!(
        "style:    {}px, EC {}, margin {}, {} on {}, {}",
        record.customization.size,
        record.customization.error_correction_level,
        record.customization.margin,
        record.customization.color.dark,
        record.customization.color.light,
        record.customization.pattern
    );
    println!("payload:\n{}", record.payload);
    Ok(())
}

pub fn run_rename(ctx: &AppContext, id: &str, name: &str) -> Result<()> {
    let mut store = ctx.open_store()?;
    let id = resolve_id(&store, id)?;
    report(Dashboard::new(&mut store).rename(id, name))
}

pub fn run_delete(ctx: &AppContext, id: &str) -> Result<()> {
    let mut store = ctx.open_store()?;
    let id = resolve_id(&store, id)?;
    report(Dashboard::new(&mut store).delete(id))
}

pub fn run_record_scan(ctx: &AppContext, id: &str) -> Result<()> {
    let mut store = ctx.open_store()?;
    let id = resolve_id(&store, id)?;
    store.record_scan(id, Utc::now())?;

    let scans = store.get(id).map(|r| r.scans).unwrap_or_default();
    println!("{id}: {scans} scans");
    Ok(())
}

pub fn run_download(
    ctx: &AppContext,
    id: &str,
    dir: Option<PathBuf>,
    format: ExportFormat,
) -> Result<()> {
    let mut store = ctx.open_store()?;
    let id = resolve_id(&store, id)?;
    let dir = dir.unwrap_or_else(|| ctx.config.exports_path());
    report(Dashboard::new(&mut store).download(id, &dir, format))
}
