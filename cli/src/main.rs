mod cli;
mod commands;
mod context;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::commands::{config, form, records, scan};
use crate::context::AppContext;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to stderr; RUST_LOG applies unless --verbose forces debug.
    let mut logger = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let ctx = AppContext::load(cli.data_dir)?;

    match cli.command {
        Commands::Encode { form } => form::run_encode(&ctx.app_config, &form),
        Commands::Render {
            form,
            style,
            output,
            format,
        } => form::run_render(&ctx.app_config, &form, &style, &output, format),
        Commands::Save { form, style, name } => {
            records::run_save(&ctx, &form, &style, name.as_deref())
        }
        Commands::List { json } => records::run_list(&ctx, json),
        Commands::Show { id } => records::run_show(&ctx, &id),
        Commands::Rename { id, name } => records::run_rename(&ctx, &id, &name),
        Commands::Delete { id } => records::run_delete(&ctx, &id),
        Commands::RecordScan { id } => records::run_record_scan(&ctx, &id),
        Commands::Download { id, dir, format } => records::run_download(&ctx, &id, dir, format),
        Commands::Classify { text } => form::run_classify(&text),
        Commands::Scan {
            images,
            save,
            name,
            style,
        } => scan::run_scan(&ctx, &images, save, name.as_deref(), &style),
        Commands::Config { init } => config::run_config(&ctx, init),
    }
}
