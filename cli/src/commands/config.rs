use anyhow::{Context as _, Result};
use qrmaster_core::AppConfig;

use crate::context::AppContext;

pub fn run_config(ctx: &AppContext, init: bool) -> Result<()> {
    let path = ctx.config.config_path();

    if init {
        if path.exists() {
            println!("{} already exists", path.display());
        } else {
            AppConfig::default()
                .save(&path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
    }

    let raw = AppConfig::load(&path)?;
    let problems = raw.validate();

    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(&ctx.app_config)?);
    for problem in problems {
        println!("# invalid, default used: {problem}");
    }
    Ok(())
}
