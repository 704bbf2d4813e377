use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::RhoConfig;
use crate::ui;

pub fn init(config_path: &str) -> Result<()> {
    let path = Path::new(config_path);

    if path.exists() {
        anyhow::bail!(
            "Configuration file already exists: {}\nUse a different path or remove the existing file.",
            path.display()
        );
    }

    let config_toml = toml::to_string_pretty(&RhoConfig::default())?;
    fs::write(path, &config_toml)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;

    ui::print_success(&format!("Created {}", path.display()));
    Ok(())
}

pub fn validate(config_path: &str) -> Result<()> {
    ui::print_step("Validating configuration...");

    let config = RhoConfig::load(config_path)
        .context("Failed to load configuration. Run `rho config init` to create a configuration file.")?;

    ui::print_success("Configuration is valid!");
    ui::print_detail("max_depth", &config.codec.max_depth.to_string());
    ui::print_detail("pretty", &config.output.pretty.to_string());
    Ok(())
}
