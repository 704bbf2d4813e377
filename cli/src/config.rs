use anyhow::{Context, Result};
use rhoterm_codec::CodecConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main configuration structure for rho.toml.
/// Optional - every command falls back to defaults when the file is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RhoConfig {
    #[serde(default)]
    pub codec: CodecConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON output (default: true)
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

impl RhoConfig {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = Self::parse(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Try to load config, falling back to defaults if the file doesn't exist
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let config: RhoConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.codec
            .validate()
            .context("Invalid [codec] section")?;
        Ok(())
    }

    /// Render a JSON value according to the output settings
    pub fn render_json(&self, value: &serde_json::Value) -> Result<String> {
        let rendered = if self.output.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(rendered)
    }
}
