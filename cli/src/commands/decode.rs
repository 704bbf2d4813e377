use anyhow::{Context, Result};
use rhoterm_codec::{decode as decode_term, print, Term, WireCodec};

use super::{read_input, DecodeFormat};
use crate::config::RhoConfig;

pub fn decode(
    config_path: &str,
    hex_input: Option<&str>,
    file: Option<&str>,
    format: DecodeFormat,
) -> Result<()> {
    let config = RhoConfig::load_or_default(config_path)?;

    let bytes = match hex_input {
        Some(text) => parse_hex(text)?,
        None => read_input(file.unwrap_or("-"))?,
    };

    let term = WireCodec::new(config.codec.clone())
        .from_bytes(&bytes)
        .context("Failed to decode wire bytes")?;
    println!("{}", render(&config, &term, format)?);
    Ok(())
}

fn parse_hex(text: &str) -> Result<Vec<u8>> {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    hex::decode(digits).context("Input is not valid hex")
}

fn render(config: &RhoConfig, term: &Term, format: DecodeFormat) -> Result<String> {
    match format {
        DecodeFormat::Json => {
            let value: serde_json::Value = decode_term(term)
                .context("Failed to decode term")?
                .into();
            config.render_json(&value)
        }
        DecodeFormat::Rholang => print(term).context("Failed to print term"),
        DecodeFormat::Ast => config.render_json(&serde_json::to_value(term)?),
    }
}
