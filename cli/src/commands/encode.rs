use anyhow::{Context, Result};
use rhoterm_codec::{encode_json, print, Term, WireCodec};

use super::{read_input, EncodeFormat};
use crate::config::RhoConfig;

pub fn encode(
    config_path: &str,
    json: Option<&str>,
    file: Option<&str>,
    format: EncodeFormat,
) -> Result<()> {
    let config = RhoConfig::load_or_default(config_path)?;

    let text = match json {
        Some(text) => text.to_string(),
        None => String::from_utf8(read_input(file.unwrap_or("-"))?)
            .context("Input is not valid UTF-8")?,
    };
    let value: serde_json::Value =
        serde_json::from_str(&text).context("Input is not valid JSON")?;

    let term = encode_json(&value).context("Failed to encode value")?;
    println!("{}", render(&config, &term, format)?);
    Ok(())
}

fn render(config: &RhoConfig, term: &Term, format: EncodeFormat) -> Result<String> {
    match format {
        EncodeFormat::Rholang => print(term).context("Failed to print term"),
        EncodeFormat::Hex => {
            let bytes = WireCodec::new(config.codec.clone())
                .to_bytes(term)
                .context("Failed to serialize term")?;
            Ok(hex::encode(bytes))
        }
        EncodeFormat::Ast => config.render_json(&serde_json::to_value(term)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rendered(value: serde_json::Value, format: EncodeFormat) -> String {
        let term = encode_json(&value).unwrap();
        render(&RhoConfig::default(), &term, format).unwrap()
    }

    #[test]
    fn test_render_rholang() {
        assert_eq!(
            rendered(json!({"b": 1, "a": 2}), EncodeFormat::Rholang),
            r#"@"a"!(2) | @"b"!(1)"#
        );
    }

    #[test]
    fn test_render_hex() {
        assert_eq!(rendered(json!(42), EncodeFormat::Hex), "2a021054");
        assert_eq!(rendered(json!(null), EncodeFormat::Hex), "");
    }

    #[test]
    fn test_render_respects_depth_limit() {
        let mut config = RhoConfig::default();
        config.codec.max_depth = 2;
        let term = encode_json(&json!([[[1]]])).unwrap();
        let err = render(&config, &term, EncodeFormat::Hex).unwrap_err();
        assert!(format!("{:#}", err).contains("Schema violation"));
    }
}
