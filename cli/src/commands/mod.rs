pub mod config;
pub mod decode;
pub mod encode;

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::fs;
use std::io::{self, Read};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EncodeFormat {
    /// Rholang source text
    Rholang,
    /// Hex-encoded Par wire bytes
    Hex,
    /// The term AST as JSON
    Ast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DecodeFormat {
    /// The decoded JSON value
    Json,
    /// Rholang source text
    Rholang,
    /// The term AST as JSON
    Ast,
}

/// Reads `path`, or stdin when `path` is "-".
fn read_input(path: &str) -> Result<Vec<u8>> {
    if path == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    fs::read(path).with_context(|| format!("Failed to read input file: {}", path))
}
