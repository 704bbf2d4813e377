//! # rhoterm-cli
//!
//! Command-line tool for turning JSON into Rholang terms and `Par` wire
//! bytes, and back.
//!
//! ## Installation
//!
//! ```bash
//! cargo install rhoterm-cli
//! ```
//!
//! ## Commands
//!
//! - `rho encode '{"a": 1}'` - Print the Rholang term for a JSON value
//! - `rho encode --format hex` - Print the hex-encoded wire bytes instead
//! - `rho decode <hex>` - Decode wire bytes back to JSON
//! - `rho config validate` - Check `rho.toml`
//!
//! See `rho --help` for the full command reference.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use std::io;
use std::process;

mod commands;
mod config;
mod logging;
mod ui;

use commands::{DecodeFormat, EncodeFormat};

#[derive(Parser)]
#[command(name = "rho")]
#[command(about = "Rholang term codec - encode JSON to terms and wire bytes, decode them back", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to rho.toml configuration file
    #[arg(short, long, global = true, default_value = "rho.toml")]
    config: String,

    /// Emit log lines as JSON
    #[arg(long, global = true)]
    log_json: bool,

    /// Enable verbose output
    #[arg(long, global = true)]
    verbose: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a JSON value into a Rholang term
    Encode {
        /// JSON text to encode (reads --file or stdin when omitted)
        json: Option<String>,

        /// Read the JSON value from a file ("-" for stdin)
        #[arg(short, long, conflicts_with = "json")]
        file: Option<String>,

        /// Output representation
        #[arg(long, value_enum, default_value_t = EncodeFormat::Rholang)]
        format: EncodeFormat,
    },

    /// Decode Par wire bytes back into JSON
    Decode {
        /// Hex-encoded wire bytes (reads --file when omitted)
        hex: Option<String>,

        /// Read raw wire bytes from a file
        #[arg(short, long, conflicts_with = "hex")]
        file: Option<String>,

        /// Output representation
        #[arg(long, value_enum, default_value_t = DecodeFormat::Json)]
        format: DecodeFormat,
    },

    /// Configuration management commands
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Write a default configuration file
    Init,

    /// Validate the configuration file
    Validate,
}

fn main() {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "rho", &mut io::stdout());
        return;
    }

    if let Err(e) = logging::init(
        logging::LoggingConfig::default()
            .with_verbose(cli.verbose)
            .with_json_logs(cli.log_json),
    ) {
        eprintln!("{} {}", "Warning:".yellow().bold(), e);
    }

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Encode { json, file, format } => {
            commands::encode::encode(&cli.config, json.as_deref(), file.as_deref(), format)
        }
        Commands::Decode { hex, file, format } => {
            commands::decode::decode(&cli.config, hex.as_deref(), file.as_deref(), format)
        }
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Init => commands::config::init(&cli.config),
            ConfigCommands::Validate => commands::config::validate(&cli.config),
        },
    }
}
