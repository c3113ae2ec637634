//! # calldec-cli
//!
//! Command-line interface for the calldec ABI decoder.
//!
//! ## Usage
//!
//! ```bash
//! # Decode a payload against a function signature
//! calldec decode "function baz(uint256,string)" 0x...
//!
//! # Width-accurate signed decoding, JSON output
//! calldec decode --declared-width --json "function baz(int8)" 0x...
//!
//! # Run the built-in demonstration vectors
//! calldec samples
//!
//! # Show or edit configuration
//! calldec config --show
//! calldec config --set-max-depth 16
//! ```

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use config::Config;
pub use error::CliError;
pub use output::Output;

/// Calldec CLI
#[derive(Parser, Debug)]
#[command(name = "calldec")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Log filter, e.g. "debug" or "calldec_abi=trace"
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

/// CLI commands
#[derive(Debug, Subcommand)]
enum Commands {
    /// Decode an ABI payload against a function signature
    Decode(commands::decode::DecodeArgs),
    /// Run the built-in demonstration vectors
    Samples,
    /// Show or edit configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,
        /// Set the maximum type nesting depth
        #[arg(long)]
        set_max_depth: Option<usize>,
        /// Enable or disable width-accurate signed decoding
        #[arg(long)]
        set_declared_width: Option<bool>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let mut config = Config::load();

    let result = match cli.command {
        Commands::Decode(args) => args.execute(&config, cli.json),
        Commands::Samples => commands::samples::execute(&config, cli.json),
        Commands::Config {
            show,
            set_max_depth,
            set_declared_width,
        } => handle_config(&mut config, show, set_max_depth, set_declared_width, cli.json),
    };

    if let Err(e) = result {
        if cli.json {
            println!(
                "{}",
                serde_json::json!({
                    "error": e.to_string(),
                    "success": false
                })
            );
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

fn handle_config(
    config: &mut Config,
    show: bool,
    set_max_depth: Option<usize>,
    set_declared_width: Option<bool>,
    json: bool,
) -> Result<(), CliError> {
    let mut modified = false;

    if let Some(max_depth) = set_max_depth {
        config.max_depth = max_depth;
        modified = true;
    }

    if let Some(declared_width) = set_declared_width {
        config.declared_int_width = declared_width;
        modified = true;
    }

    if modified {
        config.save()?;
        Output::new(json)
            .field("status", "saved")
            .message("Configuration saved")
            .print();
    } else if show {
        Output::new(json)
            .field_bool("declared_int_width", config.declared_int_width)
            .field_u64("max_depth", config.max_depth as u64)
            .message(&format!(
                "Declared int width: {}\nMax depth: {}",
                config.declared_int_width, config.max_depth
            ))
            .print();
    } else {
        Output::new(json)
            .message("Use --show to display config, or --set-max-depth/--set-declared-width to modify")
            .print();
    }

    Ok(())
}
