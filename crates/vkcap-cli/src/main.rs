mod dump;
mod sample;
mod stats;
mod verify;

use std::fs::File;
use std::io::BufReader;

use clap::{Parser, Subcommand};
use tracing::info;
use vkcap_core::config::{default_config_path, VkcapConfig};
use vkcap_core::CaptureReader;
use vkcap_protocol::StreamContext;

#[derive(Parser)]
#[command(name = "vkcap")]
#[command(about = "VKCAP - Vulkan capture file tools")]
#[command(version)]
struct Cli {
    /// Configuration file path (defaults to the platform search order)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every chunk of a capture as a structured tree
    Dump {
        /// Capture file
        file: String,

        /// Emit JSON instead of an indented tree
        #[arg(long)]
        json: bool,
    },

    /// Chunk counts and sizes per chunk type
    Stats {
        /// Capture file
        file: String,
    },

    /// Check a capture for decode errors and dangling references
    Verify {
        /// Capture file
        file: String,

        /// Emit JSON results
        #[arg(long)]
        json: bool,
    },

    /// Write a small demonstration capture
    Sample {
        /// Output file
        out: String,
    },
}

fn main() -> anyhow::Result<()> {
    vkcap_common::init_logging();

    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(default_config_path);
    let config = VkcapConfig::load_or_default(&config_path);
    info!("using configuration from {}", config_path);

    match cli.command {
        Commands::Dump { file, json } => dump::run_dump(&file, &config, json)?,
        Commands::Stats { file } => stats::run_stats(&file, &config)?,
        Commands::Verify { file, json } => verify::run_verify(&file, &config, json)?,
        Commands::Sample { out } => sample::run_sample(&out, &config)?,
    }

    Ok(())
}

/// Open a capture for inspection. Handles stay unresolved, so no tracker
/// is attached.
pub(crate) fn open_capture(
    path: &str,
    config: &VkcapConfig,
) -> anyhow::Result<CaptureReader<BufReader<File>>> {
    let file = File::open(path).map_err(|e| anyhow::anyhow!("cannot open {}: {}", path, e))?;
    let ctx = StreamContext::detached().with_limits(config.stream.limits());
    let reader = CaptureReader::open(BufReader::new(file), ctx)?;
    Ok(reader)
}
