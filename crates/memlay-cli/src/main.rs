use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use memlay::{Bits, Platform};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "memlay")]
#[command(about = "Offline memory-layout inspector for memlay schemas")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a named type from a schema and print its layout
    Layout {
        /// Path to a JSON schema file
        schema: PathBuf,

        /// Name of the type to resolve
        #[arg(short, long = "type")]
        type_name: String,

        /// Target bit width (32 or 64)
        #[arg(short, long, default_value_t = Bits::host())]
        bits: Bits,

        /// Target platform (windows, macos, linux, android, ios)
        #[arg(short, long, default_value_t = Platform::host())]
        platform: Platform,
    },

    /// Resolve every schema entry under every supported context and report
    /// failures
    Check {
        /// Path to a JSON schema file
        schema: PathBuf,
    },

    /// List supported platforms and the host default
    Platforms,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("memlay=info".parse()?))
        .init();

    let args = Args::parse();

    match args.command {
        Command::Layout {
            schema,
            type_name,
            bits,
            platform,
        } => commands::layout::run(&schema, &type_name, bits, platform),
        Command::Check { schema } => commands::check::run(&schema),
        Command::Platforms => commands::platforms::run(),
    }
}
