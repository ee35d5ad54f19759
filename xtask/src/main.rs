// Licensed under the Apache-2.0 license

//! Batch entry point for the register-block generator.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod reg_gen;

#[derive(Parser)]
#[command(about = "Register-map tooling", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a SystemVerilog register block from a register map.
    Generate {
        /// Register map TOML file.
        #[arg(short, long)]
        input: PathBuf,
        /// Output file; prints to stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Module name for the generated block.
        #[arg(long, default_value = "reg_block")]
        module: String,
    },
}

fn main() -> Result<()> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()?;

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            input,
            output,
            module,
        } => reg_gen::generate(&input, output.as_deref(), &module),
    }
}
