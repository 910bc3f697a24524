//! Export command - Convert a state cache to CSV, JSON or MessagePack

use std::{fs::File, io::BufWriter, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use crate::{
    adapters::{JsonRepository, MsgPackRepository},
    ports::StateRepository,
};

#[derive(Parser, Debug)]
#[command(about = "Export a state cache in another format")]
pub struct ExportArgs {
    /// State cache file to read (JSON, or MessagePack for .msgpack)
    pub cache: PathBuf,

    /// Output file path
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    /// Output format
    #[arg(long, short = 'f', default_value = "csv")]
    pub format: ExportFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// One row per state
    Csv,
    /// Interchange JSON document
    Json,
    /// Compact binary
    Msgpack,
}

pub fn execute(args: ExportArgs) -> Result<()> {
    let cache = super::load_cache(&args.cache)?;

    match args.format {
        ExportFormat::Csv => {
            let file = File::create(&args.output)
                .with_context(|| format!("Failed to create file: {}", args.output.display()))?;
            cache
                .write_csv(BufWriter::new(file))
                .context("Failed to write CSV export")?;
        }
        ExportFormat::Json => JsonRepository::new().save(&cache, &args.output)?,
        ExportFormat::Msgpack => MsgPackRepository::new().save(&cache, &args.output)?,
    }

    println!(
        "Exported {} states to {} ({:?})",
        cache.len(),
        args.output.display(),
        args.format
    );
    Ok(())
}
