//! Command-line interface for region-parser.
//!
//! Available commands:
//!
//! - **parse**: Parse region strings and print the `(name, start, end)` triples
//! - **check**: Report which region strings are valid
//!
//! ## Usage
//!
//! ```text
//! # Parse a couple of regions
//! region-parser parse chr21:1,000-2,000 6:1kb-2M
//!
//! # Close open-ended regions using a FASTA index
//! region-parser parse chr21:40M- --fai hg38.fa.fai
//!
//! # Validate regions read from stdin, JSON output for scripting
//! cut -f1 regions.txt | region-parser check - --format json
//! ```

use std::io::BufRead;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use crate::core::contig::ContigDictionary;
use crate::parsing;

pub mod check;
pub mod parse;

#[derive(Parser)]
#[command(name = "region-parser")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Parse genomic region strings such as chr21:1,000-2,000 or 6:1kb-2M")]
#[command(
    long_about = "region-parser converts human-typed genomic regions into a normalized (name, start, end) triple.\n\nSupported forms:\n- chr21                 whole contig\n- chr21:1000-2000       closed range\n- chr21:1000-           open-ended range\n- chr21:1,000-2,000     comma-grouped coordinates\n- 6:1kb-2M              k/M/G unit suffixes"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse region strings into (name, start, end)
    Parse(parse::ParseArgs),

    /// Check whether region strings are valid
    Check(check::CheckArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Region strings given on the command line, or `-` for stdin
#[derive(Args)]
pub struct RegionInput {
    /// Region strings, or `-` to read one region per line from stdin
    #[arg(required = true)]
    pub regions: Vec<String>,
}

impl RegionInput {
    /// Collect regions, expanding `-` into the non-empty, non-comment lines of stdin
    pub fn read(&self) -> anyhow::Result<Vec<String>> {
        let mut regions = Vec::new();

        for region in &self.regions {
            if region == "-" {
                let stdin = std::io::stdin();
                for line in stdin.lock().lines() {
                    let line = line.context("Failed to read regions from stdin")?;
                    let line = line.trim();
                    if line.is_empty() || line.starts_with('#') {
                        continue;
                    }
                    regions.push(line.to_string());
                }
            } else {
                regions.push(region.clone());
            }
        }

        Ok(regions)
    }
}

/// Optional source of contig lengths for closing open-ended regions
#[derive(Args)]
pub struct LengthsArgs {
    /// FASTA index (.fai) providing contig lengths
    #[arg(long, conflicts_with_all = ["dict", "chromsizes"])]
    pub fai: Option<PathBuf>,

    /// Sequence dictionary (.dict) providing contig lengths
    #[arg(long, conflicts_with = "chromsizes")]
    pub dict: Option<PathBuf>,

    /// Chromsizes table (name<TAB>length, optionally gzipped) providing contig lengths
    #[arg(long)]
    pub chromsizes: Option<PathBuf>,

    /// Allow coordinates past the end of the contig
    #[arg(long)]
    pub no_check_bounds: bool,
}

impl LengthsArgs {
    /// Load the requested contig lengths, if any
    pub fn load(&self) -> anyhow::Result<Option<ContigDictionary>> {
        let dictionary = if let Some(path) = &self.fai {
            parsing::fai::parse_fai_file(path)
                .with_context(|| format!("Failed to load FASTA index {}", path.display()))?
        } else if let Some(path) = &self.dict {
            parsing::dict::parse_dict_file(path)
                .with_context(|| format!("Failed to load sequence dictionary {}", path.display()))?
        } else if let Some(path) = &self.chromsizes {
            parsing::chromsizes::parse_chromsizes_file(path)
                .with_context(|| format!("Failed to load chromsizes {}", path.display()))?
        } else {
            return Ok(None);
        };

        tracing::info!(
            contigs = dictionary.len(),
            source = dictionary.source.as_deref().unwrap_or("-"),
            "Loaded contig lengths"
        );

        Ok(Some(dictionary))
    }

    #[must_use]
    pub fn check_bounds(&self) -> bool {
        !self.no_check_bounds
    }
}
