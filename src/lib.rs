//! # region-parser
//!
//! A library for parsing human-typed genomic region strings.
//!
//! Region strings come in many shapes: UCSC (`chr21:1,000-2,000`), Ensembl
//! (`6:1000-2000`), FASTA-header accessions (`gb|accession|locus`), open-ended
//! ranges (`chr21:1000-`) and humanized coordinates (`6:1kb-2M`).
//!
//! `region-parser` normalizes all of them into a `(name, start, end)` triple,
//! where an absent end means "to the end of the contig".
//!
//! ## Features
//!
//! - **Single separator**: at most one `:` splits the name from the range, so
//!   names may contain `-`, `.` and `|`
//! - **Comma grouping**: `1,000,000` is `1000000`
//! - **Unit suffixes**: `k`/`kb`, `M`/`Mb`, `G`/`Gb`, case-insensitive
//! - **Open-ended regions**: closed at the contig length when a `.fai`, `.dict`
//!   or chromsizes file is supplied
//!
//! ## Example
//!
//! ```rust
//! use region_parser::parse_region;
//!
//! let region = parse_region("6:1kb-2M").unwrap();
//! assert_eq!(region.into_parts(), ("6".to_string(), 1000, Some(2_000_000)));
//!
//! let region = parse_region("GL000207.1").unwrap();
//! assert!(region.is_whole_contig());
//!
//! assert!(parse_region("chr1::1000-2000").is_err());
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Region and contig data types
//! - [`parsing`]: Region string parser and contig length loaders
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::contig::{Contig, ContigDictionary};
pub use crate::core::region::{ContigLengths, ParsedRegion};
pub use crate::parsing::region::{
    is_complete_region_string, parse_region, parse_region_with, InvalidRegionError,
    RegionErrorKind,
};
