//! Region string parsing, plus loaders for the contig lengths used to close
//! open-ended regions.
//!
//! - **Region strings**: [`region::parse_region`] and [`region::parse_region_with`]
//! - **Humanized numbers**: [`humanize::parse_humanized`] (`1,000`, `1kb`, `2M`, `1.5Gb`)
//! - **FASTA index (.fai) files**: [`fai`]
//! - **Picard .dict files**: [`dict`]
//! - **Chromsizes tables**: [`chromsizes`], plain or gzipped
//!
//! ## Example
//!
//! ```rust
//! use region_parser::parsing::chromsizes::parse_chromsizes_text;
//! use region_parser::parsing::region::parse_region_with;
//!
//! let sizes = parse_chromsizes_text("chr21\t46709983\n").unwrap();
//! let region = parse_region_with("chr21:40M-", Some(&sizes), true).unwrap();
//! assert_eq!(region.end, Some(46_709_983));
//! ```

use thiserror::Error;

use crate::utils::validation::MAX_CONTIGS;

pub mod chromsizes;
pub mod dict;
pub mod fai;
pub mod humanize;
pub mod region;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid contig lengths format: {0}")]
    InvalidFormat(String),

    #[error("Too many contigs: {0} exceeds maximum allowed ({max})", max = MAX_CONTIGS)]
    TooManyContigs(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_many_contigs_message_names_limit() {
        let message = LoadError::TooManyContigs(MAX_CONTIGS).to_string();
        assert!(message.contains(&MAX_CONTIGS.to_string()));
        assert!(message.ends_with(&format!("({MAX_CONTIGS})")));
    }
}
