//! Parser for FASTA index (.fai) files using noodles.
//!
//! FAI format provides name and length for each contig.
//! Format: `name\tlength\toffset\tline_bases\tline_width`
//!
//! Truncated indexes that keep only the first two columns (as produced by
//! `cut -f1,2 ref.fa.fai`) are rejected by noodles; those are read by
//! [`parse_fai_text`] instead.

use std::path::Path;

use tracing::debug;

use crate::core::contig::{Contig, ContigDictionary};
use crate::parsing::LoadError;
use crate::utils::validation::check_contig_limit;

/// Parse a FASTA index (.fai) file, falling back to the name/length columns
/// when noodles rejects the full five-column layout.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, `LoadError::InvalidFormat`
/// if neither the full layout nor the name/length columns can be read or no
/// contigs are found, or `LoadError::TooManyContigs` if the limit is exceeded.
pub fn parse_fai_file(path: &Path) -> Result<ContigDictionary, LoadError> {
    use noodles::fasta;

    let content = std::fs::read_to_string(path)?;

    let dictionary = match fasta::fai::io::Reader::new(content.as_bytes()).read_index() {
        Ok(index) => index_to_dictionary(&index)?,
        Err(e) => {
            debug!(
                path = %path.display(),
                error = %e,
                "noodles rejected FAI, reading name and length columns only"
            );
            parse_fai_text(&content)?
        }
    };

    Ok(dictionary.with_source(path.display().to_string()))
}

/// Convert noodles FAI index to `ContigDictionary`
fn index_to_dictionary(
    index: &noodles::fasta::fai::Index,
) -> Result<ContigDictionary, LoadError> {
    let mut contigs = Vec::new();

    for record in index.as_ref() {
        if check_contig_limit(contigs.len()).is_some() {
            return Err(LoadError::TooManyContigs(contigs.len()));
        }

        let name = String::from_utf8_lossy(record.name()).to_string();
        contigs.push(Contig::new(name, record.length()));
    }

    if contigs.is_empty() {
        return Err(LoadError::InvalidFormat(
            "No contigs found in FAI file".to_string(),
        ));
    }

    Ok(ContigDictionary::new(contigs))
}

/// Read the name and length columns of tab-separated FAI text. Any columns
/// after the length are ignored.
///
/// # Errors
///
/// Returns `LoadError::InvalidFormat` naming the 1-based line if a line lacks a
/// length column or its length is not an integer, or if no contigs are found;
/// `LoadError::TooManyContigs` if the limit is exceeded.
pub fn parse_fai_text(text: &str) -> Result<ContigDictionary, LoadError> {
    let mut contigs = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line_num = i + 1;
        if line.trim().is_empty() {
            continue;
        }

        let mut columns = line.split('\t');
        let name = columns.next().unwrap_or_default();
        let Some(length) = columns.next() else {
            return Err(LoadError::InvalidFormat(format!(
                "FAI line {line_num} has no length column"
            )));
        };

        let length = length.trim().parse::<u64>().map_err(|_| {
            LoadError::InvalidFormat(format!(
                "FAI line {line_num}: length '{length}' of '{name}' is not an integer"
            ))
        })?;

        if check_contig_limit(contigs.len()).is_some() {
            return Err(LoadError::TooManyContigs(contigs.len()));
        }

        contigs.push(Contig::new(name, length));
    }

    if contigs.is_empty() {
        return Err(LoadError::InvalidFormat(
            "No contigs found in FAI file".to_string(),
        ));
    }

    Ok(ContigDictionary::new(contigs))
}
