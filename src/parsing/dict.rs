use std::path::Path;

use tracing::warn;

use crate::core::contig::{Contig, ContigDictionary};
use crate::parsing::LoadError;
use crate::utils::validation::check_contig_limit;

/// Parse a Picard sequence dictionary (.dict) file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or other load errors
/// if the content is invalid.
pub fn parse_dict_file(path: &Path) -> Result<ContigDictionary, LoadError> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_dict_text(&content)?.with_source(path.display().to_string()))
}

/// Parse dictionary from text.
///
/// Only `@SQ` lines are read; `SN` and `LN` are required, other tags ignored.
///
/// # Errors
///
/// Returns `LoadError::InvalidFormat` if no `@SQ` lines are found, or
/// `LoadError::TooManyContigs` if the number of contigs exceeds the maximum.
pub fn parse_dict_text(text: &str) -> Result<ContigDictionary, LoadError> {
    let mut contigs = Vec::new();

    for (i, line) in text.lines().enumerate() {
        if line.split('\t').next() != Some("@SQ") {
            continue;
        }

        let mut name: Option<&str> = None;
        let mut length: Option<u64> = None;

        for field in line.split('\t').skip(1) {
            match field.split_once(':') {
                Some(("SN", value)) => name = Some(value),
                Some(("LN", value)) => length = value.parse().ok(),
                _ => {}
            }
        }

        let (Some(name), Some(length)) = (name, length) else {
            warn!(line = i + 1, "Skipping @SQ line without SN and LN");
            continue;
        };

        if check_contig_limit(contigs.len()).is_some() {
            return Err(LoadError::TooManyContigs(contigs.len()));
        }

        contigs.push(Contig::new(name, length));
    }

    if contigs.is_empty() {
        return Err(LoadError::InvalidFormat(
            "No @SQ lines found in dictionary".to_string(),
        ));
    }

    Ok(ContigDictionary::new(contigs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::region::ContigLengths;

    #[test]
    fn test_parse_dict_text() {
        let dict = r"@HD	VN:1.6
@SQ	SN:chr1	LN:248956422	M5:6aef897c3d6ff0c78aff06ac189178dd	UR:file:///reference/hg38.fa
@SQ	SN:chr2	LN:242193529	M5:f98db672eb0993dcfdabafe2a882905c	UR:file:///reference/hg38.fa
";

        let dict = parse_dict_text(dict).unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.contigs[0].name, "chr1");
        assert_eq!(dict.contig_length("chr2"), Some(242_193_529));
    }

    #[test]
    fn test_parse_dict_skips_incomplete_lines() {
        let dict = "@SQ\tSN:chr1\n@SQ\tSN:chrM\tLN:16569\n";

        let dict = parse_dict_text(dict).unwrap();
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.contig_length("chrM"), Some(16569));
    }

    #[test]
    fn test_parse_dict_requires_exact_sq_tag() {
        let dict = "@SQX\tSN:decoy\tLN:10\n@SQ\tSN:chr1\tLN:248956422\n";

        let dict = parse_dict_text(dict).unwrap();
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.contig_length("decoy"), None);
        assert_eq!(dict.contig_length("chr1"), Some(248_956_422));
    }

    #[test]
    fn test_parse_dict_no_sq() {
        let result = parse_dict_text("@HD\tVN:1.6\n@RG\tID:sample1\n");
        assert!(result.is_err());
    }
}
