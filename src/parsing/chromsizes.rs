//! Parser for two-column chromsizes tables (`name<TAB>length`), as written by
//! UCSC `fetchChromSizes` or `cut -f1,2` of a FASTA index. Gzipped input is
//! detected by the `.gz` extension.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::core::contig::{Contig, ContigDictionary};
use crate::parsing::LoadError;
use crate::utils::validation::check_contig_limit;

/// Parse a chromsizes file, decompressing it first if it ends in `.gz`
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read or decompressed, or
/// other load errors if the content is invalid.
pub fn parse_chromsizes_file(path: &Path) -> Result<ContigDictionary, LoadError> {
    let file = File::open(path)?;
    let mut content = String::new();

    if is_gzipped(path) {
        MultiGzDecoder::new(file).read_to_string(&mut content)?;
    } else {
        std::io::BufReader::new(file).read_to_string(&mut content)?;
    }

    Ok(parse_chromsizes_text(&content)?.with_source(path.display().to_string()))
}

fn is_gzipped(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("gz"))
}

/// Parse chromsizes text with whitespace-separated columns: name, length.
///
/// Blank lines and `#` comments are skipped, as is a leading header row whose
/// first column is `name`, `chrom` or `contig`.
///
/// # Errors
///
/// Returns `LoadError::InvalidFormat` if a line has fewer than 2 fields or an
/// invalid length, or no contigs are found, or `LoadError::TooManyContigs`
/// if the limit is exceeded.
pub fn parse_chromsizes_text(text: &str) -> Result<ContigDictionary, LoadError> {
    let mut contigs = Vec::new();
    let mut first_data_line = true;

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();

        if first_data_line {
            first_data_line = false;
            let first = fields.first().map(|s| s.to_lowercase()).unwrap_or_default();
            if first == "name" || first == "chrom" || first == "contig" {
                continue;
            }
        }

        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;

        if fields.len() < 2 {
            return Err(LoadError::InvalidFormat(format!(
                "Line {line_num} has fewer than 2 fields"
            )));
        }

        let length: u64 = fields[1].parse().map_err(|_| {
            LoadError::InvalidFormat(format!(
                "Invalid length on line {}: '{}'",
                line_num, fields[1]
            ))
        })?;

        if check_contig_limit(contigs.len()).is_some() {
            return Err(LoadError::TooManyContigs(contigs.len()));
        }

        contigs.push(Contig::new(fields[0], length));
    }

    if contigs.is_empty() {
        return Err(LoadError::InvalidFormat(
            "No contigs found in chromsizes file".to_string(),
        ));
    }

    Ok(ContigDictionary::new(contigs))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::write::GzEncoder;
    use flate2::Compression;

    use super::*;
    use crate::core::region::ContigLengths;

    const SIZES: &str = "chr1\t248956422\nchr21\t46709983\nchrM\t16569\n";

    #[test]
    fn test_parse_chromsizes_text() {
        let dict = parse_chromsizes_text(SIZES).unwrap();
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.contig_length("chr21"), Some(46_709_983));
    }

    #[test]
    fn test_parse_chromsizes_header_and_comments() {
        let text = "# hg38\n\nchrom\tlength\nchr1\t248956422\n";
        let dict = parse_chromsizes_text(text).unwrap();
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.contigs[0].name, "chr1");
    }

    #[test]
    fn test_parse_chromsizes_space_separated() {
        let dict = parse_chromsizes_text("6 170805979\n").unwrap();
        assert_eq!(dict.contig_length("6"), Some(170_805_979));
    }

    #[test]
    fn test_parse_chromsizes_errors() {
        assert!(matches!(
            parse_chromsizes_text("chr1\t248956422\nchr2\n"),
            Err(LoadError::InvalidFormat(msg)) if msg.contains("Line 2")
        ));
        assert!(matches!(
            parse_chromsizes_text("chr1\t2.5M\n"),
            Err(LoadError::InvalidFormat(_))
        ));
        assert!(parse_chromsizes_text("# empty\n").is_err());
    }

    #[test]
    fn test_parse_chromsizes_gzipped_file() {
        let mut file = tempfile::NamedTempFile::with_suffix(".chrom.sizes.gz").unwrap();
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(SIZES.as_bytes()).unwrap();
        file.write_all(&encoder.finish().unwrap()).unwrap();

        let dict = parse_chromsizes_file(file.path()).unwrap();
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.contig_length("chrM"), Some(16569));
    }

    #[test]
    fn test_parse_chromsizes_plain_file() {
        let mut file = tempfile::NamedTempFile::with_suffix(".chrom.sizes").unwrap();
        file.write_all(SIZES.as_bytes()).unwrap();

        let dict = parse_chromsizes_file(file.path()).unwrap();
        assert_eq!(dict.contig_length("chr1"), Some(248_956_422));
    }
}
