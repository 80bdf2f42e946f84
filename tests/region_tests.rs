//! Region Parsing Test Suite
//!
//! Covers the naming styles seen in real reference genomes (UCSC, Ensembl,
//! FASTA-header accessions, scaffolds), humanized coordinates, and the
//! malformed inputs that must be rejected.

use region_parser::{
    is_complete_region_string, parse_region, parse_region_with, Contig, ContigDictionary,
    ParsedRegion, RegionErrorKind,
};

fn triple(text: &str) -> (String, u64, Option<u64>) {
    parse_region(text)
        .unwrap_or_else(|e| panic!("'{text}' should parse: {e}"))
        .into_parts()
}

fn expect(name: &str, start: u64, end: Option<u64>) -> (String, u64, Option<u64>) {
    (name.to_string(), start, end)
}

#[test]
fn test_ucsc_style_names() {
    assert_eq!(triple("chr21"), expect("chr21", 0, None));
    assert_eq!(triple("chr21:1000-2000"), expect("chr21", 1000, Some(2000)));
    assert_eq!(triple("chr21:1,000-2,000"), expect("chr21", 1000, Some(2000)));
}

#[test]
fn test_ensembl_style_names() {
    assert_eq!(triple("6"), expect("6", 0, None));
    assert_eq!(triple("6:1000-2000"), expect("6", 1000, Some(2000)));
    assert_eq!(triple("6:1,000-2,000"), expect("6", 1000, Some(2000)));
}

#[test]
fn test_fasta_style_names() {
    assert_eq!(
        triple("gb|accession|locus"),
        expect("gb|accession|locus", 0, None)
    );
    assert_eq!(
        triple("gb|accession|locus:1000-2000"),
        expect("gb|accession|locus", 1000, Some(2000))
    );
    assert_eq!(
        triple("gb|accession|locus:1,000-2,000"),
        expect("gb|accession|locus", 1000, Some(2000))
    );
}

#[test]
fn test_punctuation_in_names() {
    assert_eq!(
        triple("name-with-hyphens-"),
        expect("name-with-hyphens-", 0, None)
    );
    assert_eq!(triple("GL000207.1"), expect("GL000207.1", 0, None));
    assert_eq!(
        triple("GL000207.1:1000-2000"),
        expect("GL000207.1", 1000, Some(2000))
    );
    assert_eq!(
        triple("HLA-A*01:01-100"),
        expect("HLA-A*01", 1, Some(100))
    );
}

#[test]
fn test_trailing_dash() {
    assert_eq!(triple("chr21:1000-"), expect("chr21", 1000, None));
}

#[test]
fn test_humanized_units() {
    assert_eq!(triple("6:1kb-2kb"), expect("6", 1000, Some(2000)));
    assert_eq!(triple("6:1k-2000"), expect("6", 1000, Some(2000)));
    assert_eq!(triple("6:1kb-2M"), expect("6", 1000, Some(2_000_000)));
    assert_eq!(triple("6:1Gb-"), expect("6", 1_000_000_000, None));
    assert_eq!(triple("6:1KB-2mb"), expect("6", 1000, Some(2_000_000)));
    assert_eq!(triple("6:1,000kb-1.5Mb"), expect("6", 1_000_000, Some(1_500_000)));
}

#[test]
fn test_reversed_range_rejected() {
    let err = parse_region("chr1:2,000-1,000").unwrap_err();
    assert_eq!(
        err.reason,
        RegionErrorKind::StartExceedsEnd {
            start: 2000,
            end: 1000
        }
    );
    assert_eq!(err.input, "chr1:2,000-1,000");
}

#[test]
fn test_multiple_colons_rejected() {
    let err = parse_region("chr1::1000-2000").unwrap_err();
    assert_eq!(err.reason, RegionErrorKind::AmbiguousSeparator(2));
}

#[test]
fn test_malformed_inputs_rejected() {
    let malformed = [
        "",
        ":1000-2000",
        "chr1:",
        "chr1:1000",
        "chr1:-2000",
        "chr1:abc-2000",
        "chr1:1000-xyz",
        "chr1:1,00-2000",
        "chr1:1.5-2000",
        "chr1:1bp-2000",
        "chr1:1000-2000-3000",
        "chr1: 1000-2000",
    ];

    for text in malformed {
        assert!(parse_region(text).is_err(), "'{text}' should be rejected");
    }
}

#[test]
fn test_round_trip_through_display() {
    let regions = [
        ("chr21", 1000, Some(2000)),
        ("6", 0, Some(0)),
        ("gb|accession|locus", 5, Some(170_805_979)),
        ("GL000207.1", 0, Some(1)),
        ("name-with-hyphens-", 12, Some(1_000_000_000)),
        ("chrX", 42, None),
        ("chrM", 0, None),
    ];

    for (name, start, end) in regions {
        let region = ParsedRegion::new(name, start, end).unwrap();
        let formatted = region.to_string();
        assert_eq!(
            parse_region(&formatted).unwrap(),
            region,
            "round trip through '{formatted}'"
        );
    }

    for (name, start, end) in [("chr1:5-", 0, None), ("HLA:A", 1, Some(2))] {
        let err = ParsedRegion::new(name, start, end).unwrap_err();
        assert_eq!(err.reason, RegionErrorKind::SeparatorInName(name.to_string()));
    }
}

#[test]
fn test_round_trip_explicit_format() {
    for (start, end) in [(0u64, 0u64), (1, 2), (999, 1000), (1000, 2_000_000)] {
        let text = format!("chr1:{start}-{end}");
        assert_eq!(triple(&text), expect("chr1", start, Some(end)));
    }
}

#[test]
fn test_complete_region_strings() {
    assert!(is_complete_region_string("chr21:1,000-2,000"));
    assert!(!is_complete_region_string("chr21"));
    assert!(!is_complete_region_string("chr21:1000-"));
    assert!(!is_complete_region_string("chr1::1000-2000"));
}

#[test]
fn test_resolve_with_dictionary() {
    let dict = ContigDictionary::new(vec![
        Contig::new("chr21", 46_709_983),
        Contig::new("gb|accession|locus", 5000),
    ]);

    let region = parse_region_with("chr21:40M-", Some(&dict), true).unwrap();
    assert_eq!(region.end, Some(46_709_983));

    let region = parse_region_with("gb|accession|locus", Some(&dict), true).unwrap();
    assert_eq!(region.into_parts(), expect("gb|accession|locus", 0, Some(5000)));

    let err = parse_region_with("chr22", Some(&dict), true).unwrap_err();
    assert_eq!(err.reason, RegionErrorKind::UnknownContig("chr22".to_string()));

    assert!(parse_region_with("gb|accession|locus:1-6kb", Some(&dict), true).is_err());
    assert!(parse_region_with("gb|accession|locus:1-6kb", Some(&dict), false).is_ok());
}

#[test]
fn test_concurrent_parsing() {
    let handles: Vec<_> = (0..8u64)
        .map(|i| {
            std::thread::spawn(move || {
                let text = format!("chr{i}:{i}kb-{}kb", i + 1);
                parse_region(&text).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let region = handle.join().unwrap();
        let i = i as u64;
        assert_eq!(region.start, i * 1000);
        assert_eq!(region.end, Some((i + 1) * 1000));
    }
}
