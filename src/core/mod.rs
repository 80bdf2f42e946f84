//! Core data types for genomic regions.
//!
//! - [`ParsedRegion`](region::ParsedRegion): a `(name, start, end)` triple with an optional end
//! - [`ContigLengths`](region::ContigLengths): name → length lookup used to close open-ended regions
//! - [`Contig`](contig::Contig), [`ContigDictionary`](contig::ContigDictionary): contig lengths
//!   loaded from a reference index
//!
//! ## Contig Naming
//!
//! Region names are taken verbatim. All of these are valid:
//!
//! | Style   | Example              |
//! |---------|----------------------|
//! | UCSC    | `chr21`              |
//! | Ensembl | `6`                  |
//! | FASTA   | `gb\|accession\|locus` |
//! | Scaffold| `GL000207.1`         |

pub mod contig;
pub mod region;
