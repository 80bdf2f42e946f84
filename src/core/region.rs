use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::parsing::region::{
    parse_region, InvalidRegionError, RegionErrorKind, REGION_SEPARATOR,
};

/// A parsed genomic region: contig name, 0-based start and optional end.
///
/// An absent `end` means the region runs to the end of the contig, either
/// because the input named a whole contig (`chr21`) or because it was
/// open-ended (`chr21:1000-`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRegion")]
pub struct ParsedRegion {
    /// Contig/chromosome name, never empty
    pub name: String,

    /// Start coordinate
    pub start: u64,

    /// End coordinate, `None` when open-ended
    pub end: Option<u64>,
}

impl ParsedRegion {
    /// Build a region from its parts, enforcing the same invariants as
    /// [`parse_region`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidRegionError` if `name` is empty, contains `:`, or
    /// `end < start`.
    pub fn new(
        name: impl Into<String>,
        start: u64,
        end: Option<u64>,
    ) -> Result<Self, InvalidRegionError> {
        let name = name.into();
        let region = Self { name, start, end };

        if region.name.is_empty() {
            return Err(InvalidRegionError::new(
                region.to_string(),
                RegionErrorKind::EmptyName,
            ));
        }

        if region.name.contains(REGION_SEPARATOR) {
            return Err(InvalidRegionError::new(
                region.to_string(),
                RegionErrorKind::SeparatorInName(region.name),
            ));
        }

        if let Some(end) = end {
            if end < start {
                return Err(InvalidRegionError::new(
                    region.to_string(),
                    RegionErrorKind::StartExceedsEnd { start, end },
                ));
            }
        }

        Ok(region)
    }

    /// A region covering an entire contig. `name` must not contain `:`.
    pub(crate) fn whole_contig(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: 0,
            end: None,
        }
    }

    /// Length of the region, if the end is known
    #[must_use]
    pub fn len(&self) -> Option<u64> {
        self.end.map(|end| end.saturating_sub(self.start))
    }

    /// True when the region has a known end equal to its start
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    #[must_use]
    pub fn is_whole_contig(&self) -> bool {
        self.start == 0 && self.end.is_none()
    }

    /// The region as a `(name, start, end)` tuple
    #[must_use]
    pub fn into_parts(self) -> (String, u64, Option<u64>) {
        (self.name, self.start, self.end)
    }
}

/// Unchecked field layout; deserialization goes through [`ParsedRegion::new`].
#[derive(Deserialize)]
struct RawRegion {
    name: String,
    start: u64,
    #[serde(default)]
    end: Option<u64>,
}

impl TryFrom<RawRegion> for ParsedRegion {
    type Error = InvalidRegionError;

    fn try_from(raw: RawRegion) -> Result<Self, Self::Error> {
        Self::new(raw.name, raw.start, raw.end)
    }
}

/// UCSC-style rendering that parses back to the same region.
impl fmt::Display for ParsedRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            None if self.start == 0 => write!(f, "{}", self.name),
            None => write!(f, "{}:{}-", self.name, self.start),
            Some(end) => write!(f, "{}:{}-{}", self.name, self.start, end),
        }
    }
}

impl FromStr for ParsedRegion {
    type Err = InvalidRegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_region(s)
    }
}

/// Lookup of contig lengths by name, used to resolve open-ended regions.
pub trait ContigLengths {
    /// Length of the named contig, or `None` if the contig is unknown
    fn contig_length(&self, name: &str) -> Option<u64>;
}

impl<S: std::hash::BuildHasher> ContigLengths for HashMap<String, u64, S> {
    fn contig_length(&self, name: &str) -> Option<u64> {
        self.get(name).copied()
    }
}

impl ContigLengths for BTreeMap<String, u64> {
    fn contig_length(&self, name: &str) -> Option<u64> {
        self.get(name).copied()
    }
}

impl ContigLengths for [(&str, u64)] {
    fn contig_length(&self, name: &str) -> Option<u64> {
        self.iter()
            .find(|(contig, _)| *contig == name)
            .map(|(_, length)| *length)
    }
}

impl<T: ContigLengths + ?Sized> ContigLengths for &T {
    fn contig_length(&self, name: &str) -> Option<u64> {
        (**self).contig_length(name)
    }
}
