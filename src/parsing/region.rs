//! Parser for region strings of the form `name[:start-[end]]`.

use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::core::region::{ContigLengths, ParsedRegion};
use crate::parsing::humanize::{parse_humanized, NumberError};
use crate::utils::validation::{is_within_region_length, MAX_REGION_LENGTH};

/// Separates the contig name from the coordinate range
pub const REGION_SEPARATOR: char = ':';

/// Separates the start coordinate from the end coordinate
pub const RANGE_SEPARATOR: char = '-';

/// A region string that could not be parsed or resolved
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid region '{input}': {reason}")]
pub struct InvalidRegionError {
    /// The offending input
    pub input: String,

    /// Why it was rejected
    pub reason: RegionErrorKind,
}

impl InvalidRegionError {
    pub fn new(input: impl Into<String>, reason: RegionErrorKind) -> Self {
        Self {
            input: input.into(),
            reason,
        }
    }
}

/// Which end of a range a coordinate belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Start,
    End,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::End => write!(f, "end"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegionErrorKind {
    #[error("empty region")]
    EmptyInput,

    #[error("region exceeds maximum length of {MAX_REGION_LENGTH} characters")]
    TooLong,

    #[error("ambiguous region separator: found {0} ':' characters, at most one is allowed")]
    AmbiguousSeparator(usize),

    #[error("empty contig name")]
    EmptyName,

    #[error("contig name '{0}' contains the ':' region separator")]
    SeparatorInName(String),

    #[error("missing '-' between start and end")]
    MissingRangeSeparator,

    #[error("missing start coordinate")]
    MissingStart,

    #[error("invalid {bound} coordinate '{token}': {source}")]
    InvalidCoordinate {
        bound: Bound,
        token: String,
        source: NumberError,
    },

    #[error("start {start} exceeds end {end}")]
    StartExceedsEnd { start: u64, end: u64 },

    #[error("unknown sequence name '{0}'")]
    UnknownContig(String),

    #[error("{bound} {position} exceeds length {length} of contig '{name}'")]
    OutOfBounds {
        bound: Bound,
        position: u64,
        length: u64,
        name: String,
    },
}

/// Parse a region string into a `(name, start, end)` triple.
///
/// A bare name is the whole contig (`start = 0`, no end). Otherwise the text
/// after the single `:` is `start-end` or `start-` for an open-ended region.
/// Coordinates accept comma grouping and `k`/`M`/`G` unit suffixes.
///
/// # Examples
///
/// ```
/// use region_parser::parse_region;
///
/// let region = parse_region("chr21:1,000-2,000").unwrap();
/// assert_eq!(region.name, "chr21");
/// assert_eq!(region.start, 1000);
/// assert_eq!(region.end, Some(2000));
///
/// let region = parse_region("6:1kb-").unwrap();
/// assert_eq!((region.start, region.end), (1000, None));
///
/// assert!(parse_region("chr1:2,000-1,000").is_err());
/// ```
///
/// # Errors
///
/// Returns `InvalidRegionError` if the input is empty or too long, contains
/// more than one `:`, has an empty name, a missing or malformed start, a
/// malformed end, or an end before its start.
pub fn parse_region(text: &str) -> Result<ParsedRegion, InvalidRegionError> {
    let fail = |reason| InvalidRegionError::new(text, reason);

    if text.is_empty() {
        return Err(fail(RegionErrorKind::EmptyInput));
    }

    if !is_within_region_length(text) {
        return Err(fail(RegionErrorKind::TooLong));
    }

    let separators = text.matches(REGION_SEPARATOR).count();
    if separators > 1 {
        return Err(fail(RegionErrorKind::AmbiguousSeparator(separators)));
    }

    let Some((name, range)) = text.rsplit_once(REGION_SEPARATOR) else {
        return Ok(ParsedRegion::whole_contig(text));
    };

    if name.is_empty() {
        return Err(fail(RegionErrorKind::EmptyName));
    }

    let (start, end) = parse_range(range).map_err(fail)?;

    if let Some(end) = end {
        if end < start {
            return Err(fail(RegionErrorKind::StartExceedsEnd { start, end }));
        }
    }

    Ok(ParsedRegion {
        name: name.to_string(),
        start,
        end,
    })
}

/// Parse a region string and, when contig lengths are given, close an absent
/// end at the contig length.
///
/// With `check_bounds` set, coordinates past the end of the contig are
/// rejected. Without a lookup this is identical to [`parse_region`].
///
/// # Errors
///
/// Returns `InvalidRegionError` for anything [`parse_region`] rejects, for a
/// name missing from `lengths`, and for out-of-bounds coordinates.
pub fn parse_region_with(
    text: &str,
    lengths: Option<&dyn ContigLengths>,
    check_bounds: bool,
) -> Result<ParsedRegion, InvalidRegionError> {
    let region = parse_region(text)?;

    match lengths {
        Some(lengths) => region
            .resolve(lengths, check_bounds)
            .map_err(|e| InvalidRegionError::new(text, e.reason)),
        None => Ok(region),
    }
}

/// True if `text` is a valid region with an explicit start and end
#[must_use]
pub fn is_complete_region_string(text: &str) -> bool {
    matches!(parse_region(text), Ok(ParsedRegion { end: Some(_), .. }))
}

fn parse_range(range: &str) -> Result<(u64, Option<u64>), RegionErrorKind> {
    let (start_str, end_str) = range
        .split_once(RANGE_SEPARATOR)
        .ok_or(RegionErrorKind::MissingRangeSeparator)?;

    if start_str.is_empty() {
        return Err(RegionErrorKind::MissingStart);
    }

    let start = parse_coordinate(start_str, Bound::Start)?;
    let end = if end_str.is_empty() {
        None
    } else {
        Some(parse_coordinate(end_str, Bound::End)?)
    };

    Ok((start, end))
}

fn parse_coordinate(token: &str, bound: Bound) -> Result<u64, RegionErrorKind> {
    parse_humanized(token).map_err(|source| RegionErrorKind::InvalidCoordinate {
        bound,
        token: token.to_string(),
        source,
    })
}

impl ParsedRegion {
    /// Close an open-ended region at its contig length.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRegionError` if the contig is unknown, if `check_bounds`
    /// is set and a coordinate lies past the contig end, or if an open-ended
    /// start lies past the contig end.
    pub fn resolve(
        self,
        lengths: &dyn ContigLengths,
        check_bounds: bool,
    ) -> Result<Self, InvalidRegionError> {
        let fail = |reason| InvalidRegionError::new(self.to_string(), reason);

        let length = lengths
            .contig_length(&self.name)
            .ok_or_else(|| fail(RegionErrorKind::UnknownContig(self.name.clone())))?;

        let end = self.end.unwrap_or(length);

        if check_bounds {
            for (bound, position) in [(Bound::Start, self.start), (Bound::End, end)] {
                if position > length {
                    return Err(fail(RegionErrorKind::OutOfBounds {
                        bound,
                        position,
                        length,
                        name: self.name.clone(),
                    }));
                }
            }
        }

        if end < self.start {
            return Err(fail(RegionErrorKind::StartExceedsEnd {
                start: self.start,
                end,
            }));
        }

        debug!(region = %self, length, end, "Resolved region against contig length");

        Ok(Self {
            end: Some(end),
            ..self
        })
    }
}
