//! Centralized validation limits and helper functions.

/// Maximum number of contigs allowed in a single dictionary (DOS protection)
pub const MAX_CONTIGS: usize = 100_000;

/// Maximum length in bytes of a single region string
pub const MAX_REGION_LENGTH: usize = 4096;

/// Check if adding another contig would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new contig.
/// Returns an error message if adding would exceed the limit, None if safe to add.
///
/// # Example
/// ```
/// use region_parser::utils::validation::{check_contig_limit, MAX_CONTIGS};
///
/// assert!(check_contig_limit(0).is_none());
/// assert!(check_contig_limit(MAX_CONTIGS).is_some());
/// ```
#[must_use]
pub fn check_contig_limit(count: usize) -> Option<String> {
    if count >= MAX_CONTIGS {
        Some(format!(
            "Too many contigs: adding another would exceed maximum of {MAX_CONTIGS}"
        ))
    } else {
        None
    }
}

/// True if a region string is short enough to be parsed
#[must_use]
pub fn is_within_region_length(text: &str) -> bool {
    text.len() <= MAX_REGION_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contig_limit_boundary() {
        assert!(check_contig_limit(MAX_CONTIGS - 1).is_none());
        assert!(check_contig_limit(MAX_CONTIGS).is_some());
    }

    #[test]
    fn test_region_length_boundary() {
        assert!(is_within_region_length(&"a".repeat(MAX_REGION_LENGTH)));
        assert!(!is_within_region_length(&"a".repeat(MAX_REGION_LENGTH + 1)));
    }
}
