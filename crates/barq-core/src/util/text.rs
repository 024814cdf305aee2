//! Text helpers.
//!
//! Spreadsheet headers and cells are edited by hand, so both the import
//! pipeline and the filter predicates need the same notion of "blank"
//! and the same case folding.

/// Returns `true` if the string is empty or only whitespace.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Normalize a spreadsheet column header.
///
/// Performs the following transformations:
/// 1. Trims leading/trailing whitespace
/// 2. Strips a leading UTF-8 byte-order mark
/// 3. Collapses inner runs of whitespace into a single space
///
/// Case is preserved: header synonyms are matched exactly.
///
/// # Examples
///
/// ```
/// use barq_core::util::text::normalize_header;
///
/// assert_eq!(normalize_header("  Nom de   la barque "), "Nom de la barque");
/// assert_eq!(normalize_header("\u{feff}name"), "name");
/// ```
pub fn normalize_header(header: &str) -> String {
    header
        .trim_start_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Case-insensitive substring test.
///
/// `needle_lower` must already be lowercased; the filter engine lowers
/// the search term once per query rather than once per record.
///
/// # Examples
///
/// ```
/// use barq_core::util::text::contains_folded;
///
/// assert!(contains_folded("Lune", "lun"));
/// assert!(contains_folded("ETOILE", "toi"));
/// assert!(!contains_folded("Lune", "sol"));
/// ```
pub fn contains_folded(haystack: &str, needle_lower: &str) -> bool {
    if needle_lower.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(needle_lower)
}
