//! Registration-number format rule.
//!
//! Vessel registration numbers look like `10/2-345`: the literal prefix
//! `10/`, a district digit between 1 and 4, a hyphen, then the serial
//! number (one or more digits).
//!
//! ```
//! use barq_core::registration::is_valid_registration;
//!
//! assert!(is_valid_registration("10/2-345"));
//! assert!(!is_valid_registration("11/2-345"));
//! assert!(!is_valid_registration("10/5-1"));
//! ```

use std::sync::LazyLock;

use regex::Regex;

/// Human-readable description of the accepted format.
pub const REGISTRATION_FORMAT: &str = "10/N-NNN (N between 1 and 4)";

static REGISTRATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^10/[1-4]-[0-9]+$").expect("Invalid registration regex"));

/// Returns `true` if `code` (ignoring surrounding whitespace) is a
/// well-formed registration number.
///
/// The empty string is *not* valid; callers that treat an empty code as
/// "absent" must check for that first.
pub fn is_valid_registration(code: &str) -> bool {
    REGISTRATION_RE.is_match(code.trim())
}
