//! Domain name helpers
//!
//! PowerDNS stores and transmits names in canonical form (with a trailing
//! dot). Operators type them without one. Conversion happens at the API
//! boundary: canonical on the way out, de-canonical for display.

use std::sync::LazyLock;

use regex::Regex;

static DOMAIN_NAME: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"^(?i)(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z0-9][a-z0-9-]{0,61}[a-z0-9]\.?$",
    )
    .ok()
});

/// Appends a trailing dot unless the name already ends with one.
///
/// ```
/// use dnscli_pdns::canonicalize;
///
/// assert_eq!(canonicalize("example.com"), "example.com.");
/// assert_eq!(canonicalize("example.com."), "example.com.");
/// ```
pub fn canonicalize(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{name}.")
    }
}

/// Strips a single trailing dot, if present.
///
/// ```
/// use dnscli_pdns::de_canonicalize;
///
/// assert_eq!(de_canonicalize("example.com."), "example.com");
/// assert_eq!(de_canonicalize("example.com"), "example.com");
/// ```
pub fn de_canonicalize(name: &str) -> String {
    name.strip_suffix('.').unwrap_or(name).to_string()
}

/// Checks that `name` is a syntactically valid multi-label host name.
///
/// Accepts both the canonical and the display form.
pub fn is_valid_domain(name: &str) -> bool {
    DOMAIN_NAME.as_ref().is_some_and(|re| re.is_match(name))
}
