//! Log sanitization utilities
//!
//! Zone listings and search results can be very large; bodies written to the
//! debug log are cut down to a bounded prefix.

/// Maximum number of bytes of a body included in log output.
const TRUNCATE_LIMIT: usize = 512;

/// Truncate a string for logging.
///
/// Returns the input unchanged if it fits in `TRUNCATE_LIMIT` bytes, otherwise
/// the longest prefix that ends on a char boundary, followed by the total size.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }

    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= TRUNCATE_LIMIT)
        .last()
        .unwrap_or(0);

    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}
