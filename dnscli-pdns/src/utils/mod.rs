//! Utility modules.

/// Truncation helpers for request/response bodies written to the debug log.
pub mod log_sanitizer;
