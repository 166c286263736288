use thiserror::Error;

/// Unified error type for all PowerDNS API operations.
///
/// Transport failures, non-2xx API responses and local validation failures
/// all end up here. None of them are retried: every failure terminates the
/// current operation.
#[derive(Debug, Clone, Error)]
pub enum PdnsError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    #[error("Network error: {detail}")]
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request did not complete within the configured timeout.
    #[error("Request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The API rejected the request credentials (HTTP 401/403).
    #[error("Unauthorized: {raw_message}")]
    Unauthorized {
        /// Error message returned by the API.
        raw_message: String,
    },

    /// The addressed zone or resource does not exist (HTTP 404).
    #[error("'{resource}' not found: {raw_message}")]
    NotFound {
        /// Zone or resource name used in the request.
        resource: String,
        /// Error message returned by the API.
        raw_message: String,
    },

    /// The resource already exists (HTTP 409).
    #[error("'{resource}' already exists: {raw_message}")]
    Conflict {
        /// Zone or resource name used in the request.
        resource: String,
        /// Error message returned by the API.
        raw_message: String,
    },

    /// A request parameter is invalid, either locally or as reported by the API (HTTP 422).
    #[error("Invalid parameter '{param}': {detail}")]
    InvalidParameter {
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// A search object type could not be decoded.
    #[error("unknown search type: {0}")]
    UnknownObjectType(String),

    /// TLS material could not be loaded or the client could not be built.
    #[error("TLS error ({path}): {detail}")]
    Tls {
        /// File (or setting) that caused the failure.
        path: String,
        /// Error details.
        detail: String,
    },

    /// Failed to parse the API response.
    #[error("Parse error: {detail}")]
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    #[error("Serialization error: {detail}")]
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },

    /// Any other non-2xx response.
    #[error("API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message returned by the API, or the raw body.
        message: String,
    },
}

impl PdnsError {
    /// Whether the error is caused by user input or missing resources rather
    /// than by the transport or the server. Used to pick the log level.
    ///
    /// Keep this in sync when adding variants.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized { .. }
                | Self::NotFound { .. }
                | Self::Conflict { .. }
                | Self::InvalidParameter { .. }
                | Self::UnknownObjectType(_)
        )
    }
}

/// Convenience type alias for `Result<T, PdnsError>`.
pub type Result<T> = std::result::Result<T, PdnsError>;
