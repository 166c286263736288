use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the command line layer before any API call.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// TLS was requested without the client certificate or key.
    #[error("TLS is enabled but no client {0} is configured (use --{0})")]
    MissingTlsFile(&'static str),

    #[error("timeout must be at least 1 second")]
    ZeroTimeout,

    #[error("'{0}' is not a valid domain name")]
    InvalidDomain(String),
}
