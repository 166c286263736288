//! Invocation settings
//!
//! Each setting is resolved from, in order of precedence: the command line
//! flag (or its `DNSCLI_*` environment variable), the YAML config file, and
//! the built-in default.

use std::path::{Path, PathBuf};
use std::time::Duration;

use dnscli_pdns::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, TlsConfig};
use serde::Deserialize;

use crate::cli::GlobalArgs;
use crate::error::CliError;
use crate::output::OutputType;

/// Name of the config file looked up in the home directory.
const DEFAULT_CONFIG_FILE: &str = ".dnscli.yaml";

/// Contents of the YAML config file. Keys mirror the long flag names.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    #[serde(rename = "baseURL")]
    base_url: Option<String>,
    tls: Option<bool>,
    cacert: Option<PathBuf>,
    cert: Option<PathBuf>,
    key: Option<PathBuf>,
    #[serde(rename = "api-key")]
    api_key: Option<String>,
    timeout: Option<u64>,
    #[serde(rename = "output-type")]
    output_type: Option<OutputType>,
    debug: Option<bool>,
}

impl FileConfig {
    fn read(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads the explicit file, or the default one when it exists.
    fn locate(explicit: Option<&Path>) -> Result<Self, CliError> {
        if let Some(path) = explicit {
            return Self::read(path);
        }
        match dirs::home_dir().map(|home| home.join(DEFAULT_CONFIG_FILE)) {
            Some(path) if path.is_file() => Self::read(&path),
            _ => Ok(Self::default()),
        }
    }
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub tls: bool,
    pub ca_cert: Option<PathBuf>,
    pub cert: Option<PathBuf>,
    pub key: Option<PathBuf>,
    pub api_key: Option<String>,
    pub timeout: Duration,
    pub output_type: OutputType,
    pub debug: bool,
}

impl Config {
    pub fn load(args: &GlobalArgs) -> Result<Self, CliError> {
        let file = FileConfig::locate(args.config.as_deref())?;
        Self::resolve(args.clone(), file)
    }

    fn resolve(args: GlobalArgs, file: FileConfig) -> Result<Self, CliError> {
        let config = Self {
            base_url: args
                .base_url
                .or(file.base_url)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            tls: args.tls.or(file.tls).unwrap_or(false),
            ca_cert: args.cacert.or(file.cacert),
            cert: args.cert.or(file.cert),
            key: args.key.or(file.key),
            api_key: args.api_key.or(file.api_key).filter(|k| !k.is_empty()),
            timeout: Duration::from_secs(
                args.timeout.or(file.timeout).unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
            output_type: args.output_type.or(file.output_type).unwrap_or_default(),
            debug: args.debug.or(file.debug).unwrap_or(false),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), CliError> {
        if self.timeout.is_zero() {
            return Err(CliError::ZeroTimeout);
        }
        if self.tls {
            if self.cert.is_none() {
                return Err(CliError::MissingTlsFile("cert"));
            }
            if self.key.is_none() {
                return Err(CliError::MissingTlsFile("key"));
            }
        }
        Ok(())
    }

    /// Settings for the API client. TLS material is only passed on when TLS is enabled.
    pub fn client_config(&self) -> ClientConfig {
        let tls = match (self.tls, &self.cert, &self.key) {
            (true, Some(cert), Some(key)) => Some(TlsConfig {
                ca_cert: self.ca_cert.clone(),
                cert: cert.clone(),
                key: key.clone(),
            }),
            _ => None,
        };
        ClientConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            tls,
            timeout: self.timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn yaml(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn args_with_file(file: &NamedTempFile) -> GlobalArgs {
        GlobalArgs {
            config: Some(file.path().to_path_buf()),
            ..GlobalArgs::default()
        }
    }

    #[test]
    fn defaults() {
        let config = Config::resolve(GlobalArgs::default(), FileConfig::default()).unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8081");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.output_type, OutputType::Text);
        assert!(!config.tls);
        assert!(!config.debug);
        assert!(config.client_config().tls.is_none());
    }

    #[test]
    fn file_values_apply() {
        let file = yaml(
            "baseURL: https://pdns.example.net:8443\n\
             api-key: s3cret\n\
             timeout: 30\n\
             output-type: json\n\
             debug: true\n",
        );
        let config = Config::load(&args_with_file(&file)).unwrap();

        assert_eq!(config.base_url, "https://pdns.example.net:8443");
        assert_eq!(config.api_key.as_deref(), Some("s3cret"));
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.output_type, OutputType::Json);
        assert!(config.debug);
    }

    #[test]
    fn flags_override_file() {
        let file = yaml("baseURL: https://from-file:8443\noutput-type: json\ntimeout: 30\n");
        let args = GlobalArgs {
            base_url: Some("http://from-flag:8081".to_string()),
            output_type: Some(OutputType::Text),
            ..args_with_file(&file)
        };
        let config = Config::load(&args).unwrap();

        assert_eq!(config.base_url, "http://from-flag:8081");
        assert_eq!(config.output_type, OutputType::Text);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn empty_file_means_defaults() {
        let file = yaml("\n");
        let config = Config::load(&args_with_file(&file)).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let args = GlobalArgs {
            config: Some(PathBuf::from("/nonexistent/dnscli.yaml")),
            ..GlobalArgs::default()
        };
        let err = Config::load(&args);
        assert!(matches!(err, Err(CliError::ConfigRead { .. })), "unexpected result: {err:?}");
    }

    #[test]
    fn unknown_key_is_a_parse_error() {
        let file = yaml("base_url: http://typo\n");
        let err = Config::load(&args_with_file(&file));
        assert!(matches!(err, Err(CliError::ConfigParse { .. })), "unexpected result: {err:?}");
    }

    #[test]
    fn zero_timeout_in_file_is_rejected() {
        let file = yaml("timeout: 0\n");
        let err = Config::load(&args_with_file(&file));
        assert!(matches!(err, Err(CliError::ZeroTimeout)), "unexpected result: {err:?}");
    }

    #[test]
    fn tls_requires_cert_and_key() {
        let args = GlobalArgs {
            tls: Some(true),
            key: Some(PathBuf::from("client.key")),
            ..GlobalArgs::default()
        };
        let err = Config::resolve(args, FileConfig::default());
        assert!(
            matches!(err, Err(CliError::MissingTlsFile("cert"))),
            "unexpected result: {err:?}"
        );

        let args = GlobalArgs {
            tls: Some(true),
            cert: Some(PathBuf::from("client.crt")),
            ..GlobalArgs::default()
        };
        let err = Config::resolve(args, FileConfig::default());
        assert!(
            matches!(err, Err(CliError::MissingTlsFile("key"))),
            "unexpected result: {err:?}"
        );
    }

    #[test]
    fn tls_settings_reach_client_config() {
        let file = yaml("tls: true\ncert: /etc/dnscli/client.crt\nkey: /etc/dnscli/client.key\ncacert: /etc/dnscli/ca.crt\n");
        let config = Config::load(&args_with_file(&file)).unwrap();
        let tls = config.client_config().tls.unwrap();

        assert_eq!(tls.cert, PathBuf::from("/etc/dnscli/client.crt"));
        assert_eq!(tls.key, PathBuf::from("/etc/dnscli/client.key"));
        assert_eq!(tls.ca_cert, Some(PathBuf::from("/etc/dnscli/ca.crt")));
    }

    #[test]
    fn cert_without_tls_flag_is_ignored() {
        let args = GlobalArgs {
            cert: Some(PathBuf::from("client.crt")),
            key: Some(PathBuf::from("client.key")),
            ..GlobalArgs::default()
        };
        let config = Config::resolve(args, FileConfig::default()).unwrap();
        assert!(config.client_config().tls.is_none());
    }
}
