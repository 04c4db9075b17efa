//! Configuration for the catalog data source.
//!
//! The dataset location is either an HTTP base URL (the per-country files
//! are resolved relative to it) or a local directory holding the same files.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

/// Default directory searched for datasets when nothing is configured.
pub const DEFAULT_DATA_DIR: &str = "University_data";

/// Where the per-country dataset files live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    /// Base URL; always ends with `/` so dataset names join beneath it.
    Http(Url),
    Directory(PathBuf),
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(url) => write!(f, "{url}"),
            Self::Directory(dir) => write!(f, "{}", dir.display()),
        }
    }
}

/// Catalog service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub source: SourceLocation,
    /// HTTP request timeout in seconds. `None` leaves the HTTP client's own
    /// behavior in charge. Unused for directory sources.
    pub timeout_secs: Option<u64>,
}

impl CatalogConfig {
    /// Configuration reading datasets from `dir`.
    pub fn directory(dir: impl Into<PathBuf>) -> Self {
        Self {
            source: SourceLocation::Directory(dir.into()),
            timeout_secs: None,
        }
    }

    /// Configuration fetching datasets beneath `base_url`.
    pub fn http(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            source: SourceLocation::Http(base_url_from("data_url", base_url)?),
            timeout_secs: None,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `UNICAT_DATA_URL` — HTTP base URL; takes precedence when set
    /// - `UNICAT_DATA_DIR` (default: `University_data`)
    /// - `UNICAT_TIMEOUT_SECS` (default: none; `0` or an unparsable value
    ///   also means none)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let source = match lookup("UNICAT_DATA_URL").filter(|v| !v.is_empty()) {
            Some(raw) => SourceLocation::Http(base_url_from("UNICAT_DATA_URL", &raw)?),
            None => SourceLocation::Directory(
                lookup("UNICAT_DATA_DIR")
                    .filter(|v| !v.is_empty())
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            ),
        };

        Ok(Self {
            source,
            timeout_secs: positive(lookup("UNICAT_TIMEOUT_SECS").and_then(|s| s.parse().ok())),
        })
    }

    /// Load configuration from a YAML file.
    ///
    /// ```yaml
    /// data_url: https://example.org/University_data/
    /// timeout_secs: 10
    /// ```
    ///
    /// At most one of `data_url` and `data_dir` may be given; with neither,
    /// the default directory is used. A `timeout_secs` of 0 means no timeout.
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content).map_err(|e| match e {
            ConfigError::ParseFile { source, .. } => ConfigError::ParseFile {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Parse configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile =
            serde_yaml::from_str(content).map_err(|source| ConfigError::ParseFile {
                path: PathBuf::from("<inline>"),
                source,
            })?;

        let source = match (file.data_url, file.data_dir) {
            (Some(_), Some(_)) => return Err(ConfigError::AmbiguousSource),
            (Some(url), None) => SourceLocation::Http(base_url_from("data_url", &url)?),
            (None, Some(dir)) => SourceLocation::Directory(dir),
            (None, None) => SourceLocation::Directory(PathBuf::from(DEFAULT_DATA_DIR)),
        };

        Ok(Self {
            source,
            timeout_secs: positive(file.timeout_secs),
        })
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::directory(DEFAULT_DATA_DIR)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    data_url: Option<String>,
    #[serde(default)]
    data_dir: Option<PathBuf>,
    #[serde(default)]
    timeout_secs: Option<u64>,
}

fn positive(secs: Option<u64>) -> Option<u64> {
    secs.filter(|&s| s > 0)
}

/// Parse a base URL, appending a trailing `/` to its path if missing so that
/// `Url::join` keeps the last segment.
fn base_url_from(name: &str, raw: &str) -> Result<Url, ConfigError> {
    let mut url =
        Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(name.to_string(), e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidUrl(
            name.to_string(),
            "URL cannot be used as a base".to_string(),
        ));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("failed to read config file {path:?}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path:?}: {source}")]
    ParseFile {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("config sets both data_url and data_dir; choose one")]
    AmbiguousSource,
}
