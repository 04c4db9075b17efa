//! Data source error types.
//!
//! Every variant carries the location of the dataset resource that failed so
//! a load-failure diagnostic is actionable without further context.

/// Errors from retrieving or parsing a country dataset.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// HTTP transport error (connection, timeout, body read).
    #[error("HTTP error fetching {location}: {source}")]
    Http {
        location: String,
        source: reqwest::Error,
    },
    /// The dataset URL could not be formed from the base URL.
    #[error("invalid dataset URL {location}: {source}")]
    InvalidUrl {
        location: String,
        source: url::ParseError,
    },
    /// The server answered with a non-2xx status.
    #[error("{location} returned HTTP {status}")]
    Status { location: String, status: u16 },
    /// Local file could not be read.
    #[error("failed to read {location}: {source}")]
    Io {
        location: String,
        source: std::io::Error,
    },
    /// The dataset is not a JSON array of university entries.
    #[error("failed to parse dataset {location}: {source}")]
    Parse {
        location: String,
        source: serde_json::Error,
    },
    /// The source holds no dataset for the requested country.
    #[error("no dataset at {location}")]
    Missing { location: String },
}

impl SourceError {
    /// Location of the resource that failed.
    pub fn location(&self) -> &str {
        match self {
            Self::Http { location, .. }
            | Self::InvalidUrl { location, .. }
            | Self::Status { location, .. }
            | Self::Io { location, .. }
            | Self::Parse { location, .. }
            | Self::Missing { location } => location,
        }
    }
}
