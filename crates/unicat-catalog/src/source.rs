//! # Dataset Sources
//!
//! A [`CountrySource`] retrieves the raw entries of one country's dataset.
//! Each registry country maps to one resource named by
//! [`CountryCode::data_file`]; the source decides where that name resolves.
//!
//! | Source | Resource location |
//! |--------|-------------------|
//! | [`HttpSource`] | `{base_url}{data_file}` |
//! | [`DirectorySource`] | `{dir}/{data_file}` |
//! | [`MemorySource`] | JSON documents held in memory |
//!
//! Sources do not retry. An HTTP timeout applies only when one is configured.
//! Caching is the service's concern, not the source's.

use std::collections::HashMap;
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use unicat_core::{CountryCode, UniversityEntry};
use url::Url;

use crate::config::{CatalogConfig, SourceLocation};
use crate::error::SourceError;

/// Retrieves the raw dataset for a registry country.
///
/// Implementations must be `Send + Sync` so a service can be shared across
/// tasks behind an `Arc`.
pub trait CountrySource: Send + Sync {
    fn fetch(
        &self,
        country: CountryCode,
    ) -> impl Future<Output = Result<Vec<UniversityEntry>, SourceError>> + Send;
}

/// Parse a dataset document: a JSON array of entry objects.
pub fn parse_entries(location: &str, bytes: &[u8]) -> Result<Vec<UniversityEntry>, SourceError> {
    serde_json::from_slice(bytes).map_err(|source| SourceError::Parse {
        location: location.to_string(),
        source,
    })
}

// ─── HTTP ───────────────────────────────────────────────────────────────

/// Fetches datasets over HTTP beneath a base URL.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpSource {
    /// Create a source, optionally with a per-request timeout. Without one,
    /// the HTTP client's own behavior governs.
    ///
    /// `base_url` should end with `/`; [`CatalogConfig`] guarantees this for
    /// configured URLs.
    pub fn new(base_url: Url, timeout_secs: Option<u64>) -> Result<Self, SourceError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|source| SourceError::Http {
                location: "client_init".into(),
                source,
            })?;
        Ok(Self { client, base_url })
    }

    /// URL of the dataset resource for `country`.
    pub fn resource_url(&self, country: CountryCode) -> Result<Url, SourceError> {
        self.base_url
            .join(country.data_file())
            .map_err(|source| SourceError::InvalidUrl {
                location: format!("{}{}", self.base_url, country.data_file()),
                source,
            })
    }
}

impl CountrySource for HttpSource {
    async fn fetch(&self, country: CountryCode) -> Result<Vec<UniversityEntry>, SourceError> {
        let url = self.resource_url(country)?;
        let location = url.to_string();
        tracing::debug!(%country, %location, "fetching dataset over HTTP");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| SourceError::Http {
                location: location.clone(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                location,
                status: status.as_u16(),
            });
        }

        let body = resp.bytes().await.map_err(|source| SourceError::Http {
            location: location.clone(),
            source,
        })?;

        parse_entries(&location, &body)
    }
}

// ─── Directory ──────────────────────────────────────────────────────────

/// Reads datasets from a local directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn resource_path(&self, country: CountryCode) -> PathBuf {
        self.dir.join(country.data_file())
    }
}

impl CountrySource for DirectorySource {
    async fn fetch(&self, country: CountryCode) -> Result<Vec<UniversityEntry>, SourceError> {
        let path = self.resource_path(country);
        let location = path.display().to_string();
        tracing::debug!(%country, %location, "reading dataset from disk");

        let bytes = tokio::fs::read(&path).await.map_err(|source| SourceError::Io {
            location: location.clone(),
            source,
        })?;

        parse_entries(&location, &bytes)
    }
}

// ─── Memory ─────────────────────────────────────────────────────────────

/// Serves datasets from JSON documents held in memory.
///
/// Useful for bundling datasets into a binary and for tests. Documents are
/// parsed on every fetch, exactly like the other sources.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: HashMap<CountryCode, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the dataset document for `country`.
    pub fn with_dataset(mut self, country: CountryCode, json: impl Into<String>) -> Self {
        self.insert(country, json);
        self
    }

    pub fn insert(&mut self, country: CountryCode, json: impl Into<String>) {
        self.documents.insert(country, json.into());
    }
}

impl CountrySource for MemorySource {
    async fn fetch(&self, country: CountryCode) -> Result<Vec<UniversityEntry>, SourceError> {
        let location = format!("memory:{}", country.data_file());
        match self.documents.get(&country) {
            Some(doc) => parse_entries(&location, doc.as_bytes()),
            None => Err(SourceError::Missing { location }),
        }
    }
}

// ─── Configured ─────────────────────────────────────────────────────────

/// The source selected by a [`CatalogConfig`].
#[derive(Debug, Clone)]
pub enum DataSource {
    Http(HttpSource),
    Directory(DirectorySource),
}

impl DataSource {
    pub fn from_config(config: &CatalogConfig) -> Result<Self, SourceError> {
        match &config.source {
            SourceLocation::Http(url) => Ok(Self::Http(HttpSource::new(
                url.clone(),
                config.timeout_secs,
            )?)),
            SourceLocation::Directory(dir) => Ok(Self::Directory(DirectorySource::new(dir.clone()))),
        }
    }
}

impl CountrySource for DataSource {
    async fn fetch(&self, country: CountryCode) -> Result<Vec<UniversityEntry>, SourceError> {
        match self {
            Self::Http(source) => source.fetch(country).await,
            Self::Directory(source) => source.fetch(country).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_ENTRY: &str = r#"[{"rank": 3, "university_name": "McGill University", "city": "Montreal"}]"#;

    #[tokio::test]
    async fn memory_source_parses_documents() {
        let source = MemorySource::new().with_dataset(CountryCode::Canada, ONE_ENTRY);
        let entries = source.fetch(CountryCode::Canada).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].university_name, "McGill University");
        assert_eq!(entries[0].rank, 3);
    }

    #[tokio::test]
    async fn memory_source_reports_missing_dataset() {
        let source = MemorySource::new();
        let err = source.fetch(CountryCode::Usa).await.unwrap_err();
        assert!(matches!(err, SourceError::Missing { .. }));
        assert_eq!(err.location(), "memory:USA_uni.txt");
    }

    #[tokio::test]
    async fn non_array_document_is_parse_error() {
        let source = MemorySource::new().with_dataset(CountryCode::Uk, r#"{"universities": []}"#);
        let err = source.fetch(CountryCode::Uk).await.unwrap_err();
        assert!(matches!(err, SourceError::Parse { .. }));
    }

    #[tokio::test]
    async fn directory_source_reads_registry_file_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Canada_uni.txt"), ONE_ENTRY).unwrap();

        let source = DirectorySource::new(dir.path());
        let entries = source.fetch(CountryCode::Canada).await.unwrap();
        assert_eq!(entries[0].city, "Montreal");

        let err = source.fetch(CountryCode::Germany).await.unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
        assert!(err.location().ends_with("Germany_uni.txt"));
    }

    #[test]
    fn http_resource_url_joins_data_file() {
        let base = Url::parse("https://example.org/University_data/").unwrap();
        let source = HttpSource::new(base, Some(5)).unwrap();
        assert_eq!(
            source.resource_url(CountryCode::Australia).unwrap().as_str(),
            "https://example.org/University_data/Australia_uni.txt"
        );
    }

    #[test]
    fn http_resource_url_ignores_base_query() {
        let config = CatalogConfig::http("https://example.org/data?v=1").unwrap();
        let SourceLocation::Http(base) = config.source else {
            panic!("expected HTTP location");
        };
        let source = HttpSource::new(base, None).unwrap();
        assert_eq!(
            source.resource_url(CountryCode::Uk).unwrap().as_str(),
            "https://example.org/data/UK_uni.txt"
        );
    }

    #[test]
    fn data_source_follows_config() {
        let source = DataSource::from_config(&CatalogConfig::directory("/srv/data")).unwrap();
        assert!(matches!(source, DataSource::Directory(_)));

        let source =
            DataSource::from_config(&CatalogConfig::http("http://127.0.0.1:9/data").unwrap()).unwrap();
        match source {
            DataSource::Http(http) => assert_eq!(
                http.resource_url(CountryCode::Uk).unwrap().as_str(),
                "http://127.0.0.1:9/data/UK_uni.txt"
            ),
            other => panic!("expected HTTP source, got {other:?}"),
        }
    }
}
