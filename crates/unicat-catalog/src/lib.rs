//! # unicat-catalog — Catalog Data Service
//!
//! Loads per-country university datasets on first access, normalizes them
//! into [`University`] records, keeps them for the lifetime of the service,
//! and answers the catalog's read queries.
//!
//! ## Architecture
//!
//! - [`source`]: where datasets come from (HTTP, directory, memory).
//! - [`cache`]: write-once per-country record store, owned by a service.
//! - [`service`]: the read operations, with the degrade-to-empty contract.
//! - [`events`]: load outcomes published for observers.
//! - [`config`]: source location from environment, YAML, or code.
//!
//! Searching is pure and lives in `unicat-core`; it is re-exported here so
//! consumers need only this crate.
//!
//! ## Usage
//!
//! ```no_run
//! use unicat_catalog::{CatalogConfig, CatalogService, SearchFilters};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let service = CatalogService::from_config(&CatalogConfig::from_env()?)?;
//! let canada = service.universities_by_country("canada").await;
//! let hits = unicat_catalog::search_universities(&canada, "toronto", &SearchFilters::new());
//! # let _ = hits;
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod events;
pub mod service;
pub mod source;

pub use cache::RecordCache;
pub use config::{CatalogConfig, ConfigError, SourceLocation};
pub use error::SourceError;
pub use events::CatalogEvent;
pub use service::CatalogService;
pub use source::{CountrySource, DataSource, DirectorySource, HttpSource, MemorySource};

pub use unicat_core::{
    search_universities, CountryCode, CountrySummary, GreFilter, SearchFilters, University,
    UniversityEntry, VisaRisk,
};
