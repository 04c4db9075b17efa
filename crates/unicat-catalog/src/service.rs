//! # Catalog Data Service
//!
//! The read API used by presentation layers. Country codes arrive as raw
//! caller input and are resolved case-insensitively against the registry.
//!
//! ## Failure Contract
//!
//! | Situation | Result |
//! |-----------|--------|
//! | Code outside the registry | empty records, no fetch |
//! | Fetch or parse failure | empty records, `LoadFailed` event, nothing cached |
//! | Slug not in country | `None` |
//!
//! Only [`CatalogService::try_load_country`] surfaces the underlying
//! [`SourceError`]; every other operation always returns a usable,
//! possibly empty, value.

use std::sync::Arc;

use tokio::sync::broadcast;
use unicat_core::{duplicate_slugs, CountryCode, CountrySummary, University};

use crate::cache::RecordCache;
use crate::config::CatalogConfig;
use crate::error::SourceError;
use crate::events::{CatalogEvent, EventBus};
use crate::source::{CountrySource, DataSource};

/// Loads, caches, and queries university records by country.
///
/// Each instance owns its cache, so a fresh service starts cold. Share one
/// instance (e.g. behind an `Arc`) for process-wide caching.
#[derive(Debug)]
pub struct CatalogService<S> {
    source: S,
    cache: RecordCache,
    events: EventBus,
}

impl CatalogService<DataSource> {
    /// Build a service over the source selected by `config`.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, SourceError> {
        Ok(Self::new(DataSource::from_config(config)?))
    }
}

impl<S: CountrySource> CatalogService<S> {
    /// Create a service with an empty cache.
    pub fn new(source: S) -> Self {
        Self::with_cache(source, RecordCache::new())
    }

    /// Create a service over an existing cache handle.
    pub fn with_cache(source: S, cache: RecordCache) -> Self {
        Self {
            source,
            cache,
            events: EventBus::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn cache(&self) -> &RecordCache {
        &self.cache
    }

    /// Receive [`CatalogEvent`]s for loads that happen after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<CatalogEvent> {
        self.events.subscribe()
    }

    /// Load a country's records, surfacing source failures.
    ///
    /// A code outside the registry is `Ok` with no records. Failures are
    /// returned as-is: no event is published and nothing is cached.
    pub async fn try_load_country(&self, code: &str) -> Result<Arc<[University]>, SourceError> {
        match CountryCode::parse(code) {
            Some(country) => self.load_registered(country).await,
            None => {
                tracing::debug!(code, "country outside registry; no data");
                Ok(no_records())
            }
        }
    }

    /// Load a country's records, degrading to empty on failure.
    ///
    /// The first successful load is cached and every later call returns the
    /// same allocation without fetching. A failed load publishes
    /// [`CatalogEvent::LoadFailed`], is logged, and is not cached, so a later
    /// call fetches again.
    pub async fn load_country(&self, code: &str) -> Arc<[University]> {
        let Some(country) = CountryCode::parse(code) else {
            tracing::debug!(code, "country outside registry; no data");
            return no_records();
        };

        match self.load_registered(country).await {
            Ok(records) => records,
            Err(e) => {
                tracing::error!(
                    country = %country,
                    location = e.location(),
                    "failed to load university data: {e}"
                );
                self.events.publish(CatalogEvent::LoadFailed {
                    country,
                    detail: e.to_string(),
                });
                no_records()
            }
        }
    }

    async fn load_registered(&self, country: CountryCode) -> Result<Arc<[University]>, SourceError> {
        if let Some(records) = self.cache.get(country) {
            tracing::trace!(country = %country, "cache hit");
            return Ok(records);
        }

        let entries = self.source.fetch(country).await?;
        let records: Arc<[University]> = entries
            .into_iter()
            .map(|entry| University::from_entry(entry, country))
            .collect();

        let duplicates = duplicate_slugs(&records);
        if !duplicates.is_empty() {
            tracing::warn!(
                country = %country,
                slugs = ?duplicates,
                "duplicate slugs; only the first record per slug is reachable"
            );
        }

        let records = self.cache.get_or_insert(country, records);
        tracing::info!(country = %country, records = records.len(), "loaded university data");
        self.events.publish(CatalogEvent::Loaded {
            country,
            records: records.len(),
        });
        Ok(records)
    }

    /// Records for one country. Same contract as [`Self::load_country`].
    pub async fn universities_by_country(&self, code: &str) -> Arc<[University]> {
        self.load_country(code).await
    }

    /// Every registry country's records, concatenated in registry order.
    ///
    /// A country that fails to load contributes nothing; the others are
    /// still returned. No deduplication across countries.
    pub async fn all_universities(&self) -> Vec<University> {
        let mut all = Vec::new();
        for country in CountryCode::ALL {
            all.extend(self.load_country(country.as_str()).await.iter().cloned());
        }
        all
    }

    /// The first record in `code`'s dataset whose slug equals `slug`.
    ///
    /// Slugs compare exactly; they are lowercase by construction.
    pub async fn university_by_slug(&self, code: &str, slug: &str) -> Option<University> {
        self.load_country(code)
            .await
            .iter()
            .find(|u| u.slug == slug)
            .cloned()
    }

    /// One summary per registry country, in registry order.
    ///
    /// Loads every country as a side effect. A country that fails to load
    /// is still listed, with a count of 0.
    pub async fn available_countries(&self) -> Vec<CountrySummary> {
        let mut summaries = Vec::with_capacity(CountryCode::ALL.len());
        for country in CountryCode::ALL {
            let records = self.load_country(country.as_str()).await;
            summaries.push(CountrySummary::new(country, records.len()));
        }
        summaries
    }
}

fn no_records() -> Arc<[University]> {
    Arc::from(Vec::new())
}
