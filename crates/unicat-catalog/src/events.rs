//! Load events published by the catalog service.
//!
//! Load failures never cross the service boundary as errors. They are
//! logged and published here so callers and tests can observe them without
//! scraping log output.

use tokio::sync::broadcast;
use unicat_core::CountryCode;

/// Buffered events per subscriber before the oldest are dropped.
const EVENT_CAPACITY: usize = 64;

/// Outcome of fetching a country dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEvent {
    /// A dataset was fetched, normalized, and cached.
    Loaded { country: CountryCode, records: usize },
    /// Fetching or parsing a dataset failed; the country reads as empty.
    LoadFailed { country: CountryCode, detail: String },
}

/// Broadcast channel for [`CatalogEvent`]s.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<CatalogEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(EVENT_CAPACITY);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<CatalogEvent> {
        self.tx.subscribe()
    }

    /// Publish an event. Having no subscribers is not an error.
    pub fn publish(&self, event: CatalogEvent) {
        let _ = self.tx.send(event);
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_without_subscribers_is_silent() {
        let bus = EventBus::new();
        bus.publish(CatalogEvent::Loaded {
            country: CountryCode::Uk,
            records: 3,
        });
    }

    #[test]
    fn subscribers_receive_events_in_order() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();
        bus.publish(CatalogEvent::LoadFailed {
            country: CountryCode::Usa,
            detail: "boom".into(),
        });
        bus.publish(CatalogEvent::Loaded {
            country: CountryCode::Uk,
            records: 1,
        });

        assert_eq!(
            rx.try_recv().unwrap(),
            CatalogEvent::LoadFailed {
                country: CountryCode::Usa,
                detail: "boom".into()
            }
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            CatalogEvent::Loaded {
                country: CountryCode::Uk,
                records: 1
            }
        );
    }
}
