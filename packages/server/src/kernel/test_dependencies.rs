// TestDependencies - mock implementations for testing
//
// Provides a scripted event catalog that can stand in for the Ticketmaster
// client in ingestion and HTTP tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use ticketmaster_client::{Embedded, Event, EventDates, EventStart, EventsPage, EventsQuery, PageMetadata};

use super::BaseEventCatalog;
use crate::domains::events::IngestError;

// =============================================================================
// Mock Event Catalog
// =============================================================================

/// Catalog that serves `total_events` synthetic events, paged exactly like the
/// Discovery API, with optional per-page failures.
#[derive(Clone, Default)]
pub struct MockEventCatalog {
    total_events: usize,
    id_prefix: String,
    omit_page_metadata: bool,
    latency: Duration,
    failures: Arc<Mutex<HashMap<u32, IngestError>>>,
    calls: Arc<Mutex<Vec<EventsQuery>>>,
}

impl MockEventCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding `total` events for every country code.
    pub fn with_events(total: usize) -> Self {
        Self {
            total_events: total,
            ..Self::default()
        }
    }

    /// Prefix added to generated event ids, to tell runs apart.
    pub fn with_id_prefix(mut self, prefix: &str) -> Self {
        self.id_prefix = prefix.to_string();
        self
    }

    /// Respond without the `page` block, as some upstream payloads do.
    pub fn without_page_metadata(mut self) -> Self {
        self.omit_page_metadata = true;
        self
    }

    /// Delay every response (lets tests interleave concurrent runs).
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Fail the request for `page` with `error`.
    pub fn fail_on_page(self, page: u32, error: IngestError) -> Self {
        self.failures.lock().unwrap().insert(page, error);
        self
    }

    /// Every query received so far, in order.
    pub fn calls(&self) -> Vec<EventsQuery> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Page indexes requested so far, in order.
    pub fn requested_pages(&self) -> Vec<u32> {
        self.calls().iter().map(|q| q.page).collect()
    }

    fn event(&self, country_code: &str, index: usize) -> Event {
        Event {
            id: format!("{}{}-{}", self.id_prefix, country_code, index),
            name: format!("Event {}", index),
            url: format!("https://www.ticketmaster.com/event/{}", index),
            dates: EventDates {
                start: EventStart {
                    local_date: "2026-11-01".to_string(),
                    date_time: "2026-11-01T19:00:00Z".to_string(),
                },
            },
        }
    }
}

#[async_trait]
impl BaseEventCatalog for MockEventCatalog {
    async fn fetch_page(&self, query: &EventsQuery) -> Result<EventsPage, IngestError> {
        self.calls.lock().unwrap().push(query.clone());

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if let Some(error) = self.failures.lock().unwrap().get(&query.page) {
            return Err(error.clone());
        }

        let size = query.size.max(1) as usize;
        let start = (query.page as usize).saturating_mul(size);
        let end = start.saturating_add(size).min(self.total_events);
        let events: Vec<Event> = (start..end)
            .map(|i| self.event(&query.country_code, i))
            .collect();

        let page = if self.omit_page_metadata {
            None
        } else {
            Some(PageMetadata {
                size: query.size,
                total_elements: self.total_events as u64,
                total_pages: self.total_events.div_ceil(size) as u32,
                number: query.page,
            })
        };

        Ok(EventsPage {
            // The Discovery API drops `_embedded` on empty pages.
            embedded: (!events.is_empty()).then_some(Embedded { events }),
            page,
        })
    }
}
