//! Ingestion run: page through the upstream catalog for one marketplace and
//! rebuild its collection in the store.

use std::time::{Duration, Instant};

use serde::Serialize;
use ticketmaster_client::{EventsQuery, DEFAULT_TIMEOUT, MAX_PAGE_SIZE};
use tracing::{debug, info, warn};

use crate::domains::events::{EventStore, IngestError};
use crate::kernel::BaseEventCatalog;

/// Paging and pacing knobs for an ingestion run.
#[derive(Debug, Clone)]
pub struct IngestConfig {
    /// Events per request; clamped to `1..=MAX_PAGE_SIZE`.
    pub page_size: u32,
    pub start_page: u32,
    /// Deep-paging cap on items requested per run.
    pub max_items: u32,
    /// Applied by the upstream client to each request.
    pub request_timeout: Duration,
    /// Sleep between consecutive page requests.
    pub pacing: Duration,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            page_size: 200,
            start_page: 0,
            max_items: 1000,
            request_timeout: DEFAULT_TIMEOUT,
            // ~2 requests/second keeps us inside the default key quota
            pacing: Duration::from_millis(510),
        }
    }
}

impl IngestConfig {
    /// Same limits, no sleep between pages.
    pub fn without_pacing(mut self) -> Self {
        self.pacing = Duration::ZERO;
        self
    }

    fn effective_page_size(&self) -> u32 {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngestSummary {
    pub marketplace: String,
    #[serde(rename = "pagesFetched")]
    pub pages_fetched: u32,
    #[serde(rename = "eventsIngested")]
    pub events_ingested: usize,
    pub duration_ms: u64,
}

/// Fetch every page for `marketplace` and replace its stored collection.
///
/// The collection is cleared before the first request and each page is
/// appended as it arrives. Any failure aborts the run immediately; pages
/// appended before the failure stay in the store.
pub async fn ingest_marketplace(
    catalog: &dyn BaseEventCatalog,
    store: &EventStore,
    marketplace: &str,
    config: &IngestConfig,
) -> Result<IngestSummary, IngestError> {
    if marketplace.is_empty() {
        return Err(IngestError::MissingParameter);
    }

    let size = config.effective_page_size();
    let started = Instant::now();
    let mut page = config.start_page;
    let mut pages_fetched = 0u32;
    let mut events_ingested = 0usize;

    info!(
        marketplace,
        page_size = size,
        max_items = config.max_items,
        "Starting ingestion run"
    );

    store.reset(marketplace);

    loop {
        let query = EventsQuery::new(marketplace, size, page);
        let response = match catalog.fetch_page(&query).await {
            Ok(response) => response,
            Err(e) => {
                warn!(
                    marketplace,
                    page,
                    pages_fetched,
                    events_ingested,
                    error = ?e,
                    "Ingestion run aborted"
                );
                return Err(e);
            }
        };
        pages_fetched += 1;

        let meta = response.page;
        let events = response.into_events();
        let batch = events.len();
        if batch > 0 {
            store.append(marketplace, events);
            events_ingested += batch;
        }

        debug!(
            marketplace,
            page,
            events = batch,
            total_pages = meta.map(|m| m.total_pages),
            "Fetched events page"
        );

        let Some(meta) = meta else {
            debug!(marketplace, page, "No page metadata, treating as final page");
            break;
        };
        if page.saturating_add(1) >= meta.total_pages {
            break;
        }
        if (u64::from(page) + 1) * u64::from(size) >= u64::from(config.max_items) {
            debug!(marketplace, page, max_items = config.max_items, "Deep-paging cap reached");
            break;
        }

        page += 1;

        if !config.pacing.is_zero() {
            tokio::time::sleep(config.pacing).await;
        }
    }

    let summary = IngestSummary {
        marketplace: marketplace.to_string(),
        pages_fetched,
        events_ingested,
        duration_ms: started.elapsed().as_millis() as u64,
    };

    info!(
        marketplace,
        pages_fetched,
        events_ingested,
        duration_ms = summary.duration_ms,
        "Ingestion run complete"
    );

    Ok(summary)
}
