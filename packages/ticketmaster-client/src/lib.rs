//! Pure Ticketmaster Discovery REST API client.
//!
//! Fetches single pages of the `events.json` listing. Paging policy (how many
//! pages, how fast) is left to the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use ticketmaster_client::{EventsQuery, TicketmasterClient};
//!
//! let client = TicketmasterClient::new("your-api-key".into())?;
//!
//! let page = client.fetch_events_page(&EventsQuery::new("US", 200, 0)).await?;
//! for event in page.events() {
//!     println!("{} {}", event.dates.start.local_date, event.name);
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{Result, TicketmasterError};
pub use types::{Embedded, Event, EventDates, EventStart, EventsPage, EventsQuery, PageMetadata};

use std::time::Duration;

use reqwest::StatusCode;

pub const DEFAULT_BASE_URL: &str = "https://app.ticketmaster.com/discovery/v2";

/// Per-request timeout applied by [`TicketmasterClient::new`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Largest page size the Discovery API accepts.
pub const MAX_PAGE_SIZE: u32 = 500;

#[derive(Clone)]
pub struct TicketmasterClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for TicketmasterClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TicketmasterClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl TicketmasterClient {
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_timeout(api_key, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(api_key: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TicketmasterError::Request(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the client at a different API root (staging, local mock).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one page of events for a country.
    ///
    /// 401/403 and 5xx are mapped to dedicated errors. Every other status is
    /// decoded as a listing, so an error body without `_embedded`/`page`
    /// comes back as an empty page.
    pub async fn fetch_events_page(&self, query: &EventsQuery) -> Result<EventsPage> {
        let url = format!("{}/events.json", self.base_url);
        let size = query.size.to_string();
        let page = query.page.to_string();
        let request = self
            .client
            .get(&url)
            .query(&[
                ("countryCode", query.country_code.as_str()),
                ("size", size.as_str()),
                ("page", page.as_str()),
                ("apikey", self.api_key.as_str()),
            ])
            .build()
            .map_err(|e| TicketmasterError::Request(e.to_string()))?;

        tracing::debug!(
            country_code = %query.country_code,
            size = query.size,
            page = query.page,
            "Requesting events page"
        );

        let resp = self
            .client
            .execute(request)
            .await
            .map_err(|e| TicketmasterError::Unreachable(e.without_url()))?;

        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(TicketmasterError::Unauthorized {
                status: status.as_u16(),
            });
        }
        if status.as_u16() >= 500 {
            return Err(TicketmasterError::Server {
                status: status.as_u16(),
            });
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| TicketmasterError::Body(e.without_url()))?;
        let events_page: EventsPage = serde_json::from_slice(&body)?;
        Ok(events_page)
    }
}
