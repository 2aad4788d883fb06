use async_trait::async_trait;
use ticketmaster_client::{EventsPage, EventsQuery, TicketmasterClient};

use super::BaseEventCatalog;
use crate::domains::events::IngestError;

/// Ticketmaster Discovery API implementation of BaseEventCatalog
pub struct TicketmasterCatalog {
    client: TicketmasterClient,
}

impl TicketmasterCatalog {
    pub fn new(client: TicketmasterClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BaseEventCatalog for TicketmasterCatalog {
    async fn fetch_page(&self, query: &EventsQuery) -> Result<EventsPage, IngestError> {
        self.client
            .fetch_events_page(query)
            .await
            .map_err(IngestError::from)
    }
}
