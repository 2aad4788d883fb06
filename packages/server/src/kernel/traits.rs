// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// The paging loop lives in domains::events; these only fetch one page.
//
// Naming convention: Base* for trait names (e.g., BaseEventCatalog)

use async_trait::async_trait;
use ticketmaster_client::{EventsPage, EventsQuery};

use crate::domains::events::IngestError;

// =============================================================================
// Event Catalog Trait (Infrastructure - upstream listing API)
// =============================================================================

#[async_trait]
pub trait BaseEventCatalog: Send + Sync {
    /// Fetch a single page of events, with the failure already classified.
    async fn fetch_page(&self, query: &EventsQuery) -> Result<EventsPage, IngestError>;
}
