//! Event listings domain: ingestion runs against the upstream catalog, the
//! in-memory store they write to, and the paginated read path.

pub mod actions;
pub mod errors;
pub mod store;

pub use actions::ingest::{ingest_marketplace, IngestConfig, IngestSummary};
pub use actions::query::{query_events, EventsResponse, EventsWindow};
pub use errors::IngestError;
pub use store::EventStore;

// Events are stored and re-served exactly as the catalog client decodes them.
pub use ticketmaster_client::Event;
