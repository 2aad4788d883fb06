// Event Catalog Service - API Core
//
// Pulls event listings for a marketplace (country code) from the Ticketmaster
// Discovery API, keeps the latest run per marketplace in memory, and serves
// paginated slices of it over HTTP.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
