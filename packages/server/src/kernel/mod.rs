//! Kernel module - server infrastructure and dependencies.

pub mod test_dependencies;
pub mod ticketmaster;
pub mod traits;

pub use test_dependencies::MockEventCatalog;
pub use ticketmaster::TicketmasterCatalog;
pub use traits::*;
