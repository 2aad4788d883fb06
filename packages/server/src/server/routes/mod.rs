// HTTP routes
pub mod events;
pub mod health;
pub mod ingest;

pub use events::*;
pub use health::*;
pub use ingest::*;
