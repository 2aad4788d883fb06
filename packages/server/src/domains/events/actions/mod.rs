//! Event domain actions - entry points called from the HTTP routes.

pub mod ingest;
pub mod query;
