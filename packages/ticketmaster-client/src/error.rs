//! Errors returned by the Discovery API client.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TicketmasterError {
    /// The request could not be built (bad base URL, client setup).
    #[error("request construction failed: {0}")]
    Request(String),

    /// Transport-level failure before a response arrived: connect or timeout.
    #[error("{0}")]
    Unreachable(#[source] reqwest::Error),

    /// The API key was rejected (401 or 403).
    #[error("ticketmaster rejected credentials (HTTP {status})")]
    Unauthorized { status: u16 },

    /// Upstream returned a 5xx.
    #[error("ticketmaster server error (HTTP {status})")]
    Server { status: u16 },

    /// The response body could not be read to the end.
    #[error("{0}")]
    Body(#[source] reqwest::Error),

    /// The body was not a valid listing payload.
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TicketmasterError>;
