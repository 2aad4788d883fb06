use thiserror::Error;
use ticketmaster_client::TicketmasterError;

/// Terminal failures of an ingestion run.
///
/// The display strings are what callers see in the `{error}` body, so they
/// stay stable. Causes for transport/decode failures are included verbatim.
#[derive(Debug, Clone, Error)]
pub enum IngestError {
    #[error("missing marketplace")]
    MissingParameter,

    #[error("ticketmaster auth error")]
    UpstreamAuth,

    #[error("ticketmaster server error")]
    UpstreamServer,

    #[error("error calling ticketmaster: {0}")]
    UpstreamUnreachable(String),

    #[error("failed to decode response: {0}")]
    UpstreamDecode(String),

    /// Cause is logged, never sent to the caller.
    #[error("internal error")]
    Internal(String),
}

impl IngestError {
    /// HTTP status this error is reported with.
    pub fn status_code(&self) -> u16 {
        match self {
            IngestError::MissingParameter => 400,
            IngestError::UpstreamAuth => 401,
            IngestError::Internal(_) => 500,
            IngestError::UpstreamServer
            | IngestError::UpstreamUnreachable(_)
            | IngestError::UpstreamDecode(_) => 502,
        }
    }
}

impl From<TicketmasterError> for IngestError {
    fn from(err: TicketmasterError) -> Self {
        match err {
            TicketmasterError::Request(cause) => IngestError::Internal(cause),
            TicketmasterError::Unreachable(e) => IngestError::UpstreamUnreachable(e.to_string()),
            TicketmasterError::Unauthorized { .. } => IngestError::UpstreamAuth,
            TicketmasterError::Server { .. } => IngestError::UpstreamServer,
            // A truncated body surfaces while decoding, so it is reported as one.
            TicketmasterError::Body(e) => IngestError::UpstreamDecode(e.to_string()),
            TicketmasterError::Decode(e) => IngestError::UpstreamDecode(e.to_string()),
        }
    }
}
