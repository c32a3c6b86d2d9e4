use thiserror::Error;

/// Failure talking to the upstream content store.
///
/// `NotFound` is a definitive upstream answer; everything else (connect
/// failures, timeouts, 5xx, unparseable bodies) collapses into
/// `Unavailable`, which the gateway surfaces as a server-side failure
/// distinct from any authorization outcome.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    #[error("resource not found upstream")]
    NotFound,

    #[error("upstream unavailable: {0}")]
    Unavailable(String),
}

impl UpstreamError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}
