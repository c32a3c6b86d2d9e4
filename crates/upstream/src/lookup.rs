use pressgate_core::{OwnershipFact, ResourceRef};

use crate::UpstreamError;

/// Read-only ownership lookup against the upstream store.
///
/// On the hot path of every ownership-gated mutation: one GET, no retry, no
/// cache. A lookup failure must reach the caller untouched; defaulting to an
/// ownership answer here would turn an outage into an authorization
/// decision.
#[async_trait::async_trait]
pub trait OwnershipLookup: Send + Sync {
    /// Fetch the owner of `resource`, fresh from the upstream store.
    async fn fetch_owner(&self, resource: &ResourceRef) -> Result<OwnershipFact, UpstreamError>;
}
