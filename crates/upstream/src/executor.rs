use serde_json::Value;

use pressgate_core::{ResourceKind, ResourceRef};

use crate::UpstreamError;

/// One upstream write call, in the store's wire vocabulary.
///
/// The gateway's action model maps onto these at dispatch time; the adapter
/// only needs to know verb and target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// `PATCH /{kind}/{id}`
    Update(ResourceRef),
    /// `POST /{kind}`
    Create(ResourceKind),
    /// `DELETE /{kind}/{id}`
    Delete(ResourceRef),
}

impl core::fmt::Display for Mutation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Mutation::Update(r) => write!(f, "PATCH {r}"),
            Mutation::Create(kind) => write!(f, "POST {kind}"),
            Mutation::Delete(r) => write!(f, "DELETE {r}"),
        }
    }
}

/// Applies a permitted mutation to the upstream store.
///
/// Invoked only after an Allow decision. Exactly one upstream call per
/// invocation; the store may treat repeated identical calls as repeated
/// updates, and the gateway does not deduplicate.
#[async_trait::async_trait]
pub trait MutationExecutor: Send + Sync {
    /// Forward the mutation, returning the upstream response body.
    async fn apply(
        &self,
        mutation: &Mutation,
        payload: Option<&Value>,
    ) -> Result<Value, UpstreamError>;
}
