//! Gateway dispatch: one authorization decision per request.
//!
//! Control flow per mutation: (for ownership-gated actions) fetch the
//! ownership fact, then decide, and only on Allow forward exactly one
//! upstream write. Role-only actions skip the fetch entirely, so a denied
//! tag mutation costs no upstream round trip.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use pressgate_auth::{Decision, Principal, decide_owned, decide_role_only};
use pressgate_core::{
    Action, Envelope, OwnedAction, ResourceId, ResourceKind, ResourceRef, RoleOnlyAction,
};
use pressgate_upstream::{
    ContentClient, Mutation, MutationExecutor, OwnershipLookup, UpstreamError,
};

/// Outcome taxonomy surfaced to the transport layer.
///
/// All four kinds propagate verbatim; none are downgraded into another. In
/// particular a failed ownership lookup is *not* a denial, so the caller can
/// always tell "cannot determine ownership" from "ownership check failed".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// No principal could be established; answered by the middleware
    /// before dispatch ever runs.
    #[error("unauthenticated")]
    Unauthenticated,

    /// The decision engine returned Deny.
    #[error("forbidden")]
    Denied,

    /// The upstream store has no such resource.
    #[error("resource not found")]
    ResourceNotFound,

    /// The upstream call failed at the transport level.
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),
}

impl From<UpstreamError> for GatewayError {
    fn from(value: UpstreamError) -> Self {
        match value {
            UpstreamError::NotFound => GatewayError::ResourceNotFound,
            UpstreamError::Unavailable(reason) => GatewayError::UpstreamUnavailable(reason),
        }
    }
}

/// Shared, immutable collaborators for dispatch. Request-scoped values
/// never live here.
pub struct GatewayServices {
    pub lookup: Arc<dyn OwnershipLookup>,
    pub executor: Arc<dyn MutationExecutor>,
}

impl GatewayServices {
    pub fn new(lookup: Arc<dyn OwnershipLookup>, executor: Arc<dyn MutationExecutor>) -> Self {
        Self { lookup, executor }
    }

    /// Both roles served by one upstream client.
    pub fn from_client(client: ContentClient) -> Self {
        let client = Arc::new(client);
        Self {
            lookup: client.clone(),
            executor: client,
        }
    }
}

/// Execute an ownership-gated update (article or comment).
///
/// The lookup runs first; if it fails, its error is surfaced as-is and the
/// engine is never consulted. The target reference is derived from the
/// action, so an id can never be dispatched against the wrong kind.
pub async fn execute_update(
    services: &GatewayServices,
    principal: &Principal,
    action: OwnedAction,
    id: ResourceId,
    payload: Value,
) -> Result<Envelope, GatewayError> {
    let resource = ResourceRef::new(action.resource_kind(), id);

    let ownership = services.lookup.fetch_owner(&resource).await?;

    match decide_owned(principal, action, &ownership) {
        Decision::Deny => {
            tracing::debug!(
                action = %Action::from(action),
                principal = %principal.id,
                resource = %resource,
                "mutation denied"
            );
            Err(GatewayError::Denied)
        }
        Decision::Allow => {
            let body = services
                .executor
                .apply(&Mutation::Update(resource), Some(&payload))
                .await?;
            Ok(Envelope::wrap(body))
        }
    }
}

/// Execute tag creation (role-only: no lookup happens on this path).
pub async fn execute_create_tag(
    services: &GatewayServices,
    principal: &Principal,
    payload: Value,
) -> Result<Envelope, GatewayError> {
    match decide_role_only(principal, RoleOnlyAction::CreateTag) {
        Decision::Deny => {
            tracing::debug!(
                action = %Action::from(RoleOnlyAction::CreateTag),
                principal = %principal.id,
                "mutation denied"
            );
            Err(GatewayError::Denied)
        }
        Decision::Allow => {
            let body = services
                .executor
                .apply(&Mutation::Create(ResourceKind::Tag), Some(&payload))
                .await?;
            Ok(Envelope::wrap(body))
        }
    }
}

/// Execute tag deletion (role-only: no lookup happens on this path).
pub async fn execute_delete_tag(
    services: &GatewayServices,
    principal: &Principal,
    id: ResourceId,
) -> Result<Envelope, GatewayError> {
    let resource = ResourceRef::new(ResourceKind::Tag, id);

    match decide_role_only(principal, RoleOnlyAction::DeleteTag) {
        Decision::Deny => {
            tracing::debug!(
                action = %Action::from(RoleOnlyAction::DeleteTag),
                principal = %principal.id,
                resource = %resource,
                "mutation denied"
            );
            Err(GatewayError::Denied)
        }
        Decision::Allow => {
            let body = services
                .executor
                .apply(&Mutation::Delete(resource), None)
                .await?;
            Ok(Envelope::wrap(body))
        }
    }
}
