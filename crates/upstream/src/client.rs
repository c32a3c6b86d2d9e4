use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use pressgate_core::{OwnerId, OwnershipFact, ResourceKind, ResourceRef};

use crate::{Mutation, MutationExecutor, OwnershipLookup, UpstreamError};

/// HTTP client for the upstream content store.
///
/// Holds a single `reqwest::Client` (connection pool) for the process; no
/// timeout policy is imposed here, so a hung upstream surfaces through the
/// transport as `Unavailable`.
#[derive(Debug, Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    base_url: String,
}

/// The minimal projection read for an ownership decision. Everything else
/// in the upstream body is ignored.
#[derive(Debug, Deserialize)]
struct OwnershipProjection {
    owner_id: String,
}

impl ContentClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn resource_url(&self, resource: &ResourceRef) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            resource.kind.segment(),
            resource.id
        )
    }

    fn collection_url(&self, kind: ResourceKind) -> String {
        format!("{}/{}", self.base_url, kind.segment())
    }
}

#[async_trait::async_trait]
impl OwnershipLookup for ContentClient {
    async fn fetch_owner(&self, resource: &ResourceRef) -> Result<OwnershipFact, UpstreamError> {
        let url = self.resource_url(resource);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| UpstreamError::unavailable(e.to_string()))?;

        match resp.status() {
            StatusCode::NOT_FOUND => Err(UpstreamError::NotFound),
            status if status.is_success() => {
                let projection: OwnershipProjection = resp
                    .json()
                    .await
                    .map_err(|e| UpstreamError::unavailable(format!("bad projection body: {e}")))?;
                Ok(OwnershipFact::new(OwnerId::new(projection.owner_id)))
            }
            status => Err(UpstreamError::unavailable(format!(
                "unexpected status {status} reading {resource}"
            ))),
        }
    }
}

#[async_trait::async_trait]
impl MutationExecutor for ContentClient {
    async fn apply(
        &self,
        mutation: &Mutation,
        payload: Option<&Value>,
    ) -> Result<Value, UpstreamError> {
        let req = match mutation {
            Mutation::Update(resource) => self.http.patch(self.resource_url(resource)),
            Mutation::Create(kind) => self.http.post(self.collection_url(*kind)),
            Mutation::Delete(resource) => self.http.delete(self.resource_url(resource)),
        };
        let req = match payload {
            Some(body) => req.json(body),
            None => req,
        };

        tracing::debug!(mutation = %mutation, "forwarding mutation upstream");

        let resp = req
            .send()
            .await
            .map_err(|e| UpstreamError::unavailable(e.to_string()))?;

        match resp.status() {
            StatusCode::NOT_FOUND => Err(UpstreamError::NotFound),
            status if status.is_success() => {
                let body = resp
                    .text()
                    .await
                    .map_err(|e| UpstreamError::unavailable(e.to_string()))?;
                if body.is_empty() {
                    // DELETE commonly answers 204 with no body.
                    return Ok(Value::Null);
                }
                serde_json::from_str(&body)
                    .map_err(|e| UpstreamError::unavailable(format!("bad response body: {e}")))
            }
            status => Err(UpstreamError::unavailable(format!(
                "unexpected status {status} applying {mutation}"
            ))),
        }
    }
}
