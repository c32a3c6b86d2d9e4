use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::id::OwnerId;

/// The closed set of resource kinds the gateway fronts.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Article,
    Comment,
    Tag,
}

impl ResourceKind {
    /// Upstream collection path segment for this kind.
    pub fn segment(&self) -> &'static str {
        match self {
            ResourceKind::Article => "articles",
            ResourceKind::Comment => "comments",
            ResourceKind::Tag => "tags",
        }
    }
}

impl core::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.segment())
    }
}

/// Opaque identifier of an upstream resource.
///
/// The gateway never interprets these beyond exact equality; it only splices
/// them into upstream paths, so construction rejects values that could not
/// be a single path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(String);

/// Upper bound on identifier length accepted from the path.
const MAX_ID_LEN: usize = 128;

impl ResourceId {
    pub fn parse(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.is_empty() {
            return Err(DomainError::invalid_id("resource id is empty"));
        }
        if id.len() > MAX_ID_LEN {
            return Err(DomainError::invalid_id("resource id too long"));
        }
        if id.contains('/') || id.contains(|c: char| c.is_whitespace()) {
            return Err(DomainError::invalid_id(
                "resource id must be a single path segment",
            ));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A (kind, identifier) pair naming a target resource without its data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceRef {
    pub kind: ResourceKind,
    pub id: ResourceId,
}

impl ResourceRef {
    pub fn new(kind: ResourceKind, id: ResourceId) -> Self {
        Self { kind, id }
    }
}

impl core::fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}", self.kind, self.id)
    }
}

/// The single ownership-relevant attribute of a resource.
///
/// Fetched fresh from the upstream store for every decision that needs it;
/// nothing in the gateway caches or invalidates these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnershipFact {
    pub owner: OwnerId,
}

impl OwnershipFact {
    pub fn new(owner: OwnerId) -> Self {
        Self { owner }
    }
}
