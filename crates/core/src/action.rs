use serde::{Deserialize, Serialize};

use crate::resource::ResourceKind;

/// Mutations whose rule depends on who owns the target resource.
///
/// Deciding one of these requires a fresh [`crate::OwnershipFact`]; the
/// split into two action types is what makes "decided without a fact"
/// unrepresentable in the engine's signature.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OwnedAction {
    UpdateArticle,
    UpdateComment,
}

impl OwnedAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            OwnedAction::UpdateArticle => "update-article",
            OwnedAction::UpdateComment => "update-comment",
        }
    }

    /// The resource kind this action targets.
    pub fn resource_kind(&self) -> ResourceKind {
        match self {
            OwnedAction::UpdateArticle => ResourceKind::Article,
            OwnedAction::UpdateComment => ResourceKind::Comment,
        }
    }
}

impl core::fmt::Display for OwnedAction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mutations decided on role membership alone.
///
/// These never consult ownership, so no upstream lookup happens before the
/// decision.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoleOnlyAction {
    CreateTag,
    DeleteTag,
}

impl RoleOnlyAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleOnlyAction::CreateTag => "create-tag",
            RoleOnlyAction::DeleteTag => "delete-tag",
        }
    }

    pub fn resource_kind(&self) -> ResourceKind {
        match self {
            RoleOnlyAction::CreateTag | RoleOnlyAction::DeleteTag => ResourceKind::Tag,
        }
    }
}

impl core::fmt::Display for RoleOnlyAction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every mutation the gateway fronts, across both categories.
///
/// Used where a single label is wanted (tracing, wire mapping); the engine
/// itself only ever sees the per-category types.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    Owned(OwnedAction),
    RoleOnly(RoleOnlyAction),
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Owned(a) => a.as_str(),
            Action::RoleOnly(a) => a.as_str(),
        }
    }

    pub fn resource_kind(&self) -> ResourceKind {
        match self {
            Action::Owned(a) => a.resource_kind(),
            Action::RoleOnly(a) => a.resource_kind(),
        }
    }
}

impl From<OwnedAction> for Action {
    fn from(value: OwnedAction) -> Self {
        Self::Owned(value)
    }
}

impl From<RoleOnlyAction> for Action {
    fn from(value: RoleOnlyAction) -> Self {
        Self::RoleOnly(value)
    }
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
