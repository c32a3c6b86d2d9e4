use serde::{Deserialize, Serialize};

use pressgate_core::PrincipalId;

use crate::Role;

/// A fully resolved principal for authorization decisions.
///
/// Constructed once per request from verified credentials and discarded at
/// request exit; the gateway holds no cross-request principal state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: PrincipalId,
    pub role: Role,
}

impl Principal {
    pub fn new(id: impl Into<PrincipalId>, role: Role) -> Self {
        Self { id: id.into(), role }
    }
}
