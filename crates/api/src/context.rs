use pressgate_auth::Principal;

/// Principal context for a request (authenticated identity + role).
///
/// Inserted by the auth middleware and dropped with the request; nothing
/// about a principal survives across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalContext {
    principal: Principal,
}

impl PrincipalContext {
    pub fn new(principal: Principal) -> Self {
        Self { principal }
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }
}
