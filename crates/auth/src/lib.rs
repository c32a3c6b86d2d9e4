//! `pressgate-auth` — authentication/authorization boundary (zero-trust).
//!
//! This crate is intentionally decoupled from HTTP and from the upstream
//! store: the decision engine is a pure function over values the caller has
//! already obtained.

pub mod authorize;
pub mod claims;
pub mod principal;
pub mod roles;
pub mod token;

pub use authorize::{Decision, decide_owned, decide_role_only};
pub use claims::{Claims, TokenError, validate_claims};
pub use principal::Principal;
pub use roles::{Role, UnknownRole};
pub use token::{Hs256Validator, TokenValidator};
