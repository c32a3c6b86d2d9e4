//! `pressgate-core` — gateway domain vocabulary.
//!
//! This crate contains **pure domain** values shared by the auth, upstream,
//! and API layers. No IO, no framework types.

pub mod action;
pub mod envelope;
pub mod error;
pub mod id;
pub mod resource;

pub use action::{Action, OwnedAction, RoleOnlyAction};
pub use envelope::Envelope;
pub use error::{DomainError, DomainResult};
pub use id::{OwnerId, PrincipalId};
pub use resource::{OwnershipFact, ResourceId, ResourceKind, ResourceRef};
