//! `pressgate-upstream` — adapter for the upstream content store.
//!
//! Two call shapes only: a read of the ownership projection for a resource,
//! and a single mutation call per permitted operation. No retries, no
//! batching, no caching; a failed call is surfaced immediately so the
//! gateway can distinguish "cannot determine ownership" from a denial.

pub mod client;
pub mod error;
pub mod executor;
pub mod lookup;

pub use client::ContentClient;
pub use error::UpstreamError;
pub use executor::{Mutation, MutationExecutor};
pub use lookup::OwnershipLookup;
