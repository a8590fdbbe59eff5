//! # Postsync Shared
//!
//! Types shared between the resolver function and deployment tooling: the inbound
//! field-resolution event and the static resolver binding table.

pub mod bindings;
pub mod event;

pub use bindings::{Operation, RESOLVERS, ResolverBinding};
pub use event::{Arguments, CallerIdentity, FieldInfo, ResolverEvent};
