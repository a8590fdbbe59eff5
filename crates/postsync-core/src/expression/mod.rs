//! Store expressions built by the core: the ownership precondition and partial updates.
//!
//! Both render to the placeholder style used by DynamoDB (`#name` for attribute names,
//! `:value` for values), and both also carry enough typed data for stores that evaluate
//! them directly.

mod guard;
mod update;

use std::collections::BTreeMap;

pub use guard::OwnershipGuard;
pub use update::{UpdateBuilder, UpdateStatement};

/// An expression string plus the placeholder tables it refers to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledExpression {
    pub expression: String,
    /// `#alias` -> attribute name.
    pub names: BTreeMap<String, String>,
    /// `:placeholder` -> string value.
    pub values: BTreeMap<String, String>,
}
