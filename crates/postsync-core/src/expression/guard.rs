use crate::domain::Post;
use crate::error::{PostError, PostResult};

use super::CompiledExpression;

const OWNER_ALIAS: &str = "#username";
const OWNER_PLACEHOLDER: &str = ":authenticatedUser";

/// Precondition for mutations: the stored `username` must equal the caller.
///
/// The store evaluates it atomically with the write it is attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnershipGuard {
    owner: String,
}

impl OwnershipGuard {
    /// Guard for `caller`. Fails closed with [`PostError::Forbidden`] when there is no
    /// identity (API-key access) or the identity is empty.
    pub fn for_caller(caller: Option<&str>) -> PostResult<Self> {
        match caller {
            Some(owner) if !owner.is_empty() => Ok(Self {
                owner: owner.to_string(),
            }),
            _ => Err(PostError::Forbidden),
        }
    }

    /// Evaluate the guard against a stored record.
    pub fn permits(&self, stored: &Post) -> bool {
        stored.username == self.owner
    }

    pub fn compile(&self) -> CompiledExpression {
        let mut compiled = CompiledExpression {
            expression: format!("{OWNER_ALIAS} = {OWNER_PLACEHOLDER}"),
            ..Default::default()
        };
        compiled
            .names
            .insert(OWNER_ALIAS.to_string(), "username".to_string());
        compiled
            .values
            .insert(OWNER_PLACEHOLDER.to_string(), self.owner.clone());
        compiled
    }
}
