//! Failure reporting - how repository errors reach the GraphQL API.

use serde_json::Value;
use thiserror::Error;

use postsync_core::PostError;
use postsync_shared::ResolverBinding;

use crate::config::ErrorMode;

/// Errors that fail the invocation.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("No resolver bound to {type_name}.{field_name}")]
    UnknownField {
        type_name: String,
        field_name: String,
    },

    #[error(transparent)]
    Post(#[from] PostError),
}

impl ErrorMode {
    /// Log `err` and turn it into the field result for this mode.
    pub fn render(self, binding: &ResolverBinding, err: PostError) -> Result<Value, HandlerError> {
        match &err {
            PostError::Backend(detail) => tracing::error!(
                field = binding.field_name,
                detail = %detail,
                "Store error"
            ),
            other => tracing::warn!(
                field = binding.field_name,
                error = %other,
                "Operation rejected"
            ),
        }

        match self {
            ErrorMode::Null => Ok(Value::Null),
            ErrorMode::Raise => Err(err.into()),
        }
    }
}
