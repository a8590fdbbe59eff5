//! Domain-level error types.

use thiserror::Error;

use crate::domain::Post;

/// Repository outcome for a failed Post operation.
///
/// The wire layer may still render every variant as `null`; the split exists so callers and
/// logs can tell the causes apart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PostError {
    #[error("Post not found")]
    NotFound,

    #[error("Caller does not own this post")]
    Forbidden,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Backend error: {0}")]
    Backend(String),
}

pub type PostResult<T> = Result<T, PostError>;

/// Store-level errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store connection failed: {0}")]
    Connection(String),

    #[error("Store request failed: {0}")]
    Query(String),

    #[error("Item (de)serialization failed: {0}")]
    Serialization(String),

    /// The write precondition did not hold. `current` is the item as it was stored, if any.
    #[error("Conditional check failed")]
    ConditionFailed { current: Option<Post> },
}

impl From<StoreError> for PostError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ConditionFailed { current: None } => PostError::NotFound,
            StoreError::ConditionFailed { current: Some(_) } => PostError::Forbidden,
            other => PostError::Backend(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_failure_splits_on_existing_item() {
        let missing = StoreError::ConditionFailed { current: None };
        assert_eq!(PostError::from(missing), PostError::NotFound);

        let owned = StoreError::ConditionFailed {
            current: Some(Post {
                id: "p1".to_string(),
                title: "T".to_string(),
                content: "C".to_string(),
                username: "alice".to_string(),
            }),
        };
        assert_eq!(PostError::from(owned), PostError::Forbidden);
    }

    #[test]
    fn test_backend_errors_keep_detail() {
        let err = PostError::from(StoreError::Connection("timed out".to_string()));
        assert_eq!(
            err,
            PostError::Backend("Store connection failed: timed out".to_string())
        );
    }
}
