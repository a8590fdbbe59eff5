//! # Postsync Infrastructure
//!
//! Concrete implementations of the [`PostStore`](postsync_core::ports::PostStore) port.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `dynamodb` - DynamoDB table support via the AWS SDK

pub mod store;

pub use store::InMemoryPostStore;

#[cfg(feature = "dynamodb")]
pub use store::DynamoPostStore;
