//! Post store implementations - DynamoDB and in-memory fallback.

mod memory;

#[cfg(feature = "dynamodb")]
mod dynamodb;

pub use memory::InMemoryPostStore;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoPostStore;
