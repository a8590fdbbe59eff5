use async_trait::async_trait;

use crate::domain::Post;
use crate::error::StoreError;
use crate::expression::{OwnershipGuard, UpdateStatement};

/// Post storage - abstraction over the key-value table holding posts, keyed by `id`.
///
/// Guarded operations must evaluate the [`OwnershipGuard`] and apply the write as one atomic
/// step. When the guard does not hold they return [`StoreError::ConditionFailed`] carrying the
/// item as it was stored (or `None` when there was no item).
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Point lookup by id.
    async fn get(&self, id: &str) -> Result<Option<Post>, StoreError>;

    /// Unconditional write; replaces any item with the same id.
    async fn put(&self, post: &Post) -> Result<(), StoreError>;

    /// Apply `statement` to the item `id` if `guard` holds. Returns the item after the write.
    async fn update(
        &self,
        id: &str,
        statement: &UpdateStatement,
        guard: &OwnershipGuard,
    ) -> Result<Post, StoreError>;

    /// Remove the item `id` if `guard` holds.
    async fn delete(&self, id: &str, guard: &OwnershipGuard) -> Result<(), StoreError>;

    /// Every item in the table, in store order.
    async fn scan(&self) -> Result<Vec<Post>, StoreError>;
}
