//! In-memory post store - used for local runs and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use postsync_core::domain::Post;
use postsync_core::error::StoreError;
use postsync_core::expression::{OwnershipGuard, UpdateStatement};
use postsync_core::ports::PostStore;

/// In-memory post table using a HashMap with async RwLock.
///
/// Guarded writes check ownership and mutate under the same write lock.
/// Note: Data is lost on process restart.
pub struct InMemoryPostStore {
    items: RwLock<HashMap<String, Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
        }
    }

    fn check(stored: Option<&Post>, guard: &OwnershipGuard) -> Result<(), StoreError> {
        match stored {
            Some(post) if guard.permits(post) => Ok(()),
            other => Err(StoreError::ConditionFailed {
                current: other.cloned(),
            }),
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn get(&self, id: &str) -> Result<Option<Post>, StoreError> {
        let items = self.items.read().await;
        Ok(items.get(id).cloned())
    }

    async fn put(&self, post: &Post) -> Result<(), StoreError> {
        let mut items = self.items.write().await;
        items.insert(post.id.clone(), post.clone());
        Ok(())
    }

    async fn update(
        &self,
        id: &str,
        statement: &UpdateStatement,
        guard: &OwnershipGuard,
    ) -> Result<Post, StoreError> {
        let mut items = self.items.write().await;
        Self::check(items.get(id), guard)?;

        let post = items
            .get_mut(id)
            .ok_or(StoreError::ConditionFailed { current: None })?;
        statement.apply_to(post);
        Ok(post.clone())
    }

    async fn delete(&self, id: &str, guard: &OwnershipGuard) -> Result<(), StoreError> {
        let mut items = self.items.write().await;
        Self::check(items.get(id), guard)?;

        items.remove(id);
        Ok(())
    }

    async fn scan(&self) -> Result<Vec<Post>, StoreError> {
        let items = self.items.read().await;
        Ok(items.values().cloned().collect())
    }
}
