//! Post repository - the five resolver operations on top of a [`PostStore`].

use std::sync::Arc;

use crate::domain::{NewPost, Post, PostPatch};
use crate::error::{PostError, PostResult};
use crate::expression::{OwnershipGuard, UpdateStatement};
use crate::ports::PostStore;

/// CRUD operations for posts, with ownership enforced on mutation.
#[derive(Clone)]
pub struct PostRepository {
    store: Arc<dyn PostStore>,
}

impl PostRepository {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }

    /// Store `draft` owned by `caller`. Overwrites any post with the same id.
    ///
    /// A post needs an owner, so creation without a caller identity is `Forbidden`.
    pub async fn create(&self, draft: NewPost, caller: Option<&str>) -> PostResult<Post> {
        let owner = match caller {
            Some(owner) if !owner.is_empty() => owner,
            _ => return Err(PostError::Forbidden),
        };
        if let Some(id) = draft.id.as_deref() {
            require_id(id)?;
        }

        let post = Post::new(draft, owner);
        self.store.put(&post).await?;
        Ok(post)
    }

    /// Point lookup. Absence is `Ok(None)`, not an error.
    pub async fn get_by_id(&self, id: &str) -> PostResult<Option<Post>> {
        require_id(id)?;
        Ok(self.store.get(id).await?)
    }

    /// Every post, in whatever order the store yields them.
    pub async fn list_all(&self) -> PostResult<Vec<Post>> {
        Ok(self.store.scan().await?)
    }

    /// Rewrite the fields present in `patch` if `caller` owns the post.
    pub async fn update(&self, patch: PostPatch, caller: Option<&str>) -> PostResult<Post> {
        require_id(&patch.id)?;
        let guard = OwnershipGuard::for_caller(caller)?;
        let statement = UpdateStatement::from_patch(&patch)?;

        Ok(self.store.update(&patch.id, &statement, &guard).await?)
    }

    /// Remove the post if `caller` owns it. Returns the removed id.
    pub async fn delete(&self, id: &str, caller: Option<&str>) -> PostResult<String> {
        require_id(id)?;
        let guard = OwnershipGuard::for_caller(caller)?;

        self.store.delete(id, &guard).await?;
        Ok(id.to_string())
    }
}

fn require_id(id: &str) -> PostResult<()> {
    if id.is_empty() {
        return Err(PostError::InvalidInput("post id must not be empty".to_string()));
    }
    Ok(())
}
