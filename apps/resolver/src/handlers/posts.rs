//! Post field resolvers.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use postsync_core::domain::{NewPost, PostPatch};
use postsync_core::{PostError, PostRepository, PostResult};
use postsync_shared::Arguments;

/// Mutation.createPost(post)
pub async fn create_post(
    posts: &PostRepository,
    args: &Arguments,
    caller: Option<&str>,
) -> PostResult<Value> {
    let draft: NewPost = post_argument(args)?;
    field_value(&posts.create(draft, caller).await?)
}

/// Query.getPostById(postId)
pub async fn get_post_by_id(posts: &PostRepository, args: &Arguments) -> PostResult<Value> {
    let post = posts.get_by_id(post_id_argument(args)?).await?;
    field_value(&post)
}

/// Query.listPosts
pub async fn list_posts(posts: &PostRepository) -> PostResult<Value> {
    field_value(&posts.list_all().await?)
}

/// Mutation.updatePost(post)
pub async fn update_post(
    posts: &PostRepository,
    args: &Arguments,
    caller: Option<&str>,
) -> PostResult<Value> {
    let patch: PostPatch = post_argument(args)?;
    field_value(&posts.update(patch, caller).await?)
}

/// Mutation.deletePost(postId)
pub async fn delete_post(
    posts: &PostRepository,
    args: &Arguments,
    caller: Option<&str>,
) -> PostResult<Value> {
    let deleted = posts.delete(post_id_argument(args)?, caller).await?;
    Ok(Value::String(deleted))
}

fn post_id_argument(args: &Arguments) -> PostResult<&str> {
    args.post_id
        .as_deref()
        .ok_or_else(|| PostError::InvalidInput("missing argument `postId`".to_string()))
}

fn post_argument<T: DeserializeOwned>(args: &Arguments) -> PostResult<T> {
    let post = args
        .post
        .clone()
        .ok_or_else(|| PostError::InvalidInput("missing argument `post`".to_string()))?;
    serde_json::from_value(post).map_err(|e| PostError::InvalidInput(e.to_string()))
}

fn field_value<T: Serialize>(value: &T) -> PostResult<Value> {
    serde_json::to_value(value).map_err(|e| PostError::Backend(e.to_string()))
}
