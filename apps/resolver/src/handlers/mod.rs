//! Invocation adapter - one field-resolution event in, one repository call, one field value out.

mod posts;

use lambda_runtime::LambdaEvent;
use serde_json::Value;

use postsync_shared::bindings::{self, Operation};
use postsync_shared::ResolverEvent;

use crate::error::HandlerError;
use crate::state::AppState;

/// Lambda entry point for a single event.
#[tracing::instrument(
    skip_all,
    fields(
        request_id = %event.context.request_id,
        field = %event.payload.info.field_name
    )
)]
pub async fn handle(
    state: &AppState,
    event: LambdaEvent<ResolverEvent>,
) -> Result<Value, lambda_runtime::Error> {
    Ok(resolve(state, &event.payload).await?)
}

/// Dispatch `event` to the operation bound to its field.
pub async fn resolve(state: &AppState, event: &ResolverEvent) -> Result<Value, HandlerError> {
    let info = &event.info;
    let binding = bindings::find(info.parent_type_name.as_deref(), &info.field_name).ok_or_else(
        || HandlerError::UnknownField {
            type_name: info.parent_type_name.clone().unwrap_or_default(),
            field_name: info.field_name.clone(),
        },
    )?;

    let posts = &state.posts;
    let args = &event.arguments;
    let caller = event.caller();

    let result = match binding.operation {
        Operation::CreatePost => posts::create_post(posts, args, caller).await,
        Operation::GetPostById => posts::get_post_by_id(posts, args).await,
        Operation::ListPosts => posts::list_posts(posts).await,
        Operation::UpdatePost => posts::update_post(posts, args, caller).await,
        Operation::DeletePost => posts::delete_post(posts, args, caller).await,
    };

    match result {
        Ok(value) => Ok(value),
        Err(err) => state.error_mode.render(binding, err),
    }
}
