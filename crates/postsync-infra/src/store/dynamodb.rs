//! DynamoDB post store.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::config::http::HttpResponse;
use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue, ReturnValuesOnConditionCheckFailure};
use serde_dynamo::aws_sdk_dynamodb_1::{from_item, to_item};

use postsync_core::domain::Post;
use postsync_core::error::StoreError;
use postsync_core::expression::{CompiledExpression, OwnershipGuard, UpdateStatement};
use postsync_core::ports::PostStore;

type Item = HashMap<String, AttributeValue>;

/// Post table in DynamoDB, hash key `id` (string).
///
/// Guarded writes send the ownership check as a `ConditionExpression` and ask for the old
/// item on check failure, so a missing post and a foreign post are told apart without a
/// separate read.
pub struct DynamoPostStore {
    client: Client,
    table_name: String,
}

impl DynamoPostStore {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    fn key(id: &str) -> Item {
        HashMap::from([("id".to_string(), AttributeValue::S(id.to_string()))])
    }
}

#[async_trait]
impl PostStore for DynamoPostStore {
    async fn get(&self, id: &str) -> Result<Option<Post>, StoreError> {
        tracing::debug!(table = %self.table_name, post_id = %id, "Getting post");

        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(Self::key(id)))
            .send()
            .await
            .map_err(request_error)?;

        output.item.map(decode).transpose()
    }

    async fn put(&self, post: &Post) -> Result<(), StoreError> {
        tracing::debug!(table = %self.table_name, post_id = %post.id, "Putting post");

        let item: Item = to_item(post).map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(request_error)?;

        Ok(())
    }

    async fn update(
        &self,
        id: &str,
        statement: &UpdateStatement,
        guard: &OwnershipGuard,
    ) -> Result<Post, StoreError> {
        let update = statement.compile();
        let condition = guard.compile();
        let (names, values) = attribute_tables(&[&update, &condition]);

        tracing::debug!(
            table = %self.table_name,
            post_id = %id,
            update_expression = %update.expression,
            "Updating post"
        );

        let output = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(Self::key(id)))
            .update_expression(update.expression)
            .condition_expression(condition.expression)
            .set_expression_attribute_names(Some(names))
            .set_expression_attribute_values(Some(values))
            .return_values(ReturnValue::AllNew)
            .return_values_on_condition_check_failure(ReturnValuesOnConditionCheckFailure::AllOld)
            .send()
            .await
            .map_err(update_error)?;

        let item = output
            .attributes
            .ok_or_else(|| StoreError::Query("update returned no attributes".to_string()))?;
        decode(item)
    }

    async fn delete(&self, id: &str, guard: &OwnershipGuard) -> Result<(), StoreError> {
        let condition = guard.compile();
        let (names, values) = attribute_tables(&[&condition]);

        tracing::debug!(table = %self.table_name, post_id = %id, "Deleting post");

        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(Self::key(id)))
            .condition_expression(condition.expression)
            .set_expression_attribute_names(Some(names))
            .set_expression_attribute_values(Some(values))
            .return_values_on_condition_check_failure(ReturnValuesOnConditionCheckFailure::AllOld)
            .send()
            .await
            .map_err(delete_error)?;

        Ok(())
    }

    async fn scan(&self) -> Result<Vec<Post>, StoreError> {
        let mut posts = Vec::new();
        let mut start_key: Option<Item> = None;

        // Follow LastEvaluatedKey; a single Scan page stops at 1 MB.
        loop {
            let output = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(request_error)?;

            for item in output.items.unwrap_or_default() {
                posts.push(decode(item)?);
            }

            match output.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        tracing::debug!(table = %self.table_name, count = posts.len(), "Scanned posts");
        Ok(posts)
    }
}

fn decode(item: Item) -> Result<Post, StoreError> {
    from_item(item).map_err(|e| StoreError::Serialization(e.to_string()))
}

/// Merge the placeholder tables of several expressions into request attribute maps.
fn attribute_tables(parts: &[&CompiledExpression]) -> (HashMap<String, String>, Item) {
    let mut names = HashMap::new();
    let mut values = HashMap::new();

    for part in parts {
        names.extend(part.names.clone());
        values.extend(
            part.values
                .iter()
                .map(|(placeholder, value)| (placeholder.clone(), AttributeValue::S(value.clone()))),
        );
    }

    (names, values)
}

fn condition_failed(current: Option<&Item>) -> StoreError {
    match current.cloned().map(decode).transpose() {
        Ok(current) => StoreError::ConditionFailed { current },
        Err(err) => err,
    }
}

fn update_error(err: SdkError<UpdateItemError, HttpResponse>) -> StoreError {
    if let SdkError::ServiceError(context) = &err {
        if let UpdateItemError::ConditionalCheckFailedException(failed) = context.err() {
            return condition_failed(failed.item());
        }
    }
    request_error(err)
}

fn delete_error(err: SdkError<DeleteItemError, HttpResponse>) -> StoreError {
    if let SdkError::ServiceError(context) = &err {
        if let DeleteItemError::ConditionalCheckFailedException(failed) = context.err() {
            return condition_failed(failed.item());
        }
    }
    request_error(err)
}

fn request_error<E>(err: SdkError<E, HttpResponse>) -> StoreError
where
    E: std::error::Error + 'static,
{
    let detail = DisplayErrorContext(&err).to_string();
    match err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => StoreError::Connection(detail),
        _ => StoreError::Query(detail),
    }
}
