//! Function state - built once per execution environment, shared across invocations.

use std::sync::Arc;

use postsync_core::PostRepository;
use postsync_core::ports::PostStore;
use postsync_infra::InMemoryPostStore;

use crate::config::{AppConfig, ErrorMode, StoreConfig};

/// Shared function state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostRepository,
    pub error_mode: ErrorMode,
}

impl AppState {
    /// Build the state with the configured store.
    pub async fn new(config: &AppConfig) -> Self {
        let store: Arc<dyn PostStore> = match &config.store {
            StoreConfig::Memory => {
                tracing::warn!("STORE_BACKEND=memory - posts are kept in process memory only");
                Arc::new(InMemoryPostStore::new())
            }
            StoreConfig::DynamoDb {
                table_name,
                endpoint_url,
            } => dynamodb_store(table_name, endpoint_url.as_deref()).await,
        };

        tracing::info!(error_mode = ?config.error_mode, "Function state initialized");

        Self::with_store(store, config.error_mode)
    }

    pub fn with_store(store: Arc<dyn PostStore>, error_mode: ErrorMode) -> Self {
        Self {
            posts: PostRepository::new(store),
            error_mode,
        }
    }
}

#[cfg(feature = "dynamodb")]
async fn dynamodb_store(table_name: &str, endpoint_url: Option<&str>) -> Arc<dyn PostStore> {
    use postsync_infra::DynamoPostStore;

    let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let mut builder = aws_sdk_dynamodb::config::Builder::from(&sdk_config);
    if let Some(endpoint) = endpoint_url {
        tracing::info!(endpoint, "Using DynamoDB endpoint override");
        builder = builder.endpoint_url(endpoint);
    }
    let client = aws_sdk_dynamodb::Client::from_conf(builder.build());

    let store = DynamoPostStore::new(client, table_name);
    tracing::info!(table = store.table_name(), "DynamoDB post store ready");
    Arc::new(store)
}

#[cfg(not(feature = "dynamodb"))]
async fn dynamodb_store(table_name: &str, _endpoint_url: Option<&str>) -> Arc<dyn PostStore> {
    tracing::warn!(
        table = table_name,
        "Built without dynamodb feature - using in-memory store"
    );
    Arc::new(InMemoryPostStore::new())
}
