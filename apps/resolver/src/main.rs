//! # Post Resolver
//!
//! Lambda function serving the Post fields of the GraphQL API.

use lambda_runtime::{Error, LambdaEvent, service_fn};

mod config;
mod error;
mod handlers;
mod state;
mod telemetry;

use config::AppConfig;
use postsync_shared::ResolverEvent;
use state::AppState;
use telemetry::TelemetryConfig;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "Invalid configuration");
    })?;

    let state = AppState::new(&config).await;

    lambda_runtime::run(service_fn(|event: LambdaEvent<ResolverEvent>| {
        handlers::handle(&state, event)
    }))
    .await
}
