//! Binding table CLI tool.
//!
//! Writes the `{type, field}` -> function wiring as JSON on stdout, for the deployment
//! tooling that creates one data source and resolver per entry.

use serde::Serialize;

use postsync_shared::{Operation, RESOLVERS};

/// Environment every resolver function expects.
const FUNCTION_ENVIRONMENT: &[&str] = &["POST_TABLE"];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Manifest {
    function_environment: &'static [&'static str],
    resolvers: Vec<ManifestEntry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ManifestEntry {
    type_name: &'static str,
    field_name: &'static str,
    operation: Operation,
    resource_name: String,
}

fn manifest() -> Manifest {
    Manifest {
        function_environment: FUNCTION_ENVIRONMENT,
        resolvers: RESOLVERS
            .iter()
            .map(|binding| ManifestEntry {
                type_name: binding.type_name,
                field_name: binding.field_name,
                operation: binding.operation,
                resource_name: binding.resource_name(),
            })
            .collect(),
    }
}

fn main() -> Result<(), serde_json::Error> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_writer(std::io::stderr)
        .init();

    let manifest = manifest();
    tracing::info!(resolvers = manifest.resolvers.len(), "Writing binding table");

    println!("{}", serde_json::to_string_pretty(&manifest)?);
    Ok(())
}
