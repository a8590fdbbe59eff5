//! Inbound field-resolution event, as forwarded by the GraphQL API to each resolver function.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One field resolution. Payload keys not modelled here (`source`, `stash`, ...) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverEvent {
    pub info: FieldInfo,
    #[serde(default)]
    pub arguments: Arguments,
    /// Absent for unauthenticated (API key) requests.
    #[serde(default)]
    pub identity: Option<CallerIdentity>,
}

impl ResolverEvent {
    /// The caller's username, if the request was authenticated.
    pub fn caller(&self) -> Option<&str> {
        self.identity
            .as_ref()
            .and_then(|identity| identity.username.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldInfo {
    pub field_name: String,
    #[serde(default)]
    pub parent_type_name: Option<String>,
}

/// Field arguments. `post` stays untyped here; each operation decides its shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Arguments {
    #[serde(default)]
    pub post_id: Option<String>,
    #[serde(default)]
    pub post: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallerIdentity {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_authenticated_event() {
        let event: ResolverEvent = serde_json::from_str(
            r#"{
                "arguments": {"post": {"id": "p1", "title": "T", "content": "C"}},
                "identity": {"sub": "1234", "username": "alice"},
                "source": null,
                "info": {"fieldName": "createPost", "parentTypeName": "Mutation"},
                "stash": {}
            }"#,
        )
        .unwrap();

        assert_eq!(event.info.field_name, "createPost");
        assert_eq!(event.info.parent_type_name.as_deref(), Some("Mutation"));
        assert_eq!(event.caller(), Some("alice"));
        assert!(event.arguments.post.is_some());
    }

    #[test]
    fn test_parse_api_key_event() {
        let event: ResolverEvent = serde_json::from_str(
            r#"{"info": {"fieldName": "getPostById"}, "arguments": {"postId": "p1"}, "identity": null}"#,
        )
        .unwrap();

        assert_eq!(event.caller(), None);
        assert_eq!(event.arguments.post_id.as_deref(), Some("p1"));
    }
}
