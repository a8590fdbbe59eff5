use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a blog post owned by the user who created it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Owner identity. Stamped from the caller at creation and never changed afterwards.
    /// Items written without one decode as `""`, which no caller can match.
    #[serde(default)]
    pub username: String,
}

impl Post {
    /// Build the record to store for `draft`, owned by `owner`.
    ///
    /// Generates a UUID v4 id when the draft does not carry one.
    pub fn new(draft: NewPost, owner: impl Into<String>) -> Self {
        Self {
            id: draft.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            title: draft.title,
            content: draft.content,
            username: owner.into(),
        }
    }
}

/// Creation payload. Carries no `username`; a client-supplied one is dropped during
/// deserialization. Omitted fields are stored empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPost {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Sparse update payload: the target id plus any subset of the mutable fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostPatch {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl PostPatch {
    /// The supplied fields, in declaration order.
    pub fn assignments(&self) -> impl Iterator<Item = (PostField, &str)> {
        [
            (PostField::Title, self.title.as_deref()),
            (PostField::Content, self.content.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
    }
}

/// Fields that may be changed after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostField {
    Title,
    Content,
}

impl PostField {
    /// Attribute name as stored.
    pub fn attribute(self) -> &'static str {
        match self {
            PostField::Title => "title",
            PostField::Content => "content",
        }
    }

    /// Overwrite this field on `post`.
    pub fn assign(self, post: &mut Post, value: String) {
        match self {
            PostField::Title => post.title = value,
            PostField::Content => post.content = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_ignores_client_username() {
        let draft: NewPost = serde_json::from_str(
            r#"{"id":"p1","title":"T","content":"C","username":"mallory"}"#,
        )
        .unwrap();
        let post = Post::new(draft, "alice");

        assert_eq!(post.username, "alice");
        assert_eq!(post.id, "p1");
    }

    #[test]
    fn test_new_post_generates_id() {
        let draft = NewPost {
            id: None,
            title: "T".to_string(),
            content: "C".to_string(),
        };
        let post = Post::new(draft, "alice");

        assert!(Uuid::parse_str(&post.id).is_ok());
    }

    #[test]
    fn test_new_post_accepts_partial_payload() {
        let draft: NewPost = serde_json::from_str(r#"{"id":"p1","title":"T"}"#).unwrap();
        let post = Post::new(draft, "alice");

        assert_eq!(post.title, "T");
        assert_eq!(post.content, "");
    }

    #[test]
    fn test_post_decodes_partial_item() {
        let post: Post = serde_json::from_str(r#"{"id":"p1","content":"C"}"#).unwrap();

        assert_eq!(post.title, "");
        assert_eq!(post.content, "C");
        assert_eq!(post.username, "");
    }

    #[test]
    fn test_patch_skips_unknown_keys() {
        let patch: PostPatch =
            serde_json::from_str(r#"{"id":"p1","content":"C2","username":"mallory"}"#).unwrap();

        let fields: Vec<_> = patch.assignments().collect();
        assert_eq!(fields, vec![(PostField::Content, "C2")]);
    }
}
