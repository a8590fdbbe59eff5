use crate::domain::{Post, PostField, PostPatch};
use crate::error::{PostError, PostResult};

use super::CompiledExpression;

/// Builds an [`UpdateStatement`] over the mutable Post fields.
#[derive(Debug, Clone, Default)]
pub struct UpdateBuilder {
    assignments: Vec<(PostField, String)>,
}

impl UpdateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `value` to `field`. A repeated field keeps its first position and takes the
    /// latest value.
    pub fn set(mut self, field: PostField, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.assignments.iter_mut().find(|(f, _)| *f == field) {
            Some(slot) => slot.1 = value,
            None => self.assignments.push((field, value)),
        }
        self
    }

    /// Finish the statement. An update that sets nothing is rejected.
    pub fn build(self) -> PostResult<UpdateStatement> {
        if self.assignments.is_empty() {
            return Err(PostError::InvalidInput(
                "update must set at least one field".to_string(),
            ));
        }
        Ok(UpdateStatement {
            assignments: self.assignments,
        })
    }
}

/// A non-empty, ordered set of field assignments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStatement {
    assignments: Vec<(PostField, String)>,
}

impl UpdateStatement {
    /// Statement for the fields supplied in `patch`.
    pub fn from_patch(patch: &PostPatch) -> PostResult<Self> {
        patch
            .assignments()
            .fold(UpdateBuilder::new(), |builder, (field, value)| {
                builder.set(field, value)
            })
            .build()
    }

    pub fn assignments(&self) -> &[(PostField, String)] {
        &self.assignments
    }

    /// Apply the assignments to an in-memory record.
    pub fn apply_to(&self, post: &mut Post) {
        for (field, value) in &self.assignments {
            field.assign(post, value.clone());
        }
    }

    /// Render as `set #a = :a, #b = :b` with its name and value tables.
    pub fn compile(&self) -> CompiledExpression {
        let mut compiled = CompiledExpression::default();
        let mut prefix = "set ";

        for (field, value) in &self.assignments {
            let attribute = field.attribute();
            let alias = format!("#{attribute}");
            let placeholder = format!(":{attribute}");

            compiled
                .expression
                .push_str(&format!("{prefix}{alias} = {placeholder}"));
            compiled.names.insert(alias, attribute.to_string());
            compiled.values.insert(placeholder, value.clone());
            prefix = ", ";
        }

        compiled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_two_fields() {
        let statement = UpdateBuilder::new()
            .set(PostField::Title, "T2")
            .set(PostField::Content, "C2")
            .build()
            .unwrap();

        let compiled = statement.compile();
        assert_eq!(compiled.expression, "set #title = :title, #content = :content");
        assert_eq!(compiled.names["#title"], "title");
        assert_eq!(compiled.names["#content"], "content");
        assert_eq!(compiled.values[":title"], "T2");
        assert_eq!(compiled.values[":content"], "C2");
    }

    #[test]
    fn test_compile_preserves_insertion_order() {
        let statement = UpdateBuilder::new()
            .set(PostField::Content, "C2")
            .set(PostField::Title, "T2")
            .build()
            .unwrap();

        assert_eq!(
            statement.compile().expression,
            "set #content = :content, #title = :title"
        );
    }

    #[test]
    fn test_repeated_field_keeps_last_value() {
        let statement = UpdateBuilder::new()
            .set(PostField::Title, "first")
            .set(PostField::Title, "second")
            .build()
            .unwrap();

        assert_eq!(
            statement.assignments(),
            &[(PostField::Title, "second".to_string())]
        );
    }

    #[test]
    fn test_empty_update_rejected() {
        let result = UpdateStatement::from_patch(&PostPatch {
            id: "p1".to_string(),
            ..Default::default()
        });

        assert!(matches!(result, Err(PostError::InvalidInput(_))));
    }

    #[test]
    fn test_apply_leaves_other_fields() {
        let mut post = Post {
            id: "p1".to_string(),
            title: "T".to_string(),
            content: "C".to_string(),
            username: "alice".to_string(),
        };
        let statement = UpdateStatement::from_patch(&PostPatch {
            id: "ignored".to_string(),
            content: Some("C2".to_string()),
            ..Default::default()
        })
        .unwrap();

        statement.apply_to(&mut post);

        assert_eq!(post.id, "p1");
        assert_eq!(post.title, "T");
        assert_eq!(post.content, "C2");
        assert_eq!(post.username, "alice");
    }
}
