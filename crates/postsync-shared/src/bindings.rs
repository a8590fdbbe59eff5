//! Static resolver wiring: which GraphQL type/field each operation is bound to.

use serde::Serialize;

/// The resolver operations served by the function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    CreatePost,
    GetPostById,
    ListPosts,
    UpdatePost,
    DeletePost,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::CreatePost,
        Operation::GetPostById,
        Operation::ListPosts,
        Operation::UpdatePost,
        Operation::DeletePost,
    ];
}

/// A `{type, field, operation}` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolverBinding {
    pub type_name: &'static str,
    pub field_name: &'static str,
    pub operation: Operation,
}

impl ResolverBinding {
    /// Deployment resource prefix, e.g. `Query_getPostById_`.
    pub fn resource_name(&self) -> String {
        format!("{}_{}_", self.type_name, self.field_name)
    }
}

pub const RESOLVERS: &[ResolverBinding] = &[
    ResolverBinding {
        type_name: "Mutation",
        field_name: "createPost",
        operation: Operation::CreatePost,
    },
    ResolverBinding {
        type_name: "Mutation",
        field_name: "deletePost",
        operation: Operation::DeletePost,
    },
    ResolverBinding {
        type_name: "Mutation",
        field_name: "updatePost",
        operation: Operation::UpdatePost,
    },
    ResolverBinding {
        type_name: "Query",
        field_name: "getPostById",
        operation: Operation::GetPostById,
    },
    ResolverBinding {
        type_name: "Query",
        field_name: "listPosts",
        operation: Operation::ListPosts,
    },
];

/// Find the binding for a field. `type_name` narrows the match when the event carries it.
pub fn find(type_name: Option<&str>, field_name: &str) -> Option<&'static ResolverBinding> {
    RESOLVERS.iter().find(|binding| {
        binding.field_name == field_name && type_name.is_none_or(|t| t == binding.type_name)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_operation_bound_once() {
        for operation in Operation::ALL {
            let count = RESOLVERS
                .iter()
                .filter(|b| b.operation == operation)
                .count();
            assert_eq!(count, 1, "{operation:?} bound {count} times");
        }
        assert_eq!(RESOLVERS.len(), Operation::ALL.len());
    }

    #[test]
    fn test_no_duplicate_fields() {
        let pairs: HashSet<_> = RESOLVERS
            .iter()
            .map(|b| (b.type_name, b.field_name))
            .collect();
        assert_eq!(pairs.len(), RESOLVERS.len());
    }

    #[test]
    fn test_find() {
        let binding = find(Some("Query"), "getPostById").unwrap();
        assert_eq!(binding.operation, Operation::GetPostById);
        assert_eq!(binding.resource_name(), "Query_getPostById_");

        assert_eq!(
            find(None, "deletePost").map(|b| b.operation),
            Some(Operation::DeletePost)
        );
        assert!(find(Some("Mutation"), "getPostById").is_none());
        assert!(find(None, "publishPost").is_none());
    }
}
