//! # Postsync Core
//!
//! The domain layer of the Post resolvers.
//! This crate contains the business rules (ownership, partial updates) with zero
//! infrastructure dependencies. Storage is reached only through the [`ports::PostStore`] port.

pub mod domain;
pub mod error;
pub mod expression;
pub mod ports;
pub mod repository;

pub use error::{PostError, PostResult};
pub use repository::PostRepository;
