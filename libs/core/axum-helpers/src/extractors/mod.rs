//! Custom extractors for Axum handlers.
//!
//! This module provides reusable extractors that reduce boilerplate
//! and standardize error handling across your API.

pub mod actor_id;
pub mod id_path;
pub mod validated_json;
pub mod validated_query;

pub use actor_id::{ACTOR_HEADER, ActorId};
pub use id_path::IdPath;
pub use validated_json::ValidatedJson;
pub use validated_query::ValidatedQuery;
