//! Transport-independent core of the promptlab services.
//!
//! Holds the domain types, the error taxonomy, the upstream gateway traits,
//! and the resolvers that implement each business operation. The HTTP layer
//! (`promptlab-api`) and the concrete gateway clients (`promptlab-db`,
//! `promptlab-upstream`) both depend on this crate; nothing here knows about
//! axum, GraphQL, sqlx, or reqwest.

pub mod error;
pub mod gateway;
pub mod resolver;
pub mod types;

pub use error::{CoreError, GatewayError};
