//! Promptlab API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes, the
//! GraphQL schema, middleware) so integration tests and the binary
//! entrypoint both drive the exact same application router.

pub mod config;
pub mod error;
pub mod graphql;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod state;
