//! Portfolio API server library.
//!
//! Exposes the building blocks (config, state, router, routes, rendering)
//! so integration tests and the binary entrypoint can both access them.

pub mod config;
pub mod render;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
