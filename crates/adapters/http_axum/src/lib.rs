//! # skillbridge-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the Alexa discovery response (`GET /api/discovery`)
//! - Serve the current state report of one endpoint
//!   (`GET /api/endpoints/{entity_id}/properties`)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `skillbridge-app` (for port traits and services) and
//! `skillbridge-domain` (for the documents it serializes). Never leaks axum
//! types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;

#[cfg(test)]
mod testing;
