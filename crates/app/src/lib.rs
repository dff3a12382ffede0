//! # skillbridge-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `StateSource`: enumerate the host's current entity snapshots
//! - Define the **entity adapter** contract: how one entity is expressed in
//!   Alexa's terms (names, categories, capability interfaces)
//! - Provide the **adapter registry** mapping entity domains to adapters
//! - Provide the concrete entity adapters (media players)
//! - Define **driving/inbound ports** as use-case structs:
//!   - `DiscoveryService`: discovery documents and property reports
//!
//! ## Dependency rule
//! Depends on `skillbridge-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod entity_adapter;
pub mod entity_adapters;
pub mod ports;
pub mod registry;
pub mod services;
