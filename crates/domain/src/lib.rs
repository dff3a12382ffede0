//! # skillbridge-domain
//!
//! Pure domain model for exposing smart-home entities to an Alexa Smart Home
//! skill.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define **entity snapshots** (read-only views of the host's live state)
//! - Define the **Alexa identifier** rules (endpoint id sanitization)
//! - Define **capability interfaces** (`Alexa.PowerController`, `Alexa.Speaker`, …)
//!   and the contract every interface honours
//! - Define the **discovery document** sent to the assistant cloud
//! - Define per-entity **configuration overrides**
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod alexa_id;
pub mod capability;
pub mod config;
pub mod discovery;
pub mod display_category;
pub mod entity;
pub mod media_player;
