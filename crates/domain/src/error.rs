//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`SkillBridgeError`] via `#[from]`.

/// Top-level error type shared by every crate of the workspace.
#[derive(Debug, thiserror::Error)]
pub enum SkillBridgeError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("capability error")]
    Capability(#[from] CapabilityError),

    #[error("registry error")]
    Registry(#[from] RegistryError),

    /// Failure reported by a state-source adapter.
    #[error("state source error")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("entity id must not be empty")]
    EmptyEntityId,

    #[error("entity id {0:?} is not of the form `domain.object_id`")]
    MalformedEntityId(String),
}

/// A looked-up item does not exist (or is not exposed).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// Failure while serializing a capability interface.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CapabilityError {
    #[error("{interface} requires the {attribute} attribute")]
    MissingAttribute {
        interface: &'static str,
        attribute: &'static str,
    },

    #[error("{interface} cannot use the value of the {attribute} attribute")]
    InvalidAttribute {
        interface: &'static str,
        attribute: &'static str,
    },
}

/// Misconfiguration of the domain-to-adapter registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("an adapter is already registered for domain {0:?}")]
    DuplicateDomain(String),
}
