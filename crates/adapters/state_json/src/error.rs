//! State file adapter error types.

use std::path::PathBuf;

use skillbridge_domain::error::SkillBridgeError;

/// Errors specific to the JSON state file adapter.
#[derive(Debug, thiserror::Error)]
pub enum StateFileError {
    /// The states file could not be read.
    #[error("unable to read states file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not a JSON list of states.
    #[error("states document is not a JSON list of states")]
    Parse(#[source] serde_json::Error),
}

impl From<StateFileError> for SkillBridgeError {
    fn from(err: StateFileError) -> Self {
        SkillBridgeError::Source(Box::new(err))
    }
}
