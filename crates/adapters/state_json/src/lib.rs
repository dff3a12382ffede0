//! # skillbridge-adapter-state-json
//!
//! State source backed by a JSON dump of the host's entity states, in the
//! shape returned by Home Assistant's `GET /api/states`:
//!
//! ```json
//! [
//!   {
//!     "entity_id": "media_player.lounge_tv",
//!     "state": "playing",
//!     "attributes": { "friendly_name": "Lounge TV", "supported_features": 21437 }
//!   }
//! ]
//! ```
//!
//! ## Responsibilities
//! - Implement the `StateSource` port from `skillbridge-app`
//! - Re-read the file on every call so external updates are picked up
//! - Skip (and log) records that are not valid entity snapshots
//!
//! ## Dependency rule
//! Depends on `skillbridge-app` (for port traits) and `skillbridge-domain`.

mod error;

use std::path::{Path, PathBuf};

use serde_json::Value;
use skillbridge_app::ports::StateSource;
use skillbridge_domain::config::HostInfo;
use skillbridge_domain::entity::EntitySnapshot;
use skillbridge_domain::error::SkillBridgeError;

pub use error::StateFileError;

/// [`StateSource`] reading entity states from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonStateSource {
    path: PathBuf,
    host: HostInfo,
}

impl JsonStateSource {
    /// A source reading `path` each time states are requested.
    pub fn from_path(path: impl Into<PathBuf>, host: HostInfo) -> Self {
        Self {
            path: path.into(),
            host,
        }
    }
}

impl StateSource for JsonStateSource {
    fn host_info(&self) -> HostInfo {
        self.host.clone()
    }

    fn all_states(&self) -> Result<Vec<EntitySnapshot>, SkillBridgeError> {
        Ok(read_states(&self.path)?)
    }
}

fn read_states(path: &Path) -> Result<Vec<EntitySnapshot>, StateFileError> {
    let document = std::fs::read_to_string(path).map_err(|source| StateFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_states(&document)
}

/// Parse a states document, keeping every record that forms a valid
/// snapshot.
fn parse_states(document: &str) -> Result<Vec<EntitySnapshot>, StateFileError> {
    let records: Vec<Value> = serde_json::from_str(document).map_err(StateFileError::Parse)?;
    let states = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match parse_record(record) {
            Ok(snapshot) => Some(snapshot),
            Err(reason) => {
                tracing::warn!(index, %reason, "skipping invalid state record");
                None
            }
        })
        .collect();
    Ok(states)
}

fn parse_record(record: Value) -> Result<EntitySnapshot, String> {
    let snapshot: EntitySnapshot =
        serde_json::from_value(record).map_err(|err| err.to_string())?;
    if let Err(SkillBridgeError::Validation(err)) = snapshot.validate() {
        return Err(err.to_string());
    }
    Ok(snapshot)
}
