//! Discovery document: how one endpoint is described to the assistant cloud.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::capability::CapabilityDiscovery;

/// Opaque data Alexa echoes back in directives. Always empty.
pub type Cookie = Map<String, Value>;

/// One endpoint of an `Alexa.Discovery` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointDiscovery {
    pub display_categories: Vec<String>,
    pub cookie: Cookie,
    /// Sanitized entity id.
    pub endpoint_id: String,
    pub friendly_name: String,
    pub description: String,
    pub manufacturer_name: String,
    pub additional_attributes: AdditionalAttributes,
    pub capabilities: Vec<CapabilityDiscovery>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalAttributes {
    pub manufacturer: String,
    /// Entity domain.
    pub model: String,
    /// Host platform version.
    pub software_version: String,
    /// Original, unsanitized entity id.
    pub custom_identifier: String,
}
