//! Alexa discovery handler.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use uuid::Uuid;

use skillbridge_app::ports::StateSource;
use skillbridge_domain::discovery::EndpointDiscovery;

use crate::error::ApiError;
use crate::state::AppState;

/// `Alexa.Discovery` / `Discover.Response` event.
#[derive(Debug, Serialize)]
pub struct DiscoverResponse {
    pub event: DiscoverEvent,
}

#[derive(Debug, Serialize)]
pub struct DiscoverEvent {
    pub header: EventHeader,
    pub payload: DiscoverPayload,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventHeader {
    pub namespace: &'static str,
    pub name: &'static str,
    pub payload_version: &'static str,
    pub message_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct DiscoverPayload {
    pub endpoints: Vec<EndpointDiscovery>,
}

impl DiscoverResponse {
    /// Wrap `endpoints` in a response event with a fresh message id.
    #[must_use]
    pub fn new(endpoints: Vec<EndpointDiscovery>) -> Self {
        Self {
            event: DiscoverEvent {
                header: EventHeader {
                    namespace: "Alexa.Discovery",
                    name: "Discover.Response",
                    payload_version: "3",
                    message_id: Uuid::new_v4(),
                },
                payload: DiscoverPayload { endpoints },
            },
        }
    }
}

impl IntoResponse for DiscoverResponse {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// `GET /api/discovery`
pub async fn discover<S>(
    State(state): State<AppState<S>>,
) -> Result<DiscoverResponse, ApiError>
where
    S: StateSource + 'static,
{
    let endpoints = state.discovery_service.discovery_documents()?;
    tracing::info!(endpoints = endpoints.len(), "answered discovery request");
    Ok(DiscoverResponse::new(endpoints))
}
