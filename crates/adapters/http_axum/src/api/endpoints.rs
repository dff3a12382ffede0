//! Endpoint state report handler.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use skillbridge_app::ports::StateSource;
use skillbridge_domain::alexa_id::sanitize;
use skillbridge_domain::capability::PropertyValue;

use crate::error::ApiError;
use crate::state::AppState;

/// Current property values of one endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertiesReport {
    pub endpoint_id: String,
    pub properties: Vec<PropertyValue>,
}

impl IntoResponse for PropertiesReport {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// `GET /api/endpoints/{entity_id}/properties`
pub async fn properties<S>(
    State(state): State<AppState<S>>,
    Path(entity_id): Path<String>,
) -> Result<PropertiesReport, ApiError>
where
    S: StateSource + 'static,
{
    let properties = state.discovery_service.endpoint_properties(&entity_id)?;
    Ok(PropertiesReport {
        endpoint_id: sanitize(&entity_id),
        properties,
    })
}
