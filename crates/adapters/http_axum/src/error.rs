//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use skillbridge_domain::error::SkillBridgeError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`SkillBridgeError`] to an HTTP response with appropriate status code.
pub struct ApiError(SkillBridgeError);

impl From<SkillBridgeError> for ApiError {
    fn from(err: SkillBridgeError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            SkillBridgeError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            SkillBridgeError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            SkillBridgeError::Capability(err) => {
                tracing::error!(error = %err, "capability error");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            SkillBridgeError::Registry(err) => {
                tracing::error!(error = %err, "registry error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            SkillBridgeError::Source(err) => {
                tracing::error!(error = %err, "state source error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use skillbridge_domain::error::{CapabilityError, NotFoundError, ValidationError};

    use super::*;

    fn status_of(err: impl Into<SkillBridgeError>) -> StatusCode {
        ApiError::from(err.into()).into_response().status()
    }

    #[test]
    fn should_map_not_found_to_404() {
        let err = NotFoundError {
            entity: "Endpoint",
            id: "media_player.den".to_string(),
        };
        assert_eq!(status_of(err), StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_map_validation_to_400() {
        assert_eq!(status_of(ValidationError::EmptyEntityId), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_capability_and_source_errors_to_500() {
        let capability = CapabilityError::MissingAttribute {
            interface: "Alexa.Speaker",
            attribute: "volume_level",
        };
        assert_eq!(status_of(capability), StatusCode::INTERNAL_SERVER_ERROR);

        let source = SkillBridgeError::Source("disk on fire".into());
        assert_eq!(status_of(source), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
