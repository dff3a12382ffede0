//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod discovery;
#[allow(clippy::missing_errors_doc)]
pub mod endpoints;

use axum::Router;
use axum::routing::get;

use skillbridge_app::ports::StateSource;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: StateSource + 'static,
{
    Router::new()
        .route("/discovery", get(discovery::discover::<S>))
        .route(
            "/endpoints/{entity_id}/properties",
            get(endpoints::properties::<S>),
        )
}
