use std::sync::Arc;

use axum::{Router, routing::post};
use model::Artifact;

use crate::handlers::predict;

/// Shared handler state.
///
/// The artifact is loaded once at startup and only read afterwards, so the
/// handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub artifact: Arc<Artifact>,
}

/// Creates the prediction router.
///
/// `POST /predict` is the only route; anything else falls through to the
/// framework's default 404/405 handling.
pub fn create_router(artifact: Arc<Artifact>) -> Router {
    let state = AppState { artifact };

    Router::new()
        .route("/predict", post(predict))
        .with_state(state)
}
