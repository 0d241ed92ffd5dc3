use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::error;
use model::SessionMetrics;
use serde_json::json;

use crate::router::AppState;
use crate::types::PredictResponse;

/// POST /predict
///
/// Malformed bodies never reach this function; the `Json` extractor rejects
/// them with its default client-error response. A record that deserializes
/// cleanly can only fail inside the artifact, which maps to a 500 here.
pub async fn predict(
    State(state): State<AppState>,
    Json(metrics): Json<SessionMetrics>,
) -> impl IntoResponse {
    let frame = metrics.to_frame();

    match state.artifact.predict(&frame) {
        Ok(scores) => Json(PredictResponse {
            prediction: scores[0],
        })
        .into_response(),
        Err(e) => {
            error!("inference failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": {"type": "inference_error", "message": e.to_string()}
                })),
            )
                .into_response()
        }
    }
}
