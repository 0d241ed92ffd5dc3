use serde::Serialize;

/// Response body for `POST /predict`.
///
/// The request body is [`model::SessionMetrics`]; both front-ends share
/// that contract, so the HTTP surface adds only this wrapper.
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub prediction: f32,
}
