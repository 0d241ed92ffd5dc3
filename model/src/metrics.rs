use serde::{Deserialize, Serialize};

use crate::frame::Frame;

/// Canonical feature column names, in training order.
///
/// The artifact was fitted against exactly these columns; both front-ends
/// build their frames from this list so the schema check in
/// [`Artifact::predict`](crate::Artifact::predict) can never trip on input
/// that came through [`SessionMetrics`].
pub const FEATURES: [&str; 5] = [
    "Lines_of_Code",
    "AI_Usage_Hours",
    "Cognitive_Load",
    "Task_Duration_Hours",
    "Errors",
];

/// One developer work session, as both front-ends collect it.
///
/// Serde renames keep the wire names identical to the training columns, so
/// an HTTP body and a dashboard form produce the same record. Deserialization
/// is strict about types (a float where an integer is declared is rejected)
/// and lenient about extras (unknown keys are ignored).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionMetrics {
    #[serde(rename = "Lines_of_Code")]
    pub lines_of_code: i64,
    #[serde(rename = "AI_Usage_Hours")]
    pub ai_usage_hours: i64,
    #[serde(rename = "Cognitive_Load")]
    pub cognitive_load: i64,
    #[serde(rename = "Task_Duration_Hours")]
    pub task_duration_hours: f32,
    #[serde(rename = "Errors")]
    pub errors: f32,
}

impl SessionMetrics {
    /// Returns the feature vector in training order.
    pub fn to_row(&self) -> [f32; 5] {
        [
            self.lines_of_code as f32,
            self.ai_usage_hours as f32,
            self.cognitive_load as f32,
            self.task_duration_hours,
            self.errors,
        ]
    }

    /// Builds the single-row frame the artifact scores.
    ///
    /// # Returns
    /// A one-row [`Frame`] whose columns are [`FEATURES`].
    pub fn to_frame(&self) -> Frame {
        Frame::single_row(&FEATURES, &self.to_row())
    }
}
