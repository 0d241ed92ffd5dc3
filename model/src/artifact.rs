use std::path::Path;

use ndarray::Array1;
use serde::Deserialize;

use crate::error::{ArtifactError, PredictError};
use crate::frame::Frame;
use crate::scaler::Scaler;

/// Raw artifact schema, as serialized by the training side.
///
/// Parsed first, validated afterwards; only a successful build produces an
/// [`Artifact`].
#[derive(Debug, Deserialize)]
struct ArtifactDraft {
    target: String,
    features: Vec<String>,
    weights: Vec<f32>,
    intercept: f32,
    #[serde(default)]
    scaler: Option<ScalerDraft>,
}

#[derive(Debug, Deserialize)]
struct ScalerDraft {
    mean: Vec<f32>,
    scale: Vec<f32>,
}

/// A trained regression estimator, loaded once per process.
///
/// The artifact owns the standardization step and the linear head produced
/// by the external training run. It is immutable after [`Artifact::load`]
/// and takes `&self` everywhere, so a single instance behind an `Arc` can
/// score concurrent requests without locking.
#[derive(Debug, Clone)]
pub struct Artifact {
    target: String,
    features: Vec<String>,
    weights: Array1<f32>,
    intercept: f32,
    scaler: Option<Scaler>,
}

impl Artifact {
    /// Fixed relative path both front-ends load from.
    pub const DEFAULT_PATH: &'static str = "model.json";

    /// Reads, parses and validates an artifact file.
    ///
    /// Both front-ends call this exactly once at startup; a failure here is
    /// fatal to the calling process.
    ///
    /// # Errors
    /// Returns [`ArtifactError`] if the file cannot be read, is not valid
    /// JSON for the schema, or violates a structural invariant.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parses and validates an artifact from its JSON text.
    ///
    /// # Errors
    /// Returns [`ArtifactError`] if the text is not valid JSON for the
    /// schema or violates a structural invariant.
    pub fn from_json(content: &str) -> Result<Self, ArtifactError> {
        let draft: ArtifactDraft = serde_json::from_str(content)?;
        build(draft)
    }

    /// Name of the predicted quantity, e.g. `Task_Success_Rate`.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Feature column names the estimator was trained on, in order.
    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn num_features(&self) -> usize {
        self.features.len()
    }

    /// Scores every row of `frame`, one prediction per row.
    ///
    /// The frame's columns must match the trained feature names exactly;
    /// standardization (if the pipeline has one) is applied before the
    /// linear head `x . w + b`.
    ///
    /// # Errors
    /// Returns [`PredictError`] if the columns are missing, reordered or
    /// renamed relative to the trained features.
    pub fn predict(&self, frame: &Frame) -> Result<Array1<f32>, PredictError> {
        self.check_columns(frame.columns())?;

        let x = match &self.scaler {
            Some(scaler) => scaler.transform(frame.values()),
            None => frame.values().clone(),
        };

        Ok(x.dot(&self.weights) + self.intercept)
    }

    fn check_columns(&self, columns: &[String]) -> Result<(), PredictError> {
        if columns.len() != self.features.len() {
            return Err(PredictError::ColumnCount {
                got: columns.len(),
                expected: self.features.len(),
            });
        }
        for (position, (got, expected)) in columns.iter().zip(&self.features).enumerate() {
            if got != expected {
                return Err(PredictError::ColumnMismatch {
                    position,
                    got: got.clone(),
                    expected: expected.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Validates a parsed draft and builds the runtime artifact.
fn build(draft: ArtifactDraft) -> Result<Artifact, ArtifactError> {
    let invalid = |msg: String| Err(ArtifactError::Invalid(msg));

    if draft.target.is_empty() {
        return invalid("target must not be empty".into());
    }
    if draft.features.is_empty() {
        return invalid("features must not be empty".into());
    }
    if draft.weights.len() != draft.features.len() {
        return invalid(format!(
            "weights length mismatch: got {}, expected {}",
            draft.weights.len(),
            draft.features.len()
        ));
    }
    if draft.weights.iter().any(|w| !w.is_finite()) {
        return invalid("weights must be finite".into());
    }
    if !draft.intercept.is_finite() {
        return invalid("intercept must be finite".into());
    }

    let scaler = match draft.scaler {
        Some(s) => Some(build_scaler(s, draft.features.len())?),
        None => None,
    };

    Ok(Artifact {
        target: draft.target,
        features: draft.features,
        weights: Array1::from(draft.weights),
        intercept: draft.intercept,
        scaler,
    })
}

fn build_scaler(draft: ScalerDraft, num_features: usize) -> Result<Scaler, ArtifactError> {
    let invalid = |msg: String| Err(ArtifactError::Invalid(msg));

    if draft.mean.len() != num_features {
        return invalid(format!(
            "scaler mean length mismatch: got {}, expected {num_features}",
            draft.mean.len()
        ));
    }
    if draft.scale.len() != num_features {
        return invalid(format!(
            "scaler scale length mismatch: got {}, expected {num_features}",
            draft.scale.len()
        ));
    }
    if draft.mean.iter().any(|m| !m.is_finite()) {
        return invalid("scaler mean must be finite".into());
    }
    if draft.scale.iter().any(|s| !s.is_finite() || *s == 0.0) {
        return invalid("scaler scale must be finite and non-zero".into());
    }

    Ok(Scaler::new(
        Array1::from(draft.mean),
        Array1::from(draft.scale),
    ))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::metrics::SessionMetrics;

    fn draft(features: &[&str], weights: &[f32], intercept: f32) -> ArtifactDraft {
        ArtifactDraft {
            target: "Task_Success_Rate".to_string(),
            features: features.iter().map(|f| f.to_string()).collect(),
            weights: weights.to_vec(),
            intercept,
            scaler: None,
        }
    }

    fn scaled_draft() -> ArtifactDraft {
        ArtifactDraft {
            scaler: Some(ScalerDraft {
                mean: vec![2.0, 4.0, 0.0],
                scale: vec![2.0, 0.5, 4.0],
            }),
            ..draft(&["a", "b", "c"], &[1.0, 2.0, -1.0], 1.0)
        }
    }

    #[test]
    fn predict_without_scaler_is_linear_head() {
        let artifact = build(draft(&["a", "b", "c"], &[0.5, 1.0, 2.0], 10.0)).unwrap();
        let frame = Frame::single_row(&["a", "b", "c"], &[4.0, 3.0, 1.0]);
        let scores = artifact.predict(&frame).unwrap();
        assert_eq!(scores.to_vec(), vec![17.0]);
    }

    #[test]
    fn predict_applies_scaler_before_linear_head() {
        let artifact = build(scaled_draft()).unwrap();
        // standardized row: [1, -2, 2] -> 1*1 + 2*(-2) + (-1)*2 + 1 = -4
        let frame = Frame::single_row(&["a", "b", "c"], &[4.0, 3.0, 8.0]);
        let scores = artifact.predict(&frame).unwrap();
        assert_eq!(scores.to_vec(), vec![-4.0]);
    }

    #[test]
    fn predict_scores_each_row() {
        let artifact = build(draft(&["a", "b", "c"], &[0.5, 1.0, 2.0], 10.0)).unwrap();
        let frame = Frame::new(
            vec!["a".into(), "b".into(), "c".into()],
            ndarray::arr2(&[[4.0, 3.0, 1.0], [0.0, 0.0, 0.0]]),
        );
        let scores = artifact.predict(&frame).unwrap();
        assert_eq!(scores.to_vec(), vec![17.0, 10.0]);
    }

    #[test]
    fn predict_rejects_renamed_column() {
        let artifact = build(draft(&["a", "b", "c"], &[1.0, 1.0, 1.0], 0.0)).unwrap();
        let frame = Frame::single_row(&["a", "x", "c"], &[1.0, 2.0, 3.0]);
        match artifact.predict(&frame) {
            Err(PredictError::ColumnMismatch { position, got, expected }) => {
                assert_eq!(position, 1);
                assert_eq!(got, "x");
                assert_eq!(expected, "b");
            }
            other => panic!("expected column mismatch, got {other:?}"),
        }
    }

    #[test]
    fn predict_rejects_reordered_columns() {
        let artifact = build(draft(&["a", "b", "c"], &[1.0, 1.0, 1.0], 0.0)).unwrap();
        let frame = Frame::single_row(&["b", "a", "c"], &[1.0, 2.0, 3.0]);
        assert!(matches!(
            artifact.predict(&frame),
            Err(PredictError::ColumnMismatch { position: 0, .. })
        ));
    }

    #[test]
    fn predict_rejects_wrong_column_count() {
        let artifact = build(draft(&["a", "b", "c"], &[1.0, 1.0, 1.0], 0.0)).unwrap();
        let frame = Frame::single_row(&["a", "b"], &[1.0, 2.0]);
        assert!(matches!(
            artifact.predict(&frame),
            Err(PredictError::ColumnCount { got: 2, expected: 3 })
        ));
    }

    #[test]
    fn build_rejects_weight_count_mismatch() {
        let result = build(draft(&["a", "b", "c"], &[1.0, 2.0], 0.0));
        assert!(matches!(result, Err(ArtifactError::Invalid(_))));
    }

    #[test]
    fn build_rejects_empty_features() {
        let result = build(draft(&[], &[], 0.0));
        assert!(matches!(result, Err(ArtifactError::Invalid(_))));
    }

    #[test]
    fn build_rejects_non_finite_weight() {
        let result = build(draft(&["a"], &[f32::NAN], 0.0));
        assert!(matches!(result, Err(ArtifactError::Invalid(_))));
    }

    #[test]
    fn build_rejects_zero_scale() {
        let mut d = scaled_draft();
        if let Some(s) = d.scaler.as_mut() {
            s.scale[1] = 0.0;
        }
        assert!(matches!(build(d), Err(ArtifactError::Invalid(_))));
    }

    #[test]
    fn build_rejects_scaler_length_mismatch() {
        let mut d = scaled_draft();
        if let Some(s) = d.scaler.as_mut() {
            s.mean.push(0.0);
        }
        assert!(matches!(build(d), Err(ArtifactError::Invalid(_))));
    }

    #[test]
    fn load_reads_artifact_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "target": "Task_Success_Rate",
                "features": ["Lines_of_Code", "AI_Usage_Hours", "Cognitive_Load",
                             "Task_Duration_Hours", "Errors"],
                "weights": [1.0, 1.0, 1.0, 1.0, 1.0],
                "intercept": 0.0
            }}"#
        )
        .unwrap();

        let artifact = Artifact::load(file.path()).unwrap();
        assert_eq!(artifact.target(), "Task_Success_Rate");
        assert_eq!(artifact.num_features(), 5);

        let metrics: SessionMetrics = serde_json::from_str(
            r#"{"Lines_of_Code": 500, "AI_Usage_Hours": 5, "Cognitive_Load": 50,
                "Task_Duration_Hours": 2.5, "Errors": 1.0}"#,
        )
        .unwrap();
        let scores = artifact.predict(&metrics.to_frame()).unwrap();
        assert_eq!(scores.to_vec(), vec![558.5]);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        match Artifact::load("definitely/not/here.json") {
            Err(ArtifactError::Io { path, .. }) => {
                assert_eq!(path.to_str(), Some("definitely/not/here.json"));
            }
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn load_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        assert!(matches!(
            Artifact::load(file.path()),
            Err(ArtifactError::Json(_))
        ));
    }
}
