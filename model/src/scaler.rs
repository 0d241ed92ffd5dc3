use ndarray::{Array1, Array2};

/// Column-wise standardization baked into the trained pipeline.
///
/// Applies `(x - mean) / scale` with the statistics captured at training
/// time. The vectors are validated against the feature count when the
/// artifact is built, so `transform` can assume matching widths.
#[derive(Debug, Clone, PartialEq)]
pub struct Scaler {
    mean: Array1<f32>,
    scale: Array1<f32>,
}

impl Scaler {
    /// Creates a scaler from per-column statistics.
    ///
    /// # Panics
    /// Panics if the vectors differ in length.
    pub fn new(mean: Array1<f32>, scale: Array1<f32>) -> Self {
        assert_eq!(mean.len(), scale.len(), "scaler vectors must match");
        Self { mean, scale }
    }

    pub fn num_features(&self) -> usize {
        self.mean.len()
    }

    /// Standardizes every row of `x`.
    pub fn transform(&self, x: &Array2<f32>) -> Array2<f32> {
        (x - &self.mean) / &self.scale
    }
}
