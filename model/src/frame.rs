use ndarray::{Array1, Array2, Axis};

/// A column-labelled matrix of feature values.
///
/// This is the hand-off type between the front-ends and the artifact: each
/// row is one observation, the column names are carried alongside so the
/// artifact can check them against its trained features. The frame itself
/// performs no schema validation; that happens at predict time.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    columns: Vec<String>,
    values: Array2<f32>,
}

impl Frame {
    /// Creates a frame from named columns and a value matrix.
    ///
    /// # Panics
    /// Panics if the matrix width differs from the number of column names.
    pub fn new(columns: Vec<String>, values: Array2<f32>) -> Self {
        assert_eq!(
            columns.len(),
            values.ncols(),
            "frame width must match column names"
        );
        Self { columns, values }
    }

    /// Creates a one-row frame, the common case for interactive scoring.
    pub fn single_row(columns: &[&str], row: &[f32]) -> Self {
        let values = Array1::from(row.to_vec()).insert_axis(Axis(0));
        Self::new(columns.iter().map(|c| c.to_string()).collect(), values)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &Array2<f32> {
        &self.values
    }

    pub fn nrows(&self) -> usize {
        self.values.nrows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    #[test]
    fn single_row_has_one_by_n_shape() {
        let frame = Frame::single_row(&["a", "b", "c"], &[1.0, 2.0, 3.0]);
        assert_eq!(frame.nrows(), 1);
        assert_eq!(frame.columns(), ["a", "b", "c"]);
        assert_eq!(frame.values()[[0, 1]], 2.0);
    }

    #[test]
    #[should_panic(expected = "frame width must match column names")]
    fn new_rejects_width_mismatch() {
        Frame::new(
            vec!["a".to_string()],
            arr2(&[[1.0_f32, 2.0], [3.0, 4.0]]),
        );
    }
}
