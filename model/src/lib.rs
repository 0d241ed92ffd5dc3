mod artifact;
mod error;
mod frame;
mod metrics;
mod scaler;

pub use artifact::Artifact;
pub use error::{ArtifactError, PredictError};
pub use frame::Frame;
pub use metrics::{FEATURES, SessionMetrics};
pub use scaler::Scaler;
