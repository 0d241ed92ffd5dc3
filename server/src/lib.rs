pub mod handlers;
pub mod router;
pub mod types;

pub use router::{AppState, create_router};
pub use types::PredictResponse;
