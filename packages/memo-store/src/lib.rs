pub mod grafana;

mod error;

pub use error::{Error, Result};
pub use grafana::{AnnotationRequest, AnnotationResponse, Grafana, HealthResponse};
