mod predictor;
mod types;

pub use predictor::{PREDICTION_PREFIX, Predictor};
pub use types::{ModelMetadata, PredictionRecord, RequestRecord};
