use tracing::debug;

use crate::{
    error::Result,
    model::ModelMetadata,
    preprocessing::{preprocess_data, validate_input},
};

pub const PREDICTION_PREFIX: &str = "Processed: ";

/// Placeholder predictor: validates, normalizes, and tags its input.
/// Holds no model weights and no mutable state.
#[derive(Debug, Clone)]
pub struct Predictor {
    name: String,
    version: String,
}

impl Predictor {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    pub fn predict(&self, input: &str) -> Result<String> {
        validate_input(input)?;
        let processed = preprocess_data(input);
        debug!(model = %self.name, input_len = input.len(), "prediction complete");
        Ok(format!("{PREDICTION_PREFIX}{processed}"))
    }

    pub fn metadata(&self) -> ModelMetadata {
        ModelMetadata {
            name: self.name.clone(),
            version: self.version.clone(),
            output_prefix: PREDICTION_PREFIX,
        }
    }
}

impl Default for Predictor {
    fn default() -> Self {
        Self::new("text_predictor", "1.0")
    }
}
