//! Lifecycle hooks a serving host calls for each request.
//!
//! The host calls [`ServingHandler::initialize`] once, then runs
//! `preprocess -> inference -> postprocess` per request (bundled as
//! [`ServingHandler::handle`]). Failures propagate to the host unchanged.

use tracing::info;

use crate::{
    error::{Result, ServiceError},
    model::{ModelMetadata, PredictionRecord, Predictor, RequestRecord},
};

/// Host-provided context handed to `initialize`. Opaque to [`TextHandler`].
#[derive(Debug, Clone, Default)]
pub struct HandlerContext {
    pub model_name: String,
    pub model_version: String,
}

pub trait ServingHandler: Send + Sync {
    fn initialize(&mut self, context: &HandlerContext) -> Result<()>;

    fn preprocess(&self, records: &[RequestRecord]) -> Result<String>;

    fn inference(&self, input: &str) -> Result<String>;

    fn postprocess(&self, prediction: String) -> Vec<PredictionRecord>;

    fn handle(&self, records: Vec<RequestRecord>) -> Result<Vec<PredictionRecord>> {
        let input = self.preprocess(&records)?;
        let prediction = self.inference(&input)?;
        Ok(self.postprocess(prediction))
    }
}

/// Text handler owning a single [`Predictor`] for its whole lifetime.
#[derive(Debug, Clone, Default)]
pub struct TextHandler {
    predictor: Predictor,
}

impl TextHandler {
    pub fn new(predictor: Predictor) -> Self {
        Self { predictor }
    }

    pub fn metadata(&self) -> ModelMetadata {
        self.predictor.metadata()
    }
}

impl ServingHandler for TextHandler {
    fn initialize(&mut self, context: &HandlerContext) -> Result<()> {
        info!(model = %context.model_name, version = %context.model_version, "handler initialized");
        Ok(())
    }

    fn preprocess(&self, records: &[RequestRecord]) -> Result<String> {
        let first = records.first().ok_or_else(|| {
            ServiceError::BadRequest("request must contain at least one record".into())
        })?;
        Ok(first.body().to_string())
    }

    fn inference(&self, input: &str) -> Result<String> {
        self.predictor.predict(input)
    }

    fn postprocess(&self, prediction: String) -> Vec<PredictionRecord> {
        vec![PredictionRecord { prediction }]
    }
}
