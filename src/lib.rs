pub mod config;
pub mod error;
pub mod handler;
pub mod model;
pub mod preprocessing;
pub mod server;

pub use config::AppConfig;
pub use error::ServiceError;
pub use handler::{HandlerContext, ServingHandler, TextHandler};
pub use model::{ModelMetadata, PredictionRecord, Predictor, RequestRecord};
pub use server::build_router;
