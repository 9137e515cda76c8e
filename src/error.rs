use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid request: {0}")]
    BadRequest(String),
    #[error("model not found: {0}")]
    ModelNotFound(String),
}

pub type Result<T> = std::result::Result<T, ServiceError>;

impl ServiceError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::InvalidInput(_) | ServiceError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::ModelNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = serde_json::json!({
            "error": self.to_string(),
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_maps_to_bad_request() {
        let err = ServiceError::InvalidInput("Input data cannot be empty".into());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "invalid input: Input data cannot be empty");
    }

    #[test]
    fn unknown_model_maps_to_not_found() {
        let err = ServiceError::ModelNotFound("resnet".into());
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
