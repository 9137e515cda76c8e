use crate::error::{Result, ServiceError};

pub const EMPTY_INPUT_MESSAGE: &str = "Input data cannot be empty";

/// Rejects empty input. Whitespace-only strings are accepted.
pub fn validate_input(input: &str) -> Result<()> {
    if input.is_empty() {
        return Err(ServiceError::InvalidInput(EMPTY_INPUT_MESSAGE.to_string()));
    }
    Ok(())
}

/// Trims surrounding whitespace, then lowercases.
pub fn preprocess_data(input: &str) -> String {
    input.trim().to_lowercase()
}
