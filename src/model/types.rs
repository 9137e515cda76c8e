use serde::{Deserialize, Serialize};

/// One element of an incoming request. Only `body` is read; other keys are
/// ignored and a missing or null `body` reads as the empty string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestRecord {
    #[serde(default)]
    pub body: Option<String>,
}

impl RequestRecord {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
        }
    }

    pub fn body(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub prediction: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelMetadata {
    pub name: String,
    pub version: String,
    pub output_prefix: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_null_body_read_as_empty() {
        let records: Vec<RequestRecord> =
            serde_json::from_str(r#"[{}, {"body": null}, {"other": 1}]"#).unwrap();
        assert!(records.iter().all(|r| r.body().is_empty()));
    }

    #[test]
    fn non_string_body_is_rejected() {
        let parsed = serde_json::from_str::<Vec<RequestRecord>>(r#"[{"body": 42}]"#);
        assert!(parsed.is_err());
    }
}
