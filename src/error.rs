// Error types shared across the client

use serde::Deserialize;

/// Everything a client call can fail with: transport problems, the API's
/// error envelope, local validation, and storage I/O.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response carrying the API error envelope.
    #[error("API error {code}: {message}{}", format_error_data(.data))]
    Api {
        code: i64,
        message: String,
        data: Option<serde_json::Value>,
    },

    #[error("invalid flight mode '{0}' (expected CRUISE, BURN, DRIFT or STEALTH)")]
    InvalidFlightMode(String),

    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("config write error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

fn format_error_data(data: &Option<serde_json::Value>) -> String {
    match data {
        Some(value) => format!(" ({})", value),
        None => String::new(),
    }
}

/// Wire shape of API failures: `{"error": {"code": .., "message": .., "data": ..}}`
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ApiError,
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub code: i64,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_parses_code_message_and_data() {
        let body = r#"{
            "error": {
                "message": "Request could not be processed due to an invalid payload.",
                "code": 422,
                "data": { "symbol": ["The symbol field is required."] }
            }
        }"#;

        let envelope: ErrorEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.error.code, 422);
        assert!(envelope.error.message.contains("invalid payload"));
        assert!(envelope.error.data.is_some());
    }

    #[test]
    fn envelope_data_is_optional() {
        let body = r#"{"error": {"code": 4111, "message": "Ship is currently in transit."}}"#;
        let envelope: ErrorEnvelope = serde_json::from_str(body).unwrap();
        assert!(envelope.error.data.is_none());
    }

    #[test]
    fn api_error_display_includes_data_when_present() {
        let err = Error::Api {
            code: 422,
            message: "bad payload".into(),
            data: Some(serde_json::json!({"symbol": ["required"]})),
        };
        let text = err.to_string();
        assert!(text.contains("422"));
        assert!(text.contains("bad payload"));
        assert!(text.contains("symbol"));
    }
}
