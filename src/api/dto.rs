use serde::Deserialize;
use serde_json::Value;

pub const REQUEST_FAILED: &str = "Ocurrió un error en la petición.";
pub const UNKNOWN_ERROR: &str = "Error desconocido";

/// Error body of a failed backend call (`{"detail": ...}` or `{"message": ...}`).
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn message_from(body: &[u8]) -> String {
        let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) else {
            return REQUEST_FAILED.to_string();
        };

        let detail = parsed.detail.and_then(|detail| match detail {
            Value::String(text) if text.is_empty() => None,
            Value::String(text) => Some(text),
            Value::Null | Value::Bool(false) => None,
            other => Some(other.to_string()),
        });

        detail
            .or(parsed.message.filter(|m| !m.is_empty()))
            .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
    }
}
