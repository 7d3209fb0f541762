use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One meal-consumption event as the backend reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub codigo_estudiante: String,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub nombre: String,
    #[serde(default)]
    pub grado: Option<String>,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub tipo_alimentacion: String,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub fecha_hora: String,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub plan: String,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub estado: String,
}

impl RegistryRecord {
    pub fn display_timestamp(&self) -> String {
        format_timestamp(&self.fecha_hora)
    }
}

/// `{data, total}` envelope shared by every listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Listing<T> {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub data: Vec<T>,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub total: u64,
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total: 0,
        }
    }
}

/// `2024-05-01T12:30:00.123` becomes `2024-05-01 - 12:30:00`.
pub fn format_timestamp(iso: &str) -> String {
    if iso.is_empty() {
        return String::new();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d - %H:%M:%S").to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(iso) {
        return dt.naive_local().format("%Y-%m-%d - %H:%M:%S").to_string();
    }
    iso.replacen('T', " - ", 1)
        .split('.')
        .next()
        .unwrap_or_default()
        .to_string()
}
