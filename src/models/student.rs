use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub codigo_estudiante: String,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub nombre: String,
    #[serde(default)]
    pub grado: Option<String>,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub tipo_alimentacion: String,
}
