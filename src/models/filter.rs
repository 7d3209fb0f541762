use serde::{Deserialize, Serialize};

/// Plan value meaning "every plan"; never sent to the backend.
pub const ALL_PLANS: &str = "TODOS";

/// Choices of the plan selector, "every plan" first.
pub const PLANS: [&str; 3] = [ALL_PLANS, "REFRIGERIO", "ALMUERZO"];

/// Search fields of the date-registry screen. A blank field is no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryFilter {
    pub fecha_inicio: Option<String>,
    pub fecha_fin: Option<String>,
    pub codigo_estudiante: Option<String>,
    pub nombre: Option<String>,
    pub grado: Option<String>,
    pub plan: Option<String>,
}

impl RegistryFilter {
    /// Trims every field and drops blanks and the all-plans sentinel.
    pub fn normalized(self) -> Self {
        Self {
            fecha_inicio: present(self.fecha_inicio),
            fecha_fin: present(self.fecha_fin),
            codigo_estudiante: present(self.codigo_estudiante),
            nombre: present(self.nombre),
            grado: present(self.grado),
            plan: present(self.plan).filter(|plan| plan != ALL_PLANS),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }

    /// Present fields as query pairs, in declaration order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let plan = self.plan.as_deref().filter(|plan| plan.trim() != ALL_PLANS);
        [
            ("fecha_inicio", self.fecha_inicio.as_deref()),
            ("fecha_fin", self.fecha_fin.as_deref()),
            ("codigo_estudiante", self.codigo_estudiante.as_deref()),
            ("nombre", self.nombre.as_deref()),
            ("grado", self.grado.as_deref()),
            ("plan", plan),
        ]
        .into_iter()
        .filter_map(|(key, value)| pair(key, value))
        .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentFilter {
    pub nombre: Option<String>,
    pub codigo_estudiante: Option<String>,
    pub grado: Option<String>,
}

impl StudentFilter {
    pub fn normalized(self) -> Self {
        Self {
            nombre: present(self.nombre),
            codigo_estudiante: present(self.codigo_estudiante),
            grado: present(self.grado),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        [
            ("nombre", self.nombre.as_deref()),
            ("codigo_estudiante", self.codigo_estudiante.as_deref()),
            ("grado", self.grado.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| pair(key, value))
        .collect()
    }
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn pair(key: &'static str, value: Option<&str>) -> Option<(&'static str, String)> {
    let value = value?.trim();
    (!value.is_empty()).then(|| (key, value.to_string()))
}
