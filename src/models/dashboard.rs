use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalStudents {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub total_estudiantes: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealBreakdown {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub elementary: u64,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub highschool: u64,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodayBreakdown {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub snack: MealBreakdown,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub lunch: MealBreakdown,
}

/// Students who consumed today, split by meal and school section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumedToday {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub total_estudiantes_hoy: u64,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub desglose: TodayBreakdown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivePlans {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub total_estudiantes: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyConsumption {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub mes: Option<u32>,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub anio: Option<i32>,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub total_consumo: u64,
}
