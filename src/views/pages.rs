use serde::Serialize;

use crate::models::{
    ALL_PLANS, ActivePlans, ConsumedToday, Listing, MealBreakdown, MonthlyConsumption, PLANS,
    RegistryFilter, RegistryRecord, Student, StudentFilter, TotalStudents,
};

pub const LOAD_FAILED: &str = "Error al cargar datos";
pub const NO_RECORDS: &str = "No se encontraron registros";
pub const NO_RECENT_RECORDS: &str = "No hay registros recientes";
pub const NO_RESULTS: &str = "No se encontraron resultados";

/// Single full-width row shown instead of data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placeholder {
    pub text: String,
    pub error: bool,
}

impl Placeholder {
    pub fn info(text: &str) -> Self {
        Self {
            text: text.to_string(),
            error: false,
        }
    }

    pub fn failed() -> Self {
        Self {
            text: LOAD_FAILED.to_string(),
            error: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordRow {
    pub codigo_estudiante: String,
    pub nombre: String,
    pub grado: String,
    pub tipo_alimentacion: String,
    pub fecha_hora: String,
    pub plan: String,
    pub estado: String,
}

impl From<&RegistryRecord> for RecordRow {
    fn from(record: &RegistryRecord) -> Self {
        Self {
            codigo_estudiante: record.codigo_estudiante.clone(),
            nombre: record.nombre.clone(),
            grado: record.grado.clone().unwrap_or_default(),
            tipo_alimentacion: record.tipo_alimentacion.clone(),
            fecha_hora: record.display_timestamp(),
            plan: record.plan.clone(),
            estado: record.estado.clone(),
        }
    }
}

/// Rows for a table, or the placeholder replacing them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table<R> {
    pub rows: Vec<R>,
    pub message: Option<Placeholder>,
}

impl<R> Table<R> {
    pub fn from_rows(rows: Vec<R>, empty: &str) -> Self {
        let message = rows.is_empty().then(|| Placeholder::info(empty));
        Self { rows, message }
    }

    pub fn failed() -> Self {
        Self {
            rows: Vec::new(),
            message: Some(Placeholder::failed()),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.message.as_ref().is_some_and(|m| m.error)
    }
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            message: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanOption {
    pub value: &'static str,
    pub selected: bool,
}

/// Current filter as form values; the plan selector falls back to "TODOS".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterValues {
    pub fecha_inicio: String,
    pub fecha_fin: String,
    pub codigo_estudiante: String,
    pub nombre: String,
    pub grado: String,
    pub plan: String,
    pub plans: Vec<PlanOption>,
}

impl Default for FilterValues {
    fn default() -> Self {
        Self::from(None)
    }
}

impl From<Option<&RegistryFilter>> for FilterValues {
    fn from(filter: Option<&RegistryFilter>) -> Self {
        let value = |v: &Option<String>| v.clone().unwrap_or_default();
        let empty = RegistryFilter::default();
        let f = filter.unwrap_or(&empty);

        let plan = f
            .plan
            .clone()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| ALL_PLANS.to_string());
        let plans = PLANS
            .iter()
            .map(|&option| PlanOption {
                value: option,
                selected: option == plan,
            })
            .collect();

        Self {
            fecha_inicio: value(&f.fecha_inicio),
            fecha_fin: value(&f.fecha_fin),
            codigo_estudiante: value(&f.codigo_estudiante),
            nombre: value(&f.nombre),
            grado: value(&f.grado),
            plan,
            plans,
        }
    }
}

/// Date-registry screen: table, pagination indicators and button state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegistryPage {
    pub table: Table<RecordRow>,
    pub page: u32,
    pub total: u64,
    pub visible: usize,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub filter: FilterValues,
}

impl RegistryPage {
    pub fn loaded(
        listing: &Listing<RegistryRecord>,
        page: u32,
        prev_disabled: bool,
        next_disabled: bool,
        filter: Option<&RegistryFilter>,
    ) -> Self {
        let rows: Vec<RecordRow> = listing.data.iter().map(RecordRow::from).collect();
        Self {
            visible: rows.len(),
            table: Table::from_rows(rows, NO_RECORDS),
            page,
            total: listing.total,
            prev_disabled,
            next_disabled,
            filter: filter.into(),
        }
    }

    pub fn failed(page: u32, filter: Option<&RegistryFilter>) -> Self {
        Self {
            table: Table::failed(),
            page,
            total: 0,
            visible: 0,
            prev_disabled: page <= 1,
            next_disabled: true,
            filter: filter.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StudentRow {
    pub codigo_estudiante: String,
    pub nombre: String,
    pub grado: String,
    pub tipo_alimentacion: String,
}

impl From<&Student> for StudentRow {
    fn from(student: &Student) -> Self {
        Self {
            codigo_estudiante: student.codigo_estudiante.clone(),
            nombre: student.nombre.clone(),
            grado: student.grado.clone().unwrap_or_default(),
            tipo_alimentacion: student.tipo_alimentacion.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StudentsPage {
    pub table: Table<StudentRow>,
    pub nombre: String,
    pub codigo_estudiante: String,
    pub grado: String,
}

impl StudentsPage {
    pub fn new(table: Table<StudentRow>, filter: &StudentFilter) -> Self {
        let value = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            table,
            nombre: value(&filter.nombre),
            codigo_estudiante: value(&filter.codigo_estudiante),
            grado: value(&filter.grado),
        }
    }

    pub fn from_listing(listing: &Listing<Student>, filter: &StudentFilter) -> Self {
        let rows = listing.data.iter().map(StudentRow::from).collect();
        Self::new(Table::from_rows(rows, NO_RESULTS), filter)
    }
}

/// Summary cards; `None` marks a widget whose source failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cards {
    pub total_students: Option<u64>,
    pub active_plans: Option<u64>,
    pub today_total: Option<u64>,
    pub snack: MealBreakdown,
    pub lunch: MealBreakdown,
    pub monthly_total: Option<u64>,
}

impl Cards {
    pub fn new(
        total: Option<TotalStudents>,
        today: Option<ConsumedToday>,
        plans: Option<ActivePlans>,
        month: Option<MonthlyConsumption>,
    ) -> Self {
        let (today_total, snack, lunch) = match today {
            Some(t) => (
                Some(t.total_estudiantes_hoy),
                t.desglose.snack,
                t.desglose.lunch,
            ),
            None => (None, MealBreakdown::default(), MealBreakdown::default()),
        };
        Self {
            total_students: total.map(|t| t.total_estudiantes),
            active_plans: plans.map(|p| p.total_estudiantes),
            today_total,
            snack,
            lunch,
            monthly_total: month.map(|m| m.total_consumo),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardPage {
    pub cards: Cards,
    pub table: Table<RecordRow>,
}
