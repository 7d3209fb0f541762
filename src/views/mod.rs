pub mod pages;

use serde::Serialize;
use tera::{Context, Tera};

use crate::error::AppError;

pub use pages::{
    Cards, DashboardPage, FilterValues, Placeholder, RecordRow, RegistryPage, StudentRow,
    StudentsPage, Table,
};

#[derive(Debug, Clone, Serialize)]
pub struct NavEntry {
    pub slug: &'static str,
    pub title: &'static str,
}

/// Everything the shell layout needs around a page fragment.
#[derive(Debug, Clone, Serialize)]
pub struct Layout<'a> {
    pub title: &'a str,
    pub active: &'a str,
    pub nav: Vec<NavEntry>,
    pub notices: Vec<String>,
    pub content: String,
}

/// Compiled templates. Output is HTML-escaped unless a template opts out.
pub struct Views {
    tera: Tera,
}

impl Views {
    pub fn new() -> Result<Self, AppError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("layout.html", include_str!("../../templates/layout.html")),
            ("record_head.html", include_str!("../../templates/record_head.html")),
            ("record_rows.html", include_str!("../../templates/record_rows.html")),
            ("dashboard.html", include_str!("../../templates/dashboard.html")),
            ("fecha.html", include_str!("../../templates/fecha.html")),
            ("estudiantes.html", include_str!("../../templates/estudiantes.html")),
            ("missing.html", include_str!("../../templates/missing.html")),
        ])?;
        Ok(Self { tera })
    }

    pub fn dashboard(&self, page: &DashboardPage) -> Result<String, AppError> {
        self.render("dashboard.html", page)
    }

    pub fn registry(&self, page: &RegistryPage) -> Result<String, AppError> {
        self.render("fecha.html", page)
    }

    pub fn students(&self, page: &StudentsPage) -> Result<String, AppError> {
        self.render("estudiantes.html", page)
    }

    pub fn missing(&self) -> Result<String, AppError> {
        Ok(self.tera.render("missing.html", &Context::new())?)
    }

    pub fn layout(&self, layout: &Layout<'_>) -> Result<String, AppError> {
        self.render("layout.html", layout)
    }

    fn render<T: Serialize>(&self, template: &str, value: &T) -> Result<String, AppError> {
        let context = Context::from_serialize(value)?;
        Ok(self.tera.render(template, &context)?)
    }
}
