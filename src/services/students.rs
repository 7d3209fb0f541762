use std::sync::Arc;

use tracing::debug;

use crate::api::{ApiClient, get_json};
use crate::error::AppError;
use crate::models::{Listing, Student, StudentFilter};
use crate::services::query;

pub struct StudentsService {
    client: Arc<dyn ApiClient>,
}

impl StudentsService {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    /// Every student currently enrolled in a meal plan.
    pub async fn with_plan(&self) -> Result<Listing<Student>, AppError> {
        let endpoint = "/registro/estudiantes-con-plan";
        debug!("students with plan: {}", endpoint);
        get_json(self.client.as_ref(), endpoint).await
    }

    pub async fn search(&self, filter: &StudentFilter) -> Result<Listing<Student>, AppError> {
        let endpoint = query::endpoint("/registro/buscar-estudiantes", &filter.query_pairs())?;
        debug!("student search: {}", endpoint);
        get_json(self.client.as_ref(), &endpoint).await
    }
}
