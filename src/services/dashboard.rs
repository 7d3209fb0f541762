use std::sync::Arc;

use crate::api::{ApiClient, get_json};
use crate::error::AppError;
use crate::models::{
    ActivePlans, ConsumedToday, Listing, MonthlyConsumption, RegistryRecord, TotalStudents,
};

pub struct DashboardService {
    client: Arc<dyn ApiClient>,
}

impl DashboardService {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    /// Most recent registry records.
    pub async fn recent_records(&self) -> Result<Listing<RegistryRecord>, AppError> {
        get_json(self.client.as_ref(), "/registro/").await
    }

    pub async fn total_students(&self) -> Result<TotalStudents, AppError> {
        get_json(self.client.as_ref(), "/registro/total-estudiantes").await
    }

    pub async fn consumed_today(&self) -> Result<ConsumedToday, AppError> {
        get_json(self.client.as_ref(), "/registro/total-estudiantes-hoy").await
    }

    pub async fn active_plans(&self) -> Result<ActivePlans, AppError> {
        get_json(self.client.as_ref(), "/registro/total-planes").await
    }

    pub async fn monthly_consumption(&self) -> Result<MonthlyConsumption, AppError> {
        get_json(self.client.as_ref(), "/registro/dashboard/consumo-mes").await
    }
}
