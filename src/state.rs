use std::sync::Arc;

use crate::api::ApiClient;
use crate::controllers::{DashboardController, RegistryController, StudentsController};
use crate::error::AppError;
use crate::notice::NoticeBoard;
use crate::services::{DashboardService, RegistryService, StudentsService};
use crate::views::Views;

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn ApiClient>,
    pub notices: Arc<NoticeBoard>,
    pub views: Arc<Views>,
    pub dashboard: Arc<DashboardController>,
    pub students: Arc<StudentsController>,
    pub registry: Arc<RegistryController>,
}

impl AppState {
    pub fn new(client: Arc<dyn ApiClient>, notices: Arc<NoticeBoard>) -> Result<Self, AppError> {
        Ok(Self {
            views: Arc::new(Views::new()?),
            dashboard: Arc::new(DashboardController::new(DashboardService::new(client.clone()))),
            students: Arc::new(StudentsController::new(StudentsService::new(client.clone()))),
            registry: Arc::new(RegistryController::new(RegistryService::new(client.clone()))),
            client,
            notices,
        })
    }
}
