use tracing::warn;

use crate::error::AppError;
use crate::models::{Listing, Student, StudentFilter};
use crate::services::StudentsService;
use crate::views::{StudentsPage, Table};

/// Student search screen.
pub struct StudentsController {
    service: StudentsService,
}

impl StudentsController {
    pub fn new(service: StudentsService) -> Self {
        Self { service }
    }

    /// Lists every student with an active plan.
    pub async fn init(&self) -> StudentsPage {
        let filter = StudentFilter::default();
        render(self.service.with_plan().await, &filter)
    }

    /// Searches by the given fields, or falls back to `init` when all are blank.
    pub async fn search(&self, filter: StudentFilter) -> StudentsPage {
        let filter = filter.normalized();
        if filter.is_empty() {
            return self.init().await;
        }
        render(self.service.search(&filter).await, &filter)
    }
}

fn render(result: Result<Listing<Student>, AppError>, filter: &StudentFilter) -> StudentsPage {
    match result {
        Ok(listing) => StudentsPage::from_listing(&listing, filter),
        Err(e) => {
            warn!("student listing failed: {}", e);
            StudentsPage::new(Table::failed(), filter)
        }
    }
}
