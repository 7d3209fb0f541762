pub mod dashboard;
pub mod query;
pub mod registry;
pub mod students;

pub use dashboard::DashboardService;
pub use registry::RegistryService;
pub use students::StudentsService;

use tracing::error;

use crate::error::AppError;

/// Logs a failed data source and yields `None` so sibling widgets keep working.
pub fn logged<T>(context: &str, result: Result<T, AppError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            error!("{} failed: {}", context, e);
            None
        }
    }
}
