pub mod dashboard;
pub mod registry;
pub mod students;
pub mod view_state;

pub use dashboard::DashboardController;
pub use registry::{Refresh, RegistryController};
pub use students::StudentsController;
pub use view_state::{PAGE_SIZE, ViewState};
