pub mod dashboard_usecase;

pub use dashboard_usecase::{DashboardServices, DashboardUseCase, RuntimeSettings};
