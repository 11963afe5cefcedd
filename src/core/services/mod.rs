pub mod calendar_service;
pub mod expense_service;
pub mod optimization_service;
pub mod renewal_service;
pub mod summary_service;

pub use calendar_service::{CalendarService, MonthRenewals, MonthView};
pub use expense_service::ExpenseService;
pub use optimization_service::{OptimizationService, Suggestion};
pub use renewal_service::{RenewalService, DEFAULT_WINDOW_DAYS};
pub use summary_service::{CategorySummary, MonthlySummary, SummaryService};

use crate::errors::TrackerError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Tracker(#[from] TrackerError),
    #[error("{0}")]
    Invalid(String),
}
