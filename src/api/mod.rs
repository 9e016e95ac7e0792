//! HTTP API module for the payroll engine.
//!
//! This module exposes the payroll run over HTTP so the same report the
//! command line prints can be requested as JSON.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EmployeeRequest, PayrollReportRequest, SalaryInput};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
