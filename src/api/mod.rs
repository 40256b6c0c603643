//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints for computing payroll reports
//! from submitted rosters.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::PayrollRequest;
pub use response::{ApiError, PayrollResponse};
pub use state::AppState;
