//! HTTP API module for the Equity Vesting Engine.
//!
//! This module provides the REST API endpoints for batch vesting
//! calculation and cached result retrieval.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BatchRequest, EmployeeRequest, ResultsQueryRequest, ScheduleRequest};
pub use response::{ApiError, BatchResponse};
pub use state::AppState;
