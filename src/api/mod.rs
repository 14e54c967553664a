//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints the surrounding HR application
//! calls when previewing or persisting a payroll record: net pay,
//! deductions, and overtime pay.

mod handlers;
mod request;
mod response;

pub use handlers::create_router;
pub use request::{DeductionsRequest, NetPayRequest, OvertimePayRequest};
pub use response::{ApiError, DeductionsResponse, NetPayResponse, OvertimePayResponse};
