//! HTTP API module for the invoice tracker.
//!
//! This module provides the REST endpoints for managing time entries,
//! looking up pay periods and assembling invoices.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::EntryRequest;
pub use response::{ApiError, ApiErrorResponse, MutationResponse, PayPeriodResponse};
pub use state::AppState;
