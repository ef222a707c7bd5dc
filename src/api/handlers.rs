//! HTTP request handlers for the invoice tracker API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    routing::{get, put},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::{build_invoice, format_display_date, parse_work_date};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Entry, InvoiceDocument, InvoiceGroup};
use crate::storage::EntryStore;

use super::request::EntryRequest;
use super::response::{ApiError, ApiErrorResponse, MutationResponse, PayPeriodResponse};
use super::state::AppState;

type ApiResult<T> = Result<Json<T>, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/entries",
            get(list_entries_handler).post(create_entry_handler),
        )
        .route(
            "/api/entries/:index",
            put(update_entry_handler).delete(delete_entry_handler),
        )
        .route("/api/pay-periods/:date", get(pay_period_handler))
        .route("/api/invoices", get(list_invoices_handler))
        .route("/api/invoices/:invoice_number", get(invoice_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Handler for GET /api/entries.
async fn list_entries_handler(State(state): State<AppState>) -> ApiResult<Vec<Entry>> {
    let correlation_id = Uuid::new_v4();
    let entries = run_store(&state, correlation_id, |store| store.list()).await?;
    debug!(
        correlation_id = %correlation_id,
        entries_count = entries.len(),
        "Listed entries"
    );
    Ok(Json(entries))
}

/// Handler for POST /api/entries.
///
/// Appends the entry with its invoice number derived from `Date`.
async fn create_entry_handler(
    State(state): State<AppState>,
    payload: Result<Json<EntryRequest>, JsonRejection>,
) -> ApiResult<MutationResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create entry request");

    let Json(request) = payload.map_err(|rejection| json_rejection(rejection, correlation_id))?;
    validate_request(&request, correlation_id)?;
    let entry = stamped_entry(&state, request, correlation_id);
    let invoice_number = entry.invoice.clone().unwrap_or_default();

    let data = run_store(&state, correlation_id, move |store| store.append(entry)).await?;
    info!(
        correlation_id = %correlation_id,
        invoice_number = %invoice_number,
        entries_count = data.len(),
        "Entry added"
    );
    Ok(Json(MutationResponse::new("Entry added successfully", data)))
}

/// Handler for PUT /api/entries/:index.
///
/// Replaces the entry at `index`, re-deriving its invoice number.
async fn update_entry_handler(
    State(state): State<AppState>,
    index: Result<Path<usize>, PathRejection>,
    payload: Result<Json<EntryRequest>, JsonRejection>,
) -> ApiResult<MutationResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing update entry request");

    let index = entry_index(index, correlation_id)?;
    let Json(request) = payload.map_err(|rejection| json_rejection(rejection, correlation_id))?;
    validate_request(&request, correlation_id)?;
    let entry = stamped_entry(&state, request, correlation_id);

    let data = run_store(&state, correlation_id, move |store| {
        store.replace(index, entry)
    })
    .await?;
    info!(correlation_id = %correlation_id, index, "Entry updated");
    Ok(Json(MutationResponse::new("Entry updated successfully", data)))
}

/// Handler for DELETE /api/entries/:index.
async fn delete_entry_handler(
    State(state): State<AppState>,
    index: Result<Path<usize>, PathRejection>,
) -> ApiResult<MutationResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing delete entry request");

    let index = entry_index(index, correlation_id)?;
    let data = run_store(&state, correlation_id, move |store| store.remove(index)).await?;
    info!(correlation_id = %correlation_id, index, "Entry deleted");
    Ok(Json(MutationResponse::new("Entry deleted successfully", data)))
}

/// Handler for GET /api/pay-periods/:date.
///
/// Returns the pay period containing `date` and its invoice number.
async fn pay_period_handler(
    State(state): State<AppState>,
    Path(raw_date): Path<String>,
) -> ApiResult<PayPeriodResponse> {
    let date = parse_work_date(&raw_date).map_err(|err| {
        warn!(date = %raw_date, error = %err, "Rejected pay period lookup");
        ApiErrorResponse::from(err)
    })?;

    let calculator = state.calculator();
    let period = calculator.compute_pay_period(date);
    let label = calculator.format_period_label(&period);
    let payment_date_text = format_display_date(period.payment_date);
    Ok(Json(PayPeriodResponse {
        period,
        label,
        payment_date_text,
    }))
}

/// Handler for GET /api/invoices.
///
/// Lists one group per distinct invoice number, newest payment date first.
async fn list_invoices_handler(State(state): State<AppState>) -> ApiResult<Vec<InvoiceGroup>> {
    let correlation_id = Uuid::new_v4();
    let entries = run_store(&state, correlation_id, |store| store.list()).await?;
    let groups = state.calculator().group_entries_by_invoice(&entries);
    debug!(
        correlation_id = %correlation_id,
        invoices_count = groups.len(),
        "Grouped entries by invoice"
    );
    Ok(Json(groups))
}

/// Handler for GET /api/invoices/:invoice_number.
///
/// Returns the invoice document bundle, or 404 when no entry carries the
/// invoice number.
async fn invoice_handler(
    State(state): State<AppState>,
    Path(invoice_number): Path<String>,
) -> ApiResult<InvoiceDocument> {
    let correlation_id = Uuid::new_v4();
    let start_time = Instant::now();
    let entries = run_store(&state, correlation_id, |store| store.list()).await?;

    let document = build_invoice(&entries, &invoice_number, state.config()).ok_or_else(|| {
        warn!(
            correlation_id = %correlation_id,
            invoice_number = %invoice_number,
            "Invoice not found"
        );
        ApiErrorResponse::from(TrackerError::InvoiceNotFound {
            invoice_number: invoice_number.clone(),
        })
    })?;

    info!(
        correlation_id = %correlation_id,
        invoice_number = %document.invoice_number,
        lines_count = document.line_items.len(),
        total_amount = %document.total_amount,
        duration_us = start_time.elapsed().as_micros(),
        "Invoice assembled"
    );
    Ok(Json(document))
}

fn validate_request(request: &EntryRequest, correlation_id: Uuid) -> Result<(), ApiErrorResponse> {
    request.validate().map_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Entry request rejected");
        ApiErrorResponse::from(err)
    })
}

/// Converts a request into an entry whose invoice number is derived from its
/// date. A differing client-supplied value is discarded with a warning.
fn stamped_entry(state: &AppState, request: EntryRequest, correlation_id: Uuid) -> Entry {
    let mut entry: Entry = request.into();
    if let Some(discarded) = state
        .calculator()
        .stamp_invoice(&mut entry)
        .filter(|previous| !previous.is_empty())
    {
        warn!(
            correlation_id = %correlation_id,
            supplied = %discarded,
            derived = entry.invoice.as_deref().unwrap_or_default(),
            "Ignoring client-supplied invoice number"
        );
    }
    entry
}

/// Runs a store operation on the blocking pool.
async fn run_store<T, F>(
    state: &AppState,
    correlation_id: Uuid,
    op: F,
) -> Result<T, ApiErrorResponse>
where
    T: Send + 'static,
    F: FnOnce(&dyn EntryStore) -> TrackerResult<T> + Send + 'static,
{
    let store = state.store();
    let result = tokio::task::spawn_blocking(move || op(store.as_ref()))
        .await
        .map_err(|err| {
            warn!(correlation_id = %correlation_id, error = %err, "Store task failed");
            ApiErrorResponse::internal("Entry store task failed")
        })?;

    result.map_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Entry operation failed");
        err.into()
    })
}

fn entry_index(
    index: Result<Path<usize>, PathRejection>,
    correlation_id: Uuid,
) -> Result<usize, ApiErrorResponse> {
    match index {
        Ok(Path(index)) => Ok(index),
        Err(rejection) => {
            let body_text = rejection.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "Unparseable entry index"
            );
            Err(ApiErrorResponse::bad_request(ApiError::invalid_index(
                body_text,
            )))
        }
    }
}

fn json_rejection(rejection: JsonRejection, correlation_id: Uuid) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}
