//! End-to-end tests for the invoice tracker HTTP API.
//!
//! This test suite covers:
//! - Entry create, update and delete flows
//! - Invoice number derivation on write
//! - Pay period lookup
//! - Invoice listing and the invoice document bundle
//! - Persistence through the CSV store
//! - Error cases

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use invoice_tracker::api::{create_router, AppState};
use invoice_tracker::config::ConfigLoader;
use invoice_tracker::storage::{CsvEntryStore, EntryStore, InMemoryEntryStore};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_state(store: Arc<dyn EntryStore>) -> AppState {
    let config = ConfigLoader::load("./config/invoice.yaml")
        .expect("Failed to load config")
        .into_config();
    AppState::new(config, store)
}

fn create_router_for_test() -> Router {
    create_router(create_state(Arc::new(InMemoryEntryStore::new())))
}

fn decimal(value: &Value) -> Decimal {
    match value {
        Value::String(s) => Decimal::from_str(s).unwrap(),
        Value::Number(n) => Decimal::from_str(&n.to_string()).unwrap(),
        other => panic!("Expected a decimal, got {}", other),
    }
}

async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn entry(task: &str, description: &str, date: &str, hours: f64) -> Value {
    json!({
        "Task": task,
        "Description": description,
        "Date": date,
        "Hours": hours
    })
}

fn invoices_of(entries: &Value) -> Vec<String> {
    entries
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["Invoice"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Entry Flows
// =============================================================================

/// ENT-001: A new tracker lists no entries.
#[tokio::test]
async fn test_empty_tracker_lists_nothing() {
    let router = create_router_for_test();

    let (status, body) = send(&router, "GET", "/api/entries", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

/// ENT-002: Created entries carry the invoice of their pay period.
#[tokio::test]
async fn test_create_stamps_invoice_per_period() {
    let router = create_router_for_test();

    send(&router, "POST", "/api/entries", Some(entry("a", "", "2025-11-09", 1.0))).await;
    send(&router, "POST", "/api/entries", Some(entry("b", "", "2025-11-22", 1.0))).await;
    let (status, body) =
        send(&router, "POST", "/api/entries", Some(entry("c", "", "2025-11-23", 1.0))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Entry added successfully");
    assert_eq!(
        invoices_of(&body["data"]),
        vec!["INV-2025-11-29", "INV-2025-11-29", "INV-2025-12-13"]
    );
}

/// ENT-003: Updating an entry's date moves it to the matching invoice.
#[tokio::test]
async fn test_update_rederives_invoice() {
    let router = create_router_for_test();
    send(&router, "POST", "/api/entries", Some(entry("a", "", "2025-11-10", 2.0))).await;

    let (status, body) = send(
        &router,
        "PUT",
        "/api/entries/0",
        Some(entry("a", "moved", "2025-12-08", 2.0)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Entry updated successfully");
    assert_eq!(body["data"][0]["Description"], "moved");
    assert_eq!(body["data"][0]["Invoice"], "INV-2025-12-27");
}

/// ENT-004: Deleting shifts later entries down by one position.
#[tokio::test]
async fn test_delete_shifts_positions() {
    let router = create_router_for_test();
    for task in ["a", "b", "c"] {
        send(&router, "POST", "/api/entries", Some(entry(task, "", "2025-11-10", 1.0))).await;
    }

    let (status, body) = send(&router, "DELETE", "/api/entries/1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Entry deleted successfully");
    let tasks: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["Task"].as_str().unwrap())
        .collect();
    assert_eq!(tasks, vec!["a", "c"]);
}

/// ENT-005: Out-of-range positions are rejected without changing anything.
#[tokio::test]
async fn test_out_of_range_index_is_rejected() {
    let router = create_router_for_test();
    send(&router, "POST", "/api/entries", Some(entry("a", "", "2025-11-10", 1.0))).await;

    let (status, body) = send(&router, "DELETE", "/api/entries/3", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_INDEX");
    assert_eq!(body["message"], "Invalid index");

    let (status, body) = send(
        &router,
        "PUT",
        "/api/entries/-1",
        Some(entry("x", "", "2025-11-10", 1.0)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_INDEX");

    let (_, body) = send(&router, "GET", "/api/entries", None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["Task"], "a");
}

/// ENT-006: An invalid calendar date is rejected.
#[tokio::test]
async fn test_invalid_entry_date_is_rejected() {
    let router = create_router_for_test();

    let (status, body) =
        send(&router, "POST", "/api/entries", Some(entry("a", "", "2025-02-30", 1.0))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MALFORMED_JSON");
}

/// ENT-007: Dates outside the supported years are rejected on create and update.
#[tokio::test]
async fn test_entry_dates_outside_supported_years_are_rejected() {
    let router = create_router_for_test();
    send(&router, "POST", "/api/entries", Some(entry("a", "", "2025-11-10", 1.0))).await;

    for date in ["+262142-12-31", "9998-01-01", "1899-12-31"] {
        let (status, _) =
            send(&router, "POST", "/api/entries", Some(entry("x", "", date, 1.0))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "POST {}", date);

        let (status, _) =
            send(&router, "PUT", "/api/entries/0", Some(entry("x", "", date, 1.0))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "PUT {}", date);
    }

    let (status, body) =
        send(&router, "POST", "/api/entries", Some(entry("x", "", "9998-01-01", 1.0))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_DATE");

    let (_, body) = send(&router, "GET", "/api/entries", None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["Task"], "a");
    assert_eq!(body[0]["Date"], "2025-11-10");

    let (status, _) = send(&router, "GET", "/api/invoices", None).await;
    assert_eq!(status, StatusCode::OK);
}

/// ENT-008: Hours outside 0 to 24 are rejected and the invoice stays readable.
#[tokio::test]
async fn test_entry_hours_out_of_range_are_rejected() {
    let router = create_router_for_test();
    send(&router, "POST", "/api/entries", Some(entry("a", "", "2025-11-10", 2.0))).await;

    let (status, body) =
        send(&router, "POST", "/api/entries", Some(entry("b", "", "2025-11-10", -3.0))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (status, _) =
        send(&router, "POST", "/api/entries", Some(entry("c", "", "2025-11-10", 1e28))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) =
        send(&router, "PUT", "/api/entries/0", Some(entry("a", "", "2025-11-10", 25.0))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (status, body) = send(&router, "GET", "/api/invoices/INV-2025-11-29", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal(&body["total_hours"]), Decimal::from(2));
    assert_eq!(decimal(&body["total_amount"]), Decimal::from(60));
}

// =============================================================================
// Pay Periods
// =============================================================================

/// PP-API-001: The period lookup returns start, end, payment date and label.
#[tokio::test]
async fn test_pay_period_for_first_day() {
    let router = create_router_for_test();

    let (status, body) = send(&router, "GET", "/api/pay-periods/2025-11-09", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["period_start"], "2025-11-09");
    assert_eq!(body["period_end"], "2025-11-22");
    assert_eq!(body["payment_date"], "2025-11-29");
    assert_eq!(body["invoice_number"], "INV-2025-11-29");
    assert_eq!(body["label"], "Nov 9 - Nov 22");
    assert_eq!(body["payment_date_text"], "Nov 29, 2025");
}

/// PP-API-002: Dates before the reference start fall into earlier periods.
#[tokio::test]
async fn test_pay_period_before_reference() {
    let router = create_router_for_test();

    let (status, body) = send(&router, "GET", "/api/pay-periods/2025-11-08", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["period_start"], "2025-10-26");
    assert_eq!(body["period_end"], "2025-11-08");
    assert_eq!(body["invoice_number"], "INV-2025-11-15");
}

/// PP-API-003: Malformed dates are rejected.
#[tokio::test]
async fn test_pay_period_malformed_date() {
    let router = create_router_for_test();

    let (status, body) = send(&router, "GET", "/api/pay-periods/11-09-2025", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_DATE");
}

/// PP-API-004: Dates outside the supported years are rejected.
#[tokio::test]
async fn test_pay_period_outside_supported_years() {
    let router = create_router_for_test();

    for uri in ["/api/pay-periods/+262142-12-31", "/api/pay-periods/9998-01-01"] {
        let (status, body) = send(&router, "GET", uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["code"], "INVALID_DATE", "{}", uri);
    }

    let (status, body) = send(&router, "GET", "/api/pay-periods/9997-12-31", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["invoice_number"].as_str().unwrap().len(), "INV-YYYY-MM-DD".len());
}

// =============================================================================
// Invoices
// =============================================================================

/// INV-001: Invoices are listed newest first, one per invoice number.
#[tokio::test]
async fn test_invoice_listing_newest_first() {
    let router = create_router_for_test();
    for date in ["2025-11-10", "2025-12-08", "2025-11-24", "2025-11-20"] {
        send(&router, "POST", "/api/entries", Some(entry("t", "", date, 1.0))).await;
    }

    let (status, body) = send(&router, "GET", "/api/invoices", None).await;

    assert_eq!(status, StatusCode::OK);
    let numbers: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["invoice_number"].as_str().unwrap())
        .collect();
    assert_eq!(
        numbers,
        vec!["INV-2025-12-27", "INV-2025-12-13", "INV-2025-11-29"]
    );
    assert_eq!(body[2]["label"], "Nov 9 - Nov 22");
}

/// INV-002: The invoice bundle sums only the matching entries.
#[tokio::test]
async fn test_invoice_document_totals() {
    let router = create_router_for_test();
    send(
        &router,
        "POST",
        "/api/entries",
        Some(entry("Workshop", "Kiln loading", "2025-11-10", 2.5)),
    )
    .await;
    send(&router, "POST", "/api/entries", Some(entry("Other", "", "2025-11-24", 8.0))).await;
    send(&router, "POST", "/api/entries", Some(entry("Admin", "", "2025-11-20", 3.0))).await;

    let (status, body) = send(&router, "GET", "/api/invoices/INV-2025-11-29", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["invoice_number"], "INV-2025-11-29");
    assert_eq!(body["due_date_text"], "November 29, 2025");
    assert_eq!(body["client_name"], "Arts Factory Society");
    assert_eq!(body["line_items"].as_array().unwrap().len(), 2);
    assert_eq!(body["line_items"][1]["description"], "-");
    assert_eq!(decimal(&body["total_hours"]), Decimal::from_str("5.5").unwrap());
    assert_eq!(decimal(&body["total_amount"]), Decimal::from(165));
    assert_eq!(body["total_due_text"], "165.00 CAD");
}

/// INV-003: Unknown invoice numbers return 404.
#[tokio::test]
async fn test_unknown_invoice_not_found() {
    let router = create_router_for_test();

    let (status, body) = send(&router, "GET", "/api/invoices/INV-2030-01-01", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "INVOICE_NOT_FOUND");
}

// =============================================================================
// CSV Persistence
// =============================================================================

/// CSV-001: Entries written through the API survive a restart.
#[tokio::test]
async fn test_csv_store_persists_across_routers() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Tracker.csv");

    let router = create_router(create_state(Arc::new(CsvEntryStore::new(&path))));
    send(
        &router,
        "POST",
        "/api/entries",
        Some(entry("Workshop", "Kiln, glazing", "2025-11-12", 2.5)),
    )
    .await;
    drop(router);

    let reopened = create_router(create_state(Arc::new(CsvEntryStore::new(&path))));
    let (status, body) = send(&reopened, "GET", "/api/entries", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["Task"], "Workshop");
    assert_eq!(body[0]["Description"], "Kiln, glazing");
    assert_eq!(body[0]["Invoice"], "INV-2025-11-29");

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("Task,Description,Date,Hours,Invoice"));
}

/// CSV-002: Stored invoice values are trusted when grouping.
#[tokio::test]
async fn test_grouping_uses_stored_invoice_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Tracker.csv");
    std::fs::write(
        &path,
        "Task,Description,Date,Hours,Invoice\n\
         Legacy,,2025-11-10,4,INV-2025-11-15\n\
         Untagged,,2025-11-11,1,\n",
    )
    .unwrap();

    let router = create_router(create_state(Arc::new(CsvEntryStore::new(&path))));
    let (status, body) = send(&router, "GET", "/api/invoices", None).await;

    assert_eq!(status, StatusCode::OK);
    let groups = body.as_array().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["invoice_number"], "INV-2025-11-15");
}
