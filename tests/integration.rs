//! Integration tests for the Payroll Engine API.
//!
//! This test suite drives the router in-process and covers:
//! - Pricing scenarios (night sampling, weekend, holiday, loyalty, overtime)
//! - Country overtime through the configured policy table
//! - The create/get/update/delete workflow
//! - The weekly report
//! - Validation and error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/payroll").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Reads a decimal field that is serialized as a string.
fn decimal_field(value: &Value, field: &str) -> Decimal {
    decimal(value[field].as_str().unwrap())
}

async fn send(router: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, json)
}

async fn post_calculate(router: Router, body: Value) -> (StatusCode, Value) {
    send(router, "POST", "/api/time-entries/calculate", Some(body)).await
}

fn create_entry(
    employee_id: u64,
    name: &str,
    employee_type: &str,
    start_time: &str,
    end_time: &str,
    hourly_rate: &str,
    years_of_service: i32,
) -> Value {
    json!({
        "employeeId": employee_id,
        "employeeName": name,
        "employeeType": employee_type,
        "startTime": start_time,
        "endTime": end_time,
        "hourlyRate": hourly_rate,
        "notes": format!("{} shift", name),
        "yearsOfService": years_of_service
    })
}

fn assert_total_is_base_plus_bonus(result: &Value) {
    let base = decimal_field(result, "basePay");
    let bonus = decimal_field(result, "bonusPay");
    let total = decimal_field(result, "totalPay");
    assert_eq!(total, base + bonus, "totalPay must equal basePay + bonusPay");
}

// =============================================================================
// SECTION 1: Pricing Scenarios
// =============================================================================

#[tokio::test]
async fn test_contractor_holiday_shift_with_long_tenure() {
    // 2024-07-04 is a holiday; contractor base = 8 * 50 * 1.2 = 480
    // holiday 480 + loyalty 48 + 24
    let router = create_router_for_test();
    let request = create_entry(
        7,
        "Bob",
        "Contractor",
        "2024-07-04T10:00:00Z",
        "2024-07-04T18:00:00Z",
        "50.0",
        12,
    );

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_field(&result, "basePay"), decimal("480"));
    assert_eq!(decimal_field(&result, "bonusPay"), decimal("552"));
    assert_total_is_base_plus_bonus(&result);
    assert_eq!(result["employeeName"], "Bob");
}

#[tokio::test]
async fn test_partial_night_hour_is_not_counted() {
    let router = create_router_for_test();
    let request = create_entry(
        101,
        "EdgePartial",
        "FTE",
        "2024-11-01T21:30:00Z",
        "2024-11-01T22:30:00Z",
        "20.0",
        1,
    );

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_field(&result, "basePay"), decimal("20"));
    assert_eq!(decimal_field(&result, "bonusPay"), Decimal::ZERO);
    assert_eq!(result["breakdown"], "");
    assert_total_is_base_plus_bonus(&result);
}

#[tokio::test]
async fn test_midnight_crossing_23_to_07() {
    let router = create_router_for_test();
    let request = create_entry(
        150,
        "MidnightEdge",
        "FTE",
        "2024-11-01T23:00:00Z",
        "2024-11-02T07:00:00Z",
        "25.0",
        0,
    );

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_field(&result, "basePay"), decimal("200"));
    // 7 * 25 * 0.5
    assert_eq!(decimal_field(&result, "bonusPay"), decimal("87.5"));
    assert!(result["breakdown"].as_str().unwrap().contains("Night shift: 7h"));
}

#[tokio::test]
async fn test_weekend_night_with_stacked_loyalty() {
    // Saturday 2024-11-02 23:00 to 03:00: base 80
    // night 40 + weekend 40 + loyalty 8 + 4
    let router = create_router_for_test();
    let request = create_entry(
        160,
        "ComboBonuses",
        "FTE",
        "2024-11-02T23:00:00Z",
        "2024-11-03T03:00:00Z",
        "20.0",
        12,
    );

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_field(&result, "basePay"), decimal("80"));
    assert_eq!(decimal_field(&result, "bonusPay"), decimal("92"));
    assert_total_is_base_plus_bonus(&result);
    assert_eq!(
        result["breakdown"],
        "Night shift: 4h @ 50% = $40.00\n\
         Weekend bonus: $40.00\n\
         Loyalty bonus (5+ years): $8.00\n\
         Loyalty bonus (10+ years): $4.00\n"
    );

    let categories: Vec<&str> = result["lineItems"]
        .as_array()
        .unwrap()
        .iter()
        .map(|line| line["category"].as_str().unwrap())
        .collect();
    assert_eq!(
        categories,
        vec!["night_shift", "weekend", "loyalty_five_years", "loyalty_ten_years"]
    );
}

#[tokio::test]
async fn test_overnight_full_night_bonus() {
    let router = create_router_for_test();
    let request = create_entry(
        102,
        "EdgeOvernight",
        "FTE",
        "2024-11-01T23:00:00Z",
        "2024-11-02T03:00:00Z",
        "30.0",
        3,
    );

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_field(&result, "basePay"), decimal("120"));
    assert_eq!(decimal_field(&result, "bonusPay"), decimal("60"));
}

#[tokio::test]
async fn test_overtime_boundary_at_forty_hours() {
    // Friday 00:00 + 40h: 14 night samples, no overtime
    let router = create_router_for_test();
    let request = create_entry(
        200,
        "OvertimeExact",
        "FTE",
        "2024-11-01T00:00:00Z",
        "2024-11-02T16:00:00Z",
        "10.0",
        0,
    );

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_field(&result, "basePay"), decimal("400"));
    assert_eq!(decimal_field(&result, "bonusPay"), decimal("70"));
    assert!(!result["breakdown"].as_str().unwrap().contains("Overtime"));
}

#[tokio::test]
async fn test_overtime_half_hour_past_forty() {
    // 40.5h: the extra sample at 16:00 is not night; overtime 0.5 * 10 * 0.5
    let router = create_router_for_test();
    let request = create_entry(
        201,
        "OvertimeHalf",
        "FTE",
        "2024-11-01T00:00:00Z",
        "2024-11-02T16:30:00Z",
        "10.0",
        0,
    );

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_field(&result, "basePay"), decimal("405"));
    assert_eq!(decimal_field(&result, "bonusPay"), decimal("72.5"));
    assert!(
        result["breakdown"]
            .as_str()
            .unwrap()
            .contains("Overtime: 0.5h @ 50% = $2.50")
    );
}

#[tokio::test]
async fn test_zero_duration_prices_to_zero() {
    let router = create_router_for_test();
    let request = create_entry(
        300,
        "Zero",
        "FTE",
        "2024-11-01T10:00:00Z",
        "2024-11-01T10:00:00Z",
        "100.0",
        0,
    );

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_field(&result, "basePay"), Decimal::ZERO);
    assert_eq!(decimal_field(&result, "bonusPay"), Decimal::ZERO);
}

#[tokio::test]
async fn test_unknown_classification_earns_no_base_pay() {
    let router = create_router_for_test();
    let request = create_entry(
        302,
        "Intern",
        "Intern",
        "2024-11-04T09:00:00Z",
        "2024-11-04T17:00:00Z",
        "30.0",
        0,
    );

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_field(&result, "totalPay"), Decimal::ZERO);
}

// =============================================================================
// SECTION 2: Country Overtime
// =============================================================================

async fn overtime_for_country(country_code: &str) -> String {
    // Monday 00:00 to Tuesday 21:00 is 45 hours
    let router = create_router_for_test();
    let mut request = create_entry(
        400,
        "Country",
        "FTE",
        "2024-11-04T00:00:00Z",
        "2024-11-05T21:00:00Z",
        "20.0",
        0,
    );
    request["countryCode"] = json!(country_code);

    let (status, result) = post_calculate(router, request).await;
    assert_eq!(status, StatusCode::OK);

    result["lineItems"]
        .as_array()
        .unwrap()
        .iter()
        .find(|line| line["category"] == "overtime")
        .map(|line| line["hours"].as_str().unwrap().to_string())
        .unwrap_or_default()
}

#[tokio::test]
async fn test_germany_uses_thirty_five_hour_week() {
    assert_eq!(decimal(&overtime_for_country("DE").await), decimal("10"));
}

#[tokio::test]
async fn test_france_uses_thirty_five_hour_week() {
    assert_eq!(decimal(&overtime_for_country("FR").await), decimal("10"));
}

#[tokio::test]
async fn test_uk_uses_thirty_seven_hour_week() {
    assert_eq!(decimal(&overtime_for_country("UK").await), decimal("8"));
}

#[tokio::test]
async fn test_us_uses_forty_hour_week() {
    assert_eq!(decimal(&overtime_for_country("US").await), decimal("5"));
}

#[tokio::test]
async fn test_unknown_country_has_no_overtime() {
    assert_eq!(overtime_for_country("XX").await, "");
}

// =============================================================================
// SECTION 3: Create / Get / Update / Delete
// =============================================================================

#[tokio::test]
async fn test_create_get_update_delete_workflow() {
    let router = create_router_for_test();

    // Create
    let create_req = create_entry(
        42,
        "Alice",
        "FTE",
        "2024-11-01T09:00:00Z",
        "2024-11-01T17:00:00Z",
        "20.0",
        6,
    );
    let (status, created) = send(router.clone(), "POST", "/api/time-entries", Some(create_req)).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_u64().unwrap();
    assert_eq!(id, 1);
    // 160 base + 16 loyalty
    assert_eq!(decimal_field(&created, "totalPay"), decimal("176"));

    // Get
    let uri = format!("/api/time-entries/{}", id);
    let (status, fetched) = send(router.clone(), "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["employeeName"], "Alice");

    // Update
    let update_req = create_entry(
        42,
        "Alice Updated",
        "FTE",
        "2024-11-01T08:00:00Z",
        "2024-11-01T18:00:00Z",
        "20.0",
        6,
    );
    let (status, updated) = send(router.clone(), "PUT", &uri, Some(update_req)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"].as_u64(), Some(id));
    assert_eq!(updated["employeeName"], "Alice Updated");
    // 200 base + 20 loyalty
    assert_eq!(decimal_field(&updated, "totalPay"), decimal("220"));

    // List
    let (status, listed) = send(router.clone(), "GET", "/api/time-entries", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    // Delete
    let (status, _) = send(router.clone(), "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // Confirm deletion
    let (status, error) = send(router, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "ENTRY_NOT_FOUND");
}

#[tokio::test]
async fn test_update_keeps_employee_and_country() {
    let router = create_router_for_test();

    // Monday 00:00 to Tuesday 21:00 is 45 hours.
    let mut create_req = create_entry(
        55,
        "Dana",
        "FTE",
        "2024-11-04T00:00:00Z",
        "2024-11-05T21:00:00Z",
        "20.0",
        0,
    );
    create_req["countryCode"] = json!("DE");
    let (status, created) = send(router.clone(), "POST", "/api/time-entries", Some(create_req)).await;
    assert_eq!(status, StatusCode::CREATED);
    // 900 base + 14 night hours (140) + 10 DE overtime hours (100)
    assert_eq!(decimal_field(&created, "totalPay"), decimal("1140"));
    let uri = format!("/api/time-entries/{}", created["id"]);

    let mut update_req = create_entry(
        77,
        "Dana Moved",
        "FTE",
        "2024-11-04T00:00:00Z",
        "2024-11-05T21:00:00Z",
        "20.0",
        0,
    );
    update_req["countryCode"] = json!("US");
    let (status, updated) = send(router.clone(), "PUT", &uri, Some(update_req)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["employeeName"], "Dana Moved");
    assert_eq!(updated["employeeId"], 55);
    assert_eq!(updated["countryCode"], "DE");
    // Still priced on the German 35-hour week, not the US 40-hour week.
    assert_eq!(decimal_field(&updated, "totalPay"), decimal("1140"));

    let (_, original_report) = send(
        router.clone(),
        "GET",
        "/api/time-entries/report/weekly/55?startDate=2024-11-03T00:00:00Z",
        None,
    )
    .await;
    assert_eq!(original_report["entries"].as_array().unwrap().len(), 1);
    assert_eq!(original_report["entries"][0]["employeeName"], "Dana Moved");

    let (_, other_report) = send(
        router,
        "GET",
        "/api/time-entries/report/weekly/77?startDate=2024-11-03T00:00:00Z",
        None,
    )
    .await;
    assert!(other_report["entries"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_update_missing_entry_returns_404() {
    let router = create_router_for_test();
    let request = create_entry(
        1,
        "Nobody",
        "FTE",
        "2024-11-01T09:00:00Z",
        "2024-11-01T17:00:00Z",
        "20.0",
        0,
    );

    let (status, error) = send(router, "PUT", "/api/time-entries/77", Some(request)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "ENTRY_NOT_FOUND");
}

#[tokio::test]
async fn test_delete_missing_entry_returns_404() {
    let router = create_router_for_test();
    let (status, _) = send(router, "DELETE", "/api/time-entries/5", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_rejects_invalid_entry_without_storing() {
    let router = create_router_for_test();
    let request = create_entry(
        1,
        "Negative",
        "FTE",
        "2024-11-01T09:00:00Z",
        "2024-11-01T17:00:00Z",
        "-1",
        0,
    );

    let (status, error) = send(router.clone(), "POST", "/api/time-entries", Some(request)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["message"], "Hourly rate cannot be negative.");

    let (_, listed) = send(router, "GET", "/api/time-entries", None).await;
    assert!(listed.as_array().unwrap().is_empty());
}

// =============================================================================
// SECTION 4: Weekly Report
// =============================================================================

#[tokio::test]
async fn test_weekly_report_aggregates_entries() {
    let router = create_router_for_test();

    for (day, start, end) in [
        ("Day 1", "2024-11-03T09:00:00Z", "2024-11-03T17:00:00Z"),
        ("Day 2", "2024-11-05T09:00:00Z", "2024-11-05T17:00:00Z"),
        ("Next week", "2024-11-10T09:00:00Z", "2024-11-10T17:00:00Z"),
    ] {
        let request = create_entry(55, day, "PartTime", start, end, "30.0", 2);
        let (status, _) = send(router.clone(), "POST", "/api/time-entries", Some(request)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, report) = send(
        router,
        "GET",
        "/api/time-entries/report/weekly/55?startDate=2024-11-03T00:00:00Z",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["employeeId"], 55);
    assert_eq!(report["entries"].as_array().unwrap().len(), 2);
    assert_eq!(decimal_field(&report, "totalHours"), decimal("16"));
    // Sunday 228 * 1.5 = 342, Tuesday 228
    assert_eq!(decimal_field(&report, "totalPay"), decimal("570"));
}

#[tokio::test]
async fn test_weekly_report_for_unknown_employee_is_empty() {
    let router = create_router_for_test();

    let (status, report) = send(
        router,
        "GET",
        "/api/time-entries/report/weekly/999?startDate=2024-11-03T00:00:00Z",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_field(&report, "totalHours"), Decimal::ZERO);
    assert!(report["entries"].as_array().unwrap().is_empty());
}

// =============================================================================
// SECTION 5: Validation and Error Cases
// =============================================================================

#[tokio::test]
async fn test_end_before_start_rejected() {
    let router = create_router_for_test();
    let request = create_entry(
        301,
        "Negative",
        "FTE",
        "2024-11-02T12:00:00Z",
        "2024-11-02T08:00:00Z",
        "50.0",
        0,
    );

    let (status, error) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert_eq!(error["message"], "End time cannot be before start time.");
}

#[tokio::test]
async fn test_blank_name_rejected_before_other_checks() {
    let router = create_router_for_test();
    let request = create_entry(
        1,
        "   ",
        "",
        "2024-11-02T12:00:00Z",
        "2024-11-02T08:00:00Z",
        "-5",
        -1,
    );

    let (status, error) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["message"], "Employee name is required.");
}

#[tokio::test]
async fn test_missing_employee_type_rejected() {
    let router = create_router_for_test();
    let request = json!({
        "employeeName": "Dana",
        "startTime": "2024-11-01T09:00:00Z",
        "endTime": "2024-11-01T17:00:00Z",
        "hourlyRate": "20"
    });

    let (status, error) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["message"], "Employee type is required.");
}

#[tokio::test]
async fn test_negative_years_of_service_rejected() {
    let router = create_router_for_test();
    let request = create_entry(
        1,
        "Eve",
        "FTE",
        "2024-11-01T09:00:00Z",
        "2024-11-01T17:00:00Z",
        "20",
        -2,
    );

    let (status, error) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["message"], "Years of service cannot be negative.");
}

#[tokio::test]
async fn test_unrepresentable_pay_returns_400_instead_of_crashing() {
    let router = create_router_for_test();
    let request = create_entry(
        1,
        "Huge Rate",
        "FTE",
        "2024-11-04T09:00:00Z",
        "2024-11-04T17:00:00Z",
        "10000000000000000000000000000",
        0,
    );

    let (status, error) = post_calculate(router.clone(), request.clone()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "PAY_OUT_OF_RANGE");

    let (status, _) = send(router.clone(), "POST", "/api/time-entries", Some(request)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // The router keeps serving after the rejected requests.
    let (status, listed) = send(router, "GET", "/api/time-entries", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_health_endpoint() {
    let router = create_router_for_test();
    let (status, body) = send(router, "GET", "/api/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}
