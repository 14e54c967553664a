//! Integration tests for the payroll engine HTTP API.
//!
//! This test suite covers the full request/response cycle for:
//! - Net-pay calculation with and without optional earnings
//! - Deduction breakdowns across the bracket tables
//! - Overtime pay for every category
//! - Error cases (malformed JSON, missing fields, domain violations)

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use payroll_engine::api::create_router;

// =============================================================================
// Test Helpers
// =============================================================================

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Parses a decimal out of a JSON string field.
fn field_dec(value: &Value, pointer: &str) -> Decimal {
    Decimal::from_str(value.pointer(pointer).unwrap().as_str().unwrap()).unwrap()
}

async fn post(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

// =============================================================================
// Net pay
// =============================================================================

#[tokio::test]
async fn test_net_pay_with_overtime_and_allowances() {
    let (status, body) = post(
        create_router(),
        "/net-pay",
        json!({
            "base_salary": "20000",
            "overtime_pay": "2000",
            "allowances": "500"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(field_dec(&body, "/pay/gross_pay"), dec("22500"));
    // Deductions from the 20,000 base only:
    // SSS 900 + PhilHealth 300 + Pag-IBIG 400 + tax 0 = 1,600
    assert_eq!(field_dec(&body, "/pay/deductions/social_insurance"), dec("900"));
    assert_eq!(field_dec(&body, "/pay/deductions/health_insurance"), dec("300"));
    assert_eq!(field_dec(&body, "/pay/deductions/housing_fund"), dec("400"));
    assert_eq!(
        field_dec(&body, "/pay/deductions/withholding_tax"),
        Decimal::ZERO
    );
    assert_eq!(field_dec(&body, "/pay/deductions/total"), dec("1600"));
    assert_eq!(field_dec(&body, "/pay/net_pay"), dec("20900"));
}

#[tokio::test]
async fn test_net_pay_base_salary_only() {
    let (status, body) = post(
        create_router(),
        "/net-pay",
        json!({ "base_salary": "20000" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(field_dec(&body, "/pay/gross_pay"), dec("20000"));
    assert_eq!(field_dec(&body, "/pay/net_pay"), dec("18400"));
}

#[tokio::test]
async fn test_net_pay_deductions_ignore_extras() {
    let (_, base_only) = post(
        create_router(),
        "/net-pay",
        json!({ "base_salary": "20000" }),
    )
    .await;
    let (_, with_extras) = post(
        create_router(),
        "/net-pay",
        json!({
            "base_salary": "20000",
            "overtime_pay": "9999",
            "allowances": "9999"
        }),
    )
    .await;

    assert_eq!(
        base_only.pointer("/pay/deductions").unwrap(),
        with_extras.pointer("/pay/deductions").unwrap(),
        "deductions must not reference overtime pay or allowances"
    );
}

#[tokio::test]
async fn test_net_pay_response_envelope() {
    let (_, body) = post(
        create_router(),
        "/net-pay",
        json!({ "base_salary": "20000" }),
    )
    .await;

    assert!(body["calculation_id"].as_str().is_some());
    assert!(body["timestamp"].as_str().is_some());
    assert_eq!(
        body["engine_version"].as_str().unwrap(),
        env!("CARGO_PKG_VERSION")
    );
}

#[tokio::test]
async fn test_net_pay_zero_base_goes_negative() {
    let (status, body) = post(
        create_router(),
        "/net-pay",
        json!({ "base_salary": "0" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // Fixed minimums still apply: SSS 180 + PhilHealth 150
    assert_eq!(field_dec(&body, "/pay/net_pay"), dec("-330"));
}

// =============================================================================
// Deductions
// =============================================================================

#[tokio::test]
async fn test_deductions_mid_table_salary() {
    let (status, body) = post(
        create_router(),
        "/deductions",
        json!({ "monthly_salary": "30000" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // Above the last SSS ceiling: maximum contribution
    assert_eq!(field_dec(&body, "/deductions/social_insurance"), dec("1125"));
    // 30,000 x 0.015
    assert_eq!(field_dec(&body, "/deductions/health_insurance"), dec("450"));
    // 30,000 x 0.02, uncapped
    assert_eq!(field_dec(&body, "/deductions/housing_fund"), dec("600"));
    // Annual 360,000 -> (360,000 - 250,000) x 0.15 / 12 = 1,375
    assert_eq!(field_dec(&body, "/deductions/withholding_tax"), dec("1375"));
    assert_eq!(field_dec(&body, "/deductions/total"), dec("3550"));
}

#[tokio::test]
async fn test_deductions_low_salary_minimums() {
    let (status, body) = post(
        create_router(),
        "/deductions",
        json!({ "monthly_salary": "1500" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(field_dec(&body, "/deductions/social_insurance"), dec("180"));
    assert_eq!(field_dec(&body, "/deductions/health_insurance"), dec("150"));
    assert_eq!(field_dec(&body, "/deductions/housing_fund"), dec("15"));
    assert_eq!(
        field_dec(&body, "/deductions/withholding_tax"),
        Decimal::ZERO
    );
}

#[tokio::test]
async fn test_deductions_negative_salary_rejected() {
    let (status, body) = post(
        create_router(),
        "/deductions",
        json!({ "monthly_salary": "-1" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"].as_str().unwrap(), "INVALID_SALARY");
}

// =============================================================================
// Overtime pay
// =============================================================================

#[tokio::test]
async fn test_overtime_pay_each_category() {
    // 17,600/month -> 100/hour; 2 hours at each category multiplier
    for (category, expected) in [
        ("regular", "250"),
        ("holiday", "400"),
        ("night_differential", "300"),
    ] {
        let (status, body) = post(
            create_router(),
            "/overtime-pay",
            json!({
                "monthly_salary": "17600",
                "hours": "2",
                "category": category
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK, "category {}", category);
        assert_eq!(field_dec(&body, "/hourly_rate"), dec("100"));
        assert_eq!(
            field_dec(&body, "/overtime_pay"),
            dec(expected),
            "category {}",
            category
        );
    }
}

#[tokio::test]
async fn test_overtime_pay_multiplier_echoed() {
    let (_, body) = post(
        create_router(),
        "/overtime-pay",
        json!({
            "monthly_salary": "17600",
            "hours": "2",
            "category": "night_differential"
        }),
    )
    .await;

    assert_eq!(field_dec(&body, "/multiplier"), dec("1.5"));
    assert_eq!(body["category"].as_str().unwrap(), "night_differential");
}

#[tokio::test]
async fn test_overtime_pay_negative_hours_rejected() {
    let (status, body) = post(
        create_router(),
        "/overtime-pay",
        json!({
            "monthly_salary": "17600",
            "hours": "-2",
            "category": "regular"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"].as_str().unwrap(), "INVALID_HOURS");
}

// =============================================================================
// Request parsing errors
// =============================================================================

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let router = create_router();
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/net-pay")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"].as_str().unwrap(), "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_field_returns_400() {
    let (status, body) = post(create_router(), "/deductions", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().unwrap();
    assert!(
        message.contains("missing field") || message.contains("monthly_salary"),
        "unexpected message: {}",
        message
    );
}

#[tokio::test]
async fn test_unknown_overtime_category_returns_400() {
    let (status, _) = post(
        create_router(),
        "/overtime-pay",
        json!({
            "monthly_salary": "17600",
            "hours": "2",
            "category": "weekend"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
