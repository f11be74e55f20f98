//! Integration tests for the Settlement Engine.
//!
//! Drives the HTTP router with the configuration shipped in `config/ni`:
//! - Full settlements for typical tenures
//! - Progressive income tax across brackets
//! - Severance cap and out-of-range tenure warnings
//! - Lenient form input
//! - Totals beyond the words ceiling
//! - Payroll slips and the words endpoint
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use settlement_engine::api::{AppState, create_router};
use settlement_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/ni").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        router,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn post_settlement(body: Value) -> Value {
    let (status, json) = post_json(create_router_for_test(), "/settlement", body).await;
    assert_eq!(status, StatusCode::OK, "unexpected response: {}", json);
    json
}

/// Reads a formatted receipt row by label.
fn receipt_amount<'a>(result: &'a Value, label: &str) -> &'a str {
    result["formatted"]["lines"]
        .as_array()
        .unwrap()
        .iter()
        .find(|line| line["label"] == label)
        .and_then(|line| line["amount"].as_str())
        .unwrap_or_else(|| panic!("no receipt line labelled {}", label))
}

fn line_amount(result: &Value, kind: &str) -> Decimal {
    let item = result["report"]["line_items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|item| item["kind"] == kind)
        .unwrap_or_else(|| panic!("no line item of kind {}", kind));
    decimal(item["amount"].as_str().unwrap())
}

fn warning_codes(result: &Value) -> Vec<String> {
    result["report"]["audit_trace"]["warnings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|warning| warning["code"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Settlement scenarios
// =============================================================================

#[tokio::test]
async fn test_one_year_low_salary() {
    let result = post_settlement(json!({
        "monthly_salary": 1200, "years": 1, "months": 0, "days": 0
    }))
    .await;

    assert_eq!(receipt_amount(&result, "INSS laboral"), "C$ 84.00");
    assert_eq!(receipt_amount(&result, "IR mensual"), "C$ 0.00");
    assert_eq!(receipt_amount(&result, "Aguinaldo proporcional"), "C$ 1200.00");
    assert_eq!(receipt_amount(&result, "Vacaciones"), "C$ 600.00");
    assert_eq!(receipt_amount(&result, "Indemnización"), "C$ 1200.00");
    assert_eq!(receipt_amount(&result, "Salario proporcional"), "C$ 0.00");
    assert_eq!(receipt_amount(&result, "Total"), "C$ 3084.00");
    assert_eq!(
        result["formatted"]["total_in_words"],
        "tres mil ochenta y cuatro córdobas"
    );
    assert!(warning_codes(&result).is_empty());
}

#[tokio::test]
async fn test_three_years_in_third_tax_bracket() {
    // (20000 - 1400) x 12 = 223200 annual; 15000 + 23200 x 0.20 = 19640
    let result = post_settlement(json!({
        "monthly_salary": "20000", "years": "3", "months": "0", "days": "0"
    }))
    .await;

    assert_eq!(line_amount(&result, "social_security_withholding"), decimal("1400"));
    assert_eq!(receipt_amount(&result, "IR mensual"), "C$ 1636.67");
    assert_eq!(line_amount(&result, "prorated_bonus"), decimal("60000"));
    assert_eq!(receipt_amount(&result, "Vacaciones"), "C$ 30000.00");
    assert_eq!(line_amount(&result, "severance"), decimal("60000"));
    assert_eq!(receipt_amount(&result, "Total"), "C$ 153036.67");
    assert_eq!(
        result["formatted"]["total_in_words"],
        "ciento cincuenta y tres mil treinta y seis córdobas"
    );

    let steps = result["report"]["audit_trace"]["steps"].as_array().unwrap();
    let income_tax = steps.iter().find(|s| s["rule_id"] == "income_tax").unwrap();
    assert_eq!(income_tax["output"]["bracket_tier"], 3);
}

#[tokio::test]
async fn test_partial_year_components() {
    let result = post_settlement(json!({
        "monthly_salary": 1500, "years": 2, "months": 6, "days": 15
    }))
    .await;

    // 6 x 30 + 15 = 195 days at 50 a day
    assert_eq!(line_amount(&result, "prorated_partial_salary"), decimal("9750"));
    assert_eq!(receipt_amount(&result, "Salario proporcional"), "C$ 9750.00");

    let years_equivalent = decimal(result["report"]["years_equivalent"].as_str().unwrap());
    assert!(years_equivalent > decimal("2.5"));
    assert!(years_equivalent < decimal("2.6"));
}

#[tokio::test]
async fn test_severance_capped_at_five_years() {
    let result = post_settlement(json!({
        "monthly_salary": 1000, "years": 8
    }))
    .await;

    assert_eq!(line_amount(&result, "severance"), decimal("5000"));
    assert_eq!(line_amount(&result, "prorated_bonus"), decimal("8000"));
    assert_eq!(receipt_amount(&result, "Vacaciones"), "C$ 4000.00");
    assert_eq!(warning_codes(&result), vec!["SEVERANCE_CAPPED".to_string()]);
}

#[tokio::test]
async fn test_pending_vacation_days_paid() {
    let without = post_settlement(json!({"monthly_salary": 1200, "years": 1})).await;
    let with = post_settlement(json!({
        "monthly_salary": 1200, "years": 1, "pending_vacation_days": 10
    }))
    .await;

    assert_eq!(
        line_amount(&with, "vacation_pay") - line_amount(&without, "vacation_pay"),
        decimal("400")
    );
}

#[tokio::test]
async fn test_out_of_range_months_warns() {
    let result = post_settlement(json!({
        "monthly_salary": 1200, "years": 0, "months": 14, "days": 0
    }))
    .await;

    assert!(warning_codes(&result).contains(&"TENURE_COMPONENT_OUT_OF_RANGE".to_string()));
    assert_eq!(line_amount(&result, "prorated_partial_salary"), decimal("16800"));
}

#[tokio::test]
async fn test_total_above_words_ceiling() {
    let result = post_settlement(json!({
        "monthly_salary": 1000000, "years": 1
    }))
    .await;

    assert_eq!(
        result["formatted"]["total_in_words"],
        "número demasiado grande córdobas"
    );
    assert!(warning_codes(&result).contains(&"TOTAL_EXCEEDS_WORDS_CEILING".to_string()));
}

// =============================================================================
// Input sanitization
// =============================================================================

#[tokio::test]
async fn test_empty_form_is_all_zero() {
    let result = post_settlement(json!({})).await;

    let lines = result["formatted"]["lines"].as_array().unwrap();
    assert_eq!(lines.len(), 7);
    for line in lines {
        assert_eq!(line["amount"], "C$ 0.00");
    }
    assert_eq!(result["formatted"]["total_in_words"], "cero córdobas");
}

#[tokio::test]
async fn test_garbage_fields_count_as_zero() {
    let garbage = post_settlement(json!({
        "monthly_salary": "1200", "years": "uno", "months": "", "days": null,
        "pending_vacation_days": [3]
    }))
    .await;
    let zeroed = post_settlement(json!({"monthly_salary": 1200})).await;

    assert_eq!(garbage["report"], zeroed["report"]);
}

#[tokio::test]
async fn test_negative_salary_clamped() {
    let result = post_settlement(json!({"monthly_salary": -5000, "years": 2})).await;
    assert_eq!(receipt_amount(&result, "Total"), "C$ 0.00");
}

#[tokio::test]
async fn test_repeated_requests_produce_identical_reports() {
    let body = json!({"monthly_salary": "18750.50", "years": 4, "months": 3, "days": 12});

    let first = post_settlement(body.clone()).await;
    let second = post_settlement(body).await;

    assert_eq!(first["report"], second["report"]);
    assert_ne!(first["calculation_id"], second["calculation_id"]);
}

#[tokio::test]
async fn test_audit_steps_in_rule_order() {
    let result = post_settlement(json!({"monthly_salary": 1200, "years": 1})).await;

    let rule_ids: Vec<&str> = result["report"]["audit_trace"]["steps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|step| step["rule_id"].as_str().unwrap())
        .collect();

    assert_eq!(
        rule_ids,
        vec![
            "tenure_conversion",
            "social_security",
            "income_tax",
            "prorated_bonus",
            "vacation_pay",
            "severance",
            "prorated_partial_salary",
            "settlement_total",
        ]
    );
}

// =============================================================================
// Payroll and words
// =============================================================================

#[tokio::test]
async fn test_payroll_slip_uses_configured_rate() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/payroll",
        json!({
            "employee": {
                "id": "emp_001",
                "name": "Juan Perez",
                "base_salary": "1200",
                "days_worked": 25,
                "vacation_days": 10
            }
        }),
    )
    .await;

    // 40 x 25 = 1000; 9% = 90
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["slip"]["employee_id"], "emp_001");
    assert_eq!(result["formatted"]["earned_salary"], "C$ 1000.00");
    assert_eq!(result["formatted"]["deductions"], "C$ 90.00");
    assert_eq!(result["formatted"]["net_pay"], "C$ 910.00");
    assert_eq!(result["slip"]["vacation_days"], 10);
    assert_eq!(result["formatted"]["vacation_balance"], "C$ 400.00");
}

#[tokio::test]
async fn test_payroll_slip_with_rate_override() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/payroll",
        json!({
            "employee": {"id": "emp_002", "name": "Ana López", "base_salary": "3000", "days_worked": 30},
            "deduction_rate": "0.05"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["formatted"]["deductions"], "C$ 150.00");
    assert_eq!(result["formatted"]["net_pay"], "C$ 2850.00");
}

#[tokio::test]
async fn test_words_endpoint() {
    let cases = [
        (0, "cero"),
        (15, "quince"),
        (21, "veintiuno"),
        (101, "ciento uno"),
        (21_000, "veintiún mil"),
        (999_999, "novecientos noventa y nueve mil novecientos noventa y nueve"),
        (1_000_000, "número demasiado grande"),
    ];

    for (number, expected) in cases {
        let (status, result) = send(
            create_router_for_test(),
            Request::builder()
                .uri(format!("/words/{}", number))
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(result["number"], number);
        assert_eq!(result["words"], expected, "words for {}", number);
    }
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let (status, result) = send(
        create_router_for_test(),
        Request::builder()
            .method("POST")
            .uri("/settlement")
            .header("Content-Type", "application/json")
            .body(Body::from("{\"monthly_salary\": "))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_non_object_body_returns_400() {
    let (status, _) = post_json(create_router_for_test(), "/settlement", json!("1200")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_content_type_returns_400() {
    let (status, result) = send(
        create_router_for_test(),
        Request::builder()
            .method("POST")
            .uri("/settlement")
            .body(Body::from("{}"))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MISSING_CONTENT_TYPE");
}

#[test]
fn test_missing_config_dir_fails_to_load() {
    let result = ConfigLoader::load("./config/does_not_exist");
    assert!(result.is_err());
}
