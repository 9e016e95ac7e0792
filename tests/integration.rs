//! Integration tests for the payroll engine.
//!
//! This test suite covers:
//! - The HTTP API end to end (report contents, validation errors)
//! - The command-line report over the bundled sample CSV
//! - Error cases (missing input, bad rows)

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::io::Write;
use std::str::FromStr;
use tower::ServiceExt;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::app::run_report;
use payroll_engine::cli::ReportArgs;
use payroll_engine::config::ConfigLoader;
use payroll_engine::error::EngineError;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/payroll.yaml").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

/// Normalize decimal string by removing trailing zeros after decimal point
fn normalize_decimal(s: &str) -> String {
    Decimal::from_str(s).unwrap().normalize().to_string()
}

fn assert_decimal(actual: &Value, expected: &str) {
    let actual = actual.as_str().expect("decimal serialized as string");
    assert_eq!(
        normalize_decimal(actual),
        normalize_decimal(expected),
        "Expected {}, got {}",
        expected,
        actual
    );
}

async fn post_report(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/payroll/report")
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

fn employee(full_name: &str, position: &str, hire_date: &str, salary: Value) -> Value {
    json!({
        "full_name": full_name,
        "position": position,
        "hire_date": hire_date,
        "salary": salary
    })
}

fn sample_staff() -> Value {
    json!([
        employee("Иванов Иван", "Ведущий программист", "15.03.2012", json!(150000)),
        employee("Петрова Анна", "Бухгалтер", "06/01/2020", json!("85,000")),
        employee("Попова Елена", "HR-специалист", "03.04.2025", json!(65000)),
    ])
}

fn report_args(csv: Option<&std::path::Path>) -> ReportArgs {
    ReportArgs {
        csv: csv.map(|p| p.to_path_buf()),
        config: None,
        as_of: NaiveDate::from_ymd_opt(2025, 6, 15),
        no_chart: false,
        chart_height: 12,
        verbose: 0,
    }
}

// =============================================================================
// SECTION 1: HTTP API
// =============================================================================

#[tokio::test]
async fn test_api_report_applies_all_rules() {
    let body = json!({ "employees": sample_staff(), "as_of": "2025-06-15" });
    let (status, result) = post_report(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);

    let bonuses = result["programmer_bonuses"].as_array().unwrap();
    assert_eq!(bonuses.len(), 1);
    assert_eq!(bonuses[0]["full_name"], "Иванов Иван");
    assert_decimal(&bonuses[0]["amount"], "4500");

    let holiday = result["holiday_bonuses"].as_array().unwrap();
    assert_eq!(holiday.len(), 3);
    assert_decimal(&holiday[1]["amount"], "2000");

    let indexations = result["indexations"].as_array().unwrap();
    assert_eq!(indexations[0]["tenure_years"], 13);
    assert_decimal(&indexations[0]["rate"], "0.07");
    assert_decimal(&indexations[0]["new_salary"], "160500");
    assert_decimal(&indexations[1]["new_salary"], "89250");
    assert_decimal(&indexations[2]["new_salary"], "68250");

    assert_eq!(
        result["vacation_eligible"],
        json!(["Иванов Иван", "Петрова Анна"])
    );
    assert_decimal(&result["total_payroll"], "318000");

    let taxes = result["taxes"].as_array().unwrap();
    assert_decimal(&taxes[0]["income_tax"], "20865");
    assert_decimal(&taxes[0]["social_tax"], "48150");
}

#[tokio::test]
async fn test_api_position_averages_are_sorted() {
    let body = json!({
        "employees": [
            employee("Орлов", "Юрист", "01.01.2020", json!(100)),
            employee("Белов", "Бухгалтер", "01.01.2020", json!(100)),
            employee("Зайцев", "Бухгалтер", "01.01.2020", json!(300)),
        ],
        "as_of": "2021-01-01"
    });
    let (status, result) = post_report(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    let averages = result["position_averages"].as_array().unwrap();
    assert_eq!(averages.len(), 2);
    assert_eq!(averages[0]["position"], "Бухгалтер");
    assert_eq!(averages[0]["employees"], 2);
    assert_decimal(&averages[0]["average_salary"], "210");
    assert_eq!(averages[1]["position"], "Юрист");
}

#[tokio::test]
async fn test_api_empty_staff_list() {
    let body = json!({ "employees": [], "as_of": "2025-06-15" });
    let (status, result) = post_report(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&result["total_payroll"], "0");
    assert!(result["position_averages"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_api_as_of_defaults_to_today() {
    let body = json!({ "employees": sample_staff() });
    let (status, result) = post_report(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(result["as_of"].as_str().is_some());
}

// =============================================================================
// SECTION 2: Error Cases
// =============================================================================

#[tokio::test]
async fn test_api_non_numeric_salary_returns_400() {
    let body = json!({
        "employees": [employee("Иванов", "Юрист", "01.01.2020", json!("abc"))]
    });
    let (status, error) = post_report(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_EMPLOYEE");
    assert_eq!(
        error["message"],
        "Зарплата должна быть неотрицательным числом: abc"
    );
}

#[tokio::test]
async fn test_api_negative_salary_returns_400() {
    let body = json!({
        "employees": [employee("Иванов", "Юрист", "01.01.2020", json!(-1))]
    });
    let (status, error) = post_report(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_EMPLOYEE");
    assert_eq!(error["details"], "employees[0] contains invalid data");
}

#[tokio::test]
async fn test_api_salary_at_decimal_limit_returns_400() {
    let body = json!({
        "as_of": "2025-06-15",
        "employees": [employee("Орлов", "Юрист", "01.01.2010", json!("79228162514264337593543950335"))]
    });
    let (status, error) = post_report(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "AMOUNT_OVERFLOW");
    assert_eq!(error["message"], "Слишком большая сумма: индексация для Орлов");
}

#[tokio::test]
async fn test_api_missing_employees_returns_validation_error() {
    let (status, error) = post_report(create_router_for_test(), json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_api_missing_content_type_returns_400() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/payroll/report")
                .body(Body::from(r#"{"employees": []}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(error["code"], "MISSING_CONTENT_TYPE");
}

// =============================================================================
// SECTION 3: Command-line Report
// =============================================================================

#[test]
fn test_report_over_bundled_sample() {
    let args = report_args(Some(std::path::Path::new("./data/employees.csv")));
    let text = run_report(&args).unwrap();

    assert!(text.starts_with(
        "Премия ко Дню программиста для Иванов Иван Иванович: 4500.00 руб.\n\
         Премия ко Дню программиста для Смирнов Алексей Петрович: 3600.00 руб.\n"
    ));
    assert!(text.contains("Премия к празднику для Петрова Анна Сергеевна: 2000 руб.\n"));
    assert!(text.contains("Индексация зарплаты для Кузнецова Мария Викторовна: 101650.00 руб.\n"));
    assert!(text.contains("Индексация зарплаты для Попова Елена Андреевна: 68250.00 руб.\n"));
    assert!(text.contains(
        "Сотрудники, имеющие право на отпуск: ['Иванов Иван Иванович', \
         'Петрова Анна Сергеевна', 'Смирнов Алексей Петрович', \
         'Кузнецова Мария Викторовна', 'Соколов Дмитрий Олегович']\n"
    ));
    assert!(text.contains("Фонд оплаты труда: 619150.00 руб.\n"));
    assert!(text.contains("Оклад по должностям\nОклад (руб.)\n"));
    assert!(text.ends_with(
        "Налоги для Попова Елена Андреевна: 8872.50 руб. (подоходный), 20475.00 руб. (соц. страх.)\n"
    ));

    // The chart sits between the total and the taxes.
    let total_at = text.find("Фонд оплаты труда").unwrap();
    let chart_at = text.find("Оклад по должностям").unwrap();
    let taxes_at = text.find("Налоги для").unwrap();
    assert!(total_at < chart_at && chart_at < taxes_at);
}

#[test]
fn test_report_without_chart() {
    let mut args = report_args(Some(std::path::Path::new("./data/employees.csv")));
    args.no_chart = true;
    let text = run_report(&args).unwrap();
    assert!(!text.contains("Оклад по должностям"));
}

#[test]
fn test_report_aborts_on_bad_row() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        "ФИО,Должность,Дата найма,Оклад\nОрлов,Курьер,01.01.2020,100\nБелов,Курьер,2020-01-01,100\n"
            .as_bytes(),
    )
    .unwrap();

    let result = run_report(&report_args(Some(file.path())));
    match result {
        Err(err @ EngineError::InvalidHireDate { .. }) => {
            assert_eq!(err.to_string(), "Неверный формат даты: 2020-01-01");
            assert_eq!(err.exit_code(), 3);
        }
        other => panic!("Expected InvalidHireDate, got {:?}", other),
    }
}

#[test]
fn test_report_overflowing_salary_exits_with_input_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        "ФИО,Должность,Дата найма,Оклад\nОрлов,Юрист,01.01.2010,\"79,228,162,514,264,337,593,543,950,335\"\n"
            .as_bytes(),
    )
    .unwrap();

    match run_report(&report_args(Some(file.path()))) {
        Err(err @ EngineError::AmountOverflow { .. }) => assert_eq!(err.exit_code(), 3),
        other => panic!("Expected AmountOverflow, got {:?}", other),
    }
}

#[test]
fn test_report_missing_file() {
    let result = run_report(&report_args(Some(std::path::Path::new("./data/nope.csv"))));
    assert!(matches!(result, Err(EngineError::InputNotFound { .. })));
}
