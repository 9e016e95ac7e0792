//! Performance benchmarks for the payroll engine.
//!
//! Covers the in-process report build, the CSV ingest, chart rendering, and
//! the HTTP endpoint for a small and a large staff list.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Days, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::{ConfigLoader, PayrollRates};
use payroll_engine::io::load_employees_from_reader;
use payroll_engine::models::Employee;
use payroll_engine::report::{ChartOptions, PayrollReport, render_bar_chart};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

const POSITIONS: [&str; 6] = [
    "Программист",
    "Ведущий программист",
    "Бухгалтер",
    "Менеджер по продажам",
    "Юрист",
    "HR-специалист",
];

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

/// Builds a deterministic staff list of `count` employees.
fn create_staff(count: usize) -> Vec<Employee> {
    (0..count)
        .map(|i| {
            let hire_date = as_of().checked_sub_days(Days::new((i as u64 * 97) % 6000)).unwrap();
            let name = if i % 2 == 0 { "Иванова Анна" } else { "Петров Пётр" };
            Employee::with_hire_date(
                format!("{name} {i}"),
                POSITIONS[i % POSITIONS.len()],
                hire_date,
                Decimal::new(50_000 + (i as i64 * 1_250) % 150_000, 0),
            )
            .unwrap()
        })
        .collect()
}

fn create_csv(count: usize) -> String {
    let mut csv = String::from("ФИО,Должность,Дата найма,Оклад\n");
    for employee in create_staff(count) {
        csv.push_str(&format!(
            "{},{},{},\"{}\"\n",
            employee.full_name(),
            employee.position(),
            employee.hire_date().format("%d.%m.%Y"),
            employee.salary()
        ));
    }
    csv
}

fn create_request_body(count: usize) -> String {
    let employees: Vec<serde_json::Value> = create_staff(count)
        .iter()
        .map(|e| {
            serde_json::json!({
                "full_name": e.full_name(),
                "position": e.position(),
                "hire_date": e.hire_date().format("%d.%m.%Y").to_string(),
                "salary": e.salary()
            })
        })
        .collect();
    serde_json::json!({ "employees": employees, "as_of": "2025-06-15" }).to_string()
}

/// Benchmark: full rule run over a staff list.
fn bench_report_build(c: &mut Criterion) {
    let rates = PayrollRates::default();
    let mut group = c.benchmark_group("report_build");

    for count in [100usize, 1000] {
        let staff = create_staff(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &staff, |b, staff| {
            b.iter(|| {
                let mut staff = staff.clone();
                black_box(PayrollReport::build(&mut staff, &rates, as_of()).unwrap())
            })
        });
    }
    group.finish();
}

/// Benchmark: CSV ingest.
fn bench_csv_ingest(c: &mut Criterion) {
    let csv = create_csv(1000);
    let mut group = c.benchmark_group("csv_ingest");
    group.throughput(Throughput::Elements(1000));
    group.bench_function("csv_1000", |b| {
        b.iter(|| black_box(load_employees_from_reader(csv.as_bytes()).unwrap()))
    });
    group.finish();
}

/// Benchmark: chart rendering for the default geometry.
fn bench_chart(c: &mut Criterion) {
    let mut staff = create_staff(1000);
    let report = PayrollReport::build(&mut staff, &PayrollRates::default(), as_of()).unwrap();
    let options = ChartOptions::default();

    c.bench_function("render_bar_chart", |b| {
        b.iter(|| black_box(render_bar_chart(&report.position_averages, &options)))
    });
}

/// Benchmark: the HTTP endpoint, JSON in and out.
fn bench_api(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(ConfigLoader::default()));
    let mut group = c.benchmark_group("api_report");

    for count in [100usize, 1000] {
        let body = create_request_body(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &body, |b, body| {
            b.to_async(&rt).iter(|| async {
                let router = router.clone();
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/payroll/report")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                black_box(response)
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_report_build,
    bench_csv_ingest,
    bench_chart,
    bench_api
);
criterion_main!(benches);
