//! Performance benchmarks for the Equity Vesting Engine.
//!
//! This benchmark suite verifies that the engine meets performance targets:
//! - Single vesting calculation: < 10μs mean
//! - Batch of 100 employees: < 50ms mean
//! - Batch of 1000 employees: < 500ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;

use vesting_engine::api::{AppState, create_router};
use vesting_engine::calculation::calculate_vesting;
use vesting_engine::models::{Employee, VestingPolicy, VestingSchedule};
use vesting_engine::service::VestingService;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn as_of_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 6, 1).expect("valid date")
}

/// Creates a roster of employees with alternating policies and staggered
/// start dates.
fn create_employees(count: usize) -> Vec<Employee> {
    (0..count)
        .map(|i| {
            let policy = if i % 2 == 0 {
                VestingPolicy::Linear
            } else {
                VestingPolicy::Backloaded
            };
            let start_month = (i % 12) as u32 + 1;
            Employee {
                id: format!("emp_bench_{:04}", i),
                name: format!("Bench Employee {}", i),
                start_date: NaiveDate::from_ymd_opt(2020, start_month, 1).expect("valid date"),
                total_units: 36000 + (i as i64 * 100),
                schedule: VestingSchedule {
                    cliff_months: 12,
                    vesting_months: 48,
                    policy,
                },
            }
        })
        .collect()
}

/// Benchmark: single vesting calculation, no service or cache involved.
///
/// Target: < 10μs mean
fn bench_single_calculation(c: &mut Criterion) {
    let employees = create_employees(2);
    let as_of = as_of_date();

    let mut group = c.benchmark_group("single_calculation");
    for (name, emp) in [("linear", &employees[0]), ("backloaded", &employees[1])] {
        group.bench_function(name, |b| {
            b.iter(|| black_box(calculate_vesting(black_box(emp), black_box(as_of))))
        });
    }
    group.finish();
}

/// Benchmark: full batch through the service, one worker per employee.
fn bench_batch_processing(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("tokio runtime");
    let as_of = as_of_date();

    let mut group = c.benchmark_group("batch_processing");

    for count in [10usize, 100] {
        let employees = create_employees(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("employees", count), &employees, |b, emps| {
            b.to_async(&rt).iter(|| async {
                let service = VestingService::new();
                service
                    .process_batch(emps, as_of)
                    .await
                    .expect("batch succeeds");
                black_box(service.cached_results())
            })
        });
    }

    group.finish();
}

/// Benchmark: batch of 1000 employees.
///
/// Target: < 500ms mean
fn bench_batch_1000(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("tokio runtime");
    let as_of = as_of_date();
    let employees = create_employees(1000);

    let mut group = c.benchmark_group("large_batch_processing");
    group.throughput(Throughput::Elements(1000));
    // Reduce sample size for large batches to keep benchmark time reasonable
    group.sample_size(10);

    group.bench_function("batch_1000", |b| {
        b.to_async(&rt).iter(|| async {
            let service = VestingService::new();
            service
                .process_batch(&employees, as_of)
                .await
                .expect("batch succeeds");
            black_box(service.cached_results())
        })
    });

    group.finish();
}

/// Benchmark: batch request through the HTTP layer, including JSON
/// deserialization and schedule validation.
fn bench_http_batch(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("tokio runtime");

    let employees: Vec<serde_json::Value> = create_employees(100)
        .iter()
        .map(|emp| {
            serde_json::json!({
                "id": emp.id,
                "name": emp.name,
                "start_date": emp.start_date,
                "total_units": emp.total_units,
                "schedule": {
                    "cliff_months": emp.schedule.cliff_months,
                    "vesting_months": emp.schedule.vesting_months,
                    "policy": emp.schedule.policy
                }
            })
        })
        .collect();
    let body = serde_json::json!({
        "employees": employees,
        "as_of_date": "2023-06-01"
    })
    .to_string();

    let state = AppState::new(VestingService::new());

    let mut group = c.benchmark_group("http_batch");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100_http", |b| {
        b.to_async(&rt).iter(|| async {
            let router = create_router(state.clone());
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/batch")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_single_calculation,
    bench_batch_processing,
    bench_batch_1000,
    bench_http_batch,
);
criterion_main!(benches);
