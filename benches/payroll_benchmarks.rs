//! Performance benchmarks for the payroll engine.
//!
//! Measures the pure compensation calculation and full payroll runs over
//! batches of employees against the in-memory stores.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use tokio::runtime::Runtime;

use chrono::NaiveDate;
use payroll_engine::calculation::calculate_compensation;
use payroll_engine::config::PayrollRates;
use payroll_engine::engine::PayrollEngine;
use payroll_engine::models::{Attendance, Employee};
use payroll_engine::storage::{InMemoryEmployeeStore, InMemoryPayrollStore};

/// Builds an engine seeded with `count` employees, each with a handful of
/// attendance entries in January 2024.
async fn setup_engine(count: usize) -> PayrollEngine {
    let employees = Arc::new(InMemoryEmployeeStore::new());
    for i in 0..count {
        let id = format!("emp_{:05}", i);
        employees
            .add_employee(Employee {
                id: id.clone(),
                full_name: format!("Employee {}", i),
                designation: "Engineer".to_string(),
                basic_salary: Decimal::from(2000 + (i as i64 % 10) * 100),
                joining_date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
            })
            .await;
        for day in 2..=12u32 {
            employees
                .add_attendance(Attendance {
                    id: format!("att_{}_{}", id, day),
                    employee_id: id.clone(),
                    date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
                    present: day % 3 != 0,
                })
                .await;
        }
    }

    PayrollEngine::new(
        employees,
        Arc::new(InMemoryPayrollStore::new()),
        PayrollRates::default(),
    )
}

fn bench_compensation(c: &mut Criterion) {
    let rates = PayrollRates::default();

    c.bench_function("calculate_compensation", |b| {
        b.iter(|| {
            calculate_compensation(
                black_box(Decimal::from(2600)),
                black_box(13),
                black_box(21),
                &rates,
            )
        })
    });
}

fn bench_process_run(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();

    let mut group = c.benchmark_group("process_run");
    for employee_count in [1usize, 100, 1000] {
        let engine = Arc::new(rt.block_on(setup_engine(employee_count)));
        group.throughput(Throughput::Elements(employee_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(employee_count),
            &employee_count,
            |b, _| {
                let engine = engine.clone();
                // Overwrite runs so every iteration purges and recomputes.
                b.to_async(&rt).iter(|| {
                    let engine = engine.clone();
                    async move {
                        engine
                            .process_run(2024, 1, "bench", true)
                            .await
                            .expect("run failed")
                    }
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_compensation, bench_process_run);
criterion_main!(benches);
