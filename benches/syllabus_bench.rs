//! Benchmarks for prerequisite alerts and progress rollups
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use syllabus_sync::syllabus::*;

/// Chained syllabus: every subtopic depends on the one before it
fn create_test_syllabus(units: u32, topics_per_unit: u32) -> Syllabus {
    let statuses = [
        TopicStatus::Completed,
        TopicStatus::InProgress,
        TopicStatus::Pending,
        TopicStatus::Blocked,
    ];

    let units = (0..units)
        .map(|u| {
            let mut unit = Unit::new(u + 1, format!("Unit {}", u + 1))
                .progress((u * 7 % 101) as u8, UnitStatus::InProgress)
                .hours(20, u % 20);

            for t in 0..topics_per_unit {
                let id = u * topics_per_unit + t + 1;
                let status = statuses[(id % 4) as usize];
                let mut subtopic = Subtopic::new(id, format!("Topic {}", id), status).lectures(id % 5);
                if id > 1 {
                    subtopic = subtopic.requires(id - 1);
                }
                unit = unit.subtopic(subtopic);
            }
            unit
        })
        .collect();

    Syllabus {
        subject: "Bench".to_string(),
        code: "BENCH".to_string(),
        total_units: 0,
        units,
    }
}

fn bench_prerequisites(c: &mut Criterion) {
    let mut group = c.benchmark_group("prerequisites");

    for units in [10, 100, 1000] {
        let syllabus = create_test_syllabus(units, 10);
        group.throughput(Throughput::Elements(units as u64 * 10));

        group.bench_function(format!("index_{}", units * 10), |b| {
            b.iter(|| black_box(&syllabus).index().len())
        });

        group.bench_function(format!("alerts_{}", units * 10), |b| {
            b.iter(|| black_box(&syllabus).prerequisite_alerts())
        });
    }

    group.finish();
}

fn bench_rollup(c: &mut Criterion) {
    let mut group = c.benchmark_group("rollup");

    for units in [10, 100, 1000] {
        let syllabus = create_test_syllabus(units, 10);
        group.throughput(Throughput::Elements(units as u64));

        group.bench_function(format!("rollup_{}", units), |b| {
            b.iter(|| black_box(&syllabus).rollup())
        });

        group.bench_function(format!("drift_{}", units), |b| {
            b.iter(|| black_box(&syllabus).drifting_units().len())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_prerequisites, bench_rollup);
criterion_main!(benches);
