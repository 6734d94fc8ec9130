//! Performance benchmarks for the work-day report.
//!
//! Covers the CPU-bound stages of a run against synthetic org charts:
//! - Reporting-tree resolution for growing charts
//! - Work-day calculation for one week
//! - A full multi-week report with an in-memory TimeOff source
//! - CSV rendering in both orientations
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use workday_report::calculation::{compute_work_days, resolve_reporting_tree};
use workday_report::client::TimeOffSource;
use workday_report::error::ReportResult;
use workday_report::models::{LeaveEntry, Person, Timeframe};
use workday_report::org_chart::OrgChart;
use workday_report::report::{Orientation, ReportRequest, generate_report, render_report};

/// Monday the report starts on.
fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 12).unwrap()
}

/// Builds a chart where every manager has `span` direct reports.
fn create_chart(size: usize, span: usize) -> OrgChart {
    let people = (0..size)
        .map(|i| {
            let person = Person::new(i.to_string(), format!("Employee {i:05}"));
            if i == 0 {
                person
            } else {
                person.with_supervisor_id(((i - 1) / span).to_string())
            }
        })
        .collect();
    OrgChart::new(people)
}

/// One leave entry for every tenth person, plus a public holiday.
fn create_leave(size: usize, start: NaiveDate) -> Vec<LeaveEntry> {
    let mut leave: Vec<LeaveEntry> = (0..size)
        .step_by(10)
        .map(|i| LeaveEntry::time_off(i.to_string(), start, start + Duration::days(2)))
        .collect();
    leave.push(LeaveEntry::holiday("Public Holiday", start, start));
    leave
}

/// Serves the same leave for every week.
struct StaticSource {
    leave: Vec<LeaveEntry>,
}

#[async_trait]
impl TimeOffSource for StaticSource {
    async fn whos_out(
        &self,
        _start: NaiveDate,
        _finish: NaiveDate,
    ) -> ReportResult<Vec<LeaveEntry>> {
        Ok(self.leave.clone())
    }
}

fn create_request(weeks: u32) -> ReportRequest {
    ReportRequest {
        under_user: "Employee 00000".to_string(),
        ignore: vec![],
        exclude: vec![],
        start_date: start_date(),
        weeks,
    }
}

/// Benchmark: resolving the whole tree under the root.
fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_reporting_tree");

    for size in [10, 100, 1000].iter() {
        let chart = create_chart(*size, 5);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("people", size), size, |b, _| {
            b.iter(|| black_box(resolve_reporting_tree(&chart, "Employee 00000", &[]).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark: one week of work days for 500 people.
fn bench_work_days_one_week(c: &mut Criterion) {
    let chart = create_chart(500, 5);
    let people = chart.people().to_vec();
    let leave = create_leave(500, start_date());
    let timeframe = Timeframe::week_starting(start_date()).unwrap();

    c.bench_function("work_days_500_people", |b| {
        b.iter(|| black_box(compute_work_days(&people, &leave, &timeframe)))
    });
}

/// Benchmark: full report for 200 people over a growing number of weeks.
fn bench_report_weeks(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let chart = create_chart(200, 5);
    let source = StaticSource {
        leave: create_leave(200, start_date()),
    };

    let mut group = c.benchmark_group("generate_report");

    for weeks in [1u32, 4, 12].iter() {
        let request = create_request(*weeks);
        group.throughput(Throughput::Elements(u64::from(*weeks)));
        group.bench_with_input(BenchmarkId::new("weeks", weeks), weeks, |b, _| {
            b.to_async(&rt).iter(|| async {
                black_box(generate_report(&chart, &source, &request).await.unwrap())
            })
        });
    }

    group.finish();
}

/// Benchmark: rendering a 12-week report for 200 people.
fn bench_render(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let chart = create_chart(200, 5);
    let source = StaticSource {
        leave: create_leave(200, start_date()),
    };
    let report = rt
        .block_on(generate_report(&chart, &source, &create_request(12)))
        .unwrap();

    let mut group = c.benchmark_group("render_report");
    group.bench_function("normal", |b| {
        b.iter(|| black_box(render_report(&report, Orientation::Normal).unwrap()))
    });
    group.bench_function("transposed", |b| {
        b.iter(|| black_box(render_report(&report, Orientation::Transposed).unwrap()))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_resolve,
    bench_work_days_one_week,
    bench_report_weeks,
    bench_render,
);
criterion_main!(benches);
