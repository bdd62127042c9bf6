//! Performance benchmarks for the playroom engine.
//!
//! Covers the hot paths of the session form (billing, clock arithmetic), the
//! preview endpoint end to end, and revealing a large collection page by page.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use playroom_engine::api::{AppState, create_router};
use playroom_engine::calculation::{ClockTime, TariffTable, compute_billing, to_12_hour, to_24_hour};
use playroom_engine::config::{ConfigLoader, TariffsConfig};
use playroom_engine::paging::{Identified, PagedCollection};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

struct Row(String);

impl Identified for Row {
    fn id(&self) -> &str {
        &self.0
    }
}

/// Benchmark: billing for every location kind.
fn bench_billing(c: &mut Criterion) {
    let table = TariffTable::new(TariffsConfig::default().rules);
    let locations = ["Play 5 número 1", "Play 4 número 2", "Ping Pong", "Futbolín"];

    let mut group = c.benchmark_group("billing");
    for location in locations {
        group.bench_with_input(BenchmarkId::from_parameter(location), location, |b, loc| {
            b.iter(|| compute_billing(black_box(loc), black_box(95), 2, &table, 200))
        });
    }
    group.finish();
}

/// Benchmark: clock conversions and end-time derivation over a full day.
fn bench_clock(c: &mut Criterion) {
    let times: Vec<String> = (0..1440)
        .map(|m| format!("{:02}:{:02}", m / 60, m % 60))
        .collect();

    let mut group = c.benchmark_group("clock");
    group.throughput(Throughput::Elements(times.len() as u64));

    group.bench_function("round_trip_day", |b| {
        b.iter(|| {
            for time in &times {
                black_box(to_24_hour(&to_12_hour(black_box(time))));
            }
        })
    });

    group.bench_function("end_time", |b| {
        let start = ClockTime::from_hm(22, 45).unwrap();
        b.iter(|| black_box(start).add_minutes(black_box(150)).to_12h_string())
    });
    group.finish();
}

/// Benchmark: the preview endpoint end to end.
fn bench_play_preview(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let config = ConfigLoader::load("./config/sala_ruiz").expect("Failed to load config");
    let router = create_router(AppState::new(config));
    let body = serde_json::json!({
        "start_time": "3:15 PM",
        "paid_minutes": 90,
        "location": "Play 5 número 1",
        "extra_controllers": 1
    })
    .to_string();

    c.bench_function("play_preview", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/plays/preview")
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

/// Benchmark: loading and revealing a 10k item collection.
fn bench_paging(c: &mut Criterion) {
    let mut group = c.benchmark_group("paging");

    for page_size in [10usize, 100] {
        group.bench_with_input(
            BenchmarkId::new("reveal_all", page_size),
            &page_size,
            |b, &page_size| {
                b.iter(|| {
                    let mut collection = PagedCollection::new(page_size);
                    let ticket = collection.begin_load("");
                    let rows = (0..10_000).map(|i| Row(i.to_string())).collect();
                    collection.complete_load(ticket, Ok(rows));
                    while collection.has_more() {
                        collection.next_page();
                    }
                    black_box(collection.visible().len())
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_billing,
    bench_clock,
    bench_play_preview,
    bench_paging
);
criterion_main!(benches);
