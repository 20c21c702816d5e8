//! Selection performance benchmarks
//!
//! Measures the per-test decision cost and the one-time setup costs
//! (request normalization, exclusion set construction, manifest parsing).
//!
//! ## Expected performance
//!
//! - should_run: sub-microsecond per test (string compares over a handful of tags)
//! - Request/exclusion construction: single-digit microseconds, once per run
//! - Manifest parsing: tens of microseconds, once per run, dominated by TOML
//!
//! **Note**: Actual measurements vary with compiler version, CPU architecture,
//! and system load.
//!
//! Run with: `cargo bench`

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use tagsieve::engine::{ExclusionSet, RunRequest, SelectionEngine};
use tagsieve::manifest::Manifest;
use tagsieve::tags::TagSet;

/// Synthetic suite of `size` tests cycling through a small tag vocabulary.
fn synthetic_suite(size: usize) -> Vec<(String, Vec<String>)> {
    let vocabulary = [
        vec!["smoke"],
        vec!["smoke", "checkout"],
        vec!["search", "not Safari"],
        vec!["reports", "nightly"],
        vec![],
    ];

    (0..size)
        .map(|i| {
            let tags = vocabulary[i % vocabulary.len()]
                .iter()
                .map(|tag| tag.to_string())
                .collect();
            (format!("suite::test_{i}"), tags)
        })
        .collect()
}

/// Benchmark single decisions across the paths the engine can take
///
/// Selection runs once per collected test, so this is the hot path.
fn bench_should_run(c: &mut Criterion) {
    let cases = vec![
        ("direct_hit", vec!["smoke", "checkout"], vec!["smoke"]),
        ("miss", vec!["search", "reports"], vec!["smoke"]),
        (
            "compound_hit",
            vec!["smoke", "checkout", "payments"],
            vec!["smoke+payments"],
        ),
        (
            "compound_miss",
            vec!["smoke", "checkout"],
            vec!["smoke+payments", "search+reports"],
        ),
        ("excluded", vec!["smoke", "inactive"], vec!["smoke"]),
        (
            "negated",
            vec!["smoke", "checkout"],
            vec!["smoke", "not checkout"],
        ),
    ];

    let mut group = c.benchmark_group("should_run");

    for (name, declared, tokens) in cases {
        let engine = SelectionEngine::new(RunRequest::new(tokens), ExclusionSet::default());
        group.bench_with_input(BenchmarkId::from_parameter(name), &declared, |b, tags| {
            b.iter(|| engine.should_run(tags));
        });
    }

    group.finish();
}

/// Benchmark run request normalization
///
/// Happens once per run; cost scales with the number of tokens.
fn bench_request_construction(c: &mut Criterion) {
    let token_sets = vec![
        ("default", vec!["all"]),
        ("mixed", vec!["smoke", "not nightly", "~flaky", "a+b+c"]),
        (
            "wide",
            vec![
                "one", "two", "three", "four", "five", "six", "seven", "not eight",
            ],
        ),
    ];

    let mut group = c.benchmark_group("request_construction");

    for (name, tokens) in token_sets {
        group.bench_with_input(BenchmarkId::from_parameter(name), &tokens, |b, t| {
            b.iter(|| RunRequest::new(t.iter().copied()));
        });
    }

    group.finish();
}

/// Benchmark exclusion set construction with an environment context
fn bench_exclusion_build(c: &mut Criterion) {
    let configured = vec!["quarantined".to_string(), "flaky".to_string()];

    c.bench_function("exclusion_build", |b| {
        b.iter(|| ExclusionSet::build(Some("internet explorer"), configured.iter().cloned()));
    });
}

/// Benchmark partitioning whole suites
fn bench_partition(c: &mut Criterion) {
    let engine = SelectionEngine::new(
        RunRequest::new(["smoke", "not nightly"]),
        ExclusionSet::build(Some("firefox"), std::iter::empty::<String>()),
    );

    let mut group = c.benchmark_group("partition");

    for size in [100, 1_000] {
        let suite = synthetic_suite(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &suite, |b, suite| {
            b.iter_batched(
                || suite.clone(),
                |items| engine.partition(items, |(_, tags)| TagSet::from_declared(tags.clone())),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark manifest parsing
///
/// One-time startup cost for the preview binary.
fn bench_manifest_parsing(c: &mut Criterion) {
    let toml_str = r#"
[[tests]]
name = "auth::password_login"
module = "auth"
tags = ["auth", "smoke"]

[[tests]]
name = "checkout::guest_checkout"
module = "checkout"
tags = ["smoke", "checkout"]

[[tests]]
name = "misc::healthcheck"
"#;

    c.bench_function("manifest_parsing", |b| {
        b.iter(|| {
            let manifest: Manifest = toml_str.parse().unwrap();
            manifest
        });
    });
}

criterion_group!(
    benches,
    bench_should_run,
    bench_request_construction,
    bench_exclusion_build,
    bench_partition,
    bench_manifest_parsing,
);
criterion_main!(benches);
