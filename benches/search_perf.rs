//! Search performance benchmarks
//!
//! Run with: cargo bench --bench search_perf
//!
//! Covers the two hot paths:
//! - score_entry: per-entry scoring cost
//! - search: the full pipeline over small and medium catalogs

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use docfind::{
    score_entry, Catalog, CategoryInfo, CategoryRegistry, Entry, SearchConfig, SearchEngine,
};
use std::sync::Arc;

fn registry() -> CategoryRegistry {
    CategoryRegistry::new()
        .register("class", CategoryInfo::new("Class"))
        .register("function", CategoryInfo::new("Function"))
        .register("variable", CategoryInfo::new("Variable"))
}

fn catalog(size: usize) -> Catalog {
    let categories = ["class", "function", "variable"];
    let entries: Vec<Entry> = (0..size)
        .map(|i| {
            Entry::new(
                format!("Finder{i}"),
                format!("class_Finder{i}.html"),
                categories[i % categories.len()],
            )
            .with_text(format!(
                "Searches haystack number {i} for occurrences of a needle pattern."
            ))
        })
        .collect();
    Catalog::new(entries).expect("bench catalog must validate")
}

fn engine(size: usize) -> SearchEngine {
    SearchEngine::new(
        Arc::new(catalog(size)),
        SearchConfig::new().with_categories(registry()),
    )
    .expect("bench config must validate")
}

fn bench_score_entry(c: &mut Criterion) {
    let tokens = vec!["finder".to_string(), "needle".to_string()];
    let fields = [
        "Finder",
        "Searches a haystack for occurrences of a needle pattern.",
        "Searcher",
        "find",
        "findBegin",
    ];

    c.bench_function("score_entry/two_tokens", |b| {
        b.iter(|| score_entry(&tokens, &fields))
    });
}

fn bench_search(c: &mut Criterion) {
    let enabled = ["class", "function", "variable"];
    let mut group = c.benchmark_group("search");

    for size in [100usize, 1_000] {
        let engine = engine(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("title_hit", size), &engine, |b, engine| {
            b.iter(|| engine.search("finder", &enabled))
        });
        group.bench_with_input(BenchmarkId::new("text_hit", size), &engine, |b, engine| {
            b.iter(|| engine.search("needle pattern", &enabled))
        });
        group.bench_with_input(BenchmarkId::new("miss", size), &engine, |b, engine| {
            b.iter(|| engine.search("quaternion", &enabled))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_score_entry, bench_search);
criterion_main!(benches);
