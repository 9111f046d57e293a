//! Serial vs parallel trie build benchmark.
//!
//! Run with: `cargo bench --bench build`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use triehard::{Alphabet, BuildConfig, MergeStrategy, ParallelBuilder, QueryEngine, Trie};

/// Generate a deterministic pseudo-word list over `a-z`
fn generate_words(n: usize, seed: u64) -> Vec<String> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let len = 3 + (state >> 60) as usize;
            (0..len)
                .map(|i| (b'a' + (state.rotate_right(i as u32 * 5) % 26) as u8) as char)
                .collect()
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    group.sample_size(10);

    let words = generate_words(200_000, 42);

    group.bench_function("serial", |b| {
        b.iter(|| black_box(Trie::from_words(&words, Alphabet::Unrestricted).unwrap()));
    });

    for workers in [2, 4, 8] {
        for (name, merge) in [
            ("sequential_merge", MergeStrategy::Sequential),
            ("tree_merge", MergeStrategy::Tree),
        ] {
            let config = BuildConfig::new().with_workers(workers).with_merge(merge);
            let builder = ParallelBuilder::new(config).unwrap();
            group.bench_function(BenchmarkId::new(name, workers), |b| {
                b.iter(|| black_box(builder.build(&words).unwrap()));
            });
        }
    }

    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");

    let words = generate_words(200_000, 7);
    let trie = Trie::from_words(&words, Alphabet::Unrestricted).unwrap();
    let engine = QueryEngine::new(&trie);

    group.bench_function("fresh", |b| {
        b.iter(|| {
            for prefix in ["q", "qu", "que", "quer"] {
                black_box(engine.query(prefix));
            }
        });
    });

    group.bench_function("incremental", |b| {
        b.iter(|| {
            let mut previous = String::from("q");
            let mut results = engine.query("q");
            for prefix in ["qu", "que", "quer"] {
                results = engine.incremental_query(&previous, &results, prefix);
                previous = prefix.to_string();
            }
            black_box(results)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_build, bench_query);
criterion_main!(benches);
