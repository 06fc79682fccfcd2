//! Benchmarks for lexicon loading and root generation.
//!
//! Run with: `cargo bench --package trmorph_lexicon`

use std::sync::Arc;

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use trmorph_lexicon::{
    BUNDLED, CircumflexConvertingRootGenerator, LexiconLoader, RootMap, StandardRootGenerator,
};

// =============================================================================
// Loading
// =============================================================================

fn bench_load(c: &mut Criterion) {
    c.bench_function("lexicon/load_bundled", |b| {
        b.iter(|| black_box(LexiconLoader::new().load_str(BUNDLED)));
    });
}

// =============================================================================
// Root Generation
// =============================================================================

fn bench_root_map(c: &mut Criterion) {
    let lexemes: Vec<_> = LexiconLoader::new()
        .load_str(BUNDLED)
        .unwrap()
        .into_iter()
        .map(Arc::new)
        .collect();
    let generator = CircumflexConvertingRootGenerator::new(StandardRootGenerator);

    c.bench_function("lexicon/build_root_map", |b| {
        b.iter(|| black_box(RootMap::build(lexemes.iter().cloned(), &generator)));
    });
}

criterion_group!(benches, bench_load, bench_root_map);
criterion_main!(benches);
