//! Class-tree pipeline benchmarks.
//!
//! Every keystroke in the search bar runs filter, then ancestor sync, then
//! render over the whole forest, so the pipeline must stay well under a frame
//! even for large ontologies.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `filter` | Annotation and pruning alone, sparse vs. dense matches |
//! | `keystroke` | Full term change through `TreeSession` plus `visible_tree` |
//! | `scaling` | Keystroke cost as the forest grows from 1k to 100k classes |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench tree_bench
//! open target/criterion/report/index.html
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ontoview_core::{filter::filter, ClassNode, Forest, TreeSession};
use std::hint::black_box;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A forest of roughly `n` classes, `fanout` children per node, named so a
/// fixed fraction of leaves match "needle".
fn synthetic_forest(n: usize, fanout: usize) -> Forest {
    let mut counter = 0usize;
    let mut roots = Vec::new();
    while counter < n {
        roots.push(grow(&mut counter, n, fanout, 0));
    }
    Forest::new(roots)
}

fn grow(counter: &mut usize, n: usize, fanout: usize, depth: usize) -> ClassNode {
    let id = *counter;
    *counter += 1;
    let name = if id % 97 == 0 {
        format!("Needle{id}")
    } else {
        format!("Class{id}")
    };
    let mut node = ClassNode::new(name);
    if depth < 4 {
        for _ in 0..fanout {
            if *counter >= n {
                break;
            }
            node.children.push(grow(counter, n, fanout, depth + 1));
        }
    }
    node
}

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

fn filter_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");
    let forest = synthetic_forest(10_000, 6);

    group.bench_function("sparse_10k", |b| b.iter(|| filter(black_box(&forest), "needle")));
    group.bench_function("dense_10k", |b| b.iter(|| filter(black_box(&forest), "class")));
    group.bench_function("empty_term_10k", |b| b.iter(|| filter(black_box(&forest), "")));

    group.finish();
}

// ---------------------------------------------------------------------------
// Keystroke
// ---------------------------------------------------------------------------

fn keystroke_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("keystroke");
    let forest = synthetic_forest(10_000, 6);

    // Typing "needle" one character at a time from a fresh session.
    group.bench_function("type_needle_10k", |b| {
        b.iter_batched(
            || TreeSession::new(forest.clone()),
            |mut session| {
                let term = "needle";
                for end in 1..=term.len() {
                    session.on_search_term_change(&term[..end]);
                    black_box(session.visible_tree());
                }
                session
            },
            criterion::BatchSize::LargeInput,
        )
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Scaling
// ---------------------------------------------------------------------------

fn scaling_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for size in [1_000usize, 10_000, 100_000] {
        let forest = synthetic_forest(size, 8);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("term_change", size), &forest, |b, forest| {
            b.iter_batched(
                || TreeSession::new(forest.clone()),
                |mut session| {
                    session.on_search_term_change("needle");
                    black_box(session.visible_tree())
                },
                criterion::BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, filter_bench, keystroke_bench, scaling_bench);
criterion_main!(benches);
