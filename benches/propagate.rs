//! Benchmarks for the ancestor-walk propagation and child scoring.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use uct_tree::{NodeId, SearchTree};

fn deep_chain(depth: usize) -> (SearchTree<usize>, NodeId) {
    let mut tree = SearchTree::new();
    let mut cursor = tree.alloc(0);
    for level in 1..=depth {
        let next = tree.alloc(level);
        tree.attach(next, cursor).unwrap();
        cursor = next;
    }
    (tree, cursor)
}

fn wide_root(children: usize) -> (SearchTree<usize>, NodeId) {
    let mut tree = SearchTree::new();
    let root = tree.alloc(0);
    for i in 1..=children {
        let child = tree.alloc(i);
        tree.attach(child, root).unwrap();
        tree.credit_reward(child, i as f64);
        tree.record_visit(child);
    }
    (tree, root)
}

fn bench_credit_reward(c: &mut Criterion) {
    let (mut tree, leaf) = deep_chain(1024);
    c.bench_function("credit_reward_depth_1024", |b| {
        b.iter(|| tree.credit_reward(black_box(leaf), black_box(1.0)));
    });
}

fn bench_record_visit(c: &mut Criterion) {
    let (mut tree, leaf) = deep_chain(1024);
    c.bench_function("record_visit_depth_1024", |b| {
        b.iter(|| tree.record_visit(black_box(leaf)));
    });
}

fn bench_child_scores(c: &mut Criterion) {
    let (tree, root) = wide_root(256);
    c.bench_function("child_scores_256", |b| {
        b.iter(|| black_box(tree.child_scores(black_box(root))));
    });
}

criterion_group!(
    benches,
    bench_credit_reward,
    bench_record_visit,
    bench_child_scores
);
criterion_main!(benches);
