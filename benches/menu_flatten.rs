// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the sidebar menu flatten pass.
//!
//! Measures the performance of:
//! - Flattening a fully collapsed tree (roots only)
//! - Flattening a fully expanded tree (every row visible)
//! - Toggling expansion state

use criterion::{criterion_group, criterion_main, Criterion};
use iced_gallery::ui::sidebar::{flatten_visible, MenuNode, State};
use std::collections::HashSet;
use std::hint::black_box;

/// Builds a tree of the given depth with `breadth` children per branch.
fn build_tree(depth: usize, breadth: usize, prefix: &str) -> Vec<MenuNode> {
    (0..breadth)
        .map(|i| {
            let id = format!("{prefix}-{i}");
            let node = MenuNode::leaf(id.clone(), format!("Node {id}"));
            if depth > 1 {
                node.with_children(build_tree(depth - 1, breadth, &id))
            } else {
                node.with_target(format!("/{id}"))
            }
        })
        .collect()
}

/// Collects every branch id in the tree.
fn branch_ids(nodes: &[MenuNode], out: &mut HashSet<String>) {
    for node in nodes {
        if node.has_children() {
            out.insert(node.id.clone());
            branch_ids(&node.children, out);
        }
    }
}

fn bench_flatten_collapsed(c: &mut Criterion) {
    let mut group = c.benchmark_group("menu_flatten");

    let tree = build_tree(5, 4, "n");
    let expanded = HashSet::new();

    group.bench_function("collapsed", |b| {
        b.iter(|| {
            let rows = flatten_visible(black_box(&tree), black_box(&expanded));
            black_box(rows);
        });
    });

    group.finish();
}

fn bench_flatten_expanded(c: &mut Criterion) {
    let mut group = c.benchmark_group("menu_flatten");

    let tree = build_tree(5, 4, "n");
    let mut expanded = HashSet::new();
    branch_ids(&tree, &mut expanded);

    group.bench_function("fully_expanded", |b| {
        b.iter(|| {
            let rows = flatten_visible(black_box(&tree), black_box(&expanded));
            black_box(rows);
        });
    });

    group.finish();
}

fn bench_activate_branch(c: &mut Criterion) {
    let mut group = c.benchmark_group("menu_flatten");

    let tree = build_tree(3, 8, "n");

    group.bench_function("toggle_pair", |b| {
        b.iter(|| {
            let mut state = State::new();
            for node in &tree {
                state.activate(black_box(node));
                state.activate(black_box(node));
            }
            black_box(&state);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_flatten_collapsed,
    bench_flatten_expanded,
    bench_activate_branch
);
criterion_main!(benches);
