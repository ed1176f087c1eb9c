//! Benchmarks for navigation tree rendering.

use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use vertnav_render::{NavigationBlock, NavigationConfig, RenderContext};
use vertnav_store::{CategoryId, CategoryNode, CategoryStore, MockStore};

/// Create a category tree with specified depth and breadth below store root 1.
fn create_store(depth: u32, breadth: u64) -> MockStore {
    fn add_level(
        store: MockStore,
        parent: u64,
        level: u32,
        max_level: u32,
        breadth: u64,
        next_id: &mut u64,
    ) -> MockStore {
        if level > max_level {
            return store;
        }
        let mut store = store;
        for i in 0..breadth {
            let id = *next_id;
            *next_id += 1;
            let position = i64::try_from(i).unwrap();
            store = store.with_category(
                CategoryNode::new(id, format!("Category {id}"), level)
                    .with_parent(parent)
                    .with_position(position)
                    .with_url_key(format!("category-{id}")),
            );
            store = add_level(store, id, level + 1, max_level, breadth, next_id);
        }
        store
    }

    let store = MockStore::new(1).with_category(CategoryNode::new(1, "Default Category", 1));
    let mut next_id = 2;
    add_level(store, 1, 2, depth + 1, breadth, &mut next_id)
}

fn bench_auto_expand(c: &mut Criterion) {
    let store: Arc<dyn CategoryStore> = Arc::new(create_store(3, 6));
    let ctx = RenderContext::new();

    let mut group = c.benchmark_group("auto_expand");

    for max_depth in [0, 2, 3] {
        let config = NavigationConfig {
            auto_expand: true,
            auto_expand_max_depth: max_depth,
            ..Default::default()
        };
        let block = NavigationBlock::new(Arc::clone(&store), config);
        group.bench_with_input(BenchmarkId::from_parameter(max_depth), &block, |b, block| {
            b.iter(|| block.render(None, &ctx).unwrap());
        });
    }

    group.finish();
}

fn bench_active_path(c: &mut Criterion) {
    let store = create_store(4, 5);
    let current = store.category(CategoryId(5)).unwrap().unwrap();
    let ctx = RenderContext::new()
        .with_active_path([1, 2, 3, 4, 5].map(CategoryId))
        .with_current_category(current);
    let block = NavigationBlock::new(Arc::new(store), NavigationConfig::default());

    c.bench_function("active_path_depth_4", |b| {
        b.iter(|| block.render(None, &ctx).unwrap());
    });
}

criterion_group!(benches, bench_auto_expand, bench_active_path);
criterion_main!(benches);
