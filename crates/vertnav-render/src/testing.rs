//! Shared fixtures for unit tests.

use vertnav_store::{CategoryId, CategoryNode, CategoryStore, MockStore};

use crate::context::{RenderContext, active_path};

/// A small shop tree rooted at "Default Category" (id 2):
///
/// ```text
/// 1 Root Catalog            level 0
/// +-- 2 Default Category    level 1 (store root)
///     +-- 3 Shoes           level 2
///     |   +-- 6 Sneakers    level 3
///     |   |   +-- 8 Running level 4
///     |   +-- 7 Boots       level 3
///     +-- 4 Hats            level 2
///     +-- 5 Bags            level 2
/// ```
pub(crate) fn shop() -> MockStore {
    MockStore::new(2)
        .with_category(CategoryNode::new(1, "Root Catalog", 0))
        .with_category(CategoryNode::new(2, "Default Category", 1).with_parent(1))
        .with_category(
            CategoryNode::new(3, "Shoes", 2)
                .with_parent(2)
                .with_position(1)
                .with_url_key("shoes"),
        )
        .with_category(
            CategoryNode::new(4, "Hats", 2)
                .with_parent(2)
                .with_position(2)
                .with_url_key("hats"),
        )
        .with_category(
            CategoryNode::new(5, "Bags", 2)
                .with_parent(2)
                .with_position(3)
                .with_url_key("bags"),
        )
        .with_category(
            CategoryNode::new(6, "Sneakers", 3)
                .with_parent(3)
                .with_position(1)
                .with_url_key("shoes/sneakers"),
        )
        .with_category(
            CategoryNode::new(7, "Boots", 3)
                .with_parent(3)
                .with_position(2)
                .with_url_key("shoes/boots"),
        )
        .with_category(
            CategoryNode::new(8, "Running", 4)
                .with_parent(6)
                .with_position(1)
                .with_url_key("shoes/sneakers/running"),
        )
}

/// Context browsing category `id`, with its full ancestor chain as active path.
pub(crate) fn context_in(store: &MockStore, id: u64) -> RenderContext {
    let current = store.category(CategoryId(id)).unwrap().unwrap();
    let path = active_path(store, &current).unwrap();

    RenderContext::new()
        .with_current_category(current)
        .with_active_path(path)
}
