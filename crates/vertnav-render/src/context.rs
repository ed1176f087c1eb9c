//! Per-request browsing context.
//!
//! [`RenderContext`] carries everything a render pass needs to know about the
//! request: which category is in view, the branch leading to it, who the
//! customer is, and which product or CMS page the block sits on. It is built
//! once per request and never mutated by the renderer.

use std::collections::HashSet;

use vertnav_store::{CategoryId, CategoryNode, CategoryStore, ProductId, StoreError};

/// Customer group id used for every logged-out visitor.
pub const NOT_LOGGED_IN_GROUP_ID: u32 = 0;

/// Immutable per-request context.
#[derive(Clone, Debug, Default)]
pub struct RenderContext {
    active_path: Vec<CategoryId>,
    active_set: HashSet<CategoryId>,
    current_category: Option<CategoryNode>,
    logged_in: bool,
    group_id: u32,
    product_id: Option<ProductId>,
    page_id: Option<String>,
}

impl RenderContext {
    /// Create a context for a guest with no category, product or page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category in view.
    #[must_use]
    pub fn with_current_category(mut self, category: CategoryNode) -> Self {
        self.current_category = Some(category);
        self
    }

    /// Set the active path, ordered from the absolute root down.
    #[must_use]
    pub fn with_active_path(mut self, path: impl IntoIterator<Item = CategoryId>) -> Self {
        self.active_path = path.into_iter().collect();
        self.active_set = self.active_path.iter().copied().collect();
        self
    }

    /// Mark the customer as logged in with the given group.
    #[must_use]
    pub fn with_customer_group(mut self, group_id: u32) -> Self {
        self.logged_in = true;
        self.group_id = group_id;
        self
    }

    /// Set the session group of a logged-out customer.
    ///
    /// Guests always report [`NOT_LOGGED_IN_GROUP_ID`]; the session group is
    /// kept only for diagnostics.
    #[must_use]
    pub fn with_guest_group(mut self, group_id: u32) -> Self {
        self.logged_in = false;
        self.group_id = group_id;
        self
    }

    /// Set the product in view.
    #[must_use]
    pub fn with_product(mut self, product: impl Into<ProductId>) -> Self {
        self.product_id = Some(product.into());
        self
    }

    /// Set the CMS page the block is rendered on.
    #[must_use]
    pub fn with_page(mut self, page_id: impl Into<String>) -> Self {
        self.page_id = Some(page_id.into());
        self
    }

    /// Active path, ordered from the absolute root down.
    #[must_use]
    pub fn active_path(&self) -> &[CategoryId] {
        &self.active_path
    }

    /// Whether `id` lies on the branch currently being browsed.
    #[must_use]
    pub fn is_on_active_path(&self, id: CategoryId) -> bool {
        self.active_set.contains(&id)
    }

    /// Category in view.
    #[must_use]
    pub fn current_category(&self) -> Option<&CategoryNode> {
        self.current_category.as_ref()
    }

    /// Id of the category in view.
    #[must_use]
    pub fn current_category_id(&self) -> Option<CategoryId> {
        self.current_category.as_ref().map(|c| c.id)
    }

    /// Whether `id` is the category in view.
    #[must_use]
    pub fn is_current(&self, id: CategoryId) -> bool {
        self.current_category_id() == Some(id)
    }

    /// Whether the customer is logged in.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// Effective customer group: the session group for logged-in customers,
    /// [`NOT_LOGGED_IN_GROUP_ID`] for everyone else.
    #[must_use]
    pub fn customer_group_id(&self) -> u32 {
        if self.logged_in {
            self.group_id
        } else {
            NOT_LOGGED_IN_GROUP_ID
        }
    }

    /// Product in view.
    #[must_use]
    pub fn product_id(&self) -> Option<ProductId> {
        self.product_id
    }

    /// CMS page the block is rendered on.
    #[must_use]
    pub fn page_id(&self) -> Option<&str> {
        self.page_id.as_deref()
    }
}

/// Ids from the absolute root down to `category`, for use as active path.
///
/// # Errors
///
/// Returns [`StoreError`] if an ancestor lookup fails.
pub fn active_path(
    store: &dyn CategoryStore,
    category: &CategoryNode,
) -> Result<Vec<CategoryId>, StoreError> {
    let mut path = vec![category.id];
    let mut parent = category.parent_id;
    // A category has exactly `level` ancestors.
    for _ in 0..category.level {
        let Some(id) = parent else { break };
        path.push(id);
        parent = store.category(id)?.and_then(|node| node.parent_id);
    }
    path.reverse();
    Ok(path)
}
