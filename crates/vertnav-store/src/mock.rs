//! Mock store implementation for testing.
//!
//! Provides [`MockStore`] for unit testing without a catalog file.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::node::{CategoryCollection, CategoryId, CategoryList, CategoryNode, ProductId};
use crate::store::{CategoryStore, ErrorStatus, StoreError, StoreErrorKind};

/// Store query that can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MockQuery {
    /// [`CategoryStore::category`]
    Category,
    /// [`CategoryStore::children`]
    Children,
    /// [`CategoryStore::descendants`]
    Descendants,
    /// [`CategoryStore::product_count`]
    ProductCount,
    /// [`CategoryStore::product_category_ids`]
    ProductCategories,
}

/// Mock store for testing.
///
/// Holds categories in memory. Use the builder methods to configure the mock
/// with test data. Query counters let tests assert how often the renderer
/// went to the store.
///
/// # Example
///
/// ```ignore
/// use vertnav_store::{CategoryNode, CategoryStore, MockStore};
///
/// let store = MockStore::new(1)
///     .with_category(CategoryNode::new(1, "Root", 1))
///     .with_category(CategoryNode::new(2, "Shoes", 2).with_parent(1));
///
/// let children = store.children(1.into()).unwrap();
/// ```
#[derive(Debug)]
pub struct MockStore {
    root: CategoryId,
    categories: RwLock<HashMap<CategoryId, CategoryNode>>,
    order: RwLock<Vec<CategoryId>>,
    product_counts: RwLock<HashMap<CategoryId, u64>>,
    product_categories: RwLock<HashMap<ProductId, Vec<CategoryId>>>,
    malformed: RwLock<HashMap<CategoryId, String>>,
    failures: RwLock<HashMap<MockQuery, StoreErrorKind>>,
    as_collection: bool,
    children_calls: AtomicUsize,
    descendants_calls: AtomicUsize,
    product_count_calls: AtomicUsize,
}

impl MockStore {
    /// Create an empty mock store whose root category is `root`.
    #[must_use]
    pub fn new(root: impl Into<CategoryId>) -> Self {
        Self {
            root: root.into(),
            categories: RwLock::new(HashMap::new()),
            order: RwLock::new(Vec::new()),
            product_counts: RwLock::new(HashMap::new()),
            product_categories: RwLock::new(HashMap::new()),
            malformed: RwLock::new(HashMap::new()),
            failures: RwLock::new(HashMap::new()),
            as_collection: false,
            children_calls: AtomicUsize::new(0),
            descendants_calls: AtomicUsize::new(0),
            product_count_calls: AtomicUsize::new(0),
        }
    }

    /// Add a category.
    ///
    /// The parent (if already added) is marked as having children.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_category(self, node: CategoryNode) -> Self {
        let mut node = node;
        let id = node.id;
        {
            let mut categories = self.categories.write().unwrap();
            if let Some(parent) = node.parent_id.and_then(|p| categories.get_mut(&p)) {
                parent.has_children = true;
            }
            node.has_children |= categories.values().any(|c| c.parent_id == Some(id));
            categories.insert(id, node);
        }
        let mut order = self.order.write().unwrap();
        if !order.contains(&id) {
            order.push(id);
        }
        drop(order);
        self
    }

    /// Set the product count reported for a category.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_product_count(self, id: impl Into<CategoryId>, count: u64) -> Self {
        self.product_counts.write().unwrap().insert(id.into(), count);
        self
    }

    /// Assign a product to categories.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_product(self, product: impl Into<ProductId>, categories: &[u64]) -> Self {
        self.product_categories.write().unwrap().insert(
            product.into(),
            categories.iter().copied().map(CategoryId).collect(),
        );
        self
    }

    /// Make the children query for `parent` return an unsupported payload.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_malformed_children(
        self,
        parent: impl Into<CategoryId>,
        type_name: impl Into<String>,
    ) -> Self {
        self.malformed
            .write()
            .unwrap()
            .insert(parent.into(), type_name.into());
        self
    }

    /// Make every call of `query` fail with `kind`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_failure(self, query: MockQuery, kind: StoreErrorKind) -> Self {
        self.failures.write().unwrap().insert(query, kind);
        self
    }

    /// Return children as a keyed collection instead of a plain list.
    #[must_use]
    pub fn with_collection_children(mut self) -> Self {
        self.as_collection = true;
        self
    }

    /// Number of [`CategoryStore::children`] calls so far.
    pub fn children_calls(&self) -> usize {
        self.children_calls.load(Ordering::Relaxed)
    }

    /// Number of [`CategoryStore::descendants`] calls so far.
    pub fn descendants_calls(&self) -> usize {
        self.descendants_calls.load(Ordering::Relaxed)
    }

    /// Number of [`CategoryStore::product_count`] calls so far.
    pub fn product_count_calls(&self) -> usize {
        self.product_count_calls.load(Ordering::Relaxed)
    }

    fn check(&self, query: MockQuery, id: Option<CategoryId>) -> Result<(), StoreError> {
        match self.failures.read().unwrap().get(&query) {
            Some(&kind) => {
                let mut err = StoreError::new(kind)
                    .with_backend("Mock")
                    .with_status(ErrorStatus::Permanent);
                if let Some(id) = id {
                    err = err.with_category(id);
                }
                Err(err)
            }
            None => Ok(()),
        }
    }

    /// Visible categories matching `filter`, in position order.
    fn sorted_visible(
        &self,
        filter: impl Fn(&CategoryNode, &HashMap<CategoryId, CategoryNode>) -> bool,
    ) -> Vec<CategoryNode> {
        let categories = self.categories.read().unwrap();
        let order = self.order.read().unwrap();
        let mut nodes: Vec<CategoryNode> = order
            .iter()
            .filter_map(|id| categories.get(id))
            .filter(|node| node.is_visible() && filter(node, &categories))
            .cloned()
            .collect();
        nodes.sort_by_key(|node| (node.level, node.position, node.id));
        nodes
    }

    /// Children payload of `parent`, honouring injected malformed payloads
    /// and the collection shape.
    fn payload(&self, parent: CategoryId, nodes: Vec<CategoryNode>) -> CategoryList {
        if let Some(type_name) = self.malformed.read().unwrap().get(&parent) {
            return CategoryList::Unsupported(type_name.clone());
        }
        if self.as_collection {
            CategoryList::Collection(nodes.into_iter().collect::<CategoryCollection>())
        } else {
            CategoryList::List(nodes)
        }
    }

    fn is_descendant(
        node: &CategoryNode,
        root: CategoryId,
        categories: &HashMap<CategoryId, CategoryNode>,
    ) -> bool {
        let mut parent = node.parent_id;
        while let Some(id) = parent {
            if id == root {
                return true;
            }
            parent = categories.get(&id).and_then(|c| c.parent_id);
        }
        false
    }
}

impl CategoryStore for MockStore {
    fn root_category_id(&self) -> CategoryId {
        self.root
    }

    fn category(&self, id: CategoryId) -> Result<Option<CategoryNode>, StoreError> {
        self.check(MockQuery::Category, Some(id))?;
        Ok(self.categories.read().unwrap().get(&id).cloned())
    }

    fn children(&self, parent: CategoryId) -> Result<CategoryList, StoreError> {
        self.children_calls.fetch_add(1, Ordering::Relaxed);
        self.check(MockQuery::Children, Some(parent))?;

        let nodes = self.sorted_visible(|node, _| node.parent_id == Some(parent));
        Ok(self.payload(parent, nodes))
    }

    fn descendants(
        &self,
        root: CategoryId,
        max_level: Option<u32>,
    ) -> Result<Vec<(CategoryId, CategoryList)>, StoreError> {
        self.descendants_calls.fetch_add(1, Ordering::Relaxed);
        self.check(MockQuery::Descendants, Some(root))?;

        let nodes = self.sorted_visible(|node, categories| {
            max_level.is_none_or(|max| node.level <= max)
                && Self::is_descendant(node, root, categories)
        });
        let parents = std::iter::once(root).chain(
            nodes
                .iter()
                .filter(|node| max_level.is_none_or(|max| node.level < max))
                .map(|node| node.id),
        );

        Ok(parents
            .map(|parent| {
                let children = nodes
                    .iter()
                    .filter(|node| node.parent_id == Some(parent))
                    .cloned()
                    .collect();
                (parent, self.payload(parent, children))
            })
            .collect())
    }

    fn product_count(&self, id: CategoryId) -> Result<u64, StoreError> {
        self.product_count_calls.fetch_add(1, Ordering::Relaxed);
        self.check(MockQuery::ProductCount, Some(id))?;
        Ok(self
            .product_counts
            .read()
            .unwrap()
            .get(&id)
            .copied()
            .unwrap_or(0))
    }

    fn product_category_ids(&self, product: ProductId) -> Result<Vec<CategoryId>, StoreError> {
        self.check(MockQuery::ProductCategories, None)?;
        Ok(self
            .product_categories
            .read()
            .unwrap()
            .get(&product)
            .cloned()
            .unwrap_or_default())
    }

    fn max_level(&self) -> Result<u32, StoreError> {
        Ok(self
            .categories
            .read()
            .unwrap()
            .values()
            .map(|c| c.level)
            .max()
            .unwrap_or(0))
    }
}
