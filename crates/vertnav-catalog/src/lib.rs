//! Catalog file backend for vertical navigation.
//!
//! This crate provides [`CatalogStore`], a file-based implementation of the
//! [`CategoryStore`](vertnav_store::CategoryStore) trait. It handles:
//!
//! - YAML and JSON catalog files (format picked by extension)
//! - Level and parent derivation from record nesting
//! - Product counts, explicit or derived from product assignments
//! - Position ordering of siblings
//!
//! The whole tree is loaded once and kept in flat vectors with children
//! tracked by indices, so every query is a lookup.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use vertnav_catalog::CatalogStore;
//! use vertnav_store::CategoryStore;
//!
//! let store = CatalogStore::load(Path::new("catalog.yaml"))?;
//! let root = store.root_category_id();
//! let children = store.children(root)?;
//! ```

mod source;

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use vertnav_store::{
    CategoryId, CategoryList, CategoryNode, CategoryStore, ProductId, StoreError, StoreErrorKind,
};

use source::{CatalogFile, CategoryRecord, parse_catalog};

/// Backend identifier for error messages.
const BACKEND: &str = "Catalog";

/// Error returned when a catalog file cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Catalog file could not be read.
    #[error("Failed to read catalog {}: {source}", .path.display())]
    Io {
        /// Catalog file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// YAML parsing error.
    #[error("Invalid catalog YAML: {0}")]
    Yaml(#[source] serde_yaml::Error),
    /// JSON parsing error.
    #[error("Invalid catalog JSON: {0}")]
    Json(#[source] serde_json::Error),
    /// Two records share an id.
    #[error("Duplicate category id {0}")]
    DuplicateId(CategoryId),
    /// The configured root category is not in the tree.
    #[error("Root category {0} not found in catalog")]
    UnknownRoot(CategoryId),
    /// A product is assigned to a category that is not in the tree.
    #[error("Product {product} assigned to unknown category {category}")]
    UnknownCategory {
        /// Product id.
        product: ProductId,
        /// Missing category id.
        category: CategoryId,
    },
}

/// File-backed category store.
///
/// Immutable after loading; safe to share between threads.
#[derive(Debug)]
pub struct CatalogStore {
    root: CategoryId,
    nodes: Vec<CategoryNode>,
    children: Vec<Vec<usize>>,
    index: HashMap<CategoryId, usize>,
    products: HashMap<ProductId, Vec<CategoryId>>,
    max_level: u32,
}

impl CatalogStore {
    /// Load a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the file cannot be read, parsed or
    /// validated.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_file(parse_catalog(&content, path)?)?;
        tracing::debug!(
            path = %path.display(),
            categories = store.nodes.len(),
            products = store.products.len(),
            "loaded catalog"
        );
        Ok(store)
    }

    /// Parse a catalog from YAML content.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the content cannot be parsed or validated.
    pub fn from_yaml_str(content: &str) -> Result<Self, CatalogError> {
        Self::from_file(parse_catalog(content, Path::new("catalog.yaml"))?)
    }

    fn from_file(file: CatalogFile) -> Result<Self, CatalogError> {
        let mut builder = TreeBuilder::default();
        for (i, record) in file.categories.iter().enumerate() {
            builder.add(record, None, 0, i)?;
        }

        let root = CategoryId(file.root_category_id);
        if !builder.index.contains_key(&root) {
            return Err(CatalogError::UnknownRoot(root));
        }

        let mut products = HashMap::new();
        let mut assigned: HashMap<CategoryId, u64> = HashMap::new();
        for product in &file.products {
            let product_id = ProductId(product.id);
            let mut seen = HashSet::new();
            let mut categories = Vec::with_capacity(product.categories.len());
            for &raw in &product.categories {
                let category = CategoryId(raw);
                if !builder.index.contains_key(&category) {
                    return Err(CatalogError::UnknownCategory {
                        product: product_id,
                        category,
                    });
                }
                if seen.insert(category) {
                    *assigned.entry(category).or_default() += 1;
                    categories.push(category);
                }
            }
            products.insert(product_id, categories);
        }

        for (node, explicit) in builder.nodes.iter_mut().zip(&builder.explicit_counts) {
            node.product_count =
                Some(explicit.unwrap_or_else(|| assigned.get(&node.id).copied().unwrap_or(0)));
        }

        let nodes = builder.nodes;
        let mut children = builder.children;
        for list in &mut children {
            list.sort_by_key(|&i| (nodes[i].position, nodes[i].id));
        }
        let max_level = nodes.iter().map(|n| n.level).max().unwrap_or(0);

        Ok(Self {
            root,
            nodes,
            children,
            index: builder.index,
            products,
            max_level,
        })
    }

    /// Number of categories in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the catalog has no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node as handed out to callers: product counts are resolved on demand.
    fn view(&self, idx: usize) -> CategoryNode {
        let mut node = self.nodes[idx].clone();
        node.product_count = None;
        node
    }

    fn visible_children(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        self.children[idx]
            .iter()
            .copied()
            .filter(|&c| self.nodes[c].is_visible())
    }
}

/// Flattens nested records into indexed vectors.
#[derive(Default)]
struct TreeBuilder {
    nodes: Vec<CategoryNode>,
    explicit_counts: Vec<Option<u64>>,
    children: Vec<Vec<usize>>,
    index: HashMap<CategoryId, usize>,
}

impl TreeBuilder {
    fn add(
        &mut self,
        record: &CategoryRecord,
        parent: Option<usize>,
        level: u32,
        sibling_index: usize,
    ) -> Result<usize, CatalogError> {
        let id = CategoryId(record.id);
        if self.index.contains_key(&id) {
            return Err(CatalogError::DuplicateId(id));
        }

        let idx = self.nodes.len();
        let position = record
            .position
            .unwrap_or_else(|| i64::try_from(sibling_index).unwrap_or(i64::MAX));
        let mut node = CategoryNode::new(id, record.name.clone(), level)
            .with_active(record.active)
            .with_include_in_menu(record.include_in_menu)
            .with_has_children(!record.children.is_empty())
            .with_position(position);
        node.parent_id = parent.map(|p| self.nodes[p].id);
        node.url_key.clone_from(&record.url_key);

        self.nodes.push(node);
        self.explicit_counts.push(record.product_count);
        self.children.push(Vec::new());
        self.index.insert(id, idx);
        if let Some(p) = parent {
            self.children[p].push(idx);
        }

        for (i, child) in record.children.iter().enumerate() {
            self.add(child, Some(idx), level + 1, i)?;
        }
        Ok(idx)
    }
}

impl CategoryStore for CatalogStore {
    fn root_category_id(&self) -> CategoryId {
        self.root
    }

    fn category(&self, id: CategoryId) -> Result<Option<CategoryNode>, StoreError> {
        Ok(self.index.get(&id).map(|&i| self.view(i)))
    }

    fn children(&self, parent: CategoryId) -> Result<CategoryList, StoreError> {
        let Some(&idx) = self.index.get(&parent) else {
            return Ok(CategoryList::List(Vec::new()));
        };
        Ok(CategoryList::List(
            self.visible_children(idx).map(|c| self.view(c)).collect(),
        ))
    }

    fn descendants(
        &self,
        root: CategoryId,
        max_level: Option<u32>,
    ) -> Result<Vec<(CategoryId, CategoryList)>, StoreError> {
        let Some(&idx) = self.index.get(&root) else {
            return Ok(Vec::new());
        };

        // Breadth-first keeps siblings in position order.
        let mut result = Vec::new();
        let mut frontier = vec![idx];
        while !frontier.is_empty() {
            let mut next = Vec::new();
            for parent in frontier {
                let children: Vec<usize> = self
                    .visible_children(parent)
                    .filter(|&c| max_level.is_none_or(|max| self.nodes[c].level <= max))
                    .collect();
                result.push((
                    self.nodes[parent].id,
                    CategoryList::List(children.iter().map(|&c| self.view(c)).collect()),
                ));
                // Children at the ceiling are leaves of the fetched subtree.
                next.extend(
                    children
                        .into_iter()
                        .filter(|&c| max_level.is_none_or(|max| self.nodes[c].level < max)),
                );
            }
            frontier = next;
        }
        Ok(result)
    }

    fn product_count(&self, id: CategoryId) -> Result<u64, StoreError> {
        self.index
            .get(&id)
            .and_then(|&i| self.nodes[i].product_count)
            .ok_or_else(|| {
                StoreError::new(StoreErrorKind::NotFound)
                    .with_category(id)
                    .with_backend(BACKEND)
            })
    }

    fn product_category_ids(&self, product: ProductId) -> Result<Vec<CategoryId>, StoreError> {
        Ok(self.products.get(&product).cloned().unwrap_or_default())
    }

    fn max_level(&self) -> Result<u32, StoreError> {
        Ok(self.max_level)
    }
}
