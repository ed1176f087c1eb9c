//! Category records returned by stores.
//!
//! Provides [`CategoryNode`], the read-only view of a category that every
//! [`CategoryStore`](crate::CategoryStore) backend hands out, along with the
//! identifier newtypes and the [`CategoryList`] shapes a children query may
//! return.
//!
//! # Level Convention
//!
//! Levels count from the absolute root of the category tree:
//! - `0` - absolute root (never rendered)
//! - `1` - store root category
//! - `2` - top-level categories shown in the storefront
//!
//! A child is always exactly one level below its parent.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque category identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u64);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CategoryId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Opaque product identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Category record as supplied by a store.
///
/// Nodes are plain values: stores build fresh ones per query and the renderer
/// never mutates them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryNode {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Display name (unescaped).
    pub name: String,
    /// Inactive categories are pruned together with their subtree.
    pub is_active: bool,
    /// Categories excluded from menus are pruned together with their subtree.
    pub include_in_menu: bool,
    /// Depth from the absolute root.
    pub level: u32,
    /// Parent identifier, `None` for the absolute root.
    pub parent_id: Option<CategoryId>,
    /// True if the category has at least one child of any state.
    pub has_children: bool,
    /// Sort position among siblings (ascending).
    #[serde(default)]
    pub position: i64,
    /// URL key used to build category links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_key: Option<String>,
    /// Product count attached by the store, if it loaded one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_count: Option<u64>,
}

impl CategoryNode {
    /// Create an active, menu-visible category without children.
    #[must_use]
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>, level: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_active: true,
            include_in_menu: true,
            level,
            parent_id: None,
            has_children: false,
            position: 0,
            url_key: None,
            product_count: None,
        }
    }

    /// Set the parent identifier.
    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<CategoryId>) -> Self {
        self.parent_id = Some(parent.into());
        self
    }

    /// Set the active flag.
    #[must_use]
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Set the include-in-menu flag.
    #[must_use]
    pub fn with_include_in_menu(mut self, include_in_menu: bool) -> Self {
        self.include_in_menu = include_in_menu;
        self
    }

    /// Set the children existence flag.
    #[must_use]
    pub fn with_has_children(mut self, has_children: bool) -> Self {
        self.has_children = has_children;
        self
    }

    /// Set the sort position.
    #[must_use]
    pub fn with_position(mut self, position: i64) -> Self {
        self.position = position;
        self
    }

    /// Set the URL key.
    #[must_use]
    pub fn with_url_key(mut self, url_key: impl Into<String>) -> Self {
        self.url_key = Some(url_key.into());
        self
    }

    /// Attach a preloaded product count.
    #[must_use]
    pub fn with_product_count(mut self, count: u64) -> Self {
        self.product_count = Some(count);
        self
    }

    /// Whether the category may appear in navigation at all.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.is_active && self.include_in_menu
    }
}

/// Categories keyed by id, kept in load order.
///
/// Lookups by id are O(1); iteration yields items in the order they were
/// pushed, which for store queries is position order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryCollection {
    items: Vec<CategoryNode>,
    index: HashMap<CategoryId, usize>,
}

impl CategoryCollection {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category. A category with an id already present replaces the
    /// earlier entry in place.
    pub fn push(&mut self, node: CategoryNode) {
        if let Some(&idx) = self.index.get(&node.id) {
            self.items[idx] = node;
        } else {
            self.index.insert(node.id, self.items.len());
            self.items.push(node);
        }
    }

    /// Get a category by id.
    #[must_use]
    pub fn get(&self, id: CategoryId) -> Option<&CategoryNode> {
        self.index.get(&id).map(|&i| &self.items[i])
    }

    /// Items in load order.
    #[must_use]
    pub fn items(&self) -> &[CategoryNode] {
        &self.items
    }

    /// Consume the collection, returning items in load order.
    #[must_use]
    pub fn into_items(self) -> Vec<CategoryNode> {
        self.items
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the collection holds no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<CategoryNode> for CategoryCollection {
    fn from_iter<I: IntoIterator<Item = CategoryNode>>(iter: I) -> Self {
        let mut collection = Self::new();
        for node in iter {
            collection.push(node);
        }
        collection
    }
}

/// Result shape of a children query.
///
/// Backends return whichever shape is natural for them. Consumers normalize
/// it to an indexed sequence before classifying siblings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CategoryList {
    /// Plain ordered list.
    List(Vec<CategoryNode>),
    /// Keyed collection with an items accessor.
    Collection(CategoryCollection),
    /// Payload the backend could not express as categories.
    ///
    /// Carries the type name reported by the backend. Consumers treat it as
    /// a contract violation.
    Unsupported(String),
}

impl CategoryList {
    /// Name of the shape, for diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::List(_) => "list",
            Self::Collection(_) => "collection",
            Self::Unsupported(name) => name,
        }
    }
}

impl From<Vec<CategoryNode>> for CategoryList {
    fn from(nodes: Vec<CategoryNode>) -> Self {
        Self::List(nodes)
    }
}

impl From<CategoryCollection> for CategoryList {
    fn from(collection: CategoryCollection) -> Self {
        Self::Collection(collection)
    }
}
