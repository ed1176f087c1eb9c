//! Store trait and error types.
//!
//! Provides the core [`CategoryStore`] trait for reading the category tree,
//! along with [`StoreError`] for unified error handling across backends.
//!
//! # Filtering Contract
//!
//! Every query that returns categories for display ([`CategoryStore::children`]
//! and [`CategoryStore::descendants`]) applies the same contract:
//! - only categories with `is_active` and `include_in_menu` set
//! - ordered by `position` ascending, ties broken by id
//!
//! Lookups by id ([`CategoryStore::category`]) are unfiltered.

use crate::node::{CategoryId, CategoryList, CategoryNode, ProductId};

/// Semantic error categories.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[non_exhaustive]
pub enum StoreErrorKind {
    /// Category or product does not exist.
    NotFound,
    /// Backend data violates the store contract (bad levels, dangling parents).
    InvalidData,
    /// Backend is temporarily unavailable.
    Unavailable,
    /// Operation timed out.
    Timeout,
    /// Other/unknown error category.
    Other,
}

/// Retry guidance.
#[derive(Debug, PartialEq, Eq, Default, Clone, Copy)]
pub enum ErrorStatus {
    /// Don't retry (not found, invalid data).
    #[default]
    Permanent,
    /// Retry immediately (timeout, connection reset).
    Temporary,
    /// Retry with backoff (service unavailable).
    Persistent,
}

/// Store error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct StoreError {
    kind: StoreErrorKind,
    status: ErrorStatus,
    category: Option<CategoryId>,
    backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StoreError {
    /// Create a new store error.
    #[must_use]
    pub fn new(kind: StoreErrorKind) -> Self {
        Self {
            kind,
            status: ErrorStatus::Permanent,
            category: None,
            backend: None,
            source: None,
        }
    }

    /// Attach the category the failing query was about.
    #[must_use]
    pub fn with_category(mut self, id: CategoryId) -> Self {
        self.category = Some(id);
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Set retry status.
    #[must_use]
    pub fn with_status(mut self, status: ErrorStatus) -> Self {
        self.status = status;
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Create a not found error for a category.
    #[must_use]
    pub fn not_found(id: CategoryId) -> Self {
        Self::new(StoreErrorKind::NotFound).with_category(id)
    }

    /// Semantic error category.
    #[must_use]
    pub fn kind(&self) -> StoreErrorKind {
        self.kind
    }

    /// Retry guidance.
    #[must_use]
    pub fn status(&self) -> ErrorStatus {
        self.status
    }

    /// Category context (if applicable).
    #[must_use]
    pub fn category(&self) -> Option<CategoryId> {
        self.category
    }

    /// Backend identifier (e.g., "Catalog", "Mock").
    #[must_use]
    pub fn backend(&self) -> Option<&'static str> {
        self.backend
    }

    /// Downcast the source error to a concrete type.
    #[must_use]
    pub fn downcast_source<E: std::error::Error + 'static>(&self) -> Option<&E> {
        self.source.as_ref()?.downcast_ref()
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (category: 12)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            StoreErrorKind::NotFound => "Not found",
            StoreErrorKind::InvalidData => "Invalid data",
            StoreErrorKind::Unavailable => "Unavailable",
            StoreErrorKind::Timeout => "Timeout",
            StoreErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(id) = self.category {
            write!(f, " (category: {id})")?;
        }

        Ok(())
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Read access to the category tree of one store view.
///
/// Implementations are synchronous. Callers never retry failed queries; every
/// error propagates to the request's own error boundary.
pub trait CategoryStore: Send + Sync {
    /// Root category configured for the store view.
    fn root_category_id(&self) -> CategoryId;

    /// Load a category by id, regardless of its flags.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(node))` - category exists
    /// - `Ok(None)` - no category with this id
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend fails.
    fn category(&self, id: CategoryId) -> Result<Option<CategoryNode>, StoreError>;

    /// Check if a category exists.
    ///
    /// Returns `false` on errors (treats errors as "doesn't exist").
    fn exists(&self, id: CategoryId) -> bool {
        matches!(self.category(id), Ok(Some(_)))
    }

    /// Displayable children of a category.
    ///
    /// Applies the filtering contract: active and in-menu only, ordered by
    /// position. Unknown parents yield an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend fails.
    fn children(&self, parent: CategoryId) -> Result<CategoryList, StoreError>;

    /// Children of every category in a subtree, in one query.
    ///
    /// Returns one `(parent, children)` entry for `root` and for each
    /// displayable descendant whose children lie within `max_level`, in
    /// breadth-first order. Each children payload follows the same filtering
    /// contract and shapes as [`children`](Self::children).
    ///
    /// # Arguments
    ///
    /// * `root` - Category whose subtree is fetched
    /// * `max_level` - Deepest absolute level of children to include, `None`
    ///   for unbounded
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend fails.
    fn descendants(
        &self,
        root: CategoryId,
        max_level: Option<u32>,
    ) -> Result<Vec<(CategoryId, CategoryList)>, StoreError>;

    /// Number of products assigned to a category.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the category is unknown or the backend fails.
    fn product_count(&self, id: CategoryId) -> Result<u64, StoreError>;

    /// Categories a product is assigned to, in assignment order.
    ///
    /// Default implementation returns no assignments for backends without
    /// product data.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend fails.
    fn product_category_ids(&self, product: ProductId) -> Result<Vec<CategoryId>, StoreError> {
        let _ = product;
        Ok(Vec::new())
    }

    /// Deepest level present in the tree.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend fails.
    fn max_level(&self) -> Result<u32, StoreError>;
}
