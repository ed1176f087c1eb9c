//! Category store abstraction for vertical navigation.
//!
//! This crate provides a [`CategoryStore`] trait for abstracting category
//! lookups from the underlying catalog backend. This enables:
//!
//! - **Unit testing** of the renderer without a catalog file
//! - **Backend flexibility** (catalog file, database, remote service)
//! - **Clean separation** between rendering logic and data access
//!
//! # Architecture
//!
//! The crate provides:
//! - [`CategoryNode`] read-only category records and the id newtypes
//! - [`CategoryList`] shapes a children query may return
//! - [`CategoryStore`] trait with `children()`, `descendants()`, `category()`
//!   and `product_count()` methods
//! - [`MockStore`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use vertnav_store::{CategoryList, CategoryStore};
//!
//! let root = store.root_category_id();
//! if let CategoryList::List(children) = store.children(root)? {
//!     for child in children {
//!         println!("{}: {}", child.id, child.name);
//!     }
//! }
//! ```

#[cfg(feature = "mock")]
mod mock;
mod node;
mod store;

#[cfg(feature = "mock")]
pub use mock::{MockQuery, MockStore};
pub use node::{CategoryCollection, CategoryId, CategoryList, CategoryNode, ProductId};
pub use store::{CategoryStore, ErrorStatus, StoreError, StoreErrorKind};
