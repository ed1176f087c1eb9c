//! Vertical category navigation rendering.
//!
//! This crate turns a category tree into nested navigation markup:
//!
//! - [`RootSelector`] decides whose children form the top level
//! - [`TreeRenderer`] walks the tree, classifies items and emits markup
//! - [`NavigationBlock`] combines both with cache keys, markup caching and
//!   suppression hooks
//!
//! Categories come from a [`CategoryStore`](vertnav_store::CategoryStore);
//! everything request-specific travels in an explicit [`RenderContext`].
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use vertnav_render::{NavigationBlock, NavigationConfig, RenderContext, RootMode};
//!
//! let config = NavigationConfig {
//!     root_mode: RootMode::Level(2),
//!     auto_expand: true,
//!     auto_expand_max_depth: 2,
//!     ..Default::default()
//! };
//! let block = NavigationBlock::new(store, config);
//! let nav = block.render(None, &ctx)?;
//! ```

mod block;
mod cache_key;
mod children;
mod classes;
mod config;
mod context;
mod error;
mod hook;
mod html;
mod renderer;
mod root;
#[cfg(test)]
mod testing;

pub use block::{CACHE_BUCKET, DEFAULT_BLOCK_NAME, NavigationBlock, RenderedNavigation};
pub use cache_key::{CACHE_KEY_NAMESPACE, cache_key};
pub use children::{as_linear, to_linear};
pub use classes::{ClassList, sibling_classes, slugify};
pub use config::{DEFAULT_HOME_PAGE_ID, NavigationConfig, ParseRootModeError, RootMode};
pub use context::{NOT_LOGGED_IN_GROUP_ID, RenderContext, active_path};
pub use error::RenderError;
pub use hook::{LoginCatalogHook, NoSuppression, SuppressionHook};
pub use html::{PathUrlBuilder, UrlBuilder, escape_html};
pub use renderer::{RenderPass, TreeRenderer};
pub use root::{RootModeOption, RootSelector, root_mode_options};
