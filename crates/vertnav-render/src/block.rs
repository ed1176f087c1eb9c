//! Navigation block: the entry point that ties root selection, rendering and
//! markup caching together.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use vertnav_render::{NavigationBlock, NavigationConfig, RenderContext};
//!
//! let block = NavigationBlock::new(store, NavigationConfig::default())
//!     .with_cache(&cache);
//!
//! let ctx = RenderContext::new().with_customer_group(1).with_page("home");
//! let nav = block.render(None, &ctx)?;
//! println!("{}", nav.html);
//! ```

use std::borrow::Cow;
use std::sync::Arc;

use serde::Serialize;
use sha2::{Digest, Sha256};
use vertnav_cache::{Cache, CacheBucket, CacheBucketExt, NullCacheBucket};
use vertnav_store::{CategoryId, CategoryStore};

use crate::cache_key::cache_key;
use crate::config::NavigationConfig;
use crate::context::{RenderContext, active_path};
use crate::error::RenderError;
use crate::hook::{NoSuppression, SuppressionHook};
use crate::html::{PathUrlBuilder, UrlBuilder};
use crate::renderer::TreeRenderer;
use crate::root::RootSelector;

/// Cache bucket holding rendered navigation markup.
pub const CACHE_BUCKET: &str = "vertnav";

/// Block name used in cache keys unless configured otherwise.
pub const DEFAULT_BLOCK_NAME: &str = "catalog.vertnav";

/// Result of rendering a navigation block.
#[derive(Clone, Debug)]
pub struct RenderedNavigation {
    /// Navigation markup (list items without an outer list).
    pub html: String,
    /// Cache key the markup is stored under.
    pub cache_key: String,
    /// Whether the markup was served from cache.
    pub from_cache: bool,
}

/// Vertical navigation block.
pub struct NavigationBlock {
    store: Arc<dyn CategoryStore>,
    config: NavigationConfig,
    urls: Box<dyn UrlBuilder>,
    hook: Box<dyn SuppressionHook>,
    cache: Box<dyn CacheBucket>,
    name: String,
}

impl NavigationBlock {
    /// Create a block without cache or suppression hook, linking categories
    /// with [`PathUrlBuilder`].
    #[must_use]
    pub fn new(store: Arc<dyn CategoryStore>, config: NavigationConfig) -> Self {
        Self {
            store,
            config,
            urls: Box::new(PathUrlBuilder::default()),
            hook: Box::new(NoSuppression),
            cache: Box::new(NullCacheBucket),
            name: DEFAULT_BLOCK_NAME.to_owned(),
        }
    }

    /// Use `urls` to build category links.
    #[must_use]
    pub fn with_url_builder(mut self, urls: impl UrlBuilder + 'static) -> Self {
        self.urls = Box::new(urls);
        self
    }

    /// Consult `hook` before rendering.
    #[must_use]
    pub fn with_hook(mut self, hook: impl SuppressionHook + 'static) -> Self {
        self.hook = Box::new(hook);
        self
    }

    /// Store rendered markup in the [`CACHE_BUCKET`] bucket of `cache`.
    #[must_use]
    pub fn with_cache(mut self, cache: &dyn Cache) -> Self {
        self.cache = cache.bucket(CACHE_BUCKET);
        self
    }

    /// Set the block name used in cache keys.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Navigation configuration.
    #[must_use]
    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    /// The block's own key: its name and the category in view.
    #[must_use]
    pub fn parent_cache_key(&self, ctx: &RenderContext) -> String {
        format!(
            "{}_{}",
            self.name,
            ctx.current_category_id().map_or(0, |id| id.0)
        )
    }

    /// Cache key of the markup rendered for `ctx`.
    #[must_use]
    pub fn cache_key(&self, ctx: &RenderContext) -> String {
        cache_key(&self.parent_cache_key(ctx), ctx, &self.config.home_page_id)
    }

    /// Context the navigation is rendered with.
    ///
    /// With `show_category_on_top_level`, a product page reached without a
    /// category adopts the product's first category as current category and
    /// its ancestor chain as active path. Any other context is used as is.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if a store lookup fails.
    pub fn effective_context<'c>(
        &self,
        ctx: &'c RenderContext,
    ) -> Result<Cow<'c, RenderContext>, RenderError> {
        if !self.config.show_category_on_top_level || ctx.current_category().is_some() {
            return Ok(Cow::Borrowed(ctx));
        }
        let Some(product) = ctx.product_id() else {
            return Ok(Cow::Borrowed(ctx));
        };
        let Some(&first) = self.store.product_category_ids(product)?.first() else {
            return Ok(Cow::Borrowed(ctx));
        };
        let Some(category) = self.store.category(first)? else {
            return Ok(Cow::Borrowed(ctx));
        };

        let path = active_path(self.store.as_ref(), &category)?;
        tracing::debug!(%product, category = %category.id, "adopted first product category");
        Ok(Cow::Owned(
            ctx.clone()
                .with_active_path(path)
                .with_current_category(category),
        ))
    }

    /// Resolve the navigation root for `ctx`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if a store lookup fails.
    pub fn root_category_id(
        &self,
        root_override: Option<CategoryId>,
        ctx: &RenderContext,
    ) -> Result<Option<CategoryId>, RenderError> {
        let ctx = self.effective_context(ctx)?;
        let selector = RootSelector::new(self.store.as_ref(), &self.config);
        Ok(selector.resolve_root_id(root_override, &ctx)?)
    }

    /// Render the navigation for `ctx`.
    ///
    /// `root_override` replaces the configured root mode. An unresolvable or
    /// missing root renders empty markup.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if a store query fails or returns a malformed
    /// children payload.
    pub fn render(
        &self,
        root_override: Option<CategoryId>,
        ctx: &RenderContext,
    ) -> Result<RenderedNavigation, RenderError> {
        let cache_key = self.cache_key(ctx);
        if self.hook.suppress(ctx) {
            tracing::debug!(%cache_key, "navigation suppressed");
            return Ok(RenderedNavigation {
                html: String::new(),
                cache_key,
                from_cache: false,
            });
        }

        let etag = fingerprint(&(&self.config, root_override))?;
        if let Some(html) = self.cache.get_string(&cache_key, &etag) {
            tracing::debug!(%cache_key, "navigation cache hit");
            return Ok(RenderedNavigation {
                html,
                cache_key,
                from_cache: true,
            });
        }

        let ctx = self.effective_context(ctx)?;
        let selector = RootSelector::new(self.store.as_ref(), &self.config);
        let html = match selector.resolve_root(root_override, &ctx)? {
            Some(root) => TreeRenderer::new(
                self.store.as_ref(),
                &self.config,
                self.urls.as_ref(),
                self.hook.as_ref(),
            )
            .render_tree(&root, &ctx)?,
            None => String::new(),
        };

        self.cache.set_string(&cache_key, &etag, &html);
        Ok(RenderedNavigation {
            html,
            cache_key,
            from_cache: false,
        })
    }
}

/// SHA-256 hex digest of `value`'s JSON form.
///
/// Used as cache etag for everything besides the cache key that shapes the
/// markup.
fn fingerprint(value: &impl Serialize) -> Result<String, RenderError> {
    let json = serde_json::to_vec(value).map_err(RenderError::Fingerprint)?;
    Ok(hex::encode(Sha256::digest(&json)))
}
