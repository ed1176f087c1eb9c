//! Arguments shared by several commands.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use vertnav_catalog::CatalogStore;
use vertnav_config::{CliSettings, Config, RootSetting};
use vertnav_render::{
    LoginCatalogHook, NavigationBlock, NavigationConfig, RenderContext, RootMode, active_path,
};
use vertnav_store::{CategoryId, CategoryStore};

use crate::error::CliError;

/// Configuration file and overrides.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover vertnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Catalog file (overrides config).
    #[arg(long, env = "VERTNAV_CATALOG")]
    catalog: Option<PathBuf>,

    /// Root mode: root, current, siblings or a category level (overrides config).
    #[arg(long)]
    root: Option<String>,

    /// Expand every category, not only the active branch (overrides config).
    #[arg(long)]
    expand_all: Option<bool>,

    /// Auto-expand depth ceiling, 0 for unlimited (overrides config).
    #[arg(long)]
    max_depth: Option<u32>,

    /// Show product counts (overrides config).
    #[arg(long)]
    product_count: Option<bool>,

    /// Disable caching.
    #[arg(long)]
    no_cache: bool,
}

impl ConfigArgs {
    /// Load the configuration with command line overrides applied.
    pub(crate) fn load(&self) -> Result<Config, CliError> {
        let root = self
            .root
            .as_deref()
            .map(str::parse::<RootSetting>)
            .transpose()?;

        let cli_settings = CliSettings {
            catalog: self.catalog.clone(),
            cache_enabled: self.no_cache.then_some(false),
            root,
            expand_all: self.expand_all,
            expand_all_max_depth: self.max_depth,
            display_product_count: self.product_count,
        };

        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}

/// Browsing context of the simulated request.
#[derive(Args)]
pub(crate) struct ContextArgs {
    /// Category in view.
    #[arg(long)]
    category: Option<u64>,

    /// Product in view.
    #[arg(long)]
    product: Option<u64>,

    /// CMS page the block is rendered on.
    #[arg(long)]
    page: Option<String>,

    /// Customer group of the session.
    #[arg(long, default_value_t = 0)]
    group: u32,

    /// Treat the customer as logged in.
    #[arg(long)]
    logged_in: bool,
}

impl ContextArgs {
    /// Build the render context, loading the category in view and its
    /// ancestors from `store`.
    pub(crate) fn build(&self, store: &dyn CategoryStore) -> Result<RenderContext, CliError> {
        let mut ctx = if self.logged_in {
            RenderContext::new().with_customer_group(self.group)
        } else {
            RenderContext::new().with_guest_group(self.group)
        };
        if let Some(product) = self.product {
            ctx = ctx.with_product(product);
        }
        if let Some(page) = &self.page {
            ctx = ctx.with_page(page.as_str());
        }

        if let Some(id) = self.category {
            let category = store
                .category(CategoryId(id))?
                .ok_or_else(|| CliError::Validation(format!("Category {id} not found")))?;
            let path = active_path(store, &category)?;
            ctx = ctx.with_active_path(path).with_current_category(category);
        }
        Ok(ctx)
    }
}

/// Map configuration file settings to renderer settings.
pub(crate) fn navigation_config(config: &Config) -> Result<NavigationConfig, CliError> {
    let nav = &config.navigation;
    let root_mode = nav
        .root
        .to_string()
        .parse::<RootMode>()
        .map_err(|e| CliError::Validation(e.to_string()))?;

    Ok(NavigationConfig {
        root_mode,
        auto_expand: nav.expand_all,
        auto_expand_max_depth: nav.expand_all_max_depth,
        show_product_count: nav.display_product_count,
        fallback_to_root: nav.fallback_to_root,
        show_category_on_top_level: nav.show_cat_on_toplevel,
        home_page_id: config.cms.home_page_id.clone(),
    })
}

/// Load the catalog named by the configuration.
pub(crate) fn open_store(config: &Config) -> Result<Arc<dyn CategoryStore>, CliError> {
    let store = CatalogStore::load(&config.catalog_resolved.path)?;
    tracing::info!(
        path = %config.catalog_resolved.path.display(),
        categories = store.len(),
        "loaded catalog"
    );
    Ok(Arc::new(store))
}

/// Build the navigation block without cache.
pub(crate) fn navigation_block(
    config: &Config,
    store: Arc<dyn CategoryStore>,
) -> Result<NavigationBlock, CliError> {
    let hook = LoginCatalogHook {
        enabled: config.login_catalog.enabled,
        hide_categories: config.login_catalog.hide_categories,
    };
    Ok(NavigationBlock::new(store, navigation_config(config)?).with_hook(hook))
}
