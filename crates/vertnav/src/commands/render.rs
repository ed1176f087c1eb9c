//! `vertnav render` command implementation.

use std::time::Duration;

use clap::Args;
use vertnav_cache::{Cache, FileCache, NullCache};
use vertnav_store::CategoryId;

use super::args::{ConfigArgs, ContextArgs, navigation_block, open_store};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    #[command(flatten)]
    config: ConfigArgs,

    #[command(flatten)]
    context: ContextArgs,

    /// Render the children of this category instead of the configured root.
    #[arg(long)]
    root_override: Option<u64>,

    /// Print the cache key to stderr.
    #[arg(long)]
    cache_key: bool,

    /// Enable verbose output (cache hits, root resolution).
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or catalog loading fails, or if
    /// rendering fails.
    pub(crate) fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load()?;
        let store = open_store(&config)?;
        let ctx = self.context.build(store.as_ref())?;

        let cache: Box<dyn Cache> = if config.cache_resolved.enabled {
            output.info(&format!(
                "Cache directory: {}",
                config.cache_resolved.dir.display()
            ));
            let mut cache = FileCache::new(config.cache_resolved.dir.clone(), version);
            if config.cache_resolved.max_age_hours > 0 {
                let max_age = Duration::from_secs(config.cache_resolved.max_age_hours.saturating_mul(3600));
                cache = cache.with_max_age(max_age);
            }
            Box::new(cache)
        } else {
            Box::new(NullCache)
        };

        let block = navigation_block(&config, store)?.with_cache(cache.as_ref());
        let nav = block.render(self.root_override.map(CategoryId), &ctx)?;

        if self.cache_key {
            output.highlight(&nav.cache_key);
        }
        if nav.from_cache {
            tracing::info!(cache_key = %nav.cache_key, "served from cache");
        }
        if nav.html.is_empty() {
            output.warning("Navigation is empty");
        } else {
            output.markup(&nav.html);
        }
        Ok(())
    }
}
