//! `vertnav cache-key` command implementation.

use clap::Args;

use super::args::{ConfigArgs, ContextArgs, navigation_block, open_store};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the cache-key command.
#[derive(Args)]
pub(crate) struct CacheKeyArgs {
    #[command(flatten)]
    config: ConfigArgs,

    #[command(flatten)]
    context: ContextArgs,
}

impl CacheKeyArgs {
    /// Execute the cache-key command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or catalog loading fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = self.config.load()?;
        let store = open_store(&config)?;
        let ctx = self.context.build(store.as_ref())?;
        let block = navigation_block(&config, store)?;

        Output::new().result_line(&block.cache_key(&ctx));
        Ok(())
    }
}
