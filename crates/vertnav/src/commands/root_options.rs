//! `vertnav root-options` command implementation.

use clap::Args;
use vertnav_render::root_mode_options;

use super::args::{ConfigArgs, open_store};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the root-options command.
#[derive(Args)]
pub(crate) struct RootOptionsArgs {
    #[command(flatten)]
    config: ConfigArgs,
}

impl RootOptionsArgs {
    /// Execute the root-options command.
    ///
    /// Prints one `mode<TAB>label` line per option.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or catalog loading fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = self.config.load()?;
        let store = open_store(&config)?;
        let output = Output::new();

        for option in root_mode_options(store.max_level()?) {
            output.result_line(&format!("{}\t{}", option.mode, option.label));
        }
        Ok(())
    }
}
