//! CLI error types.

use vertnav_catalog::CatalogError;
use vertnav_config::ConfigError;
use vertnav_render::RenderError;
use vertnav_store::StoreError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Catalog(#[from] CatalogError),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Validation(String),
}
