//! CLI command implementations.

mod args;
pub(crate) mod cache_key;
pub(crate) mod render;
pub(crate) mod root_options;

pub(crate) use cache_key::CacheKeyArgs;
pub(crate) use render::RenderArgs;
pub(crate) use root_options::RootOptionsArgs;
