//! Cache key composition.

use crate::context::RenderContext;

/// Namespace prefix of every navigation cache key.
pub const CACHE_KEY_NAMESPACE: &str = "VERTNAV";

/// Compose the cache key of a navigation block.
///
/// Combines the namespace, the block's own key, the effective customer group,
/// the product in view (`0` if none) and the CMS page (`home_page_id` if the
/// request names none). Requests that agree on those four parts may share
/// rendered markup.
#[must_use]
pub fn cache_key(parent_key: &str, ctx: &RenderContext, home_page_id: &str) -> String {
    format!(
        "{CACHE_KEY_NAMESPACE}_{parent_key}_{}_{}_{}",
        ctx.customer_group_id(),
        ctx.product_id().map_or(0, |p| p.0),
        ctx.page_id().unwrap_or(home_page_id),
    )
}
