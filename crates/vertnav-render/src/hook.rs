//! Suppression hooks.
//!
//! A hook can hide the whole navigation for a request. The renderer consults
//! it before every item, so a suppressed request renders nothing at all.

use crate::context::RenderContext;

/// Predicate that suppresses navigation output for a request.
pub trait SuppressionHook: Send + Sync {
    /// Whether navigation must be hidden for `ctx`.
    fn suppress(&self, ctx: &RenderContext) -> bool;
}

impl<F> SuppressionHook for F
where
    F: Fn(&RenderContext) -> bool + Send + Sync,
{
    fn suppress(&self, ctx: &RenderContext) -> bool {
        self(ctx)
    }
}

/// Hook that never suppresses.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoSuppression;

impl SuppressionHook for NoSuppression {
    fn suppress(&self, _ctx: &RenderContext) -> bool {
        false
    }
}

/// Hides navigation from logged-out customers when the login catalog
/// extension is active and configured to hide categories.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoginCatalogHook {
    /// Extension installed and active.
    pub enabled: bool,
    /// Extension configured to hide categories.
    pub hide_categories: bool,
}

impl SuppressionHook for LoginCatalogHook {
    fn suppress(&self, ctx: &RenderContext) -> bool {
        self.enabled && self.hide_categories && !ctx.is_logged_in()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_suppression() {
        assert!(!NoSuppression.suppress(&RenderContext::new()));
    }

    #[test]
    fn test_login_catalog_hides_from_guests() {
        let hook = LoginCatalogHook {
            enabled: true,
            hide_categories: true,
        };

        assert!(hook.suppress(&RenderContext::new()));
        assert!(!hook.suppress(&RenderContext::new().with_customer_group(1)));
    }

    #[test]
    fn test_login_catalog_requires_both_flags() {
        let disabled = LoginCatalogHook {
            enabled: false,
            hide_categories: true,
        };
        let showing = LoginCatalogHook {
            enabled: true,
            hide_categories: false,
        };

        assert!(!disabled.suppress(&RenderContext::new()));
        assert!(!showing.suppress(&RenderContext::new()));
    }

    #[test]
    fn test_closure_hook() {
        let hook = |ctx: &RenderContext| ctx.page_id() == Some("checkout");

        assert!(hook.suppress(&RenderContext::new().with_page("checkout")));
        assert!(!hook.suppress(&RenderContext::new()));
    }
}
