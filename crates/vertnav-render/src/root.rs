//! Navigation root resolution.
//!
//! [`RootSelector`] decides whose children form the top level of the
//! navigation:
//!
//! 1. an explicit override always wins
//! 2. otherwise the configured [`RootMode`] is evaluated against the context
//! 3. an unresolved root falls back to the store root if configured
//! 4. a root that is still unresolved, or no longer exists, renders nothing

use vertnav_store::{CategoryId, CategoryNode, CategoryStore, StoreError};

use crate::config::{NavigationConfig, RootMode};
use crate::context::RenderContext;

/// Resolves the navigation root for a render pass.
pub struct RootSelector<'a> {
    store: &'a dyn CategoryStore,
    config: &'a NavigationConfig,
}

impl<'a> RootSelector<'a> {
    /// Create a selector over `store` with `config`.
    #[must_use]
    pub fn new(store: &'a dyn CategoryStore, config: &'a NavigationConfig) -> Self {
        Self { store, config }
    }

    /// Resolve the root category id.
    ///
    /// Returns `Ok(None)` when no root applies to this context.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if an ancestor lookup fails.
    pub fn resolve_root_id(
        &self,
        root_override: Option<CategoryId>,
        ctx: &RenderContext,
    ) -> Result<Option<CategoryId>, StoreError> {
        if let Some(id) = root_override {
            tracing::debug!(root = %id, "using root override");
            return Ok(Some(id));
        }

        let resolved = match self.config.root_mode {
            RootMode::StoreBase => Some(self.store.root_category_id()),
            RootMode::Current => ctx.current_category_id(),
            RootMode::Siblings => ctx.current_category().and_then(|c| c.parent_id),
            RootMode::Level(level) => self.ancestor_at_level(ctx, level)?,
        };

        if resolved.is_none() && self.config.fallback_to_root {
            tracing::debug!(mode = %self.config.root_mode, "root unresolved, falling back to store root");
            return Ok(Some(self.store.root_category_id()));
        }

        tracing::debug!(mode = %self.config.root_mode, root = ?resolved, "resolved navigation root");
        Ok(resolved)
    }

    /// Resolve and load the root category.
    ///
    /// Returns `Ok(None)` when no root applies or the resolved category does
    /// not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if a store lookup fails.
    pub fn resolve_root(
        &self,
        root_override: Option<CategoryId>,
        ctx: &RenderContext,
    ) -> Result<Option<CategoryNode>, StoreError> {
        let Some(id) = self.resolve_root_id(root_override, ctx)? else {
            return Ok(None);
        };
        let root = self.store.category(id)?;
        if root.is_none() {
            tracing::warn!(root = %id, "navigation root category does not exist");
        }
        Ok(root)
    }

    /// Walk from the current category up to the ancestor at `level`.
    fn ancestor_at_level(
        &self,
        ctx: &RenderContext,
        level: u32,
    ) -> Result<Option<CategoryId>, StoreError> {
        let Some(current) = ctx.current_category() else {
            return Ok(None);
        };
        if current.level < level {
            return Ok(None);
        }

        let mut node = current.clone();
        while node.level > level {
            let Some(parent_id) = node.parent_id else {
                return Ok(None);
            };
            match self.store.category(parent_id)? {
                Some(parent) => node = parent,
                None => return Ok(None),
            }
        }
        Ok(Some(node.id))
    }
}

/// Selectable root mode with its display label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootModeOption {
    /// Human-readable label.
    pub label: String,
    /// Mode selected by this option.
    pub mode: RootMode,
}

/// List the root modes available for a tree whose deepest level is
/// `max_level`.
///
/// Level options start at 2 (the top-level categories) and stop before the
/// deepest level, which has no children to show.
#[must_use]
pub fn root_mode_options(max_level: u32) -> Vec<RootModeOption> {
    let named = [
        ("Store base", RootMode::StoreBase),
        ("Current category children", RootMode::Current),
        ("Same level as current category", RootMode::Siblings),
    ];
    let mut options: Vec<RootModeOption> = named
        .into_iter()
        .map(|(label, mode)| RootModeOption {
            label: label.to_owned(),
            mode,
        })
        .collect();
    options.extend((2..max_level).map(|level| RootModeOption {
        label: format!("Category Level {level}"),
        mode: RootMode::Level(level),
    }));
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{context_in, shop};
    use vertnav_store::{MockQuery, MockStore, StoreErrorKind};

    fn selector_id(
        store: &MockStore,
        config: &NavigationConfig,
        root_override: Option<u64>,
        ctx: &RenderContext,
    ) -> Option<u64> {
        RootSelector::new(store, config)
            .resolve_root_id(root_override.map(CategoryId), ctx)
            .unwrap()
            .map(|id| id.0)
    }

    fn mode(root_mode: RootMode) -> NavigationConfig {
        NavigationConfig {
            root_mode,
            ..Default::default()
        }
    }

    #[test]
    fn test_store_base_uses_store_root() {
        let store = shop();

        let id = selector_id(&store, &mode(RootMode::StoreBase), None, &RenderContext::new());

        assert_eq!(id, Some(2));
    }

    #[test]
    fn test_current_uses_current_category() {
        let store = shop();
        let ctx = context_in(&store, 6);

        assert_eq!(selector_id(&store, &mode(RootMode::Current), None, &ctx), Some(6));
    }

    #[test]
    fn test_current_without_category_is_unresolved() {
        let store = shop();

        let id = selector_id(&store, &mode(RootMode::Current), None, &RenderContext::new());

        assert_eq!(id, None);
    }

    #[test]
    fn test_siblings_uses_parent() {
        let store = shop();
        let ctx = context_in(&store, 6);

        assert_eq!(selector_id(&store, &mode(RootMode::Siblings), None, &ctx), Some(3));
    }

    #[test]
    fn test_level_walks_up_to_ancestor() {
        let store = shop();
        let ctx = context_in(&store, 8);

        assert_eq!(selector_id(&store, &mode(RootMode::Level(2)), None, &ctx), Some(3));
        assert_eq!(selector_id(&store, &mode(RootMode::Level(3)), None, &ctx), Some(6));
        assert_eq!(selector_id(&store, &mode(RootMode::Level(4)), None, &ctx), Some(8));
    }

    #[test]
    fn test_level_deeper_than_current_is_unresolved() {
        let store = shop();
        let ctx = context_in(&store, 3);

        assert_eq!(selector_id(&store, &mode(RootMode::Level(3)), None, &ctx), None);
    }

    #[test]
    fn test_override_wins_over_mode() {
        let store = shop();
        let ctx = context_in(&store, 6);

        assert_eq!(selector_id(&store, &mode(RootMode::Current), Some(4), &ctx), Some(4));
    }

    #[test]
    fn test_fallback_to_root() {
        let store = shop();
        let config = NavigationConfig {
            root_mode: RootMode::Current,
            fallback_to_root: true,
            ..Default::default()
        };

        let id = selector_id(&store, &config, None, &RenderContext::new());

        assert_eq!(id, Some(2));
    }

    #[test]
    fn test_fallback_not_used_when_resolved() {
        let store = shop();
        let config = NavigationConfig {
            root_mode: RootMode::Current,
            fallback_to_root: true,
            ..Default::default()
        };
        let ctx = context_in(&store, 7);

        assert_eq!(selector_id(&store, &config, None, &ctx), Some(7));
    }

    #[test]
    fn test_resolve_root_missing_category_is_none() {
        let store = shop();
        let config = NavigationConfig::default();
        let selector = RootSelector::new(&store, &config);

        let root = selector
            .resolve_root(Some(CategoryId(404)), &RenderContext::new())
            .unwrap();

        assert!(root.is_none());
    }

    #[test]
    fn test_resolve_root_loads_node() {
        let store = shop();
        let config = NavigationConfig::default();
        let selector = RootSelector::new(&store, &config);

        let root = selector.resolve_root(None, &RenderContext::new()).unwrap().unwrap();

        assert_eq!(root.name, "Default Category");
    }

    #[test]
    fn test_level_walk_propagates_store_error() {
        let store = shop();
        let ctx = context_in(&store, 8);
        let store = store.with_failure(MockQuery::Category, StoreErrorKind::Unavailable);
        let config = mode(RootMode::Level(2));

        let err = RootSelector::new(&store, &config)
            .resolve_root_id(None, &ctx)
            .unwrap_err();

        assert_eq!(err.kind(), StoreErrorKind::Unavailable);
    }

    #[test]
    fn test_root_mode_options() {
        let options = root_mode_options(5);
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();

        assert_eq!(
            labels,
            vec![
                "Store base",
                "Current category children",
                "Same level as current category",
                "Category Level 2",
                "Category Level 3",
                "Category Level 4",
            ]
        );
        assert_eq!(options[3].mode, RootMode::Level(2));
    }

    #[test]
    fn test_root_mode_options_shallow_tree() {
        assert_eq!(root_mode_options(2).len(), 3);
        assert_eq!(root_mode_options(0).len(), 3);
    }
}
