//! Recursive tree-to-markup rendering.
//!
//! [`TreeRenderer`] holds the collaborators (store, config, URL builder,
//! suppression hook) and starts [`RenderPass`]es. A pass owns everything that
//! lives for one render call, such as the pre-fetched subtree, and is dropped
//! afterwards. Passes never share state.
//!
//! # Markup
//!
//! Each visible category renders as one list item, indented two spaces per
//! level:
//!
//! ```text
//!   <li class="level0-parent level0 parent has-children shoes first open">
//!     <span class="vertnav-cat"><a href="/shoes.html"><span>Shoes</span></a></span>
//!   <ul>
//!     <li class="level1-active level1 active sneakers only">
//!       ...
//!     </li>
//!
//!   </ul>
//!   </li>
//! ```
//!
//! # Pre-fetching
//!
//! With auto-expand enabled the whole eligible subtree below the root is
//! loaded in one [`CategoryStore::descendants`] query, bounded by the
//! auto-expand ceiling, and grouped by parent. Parents below that bound (only
//! reachable through the active path) fall back to a per-node children query,
//! so the output never depends on the fetch strategy.

use std::borrow::Cow;
use std::collections::HashMap;

use vertnav_store::{CategoryId, CategoryList, CategoryNode, CategoryStore};

use crate::children::{as_linear, to_linear};
use crate::classes::{ClassList, sibling_classes, slugify};
use crate::config::NavigationConfig;
use crate::context::RenderContext;
use crate::error::RenderError;
use crate::hook::SuppressionHook;
use crate::html::{UrlBuilder, escape_html};

/// Renders category trees with injected collaborators.
#[derive(Clone, Copy)]
pub struct TreeRenderer<'a> {
    store: &'a dyn CategoryStore,
    config: &'a NavigationConfig,
    urls: &'a dyn UrlBuilder,
    hook: &'a dyn SuppressionHook,
    prefetch: bool,
}

impl<'a> TreeRenderer<'a> {
    /// Create a renderer. Subtree pre-fetching is enabled.
    #[must_use]
    pub fn new(
        store: &'a dyn CategoryStore,
        config: &'a NavigationConfig,
        urls: &'a dyn UrlBuilder,
        hook: &'a dyn SuppressionHook,
    ) -> Self {
        Self {
            store,
            config,
            urls,
            hook,
            prefetch: true,
        }
    }

    /// Always query children per node, even with auto-expand enabled.
    #[must_use]
    pub fn without_prefetch(mut self) -> Self {
        self.prefetch = false;
        self
    }

    /// Start a render pass below `root`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the subtree pre-fetch fails.
    pub fn begin<'p>(
        &self,
        root: &CategoryNode,
        ctx: &'p RenderContext,
    ) -> Result<RenderPass<'p>, RenderError>
    where
        'a: 'p,
    {
        let prefetched = if self.prefetch && self.config.auto_expand {
            Some(Prefetched::load(self.store, root, self.config)?)
        } else {
            None
        };
        Ok(RenderPass {
            renderer: *self,
            ctx,
            prefetched,
        })
    }

    /// Render the children of `root` as the top level of the navigation.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if a store query fails or returns a malformed
    /// children payload.
    pub fn render_tree(&self, root: &CategoryNode, ctx: &RenderContext) -> Result<String, RenderError> {
        self.begin(root, ctx)?.render_children(root, 0)
    }
}

/// Children of every parent in a pre-fetched subtree.
///
/// Payloads are kept as returned and normalized on lookup, so a malformed
/// payload fails the pass exactly where a per-node query would.
struct Prefetched {
    by_parent: HashMap<CategoryId, CategoryList>,
    /// Deepest level included, `None` when unbounded.
    max_level: Option<u32>,
}

impl Prefetched {
    fn load(
        store: &dyn CategoryStore,
        root: &CategoryNode,
        config: &NavigationConfig,
    ) -> Result<Self, RenderError> {
        let max_level = (config.auto_expand_max_depth > 0)
            .then(|| root.level.saturating_add(config.auto_expand_max_depth));
        let by_parent: HashMap<_, _> = store.descendants(root.id, max_level)?.into_iter().collect();
        tracing::debug!(root = %root.id, ?max_level, parents = by_parent.len(), "pre-fetched navigation subtree");

        Ok(Self {
            by_parent,
            max_level,
        })
    }

    /// Pre-fetched children of `parent`, or `None` if its children lie
    /// outside the fetched range.
    fn children(&self, parent: &CategoryNode) -> Option<Result<&[CategoryNode], RenderError>> {
        if self.max_level.is_some_and(|max| parent.level >= max) {
            return None;
        }
        match self.by_parent.get(&parent.id) {
            Some(list) => Some(as_linear(list)),
            None => Some(Ok(&[][..])),
        }
    }
}

/// State of one render call.
pub struct RenderPass<'p> {
    renderer: TreeRenderer<'p>,
    ctx: &'p RenderContext,
    prefetched: Option<Prefetched>,
}

impl RenderPass<'_> {
    /// Render the visible children of `parent` at render `level`, with
    /// sibling-position classes.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if a store query fails or returns a malformed
    /// children payload.
    pub fn render_children(&self, parent: &CategoryNode, level: u32) -> Result<String, RenderError> {
        let children = self.children_of(parent)?;
        let classes = sibling_classes(&children, self.ctx);

        let mut html = String::new();
        for (child, inherited) in children.iter().zip(classes) {
            html.push_str(&self.render(child, level, inherited)?);
        }
        Ok(html)
    }

    /// Render one category and, if it expands, its subtree.
    ///
    /// Returns an empty string for suppressed, inactive and hidden
    /// categories; their children are never visited.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if a store query fails or returns a malformed
    /// children payload.
    pub fn render(
        &self,
        node: &CategoryNode,
        level: u32,
        inherited: ClassList,
    ) -> Result<String, RenderError> {
        if self.renderer.hook.suppress(self.ctx) || !node.is_active || !node.include_in_menu {
            return Ok(String::new());
        }

        let mut classes = self.item_classes(node, level);
        classes.extend(inherited);

        let label = self.label(node, level)?;
        let indent = indent(level, 2);

        let mut nested = String::new();
        if self.expands(node, level) {
            let children = self.render_children(node, level + 1)?;
            if !children.is_empty() {
                classes.push("open");
                nested = format!("{indent}<ul>\n{children}\n{indent}</ul>");
            }
        }

        Ok(format!(
            "{indent}<li class=\"{classes}\">\n{label}{nested}\n{indent}</li>\n"
        ))
    }

    /// Level, state, children and name classes of a category.
    fn item_classes(&self, node: &CategoryNode, level: u32) -> ClassList {
        let state = if self.ctx.is_current(node.id) {
            "active"
        } else if self.ctx.is_on_active_path(node.id) {
            "parent"
        } else {
            "inactive"
        };
        let level_class = format!("level{level}");

        let mut classes = ClassList::new();
        classes.push(format!("{level_class}-{state}"));
        classes.push(level_class);
        classes.push(state);
        if node.has_children {
            classes.push("has-children");
        }
        classes.push(slugify(&node.name));
        classes
    }

    /// Link line of a category, with the product count badge if enabled.
    fn label(&self, node: &CategoryNode, level: u32) -> Result<String, RenderError> {
        let count = if self.renderer.config.show_product_count {
            let count = match node.product_count {
                Some(count) => count,
                None => self.renderer.store.product_count(node.id)?,
            };
            format!("<span class=\"product-count\"> ({count})</span>")
        } else {
            String::new()
        };

        Ok(format!(
            "{}<span class=\"vertnav-cat\"><a href=\"{}\"><span>{}</span></a>{count}</span>\n",
            indent(level, 4),
            escape_html(&self.renderer.urls.category_url(node)),
            escape_html(&node.name),
        ))
    }

    fn expands(&self, node: &CategoryNode, level: u32) -> bool {
        self.ctx.is_on_active_path(node.id) || self.renderer.config.auto_expands(level)
    }

    fn children_of(&self, parent: &CategoryNode) -> Result<Cow<'_, [CategoryNode]>, RenderError> {
        if let Some(children) = self.prefetched.as_ref().and_then(|p| p.children(parent)) {
            return Ok(Cow::Borrowed(children?));
        }
        let children = to_linear(self.renderer.store.children(parent.id)?)?;
        Ok(Cow::Owned(children))
    }
}

fn indent(level: u32, extra: usize) -> String {
    " ".repeat(level as usize * 2 + extra)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::hook::{LoginCatalogHook, NoSuppression};
    use crate::html::PathUrlBuilder;
    use crate::testing::{context_in, shop};
    use vertnav_store::{MockQuery, MockStore, StoreErrorKind};

    fn render_with(
        store: &MockStore,
        config: &NavigationConfig,
        ctx: &RenderContext,
    ) -> Result<String, RenderError> {
        let root = store.category(store.root_category_id()).unwrap().unwrap();
        let urls = PathUrlBuilder::default();
        TreeRenderer::new(store, config, &urls, &NoSuppression).render_tree(&root, ctx)
    }

    fn render(store: &MockStore, config: &NavigationConfig, ctx: &RenderContext) -> String {
        render_with(store, config, ctx).unwrap()
    }

    fn auto_expand(max_depth: u32) -> NavigationConfig {
        NavigationConfig {
            auto_expand: true,
            auto_expand_max_depth: max_depth,
            ..Default::default()
        }
    }

    /// Class attribute of the item labelled `name`.
    fn classes_of(html: &str, name: &str) -> Option<Vec<String>> {
        let label = format!("<span>{name}</span>");
        let lines: Vec<&str> = html.lines().collect();
        let index = lines.iter().position(|line| line.contains(&label))?;
        let item = lines.get(index.checked_sub(1)?)?;
        let start = item.find("class=\"")? + "class=\"".len();
        let end = item[start..].find('"')? + start;
        Some(item[start..end].split(' ').map(str::to_owned).collect())
    }

    fn has_class(html: &str, name: &str, class: &str) -> bool {
        classes_of(html, name).is_some_and(|c| c.iter().any(|c| c == class))
    }

    #[test]
    fn test_render_top_level_markup() {
        let store = MockStore::new(2)
            .with_category(CategoryNode::new(2, "Default Category", 1))
            .with_category(
                CategoryNode::new(3, "Shoes", 2)
                    .with_parent(2)
                    .with_position(1)
                    .with_url_key("shoes"),
            )
            .with_category(
                CategoryNode::new(4, "Hats & Caps", 2)
                    .with_parent(2)
                    .with_position(2)
                    .with_url_key("hats"),
            );

        let html = render(&store, &NavigationConfig::default(), &RenderContext::new());

        assert_eq!(
            html,
            concat!(
                "  <li class=\"level0-inactive level0 inactive shoes first\">\n",
                "    <span class=\"vertnav-cat\"><a href=\"/shoes.html\"><span>Shoes</span></a></span>\n",
                "\n",
                "  </li>\n",
                "  <li class=\"level0-inactive level0 inactive hats-caps last\">\n",
                "    <span class=\"vertnav-cat\"><a href=\"/hats.html\"><span>Hats &amp; Caps</span></a></span>\n",
                "\n",
                "  </li>\n",
            )
        );
    }

    #[test]
    fn test_render_nested_markup() {
        let store = MockStore::new(2)
            .with_category(CategoryNode::new(2, "Default Category", 1))
            .with_category(CategoryNode::new(3, "Shoes", 2).with_parent(2).with_url_key("shoes"))
            .with_category(
                CategoryNode::new(6, "Boots", 3)
                    .with_parent(3)
                    .with_url_key("shoes/boots"),
            );
        let ctx = RenderContext::new()
            .with_current_category(CategoryNode::new(6, "Boots", 3).with_parent(3))
            .with_active_path([2, 3, 6].map(CategoryId));

        let html = render(&store, &NavigationConfig::default(), &ctx);

        assert_eq!(
            html,
            concat!(
                "  <li class=\"level0-parent level0 parent has-children shoes only open\">\n",
                "    <span class=\"vertnav-cat\"><a href=\"/shoes.html\"><span>Shoes</span></a></span>\n",
                "  <ul>\n",
                "    <li class=\"level1-active level1 active boots only\">\n",
                "      <span class=\"vertnav-cat\"><a href=\"/shoes/boots.html\"><span>Boots</span></a></span>\n",
                "\n",
                "    </li>\n",
                "\n",
                "  </ul>\n",
                "  </li>\n",
            )
        );
    }

    #[test]
    fn test_inactive_sibling_is_absent() {
        let store = MockStore::new(1)
            .with_category(CategoryNode::new(1, "Root", 1))
            .with_category(CategoryNode::new(2, "Shoes", 2).with_parent(1).with_position(1))
            .with_category(
                CategoryNode::new(3, "Hats", 2)
                    .with_parent(1)
                    .with_position(2)
                    .with_active(false),
            );

        let html = render(&store, &NavigationConfig::default(), &RenderContext::new());

        assert_eq!(html.matches("<li").count(), 1);
        assert!(!html.contains("Hats"));
        assert!(has_class(&html, "Shoes", "level0-inactive"));
        assert!(has_class(&html, "Shoes", "only"));
    }

    #[test]
    fn test_inactive_subtree_is_pruned() {
        let store = shop().with_category(
            CategoryNode::new(6, "Sneakers", 3)
                .with_parent(3)
                .with_position(1)
                .with_active(false),
        );

        let html = render(&store, &auto_expand(0), &RenderContext::new());

        assert!(html.contains("Boots"));
        assert!(!html.contains("Sneakers"));
        assert!(!html.contains("Running"));
    }

    #[test]
    fn test_hidden_from_menu_subtree_is_pruned() {
        let store = shop().with_category(
            CategoryNode::new(3, "Shoes", 2)
                .with_parent(2)
                .with_position(1)
                .with_include_in_menu(false),
        );

        let html = render(&store, &auto_expand(0), &RenderContext::new());

        assert!(!html.contains("Shoes"));
        assert!(!html.contains("Sneakers"));
        assert!(!html.contains("Boots"));
        assert!(html.contains("Hats"));
    }

    #[test]
    fn test_render_pass_skips_inactive_node_directly() {
        let store = shop();
        let config = NavigationConfig::default();
        let urls = PathUrlBuilder::default();
        let renderer = TreeRenderer::new(&store, &config, &urls, &NoSuppression);
        let root = store.category(CategoryId(2)).unwrap().unwrap();
        let ctx = context_in(&store, 3);
        let pass = renderer.begin(&root, &ctx).unwrap();
        let node = CategoryNode::new(3, "Shoes", 2)
            .with_parent(2)
            .with_active(false);

        let html = pass.render(&node, 0, ClassList::new()).unwrap();

        assert_eq!(html, "");
        assert_eq!(store.children_calls(), 0);
    }

    #[test]
    fn test_render_is_idempotent() {
        let store = shop();
        let ctx = context_in(&store, 6);
        let config = auto_expand(3);

        let first = render(&store, &config, &ctx);
        let second = render(&store, &config, &ctx);

        assert_eq!(first, second);
    }

    #[test]
    fn test_active_path_expands_without_auto_expand() {
        let store = shop();
        let ctx = context_in(&store, 8);

        let html = render(&store, &NavigationConfig::default(), &ctx);

        assert!(html.contains("<span>Running</span>"));
        assert!(has_class(&html, "Running", "level2-active"));
        assert!(has_class(&html, "Sneakers", "level1-parent"));
        assert!(has_class(&html, "Shoes", "level0-parent"));
        assert!(has_class(&html, "Boots", "level1-inactive"));
    }

    #[test]
    fn test_collapsed_branch_keeps_has_children() {
        let store = shop();

        let html = render(&store, &NavigationConfig::default(), &RenderContext::new());

        assert!(has_class(&html, "Shoes", "has-children"));
        assert!(!has_class(&html, "Shoes", "open"));
        assert!(!html.contains("Sneakers"));
        assert!(!html.contains("<ul>"));
    }

    #[test]
    fn test_sibling_classes_around_active_branch() {
        let store = shop();
        let ctx = context_in(&store, 4);

        let html = render(&store, &NavigationConfig::default(), &ctx);

        assert_eq!(
            classes_of(&html, "Shoes").unwrap(),
            vec!["level0-inactive", "level0", "inactive", "has-children", "shoes", "first", "prev"]
        );
        assert_eq!(
            classes_of(&html, "Hats").unwrap(),
            vec!["level0-active", "level0", "active", "hats"]
        );
        assert_eq!(
            classes_of(&html, "Bags").unwrap(),
            vec!["level0-inactive", "level0", "inactive", "bags", "last", "next"]
        );
    }

    #[test]
    fn test_auto_expand_ceiling() {
        let store = shop();

        let html = render(&store, &auto_expand(2), &RenderContext::new());

        assert!(has_class(&html, "Shoes", "open"));
        assert!(html.contains("<span>Sneakers</span>"));
        assert!(has_class(&html, "Sneakers", "has-children"));
        assert!(!has_class(&html, "Sneakers", "open"));
        assert!(!html.contains("Running"));
    }

    #[test]
    fn test_auto_expand_ceiling_of_one_expands_nothing() {
        let store = shop();

        let html = render(&store, &auto_expand(1), &RenderContext::new());

        assert!(!html.contains("Sneakers"));
    }

    #[test]
    fn test_auto_expand_unlimited() {
        let store = shop();

        let html = render(&store, &auto_expand(0), &RenderContext::new());

        assert!(html.contains("<span>Running</span>"));
        assert!(has_class(&html, "Sneakers", "open"));
    }

    #[test]
    fn test_active_path_beyond_auto_expand_ceiling() {
        let store = shop();
        let ctx = context_in(&store, 6);

        let html = render(&store, &auto_expand(2), &ctx);

        assert!(html.contains("<span>Running</span>"));
        assert!(has_class(&html, "Sneakers", "open"));
        assert!(has_class(&html, "Bags", "level0-inactive"));
    }

    #[test]
    fn test_no_open_when_all_children_hidden() {
        let store = shop().with_category(
            CategoryNode::new(9, "Hidden", 3)
                .with_parent(5)
                .with_include_in_menu(false),
        );
        let ctx = context_in(&store, 5);

        let html = render(&store, &NavigationConfig::default(), &ctx);

        assert!(has_class(&html, "Bags", "has-children"));
        assert!(!has_class(&html, "Bags", "open"));
        assert!(!html.contains("<ul>"));
    }

    #[test]
    fn test_product_count_from_store() {
        let store = shop().with_product_count(3, 12);
        let config = NavigationConfig {
            show_product_count: true,
            ..Default::default()
        };

        let html = render(&store, &config, &RenderContext::new());

        assert!(html.contains("<span>Shoes</span></a><span class=\"product-count\"> (12)</span></span>"));
        assert!(html.contains("<span>Hats</span></a><span class=\"product-count\"> (0)</span></span>"));
        assert_eq!(store.product_count_calls(), 3);
    }

    #[test]
    fn test_product_count_attached_by_store() {
        let store = MockStore::new(1)
            .with_category(CategoryNode::new(1, "Root", 1))
            .with_category(CategoryNode::new(2, "Shoes", 2).with_parent(1).with_product_count(5));
        let config = NavigationConfig {
            show_product_count: true,
            ..Default::default()
        };

        let html = render(&store, &config, &RenderContext::new());

        assert!(html.contains("<span class=\"product-count\"> (5)</span>"));
        assert_eq!(store.product_count_calls(), 0);
    }

    #[test]
    fn test_product_count_hidden_by_default() {
        let store = shop();

        let html = render(&store, &NavigationConfig::default(), &RenderContext::new());

        assert!(!html.contains("product-count"));
        assert_eq!(store.product_count_calls(), 0);
    }

    #[test]
    fn test_product_count_failure_propagates() {
        let store = shop().with_failure(MockQuery::ProductCount, StoreErrorKind::Unavailable);
        let config = NavigationConfig {
            show_product_count: true,
            ..Default::default()
        };

        let err = render_with(&store, &config, &RenderContext::new()).unwrap_err();

        assert!(matches!(err, RenderError::Store(ref e) if e.kind() == StoreErrorKind::Unavailable));
    }

    #[test]
    fn test_children_failure_propagates() {
        let store = shop().with_failure(MockQuery::Children, StoreErrorKind::Timeout);

        let err = render_with(&store, &NavigationConfig::default(), &RenderContext::new())
            .unwrap_err();

        assert!(matches!(err, RenderError::Store(ref e) if e.kind() == StoreErrorKind::Timeout));
    }

    #[test]
    fn test_malformed_children_is_invalid_argument() {
        let store = shop().with_malformed_children(3, "string");
        let ctx = context_in(&store, 3);

        let err = render_with(&store, &NavigationConfig::default(), &ctx).unwrap_err();

        assert!(matches!(err, RenderError::InvalidArgument { ref type_name } if type_name == "string"));
    }

    #[test]
    fn test_collection_children_render_like_list() {
        let ctx = context_in(&shop(), 6);

        let from_list = render(&shop(), &NavigationConfig::default(), &ctx);
        let from_collection = render(
            &shop().with_collection_children(),
            &NavigationConfig::default(),
            &ctx,
        );

        assert_eq!(from_list, from_collection);
    }

    #[test]
    fn test_prefetch_uses_single_query() {
        let store = shop();

        render(&store, &auto_expand(0), &RenderContext::new());

        assert_eq!(store.descendants_calls(), 1);
        assert_eq!(store.children_calls(), 0);
    }

    #[test]
    fn test_prefetch_matches_per_node_output() {
        let config = auto_expand(0);
        let ctx = context_in(&shop(), 7);
        let urls = PathUrlBuilder::default();

        let prefetched = render(&shop(), &config, &ctx);

        let store = shop();
        let root = store.category(CategoryId(2)).unwrap().unwrap();
        let per_node = TreeRenderer::new(&store, &config, &urls, &NoSuppression)
            .without_prefetch()
            .render_tree(&root, &ctx)
            .unwrap();

        assert_eq!(prefetched, per_node);
        assert_eq!(store.descendants_calls(), 0);
        assert!(store.children_calls() > 1);
    }

    fn render_both_ways(
        store: &MockStore,
        config: &NavigationConfig,
        ctx: &RenderContext,
    ) -> (Result<String, RenderError>, Result<String, RenderError>) {
        let urls = PathUrlBuilder::default();
        let root = store.category(CategoryId(2)).unwrap().unwrap();
        let renderer = TreeRenderer::new(store, config, &urls, &NoSuppression);

        (
            renderer.render_tree(&root, ctx),
            renderer.without_prefetch().render_tree(&root, ctx),
        )
    }

    #[test]
    fn test_malformed_children_fail_with_and_without_prefetch() {
        let store = shop().with_malformed_children(3, "string");

        let (prefetched, per_node) = render_both_ways(&store, &auto_expand(0), &RenderContext::new());

        assert!(matches!(prefetched, Err(RenderError::InvalidArgument { ref type_name }) if type_name == "string"));
        assert!(matches!(per_node, Err(RenderError::InvalidArgument { ref type_name }) if type_name == "string"));
        assert_eq!(store.descendants_calls(), 1);
    }

    #[test]
    fn test_malformed_children_of_unexpanded_category_ignored_by_both() {
        // Sneakers does not expand under a depth ceiling of 2.
        let store = shop().with_malformed_children(6, "string");

        let (prefetched, per_node) = render_both_ways(&store, &auto_expand(2), &RenderContext::new());

        assert_eq!(prefetched.unwrap(), per_node.unwrap());
    }

    #[test]
    fn test_bounded_prefetch_falls_back_below_ceiling() {
        let store = shop();
        let ctx = context_in(&store, 8);

        let html = render(&store, &auto_expand(2), &ctx);

        assert!(html.contains("<span>Running</span>"));
        assert_eq!(store.descendants_calls(), 1);
        // Sneakers and Running sit at or below the pre-fetched depth.
        assert_eq!(store.children_calls(), 2);
    }

    #[test]
    fn test_prefetch_disabled_without_auto_expand() {
        let store = shop();

        render(&store, &NavigationConfig::default(), &context_in(&shop(), 6));

        assert_eq!(store.descendants_calls(), 0);
    }

    #[test]
    fn test_suppression_hook_renders_nothing() {
        let store = shop();
        let config = auto_expand(0);
        let urls = PathUrlBuilder::default();
        let hook = LoginCatalogHook {
            enabled: true,
            hide_categories: true,
        };
        let root = store.category(CategoryId(2)).unwrap().unwrap();
        let renderer = TreeRenderer::new(&store, &config, &urls, &hook);

        let guest = renderer.render_tree(&root, &RenderContext::new()).unwrap();
        let customer = renderer
            .render_tree(&root, &RenderContext::new().with_customer_group(1))
            .unwrap();

        assert_eq!(guest, "");
        assert!(customer.contains("Shoes"));
    }

    #[test]
    fn test_custom_url_builder_is_escaped() {
        let store = shop();
        let config = NavigationConfig::default();
        let urls = |node: &CategoryNode| format!("/c?id={}&ref=nav", node.id);
        let root = store.category(CategoryId(2)).unwrap().unwrap();

        let html = TreeRenderer::new(&store, &config, &urls, &NoSuppression)
            .render_tree(&root, &RenderContext::new())
            .unwrap();

        assert!(html.contains("<a href=\"/c?id=3&amp;ref=nav\">"));
    }
}
