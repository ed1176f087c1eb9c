//! Navigation settings consumed by the renderer.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Default CMS home page identifier.
pub const DEFAULT_HOME_PAGE_ID: &str = "home";

/// Which category's children form the top level of the navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum RootMode {
    /// The store's root category.
    #[default]
    StoreBase,
    /// The category in view.
    Current,
    /// The parent of the category in view.
    Siblings,
    /// The ancestor of the category in view at this absolute level.
    Level(u32),
}

impl fmt::Display for RootMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StoreBase => f.write_str("root"),
            Self::Current => f.write_str("current"),
            Self::Siblings => f.write_str("siblings"),
            Self::Level(level) => write!(f, "{level}"),
        }
    }
}

/// Error returned for an unknown root mode name.
#[derive(Debug, thiserror::Error)]
#[error("unknown root mode \"{0}\", expected root, current, siblings or a category level")]
pub struct ParseRootModeError(String);

impl FromStr for RootMode {
    type Err = ParseRootModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "root" => Ok(Self::StoreBase),
            "current" => Ok(Self::Current),
            "siblings" => Ok(Self::Siblings),
            other => other
                .parse()
                .map(Self::Level)
                .map_err(|_| ParseRootModeError(s.to_owned())),
        }
    }
}

/// Navigation rendering configuration.
#[derive(Clone, Debug, Serialize)]
pub struct NavigationConfig {
    /// Root selection mode.
    pub root_mode: RootMode,
    /// Expand categories outside the active path.
    pub auto_expand: bool,
    /// Auto-expand depth ceiling, `0` for unlimited.
    pub auto_expand_max_depth: u32,
    /// Append product counts to category labels.
    pub show_product_count: bool,
    /// Use the store root when the root mode cannot be resolved.
    pub fallback_to_root: bool,
    /// Adopt a product's first category on product pages reached without one.
    pub show_category_on_top_level: bool,
    /// Page id used in cache keys when the request names no page.
    pub home_page_id: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            root_mode: RootMode::default(),
            auto_expand: false,
            auto_expand_max_depth: 0,
            show_product_count: false,
            fallback_to_root: false,
            show_category_on_top_level: false,
            home_page_id: DEFAULT_HOME_PAGE_ID.to_owned(),
        }
    }
}

impl NavigationConfig {
    /// Whether a node at render `level` expands without being on the active
    /// path.
    #[must_use]
    pub fn auto_expands(&self, level: u32) -> bool {
        self.auto_expand
            && (self.auto_expand_max_depth == 0 || self.auto_expand_max_depth > level + 1)
    }
}
