//! HTML escaping and category URLs.

use vertnav_store::CategoryNode;

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Builds the link target of a category.
pub trait UrlBuilder: Send + Sync {
    /// URL of `category` (unescaped).
    fn category_url(&self, category: &CategoryNode) -> String;
}

impl<F> UrlBuilder for F
where
    F: Fn(&CategoryNode) -> String + Send + Sync,
{
    fn category_url(&self, category: &CategoryNode) -> String {
        self(category)
    }
}

/// URL builder that joins a base URL, the category's URL key and a suffix.
///
/// Categories without a URL key link to `{base}catalog/category/view/id/{id}`.
#[derive(Clone, Debug)]
pub struct PathUrlBuilder {
    base_url: String,
    suffix: String,
}

impl PathUrlBuilder {
    /// Create a builder. `base_url` gets a trailing slash if it lacks one.
    #[must_use]
    pub fn new(base_url: impl Into<String>, suffix: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            base_url,
            suffix: suffix.into(),
        }
    }
}

impl Default for PathUrlBuilder {
    fn default() -> Self {
        Self::new("/", ".html")
    }
}

impl UrlBuilder for PathUrlBuilder {
    fn category_url(&self, category: &CategoryNode) -> String {
        match category.url_key.as_deref().map(|k| k.trim_matches('/')) {
            Some(key) if !key.is_empty() => format!("{}{key}{}", self.base_url, self.suffix),
            _ => format!("{}catalog/category/view/id/{}", self.base_url, category.id),
        }
    }
}
