//! CSS class composition for navigation items.

use std::fmt;

use vertnav_store::CategoryNode;

use crate::context::RenderContext;

/// Ordered set of CSS class names.
///
/// Pushing a class that is already present (or empty) is a no-op, so the
/// first occurrence decides the position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    /// Create an empty class list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a class unless it is empty or already present.
    pub fn push(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !class.is_empty() && !self.contains(&class) {
            self.0.push(class);
        }
    }

    /// Whether the list holds `class`.
    #[must_use]
    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    /// Classes in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Extend<String> for ClassList {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for class in iter {
            self.push(class);
        }
    }
}

impl IntoIterator for ClassList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> FromIterator<&'a str> for ClassList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut list = Self::new();
        for class in iter {
            list.push(class);
        }
        list
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

/// Convert a category name into a class-name-safe slug.
///
/// Lowercases the name, drops apostrophes, replaces every run of characters
/// outside `[a-z-]` with a single `-` and trims dashes from both ends.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_dash = true; // Prevents leading dash

    for c in name.chars().flat_map(char::to_lowercase) {
        match c {
            '\'' | '\u{2019}' => {}
            'a'..='z' => {
                slug.push(c);
                last_was_dash = false;
            }
            _ if !last_was_dash => {
                slug.push('-');
                last_was_dash = true;
            }
            _ => {}
        }
    }

    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Sibling-position classes for each item of a rendered child list.
///
/// A single child gets `only`. Otherwise the ends get `first` and `last`.
/// A sibling right before an active-path sibling gets `prev`, one right
/// after gets `next`.
#[must_use]
pub fn sibling_classes(siblings: &[CategoryNode], ctx: &RenderContext) -> Vec<ClassList> {
    let count = siblings.len();
    let on_path = |i: usize| {
        siblings
            .get(i)
            .is_some_and(|node| ctx.is_on_active_path(node.id))
    };

    (0..count)
        .map(|i| {
            let mut classes = ClassList::new();
            if count == 1 {
                classes.push("only");
            } else {
                if i == 0 {
                    classes.push("first");
                }
                if i == count - 1 {
                    classes.push("last");
                }
            }
            if on_path(i + 1) {
                classes.push("prev");
            }
            if i > 0 && on_path(i - 1) {
                classes.push("next");
            }
            classes
        })
        .collect()
}
