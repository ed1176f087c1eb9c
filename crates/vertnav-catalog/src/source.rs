//! Catalog file parsing.
//!
//! A catalog file describes the category tree as nested records. Levels,
//! parents and default positions come from the nesting, so the file cannot
//! express an inconsistent tree shape.
//!
//! ```yaml
//! root_category_id: 2
//! categories:
//!   - id: 1
//!     name: Root Catalog
//!     children:
//!       - id: 2
//!         name: Default Category
//!         children:
//!           - id: 3
//!             name: Shoes
//!             url_key: shoes
//! products:
//!   - id: 99
//!     categories: [3]
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::CatalogError;

/// Parsed catalog file.
#[derive(Debug, Deserialize)]
pub(crate) struct CatalogFile {
    /// Store root category.
    pub root_category_id: u64,
    /// Top of the category tree (level 0 records).
    #[serde(default)]
    pub categories: Vec<CategoryRecord>,
    /// Product to category assignments.
    #[serde(default)]
    pub products: Vec<ProductRecord>,
}

/// One category record with its nested children.
#[derive(Debug, Deserialize)]
pub(crate) struct CategoryRecord {
    pub id: u64,
    pub name: String,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default = "default_true")]
    pub include_in_menu: bool,
    /// Explicit sort position. Defaults to the record's index among siblings.
    pub position: Option<i64>,
    pub url_key: Option<String>,
    /// Explicit product count. Defaults to the number of assigned products.
    pub product_count: Option<u64>,
    #[serde(default)]
    pub children: Vec<CategoryRecord>,
}

/// Product assignment record.
#[derive(Debug, Deserialize)]
pub(crate) struct ProductRecord {
    pub id: u64,
    #[serde(default)]
    pub categories: Vec<u64>,
}

fn default_true() -> bool {
    true
}

/// Parse catalog content, choosing the format from the file extension.
///
/// `.json` files are parsed as JSON, everything else as YAML.
pub(crate) fn parse_catalog(content: &str, path: &Path) -> Result<CatalogFile, CatalogError> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        serde_json::from_str(content).map_err(CatalogError::Json)
    } else {
        serde_yaml::from_str(content).map_err(CatalogError::Yaml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_defaults() {
        let yaml = "root_category_id: 1\ncategories:\n  - id: 1\n    name: Root\n";

        let file = parse_catalog(yaml, Path::new("catalog.yaml")).unwrap();

        assert_eq!(file.root_category_id, 1);
        assert_eq!(file.categories.len(), 1);
        let root = &file.categories[0];
        assert!(root.active);
        assert!(root.include_in_menu);
        assert!(root.position.is_none());
        assert!(root.children.is_empty());
        assert!(file.products.is_empty());
    }

    #[test]
    fn test_parse_yaml_nested() {
        let yaml = r"
root_category_id: 2
categories:
  - id: 1
    name: Root
    children:
      - id: 2
        name: Default
        children:
          - id: 3
            name: Hats
            active: false
            include_in_menu: false
            position: 7
            url_key: hats
            product_count: 4
products:
  - id: 10
    categories: [3]
";

        let file = parse_catalog(yaml, Path::new("catalog.yml")).unwrap();

        let hats = &file.categories[0].children[0].children[0];
        assert_eq!(hats.name, "Hats");
        assert!(!hats.active);
        assert!(!hats.include_in_menu);
        assert_eq!(hats.position, Some(7));
        assert_eq!(hats.url_key.as_deref(), Some("hats"));
        assert_eq!(hats.product_count, Some(4));
        assert_eq!(file.products[0].categories, vec![3]);
    }

    #[test]
    fn test_parse_json_by_extension() {
        let json = r#"{"root_category_id": 1, "categories": [{"id": 1, "name": "Root"}]}"#;

        let file = parse_catalog(json, Path::new("catalog.JSON")).unwrap();

        assert_eq!(file.categories[0].name, "Root");
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let result = parse_catalog("root_category_id: [", Path::new("catalog.yaml"));

        assert!(matches!(result, Err(CatalogError::Yaml(_))));
    }

    #[test]
    fn test_parse_missing_root_id() {
        let result = parse_catalog("categories: []", Path::new("catalog.yaml"));

        assert!(result.is_err());
    }
}
