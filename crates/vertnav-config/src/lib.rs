//! Configuration management for vertical navigation.
//!
//! Parses `vertnav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Path Expansion
//!
//! `catalog.path` and `cache.dir` are expanded like shell words before they
//! are resolved against the config directory: a leading `~` becomes the home
//! directory, `$VAR` and `${VAR}` the variable's value, and `${VAR:-default}`
//! falls back to `default`. A referenced variable without default must be set.

use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override catalog file path.
    pub catalog: Option<PathBuf>,
    /// Override cache enabled flag.
    pub cache_enabled: Option<bool>,
    /// Override root selection mode.
    pub root: Option<RootSetting>,
    /// Override auto-expand flag.
    pub expand_all: Option<bool>,
    /// Override auto-expand depth ceiling.
    pub expand_all_max_depth: Option<u32>,
    /// Override product count display.
    pub display_product_count: Option<bool>,
}

/// Default age after which cached markup is evicted.
const DEFAULT_CACHE_MAX_AGE_HOURS: u64 = 24 * 7;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "vertnav.toml";

/// Named root modes accepted by `navigation.root`.
const ROOT_NAMES: [&str; 3] = ["root", "current", "siblings"];

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog configuration (path is a relative string from TOML).
    catalog: CatalogConfigRaw,
    /// Navigation rendering settings.
    pub navigation: NavigationSettings,
    /// CMS settings used for cache keys.
    pub cms: CmsConfig,
    /// Markup cache configuration (dir is a relative string from TOML).
    cache: CacheConfigRaw,
    /// Login catalog extension settings.
    pub login_catalog: LoginCatalogConfig,

    /// Resolved catalog configuration (set after loading).
    #[serde(skip)]
    pub catalog_resolved: CatalogConfig,
    /// Resolved cache configuration (set after loading).
    #[serde(skip)]
    pub cache_resolved: CacheConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Root selection setting as written in the config file.
///
/// Accepts `"root"`, `"current"`, `"siblings"`, or a category level either as
/// a TOML integer or a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RootSetting {
    /// Category level number.
    Level(u32),
    /// Named mode (or a numeric string).
    Name(String),
}

impl RootSetting {
    /// Level number if the setting selects a category level.
    #[must_use]
    pub fn level(&self) -> Option<u32> {
        match self {
            Self::Level(level) => Some(*level),
            Self::Name(name) => name.trim().parse().ok(),
        }
    }

    /// Named mode if the setting is one of the named modes.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Name(name) if ROOT_NAMES.contains(&name.as_str()) => Some(name),
            _ => None,
        }
    }
}

impl Default for RootSetting {
    fn default() -> Self {
        Self::Name("root".to_owned())
    }
}

impl fmt::Display for RootSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Level(level) => write!(f, "{level}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl std::str::FromStr for RootSetting {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let setting = match s.trim().parse::<u32>() {
            Ok(level) => Self::Level(level),
            Err(_) => Self::Name(s.trim().to_owned()),
        };
        validate_root(&setting)?;
        Ok(setting)
    }
}

/// Navigation rendering settings.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct NavigationSettings {
    /// Root selection mode.
    pub root: RootSetting,
    /// Expand all categories regardless of the active path.
    pub expand_all: bool,
    /// Auto-expand depth ceiling (0 = unlimited).
    pub expand_all_max_depth: u32,
    /// Show product counts next to category names.
    pub display_product_count: bool,
    /// Use the store root when the root mode cannot be resolved.
    pub fallback_to_root: bool,
    /// Adopt a product's first category on top-level product pages.
    pub show_cat_on_toplevel: bool,
}

/// CMS settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CmsConfig {
    /// Page id used in cache keys when the request names no page.
    pub home_page_id: String,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            home_page_id: "home".to_owned(),
        }
    }
}

/// Login catalog extension settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoginCatalogConfig {
    /// Whether the extension is installed and active.
    pub enabled: bool,
    /// Hide navigation from logged-out customers.
    pub hide_categories: bool,
}

impl Default for LoginCatalogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            hide_categories: true,
        }
    }
}

/// Raw catalog configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct CatalogConfigRaw {
    path: Option<String>,
}

/// Resolved catalog configuration with absolute paths.
#[derive(Debug, Default)]
pub struct CatalogConfig {
    /// Catalog file path.
    pub path: PathBuf,
}

/// Raw cache configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct CacheConfigRaw {
    enabled: Option<bool>,
    dir: Option<String>,
    max_age_hours: Option<u64>,
}

/// Resolved cache configuration with absolute paths.
#[derive(Debug, Default)]
pub struct CacheConfig {
    /// Whether rendered markup is cached.
    pub enabled: bool,
    /// Cache directory.
    pub dir: PathBuf,
    /// Entries older than this many hours are evicted on open (0 = never).
    pub max_age_hours: u64,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`catalog.path`").
        field: String,
        /// Error message (e.g., "${`CATALOG`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a root setting to name a known mode or a level.
fn validate_root(root: &RootSetting) -> Result<(), ConfigError> {
    if root.name().is_some() || root.level().is_some() {
        return Ok(());
    }
    Err(ConfigError::Validation(format!(
        "navigation.root must be one of {} or a category level, got \"{root}\"",
        ROOT_NAMES.join(", ")
    )))
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `vertnav.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails or
    /// the result is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(catalog) = &settings.catalog {
            self.catalog_resolved.path.clone_from(catalog);
        }
        if let Some(cache_enabled) = settings.cache_enabled {
            self.cache_resolved.enabled = cache_enabled;
        }
        if let Some(root) = &settings.root {
            self.navigation.root = root.clone();
        }
        if let Some(expand_all) = settings.expand_all {
            self.navigation.expand_all = expand_all;
        }
        if let Some(depth) = settings.expand_all_max_depth {
            self.navigation.expand_all_max_depth = depth;
        }
        if let Some(display) = settings.display_product_count {
            self.navigation.display_product_count = display;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            catalog: CatalogConfigRaw::default(),
            navigation: NavigationSettings::default(),
            cms: CmsConfig::default(),
            cache: CacheConfigRaw::default(),
            login_catalog: LoginCatalogConfig::default(),
            catalog_resolved: CatalogConfig {
                path: base.join("catalog.yaml"),
            },
            cache_resolved: CacheConfig {
                enabled: true,
                dir: base.join(".vertnav").join("cache"),
                max_age_hours: DEFAULT_CACHE_MAX_AGE_HOURS,
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_root(&self.navigation.root)?;
        require_non_empty(&self.cms.home_page_id, "cms.home_page_id")?;
        if self.catalog_resolved.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "catalog.path cannot be empty".to_owned(),
            ));
        }
        Ok(())
    }

    /// Expand `~` and environment variables in the path settings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.catalog.path = self
            .catalog
            .path
            .as_deref()
            .map(|path| expand_path(path, "catalog.path"))
            .transpose()?;
        self.cache.dir = self
            .cache
            .dir
            .as_deref()
            .map(|dir| expand_path(dir, "cache.dir"))
            .transpose()?;
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.catalog_resolved = CatalogConfig {
            path: resolve(self.catalog.path.as_deref(), "catalog.yaml"),
        };
        self.cache_resolved = CacheConfig {
            enabled: self.cache.enabled.unwrap_or(true),
            dir: resolve(self.cache.dir.as_deref(), ".vertnav/cache"),
            max_age_hours: self
                .cache
                .max_age_hours
                .unwrap_or(DEFAULT_CACHE_MAX_AGE_HOURS),
        };
    }
}

fn expand_path(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::full(value)
        .map(Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}
