//! Configuration.
//!
//! Which categories are enforced and where list data lives. Both structures
//! deserialize from JSON:
//!
//! ```json
//! {
//!   "lists": {
//!     "advertising": "lists/ads.txt",
//!     "analytics": "lists/analytics.txt"
//!   },
//!   "entity_list": "lists/entities.json",
//!   "options": { "enabled": ["advertising", "analytics"] }
//! }
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BlockerError, Result};
use crate::types::Category;

/// Categories enforced by default. Content blocking breaks too many pages to
/// be on by default.
pub const DEFAULT_ENABLED: [Category; 3] =
    [Category::Advertising, Category::Analytics, Category::Social];

/// Blocking options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockingOptions {
    /// Enabled blocklist categories
    #[serde(default)]
    pub enabled: BTreeSet<Category>,
}

impl Default for BlockingOptions {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_ENABLED.into_iter().collect(),
        }
    }
}

impl BlockingOptions {
    /// Create default blocking options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with every category disabled.
    pub fn none() -> Self {
        Self {
            enabled: BTreeSet::new(),
        }
    }

    /// Enable or disable a category.
    pub fn with_category(mut self, category: Category, enabled: bool) -> Self {
        self.set_category(category, enabled);
        self
    }

    pub fn set_category(&mut self, category: Category, enabled: bool) {
        if enabled {
            self.enabled.insert(category);
        } else {
            self.enabled.remove(&category);
        }
    }

    #[inline]
    pub fn is_enabled(&self, category: Category) -> bool {
        self.enabled.contains(&category)
    }
}

/// List sources and options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlocklistConfig {
    /// Domain list file per category
    #[serde(default)]
    pub lists: BTreeMap<Category, PathBuf>,
    /// Entity list file
    #[serde(default)]
    pub entity_list: Option<PathBuf>,
    #[serde(default)]
    pub options: BlockingOptions,
}

impl BlocklistConfig {
    /// Parse configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| BlockerError::ConfigError(format!("Invalid configuration: {}", e)))
    }

    /// Load configuration from a JSON file.
    ///
    /// Relative list paths are resolved against the file's directory.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            BlockerError::ConfigError(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::from_json_str(&text)?;
        match path.parent() {
            Some(base) => Ok(config.resolve_paths(base)),
            None => Ok(config),
        }
    }

    /// Make relative list paths relative to `base`.
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        for list_path in self.lists.values_mut() {
            if list_path.is_relative() {
                *list_path = base.join(&*list_path);
            }
        }
        if let Some(entity_path) = self.entity_list.as_mut() {
            if entity_path.is_relative() {
                *entity_path = base.join(&*entity_path);
            }
        }
        self
    }
}
