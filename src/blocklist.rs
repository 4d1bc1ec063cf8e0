//! Blocklist set and manager.
//!
//! A [`BlocklistSet`] owns one domain trie per category plus the entity
//! whitelist index, and is never mutated once built. The
//! [`BlocklistManager`] hands out shared snapshots of the current set and
//! swaps in a freshly built one on reload; readers holding an older
//! snapshot keep using it until they drop it.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::{BlocklistConfig, BlockingOptions};
use crate::entity::EntityList;
use crate::error::Result;
use crate::loader::{load_domain_list_file, load_entity_list_file};
use crate::trie::DomainTrie;
use crate::types::{Category, Uri};

/// Category tries and entity whitelist for one generation of list data.
#[derive(Debug, Default)]
pub struct BlocklistSet {
    lists: BTreeMap<Category, DomainTrie>,
    entity_list: EntityList,
}

impl BlocklistSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the trie for a category.
    pub fn with_list(mut self, category: Category, trie: DomainTrie) -> Self {
        self.lists.insert(category, trie);
        self
    }

    /// Set the entity whitelist index.
    pub fn with_entity_list(mut self, entity_list: EntityList) -> Self {
        self.entity_list = entity_list;
        self
    }

    /// Build a set from the files named in `config`.
    pub fn load(config: &BlocklistConfig) -> Result<Self> {
        let mut set = Self::new();

        for (&category, path) in &config.lists {
            let trie = load_domain_list_file(path)?;
            tracing::info!(
                category = %category,
                domains = trie.len(),
                "loaded blocklist"
            );
            set.lists.insert(category, trie);
        }

        if let Some(path) = &config.entity_list {
            set.entity_list = load_entity_list_file(path)?;
        }

        Ok(set)
    }

    /// Trie for `category`, if one was loaded.
    pub fn list(&self, category: Category) -> Option<&DomainTrie> {
        self.lists.get(&category)
    }

    pub fn entity_list(&self) -> &EntityList {
        &self.entity_list
    }

    /// First enabled category blocking `resource` on `site`.
    ///
    /// Returns `None` if no enabled category lists the resource host, or if
    /// the entity list exempts the resource for this site.
    pub fn matched_category(
        &self,
        site: &Uri<'_>,
        resource: &Uri<'_>,
        options: &BlockingOptions,
    ) -> Option<Category> {
        if resource.has_empty_host() {
            return None;
        }

        let category = self
            .lists
            .iter()
            .filter(|(category, _)| options.is_enabled(**category))
            .find(|(_, trie)| trie.contains(resource.host))
            .map(|(category, _)| *category)?;

        if self.entity_list.is_whitelisted(site, resource) {
            return None;
        }

        Some(category)
    }

    /// Check if `resource` should be blocked on `site`.
    #[inline]
    pub fn should_block(
        &self,
        site: &Uri<'_>,
        resource: &Uri<'_>,
        options: &BlockingOptions,
    ) -> bool {
        self.matched_category(site, resource, options).is_some()
    }
}

/// Owns the live [`BlocklistSet`] and the active [`BlockingOptions`].
#[derive(Debug, Default)]
pub struct BlocklistManager {
    current: RwLock<Arc<BlocklistSet>>,
    options: RwLock<BlockingOptions>,
}

impl BlocklistManager {
    /// Create a manager serving `set`.
    pub fn new(set: BlocklistSet, options: BlockingOptions) -> Self {
        Self {
            current: RwLock::new(Arc::new(set)),
            options: RwLock::new(options),
        }
    }

    /// Load lists and options from `config`.
    pub fn from_config(config: &BlocklistConfig) -> Result<Self> {
        let set = BlocklistSet::load(config)?;
        Ok(Self::new(set, config.options.clone()))
    }

    /// Shared handle to the current set.
    pub fn snapshot(&self) -> Arc<BlocklistSet> {
        Arc::clone(&*self.current.read())
    }

    /// Swap in a new set, returning the previous one.
    pub fn replace(&self, set: BlocklistSet) -> Arc<BlocklistSet> {
        let previous = std::mem::replace(&mut *self.current.write(), Arc::new(set));
        tracing::info!("replaced blocklist set");
        previous
    }

    /// Rebuild from `config` and swap it in.
    ///
    /// On failure the current set stays in place.
    pub fn reload(&self, config: &BlocklistConfig) -> Result<()> {
        let set = BlocklistSet::load(config).map_err(|e| {
            tracing::warn!(error = %e, "blocklist reload failed, keeping current set");
            e
        })?;
        self.replace(set);
        Ok(())
    }

    pub fn options(&self) -> BlockingOptions {
        self.options.read().clone()
    }

    pub fn set_options(&self, options: BlockingOptions) {
        *self.options.write() = options;
    }

    /// Enable or disable a single category.
    pub fn set_category_enabled(&self, category: Category, enabled: bool) {
        tracing::debug!(category = %category, enabled, "updating category");
        self.options.write().set_category(category, enabled);
    }

    /// First enabled category blocking `resource` on `site`.
    pub fn matched_category(&self, site: &Uri<'_>, resource: &Uri<'_>) -> Option<Category> {
        let set = self.snapshot();
        let options = self.options.read();
        set.matched_category(site, resource, &options)
    }

    /// Check if `resource` should be blocked on `site`.
    pub fn should_block(&self, site: &Uri<'_>, resource: &Uri<'_>) -> bool {
        self.matched_category(site, resource).is_some()
    }
}
