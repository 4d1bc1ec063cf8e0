//! Entity whitelist index.
//!
//! Maps a site host (an entity's property, e.g. `google.com`) to a list of
//! resource hosts that property may load even when they appear on a
//! blocklist (e.g. `doubleclick.net`). A site can be covered both by a root
//! domain entry and by a more specific subdomain entry, each with its own
//! list, so every enclosing entry is checked.

use std::fmt;
use std::sync::Arc;

use crate::error::{BlockerError, Result};
use crate::policy::{ProtocolPolicy, StandardProtocols};
use crate::trie::{DomainTrie, Trie, TrieNode};
use crate::types::Uri;

/// Trie node carrying an optional whitelist.
pub type WhitelistNode = TrieNode<Option<Arc<DomainTrie>>>;

impl WhitelistNode {
    /// Whitelist attached to this node, if any.
    pub fn whitelist(&self) -> Option<&DomainTrie> {
        self.payload.as_deref()
    }

    /// Attach a whitelist. A node accepts exactly one; a second attempt hands
    /// the rejected whitelist back.
    pub fn set_whitelist(
        &mut self,
        whitelist: Arc<DomainTrie>,
    ) -> std::result::Result<(), Arc<DomainTrie>> {
        if self.payload.is_some() {
            return Err(whitelist);
        }
        self.payload = Some(whitelist);
        Ok(())
    }
}

/// Entity whitelist index
pub struct EntityList {
    root: Trie<Option<Arc<DomainTrie>>>,
    policy: Arc<dyn ProtocolPolicy>,
    entries: usize,
}

impl Default for EntityList {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EntityList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityList")
            .field("entries", &self.entries)
            .field("nodes", &self.root.node_count())
            .finish()
    }
}

impl EntityList {
    /// Create an empty entity list using [`StandardProtocols`].
    pub fn new() -> Self {
        Self {
            root: Trie::new(),
            policy: Arc::new(StandardProtocols),
            entries: 0,
        }
    }

    /// Replace the scheme predicates.
    pub fn with_policy(mut self, policy: Arc<dyn ProtocolPolicy>) -> Self {
        self.policy = policy;
        self
    }

    /// Attach `whitelist` to `host`.
    ///
    /// Fails with [`BlockerError::DuplicateWhitelist`] if `host` already has
    /// one; the existing whitelist is left untouched.
    pub fn put_whitelist(
        &mut self,
        host: &str,
        whitelist: impl Into<Arc<DomainTrie>>,
    ) -> Result<()> {
        self.root
            .put(host)
            .set_whitelist(whitelist.into())
            .map_err(|_| BlockerError::DuplicateWhitelist {
                host: host.to_string(),
            })?;
        self.entries += 1;
        Ok(())
    }

    /// Check if `resource` is exempt from blocking when loaded by `site`.
    pub fn is_whitelisted(&self, site: &Uri<'_>, resource: &Uri<'_>) -> bool {
        if site.has_empty_host() || resource.has_empty_host() || site.scheme == "data" {
            return false;
        }

        // Custom schemes (e.g. "nielsenwebid://nuid/999") are never whitelisted.
        if !self.policy.is_permitted_resource_protocol(resource.scheme)
            || !self.policy.is_supported_protocol(site.scheme)
        {
            return false;
        }

        self.is_whitelisted_host(site.host, resource.host)
    }

    /// Host-only check, for callers that have already vetted both schemes.
    pub fn is_whitelisted_host(&self, site_host: &str, resource_host: &str) -> bool {
        if resource_host.is_empty() {
            return false;
        }

        self.root
            .find_matches(site_host)
            .filter_map(WhitelistNode::whitelist)
            .any(|whitelist| whitelist.contains(resource_host))
    }

    /// Number of hosts with a whitelist attached.
    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }
}
