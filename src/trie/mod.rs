//! Reversed-domain trie.
//!
//! Domains are stored back to front, one node per character, so every
//! subdomain of a stored domain lives below that domain's terminal node.
//! Lookups walk the query host from its last character and never touch more
//! nodes than the host has characters, regardless of how many domains are
//! stored.
//!
//! ## Example
//!
//! ```
//! use blocklist_trie::trie::DomainTrie;
//!
//! let mut trie = DomainTrie::new();
//! trie.put("bar.com");
//!
//! assert!(trie.contains("bar.com"));      // exact
//! assert!(trie.contains("foo.bar.com"));  // subdomain
//! assert!(!trie.contains("foo-bar.com")); // not on a label boundary
//! ```

mod matches;
mod node;

pub use matches::Matches;
pub use node::TrieNode;

/// Trie with no per-node payload, used for blocklist categories and
/// whitelists.
pub type DomainTrie = Trie<()>;

/// Reversed-domain trie generic over a per-node payload.
///
/// Built once with [`put`](Self::put), then shared read-only. There is no
/// removal; rebuild and swap the whole trie instead.
#[derive(Debug, Clone)]
pub struct Trie<P = ()> {
    root: TrieNode<P>,
    domains: usize,
    nodes: usize,
}

impl<P: Default> Default for Trie<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Default> Trie<P> {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            domains: 0,
            nodes: 1,
        }
    }

    /// Insert `host` and return its terminal node.
    ///
    /// Idempotent: inserting the same host again returns the same node and
    /// creates nothing.
    pub fn put(&mut self, host: &str) -> &mut TrieNode<P> {
        let mut node = &mut self.root;

        for c in host.chars().rev() {
            let (child, created) = node.child_or_insert(c);
            if created {
                self.nodes += 1;
            }
            node = child;
        }

        if !node.is_domain {
            node.is_domain = true;
            self.domains += 1;
        }
        node
    }
}

impl<P> Trie<P> {
    /// True if `host` is a stored domain or a subdomain of one.
    #[inline]
    pub fn contains(&self, host: &str) -> bool {
        self.find_first_match(host).is_some()
    }

    /// Lazily yield every stored domain matching `host`, shortest first.
    pub fn find_matches<'t, 'h>(&'t self, host: &'h str) -> Matches<'t, 'h, P> {
        Matches::new(&self.root, host)
    }

    /// Shortest stored domain matching `host`.
    pub fn find_first_match(&self, host: &str) -> Option<&TrieNode<P>> {
        self.find_matches(host).next()
    }

    /// Number of distinct domains stored.
    pub fn len(&self) -> usize {
        self.domains
    }

    pub fn is_empty(&self) -> bool {
        self.domains == 0
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes
    }
}

impl<S: AsRef<str>> Extend<S> for DomainTrie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for host in iter {
            self.put(host.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for DomainTrie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = DomainTrie::new();
        trie.extend(iter);
        trie
    }
}
