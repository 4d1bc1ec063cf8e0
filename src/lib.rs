//! Blocklist Trie - domain matching for content blocking
//!
//! This library decides, for every resource a page loads, whether the
//! resource host is blocked and whether the page's host whitelists it:
//! - Reversed-domain tries with label-boundary matching
//! - Lazy iteration over every enclosing match, shortest domain first
//! - Entity whitelists keyed by site host (root domain and subdomains)
//! - Per-category blocklists with swappable snapshots
//!
//! Lookups run in time linear in the query host length and allocate nothing.
//!
//! # Example
//!
//! ```rust
//! use blocklist_trie::{BlockingOptions, BlocklistSet, Category, DomainTrie, EntityList, Uri};
//!
//! let ads: DomainTrie = ["doubleclick.net", "ads.example.org"].into_iter().collect();
//!
//! let mut entities = EntityList::new();
//! let google_resources: DomainTrie = ["doubleclick.net"].into_iter().collect();
//! entities.put_whitelist("google.com", google_resources).unwrap();
//!
//! let set = BlocklistSet::new()
//!     .with_list(Category::Advertising, ads)
//!     .with_entity_list(entities);
//! let options = BlockingOptions::default();
//!
//! // Blocked on a third-party site
//! assert!(set.should_block(
//!     &Uri::https("news.com"),
//!     &Uri::https("stats.doubleclick.net"),
//!     &options,
//! ));
//!
//! // Whitelisted on the owning entity's own properties
//! assert!(!set.should_block(
//!     &Uri::https("mail.google.com"),
//!     &Uri::https("stats.doubleclick.net"),
//!     &options,
//! ));
//! ```
//!
//! # Matching Rules
//!
//! A query host `H` matches a stored domain `D` when `H == D` or `H` ends
//! with `"." + D`:
//!
//! | Stored | Query | Match |
//! |--------|-------|-------|
//! | `bar.com` | `bar.com` | yes |
//! | `bar.com` | `foo.bar.com` | yes |
//! | `bar.com` | `foo-bar.com` | no |
//! | `bar.com` | `foobar.com` | no |
//! | `foo.bar.com` | `bar.com` | no |

pub mod blocklist;
pub mod config;
pub mod entity;
pub mod error;
pub mod loader;
pub mod policy;
pub mod trie;
pub mod types;

// Re-export commonly used items
pub use blocklist::{BlocklistManager, BlocklistSet};
pub use config::{BlocklistConfig, BlockingOptions, DEFAULT_ENABLED};
pub use entity::{EntityList, WhitelistNode};
pub use error::{BlockerError, Result};
pub use loader::{
    domain_trie_from_str, load_domain_list_file, load_entity_list_file, parse_domain_list,
    parse_entity_list,
};
pub use policy::{ProtocolPolicy, StandardProtocols};
pub use trie::{DomainTrie, Matches, Trie, TrieNode};
pub use types::{Category, Uri};
