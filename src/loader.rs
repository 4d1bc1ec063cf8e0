//! List loading.
//!
//! Builds tries from list data. Two formats are understood:
//!
//! - Domain lists: one host per line, `#` starts a comment.
//! - Entity lists: a JSON object keyed by entity name, each entry listing the
//!   entity's own `properties` and the `resources` those properties may load.
//!
//! ```json
//! {
//!   "Google": {
//!     "properties": ["google.com", "youtube.com"],
//!     "resources": ["doubleclick.net", "google-analytics.com"]
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::entity::EntityList;
use crate::error::{BlockerError, Result};
use crate::trie::DomainTrie;

/// Hostname characters accepted in list data
static HOST_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\w\-]+(?:\.[\w\-]+)*$").expect("HOST_PATTERN: hardcoded regex is invalid")
});

#[derive(Debug, Deserialize)]
struct EntityEntry {
    #[serde(default)]
    properties: Vec<String>,
    #[serde(default)]
    resources: Vec<String>,
}

/// Check if `host` is acceptable list data.
pub fn is_valid_host(host: &str) -> bool {
    HOST_PATTERN.is_match(host)
}

/// Parse a domain list into hosts.
pub fn parse_domain_list(text: &str) -> Result<Vec<String>> {
    let mut hosts = Vec::new();

    for (line_num, line) in text.lines().enumerate() {
        let line_num = line_num + 1;

        let line = match line.find('#') {
            Some(comment_pos) => &line[..comment_pos],
            None => line,
        };
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if !is_valid_host(line) {
            return Err(BlockerError::ParseErrorAtLine {
                line: line_num,
                message: format!("Invalid host: {}", line),
            });
        }

        hosts.push(line.to_string());
    }

    Ok(hosts)
}

/// Parse a domain list straight into a trie.
pub fn domain_trie_from_str(text: &str) -> Result<DomainTrie> {
    let hosts = parse_domain_list(text)?;
    let trie: DomainTrie = hosts.iter().collect();
    tracing::debug!(
        lines = hosts.len(),
        domains = trie.len(),
        nodes = trie.node_count(),
        "built domain trie"
    );
    Ok(trie)
}

/// Load a domain list file into a trie.
pub fn load_domain_list_file(path: impl AsRef<Path>) -> Result<DomainTrie> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading domain list");
    let text = fs::read_to_string(path)?;
    domain_trie_from_str(&text)
}

/// Parse an entity list.
///
/// Each entity's resources form one whitelist shared by all of its
/// properties. A property claimed by two entities is an error.
pub fn parse_entity_list(json: &str) -> Result<EntityList> {
    let entities: BTreeMap<String, EntityEntry> = serde_json::from_str(json)?;
    let mut list = EntityList::new();

    for (name, entry) in &entities {
        for host in entry.properties.iter().chain(&entry.resources) {
            if !is_valid_host(host) {
                return Err(BlockerError::InvalidEntityList(format!(
                    "entity '{}' has invalid host: {:?}",
                    name, host
                )));
            }
        }

        if entry.properties.is_empty() {
            tracing::debug!(entity = %name, "skipping entity without properties");
            continue;
        }

        let whitelist: Arc<DomainTrie> = Arc::new(entry.resources.iter().collect());
        for property in &entry.properties {
            list.put_whitelist(property, Arc::clone(&whitelist))?;
        }
    }

    tracing::info!(
        entities = entities.len(),
        properties = list.len(),
        "loaded entity list"
    );
    Ok(list)
}

/// Load an entity list file.
pub fn load_entity_list_file(path: impl AsRef<Path>) -> Result<EntityList> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading entity list");
    let text = fs::read_to_string(path)?;
    parse_entity_list(&text)
}
