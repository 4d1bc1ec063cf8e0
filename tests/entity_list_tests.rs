//! Integration tests for EntityList whitelist lookups

use std::sync::Arc;

use blocklist_trie::{BlockerError, DomainTrie, EntityList, ProtocolPolicy, Uri};

fn trie(hosts: &[&str]) -> DomainTrie {
    hosts.iter().collect()
}

fn nested_entity_list() -> EntityList {
    let mut list = EntityList::new();
    list.put_whitelist("bar.com", trie(&["x.com"])).unwrap();
    list.put_whitelist("foo.bar.com", trie(&["y.com"])).unwrap();
    list
}

#[test]
fn test_simple_whitelist() {
    let mut list = EntityList::new();
    list.put_whitelist("def", trie(&["abc"])).unwrap();

    assert!(list.is_whitelisted(&Uri::https("def"), &Uri::https("abc")));
    assert!(
        !list.is_whitelisted(&Uri::https("def"), &Uri::https("def")),
        "def is not in its own whitelist"
    );
    assert!(
        !list.is_whitelisted(&Uri::https("abc"), &Uri::https("abc")),
        "abc has no entity entry"
    );
    assert!(!list.is_whitelisted(&Uri::https("abc"), &Uri::https("def")));
}

#[test]
fn test_empty_hosts_and_data_scheme() {
    let mut list = EntityList::new();
    list.put_whitelist("def", trie(&["abc"])).unwrap();

    assert!(!list.is_whitelisted(&Uri::https(""), &Uri::https("abc")));
    assert!(!list.is_whitelisted(&Uri::https("def"), &Uri::https("")));
    assert!(!list.is_whitelisted(&Uri::new("data", "def"), &Uri::https("abc")));
    assert!(!list.is_whitelisted(&Uri::new("data", ""), &Uri::https("abc")));
}

#[test]
fn test_custom_and_unsupported_schemes() {
    let mut list = EntityList::new();
    list.put_whitelist("theguardian.com", trie(&["nuid"])).unwrap();

    // Custom resource protocol
    assert!(!list.is_whitelisted(
        &Uri::https("theguardian.com"),
        &Uri::new("nielsenwebid", "nuid")
    ));
    // Unsupported site protocol
    assert!(!list.is_whitelisted(
        &Uri::new("javascript", "theguardian.com"),
        &Uri::https("nuid")
    ));
    // Plain http on both sides is fine
    assert!(list.is_whitelisted(
        &Uri::new("http", "theguardian.com"),
        &Uri::new("http", "nuid")
    ));
}

#[test]
fn test_nested_entries_are_all_checked() {
    let list = nested_entity_list();
    let site = Uri::https("foo.bar.com");

    assert!(
        list.is_whitelisted(&site, &Uri::https("y.com")),
        "foo.bar.com's own list applies"
    );
    assert!(
        list.is_whitelisted(&site, &Uri::https("x.com")),
        "enclosing bar.com list applies too"
    );
    assert!(
        !list.is_whitelisted(&Uri::https("other.bar.com"), &Uri::https("y.com")),
        "foo.bar.com's list does not apply to other.bar.com"
    );
    assert!(list.is_whitelisted(&Uri::https("other.bar.com"), &Uri::https("x.com")));
    assert!(list.is_whitelisted(&Uri::https("a.foo.bar.com"), &Uri::https("cdn.y.com")));
}

#[test]
fn test_site_boundary() {
    let list = nested_entity_list();

    assert!(!list.is_whitelisted(&Uri::https("foobar.com"), &Uri::https("x.com")));
    assert!(!list.is_whitelisted(&Uri::https("ar.com"), &Uri::https("x.com")));
    assert!(!list.is_whitelisted(&Uri::https("bar.com"), &Uri::https("y.com")));
}

#[test]
fn test_resource_boundary() {
    let list = nested_entity_list();
    let site = Uri::https("bar.com");

    assert!(list.is_whitelisted(&site, &Uri::https("img.x.com")));
    assert!(!list.is_whitelisted(&site, &Uri::https("box.com")));
    assert!(!list.is_whitelisted(&site, &Uri::https("x.com.evil.net")));
}

#[test]
fn test_duplicate_whitelist_rejected() {
    let mut list = nested_entity_list();

    let err = list
        .put_whitelist("foo.bar.com", trie(&["z.com"]))
        .unwrap_err();
    assert!(
        matches!(err, BlockerError::DuplicateWhitelist { ref host } if host == "foo.bar.com"),
        "got: {:?}",
        err
    );

    assert_eq!(list.len(), 2);
    assert!(!list.is_whitelisted(&Uri::https("foo.bar.com"), &Uri::https("z.com")));
}

#[test]
fn test_host_only_lookup() {
    let list = nested_entity_list();

    assert!(list.is_whitelisted_host("foo.bar.com", "x.com"));
    assert!(!list.is_whitelisted_host("", "x.com"));
    assert!(!list.is_whitelisted_host("foo.bar.com", ""));
}

struct DenyAll;

impl ProtocolPolicy for DenyAll {
    fn is_permitted_resource_protocol(&self, _scheme: &str) -> bool {
        false
    }

    fn is_supported_protocol(&self, _scheme: &str) -> bool {
        false
    }
}

#[test]
fn test_policy_gates_lookup() {
    let mut list = EntityList::new().with_policy(Arc::new(DenyAll));
    list.put_whitelist("def", trie(&["abc"])).unwrap();

    assert!(!list.is_whitelisted(&Uri::https("def"), &Uri::https("abc")));
    // The host-only path bypasses scheme predicates.
    assert!(list.is_whitelisted_host("def", "abc"));
}
