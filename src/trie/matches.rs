//! Lazy search over a reversed-domain trie.

use std::iter::FusedIterator;

use super::node::TrieNode;

/// Iterator over every stored domain matching a query host.
///
/// Created by [`Trie::find_matches`](super::Trie::find_matches). The query is
/// consumed from its last character toward its first, following one child
/// per step, so shorter (parent) domains are yielded before longer
/// (subdomain) ones. A terminal node is only yielded on a domain boundary:
/// either the whole query has been consumed, or the next unconsumed
/// character is a `.`.
///
/// No state is precomputed. The iterator walks at most `host.len()` nodes over
/// its whole lifetime, and once it returns `None` it keeps returning `None`.
#[derive(Debug, Clone)]
pub struct Matches<'t, 'h, P = ()> {
    /// Last node reached, `None` once the walk has fallen off the trie.
    node: Option<&'t TrieNode<P>>,
    /// Prefix of the query that has not been walked yet.
    remaining: &'h str,
}

impl<'t, 'h, P> Matches<'t, 'h, P> {
    pub(crate) fn new(root: &'t TrieNode<P>, host: &'h str) -> Self {
        Self {
            node: if host.is_empty() { None } else { Some(root) },
            remaining: host,
        }
    }

    #[inline]
    fn at_boundary(&self) -> bool {
        self.remaining.is_empty() || self.remaining.ends_with('.')
    }
}

impl<'t, 'h, P> Iterator for Matches<'t, 'h, P> {
    type Item = &'t TrieNode<P>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.node?;

        while let Some(c) = self.remaining.chars().next_back() {
            self.remaining = &self.remaining[..self.remaining.len() - c.len_utf8()];

            match node.child(c) {
                Some(child) => node = child,
                None => {
                    self.node = None;
                    return None;
                }
            }

            if node.is_domain() && self.at_boundary() {
                self.node = Some(node);
                return Some(node);
            }
        }

        // Query fully consumed; the last node was either already yielded or
        // is not a domain boundary.
        self.node = None;
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.node {
            Some(_) => (0, Some(self.remaining.len())),
            None => (0, Some(0)),
        }
    }
}

impl<P> FusedIterator for Matches<'_, '_, P> {}
