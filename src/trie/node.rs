use std::collections::HashMap;

/// A single node of a reversed-domain trie.
///
/// Each node owns its children outright; there are no parent links. A node
/// with `is_domain` set marks the last character (i.e. the leftmost character
/// of the host as written) of a domain inserted with [`Trie::put`](super::Trie::put).
///
/// `P` is the payload slot carried by every node. Plain domain tries use `()`,
/// the entity index uses an optional whitelist.
#[derive(Debug, Clone, Default)]
pub struct TrieNode<P = ()> {
    pub(crate) children: HashMap<char, TrieNode<P>>,
    pub(crate) is_domain: bool,
    pub(crate) payload: P,
}

impl<P: Default> TrieNode<P> {
    pub(crate) fn new() -> Self {
        Self {
            children: HashMap::new(),
            is_domain: false,
            payload: P::default(),
        }
    }

    /// Get the child for `c`, creating it if necessary.
    ///
    /// Returns the child and whether it was newly created.
    pub(crate) fn child_or_insert(&mut self, c: char) -> (&mut TrieNode<P>, bool) {
        let mut created = false;
        let child = self.children.entry(c).or_insert_with(|| {
            created = true;
            TrieNode::new()
        });
        (child, created)
    }
}

impl<P> TrieNode<P> {
    /// True if this node terminates a stored domain.
    #[inline]
    pub fn is_domain(&self) -> bool {
        self.is_domain
    }

    /// Child reached by following `c`, if any.
    #[inline]
    pub fn child(&self, c: char) -> Option<&TrieNode<P>> {
        self.children.get(&c)
    }

    /// Number of direct children.
    pub fn children_len(&self) -> usize {
        self.children.len()
    }

    /// Payload attached to this node.
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Mutable payload attached to this node.
    pub fn payload_mut(&mut self) -> &mut P {
        &mut self.payload
    }
}
