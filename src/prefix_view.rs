//! Prefix view into the trie.
//!
//! This module provides the `PrefixView` type, a borrowed, read-only view of
//! the words stored under a key prefix.

use std::fmt;

use crate::node::TrieNode;
use crate::trie::Trie;

/// A lightweight view of the subtree at a key prefix.
///
/// A view is anchored at the node the prefix leads to, if the path exists.
/// It answers existence and size queries about the words under the prefix and
/// iterates over them in lexicographic byte order. Views borrow the trie and
/// never mutate it; in particular there is no removal by prefix.
///
/// # Examples
///
/// ```
/// use prefix_set::Trie;
///
/// let mut trie = Trie::new();
/// trie.add("hello").add("help").add("world");
///
/// let view = trie.view_prefix("hel");
/// assert!(view.exists());
/// assert_eq!(view.len(), 2);
///
/// for word in &view {
///     assert!(word.starts_with(b"hel"));
/// }
/// ```
#[derive(Clone)]
pub struct PrefixView<'a> {
    /// The key prefix defining this view
    prefix: Vec<u8>,

    /// The subtree node at the prefix, if the path exists
    node: Option<&'a TrieNode>,
}

impl<'a> PrefixView<'a> {
    /// Creates a view of `trie` at the given prefix.
    pub(crate) fn new(trie: &'a Trie, prefix: &[u8]) -> Self {
        let mut node = Some(&trie.root);
        for &byte in prefix {
            node = node.and_then(|n| n.children.get(&byte));
        }

        PrefixView {
            prefix: prefix.to_vec(),
            node,
        }
    }

    /// Returns whether the prefix path exists in the trie at all.
    ///
    /// An existing path does not imply any stored word: the anchor node may
    /// serve only the prefix itself. The empty prefix always exists.
    pub fn exists(&self) -> bool {
        self.node.is_some()
    }

    /// Returns the prefix this view was created with.
    pub fn prefix(&self) -> &[u8] {
        &self.prefix
    }

    /// Returns the number of stored words starting with the prefix.
    ///
    /// Counts the whole subtree; for an emptiness check prefer
    /// [`is_empty`](Self::is_empty).
    pub fn len(&self) -> usize {
        self.node.map_or(0, TrieNode::word_count)
    }

    /// Returns `true` if no stored word starts with the prefix.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Returns an iterator over the stored words starting with the prefix,
    /// in lexicographic byte order. Each item is the full word.
    pub fn iter(&self) -> PrefixViewIter<'a> {
        PrefixViewIter {
            stack: match self.node {
                Some(node) => vec![(node, self.prefix.clone())],
                None => Vec::new(),
            },
        }
    }
}

impl fmt::Debug for PrefixView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixView")
            .field("prefix", &self.prefix)
            .field("exists", &self.exists())
            .finish()
    }
}

/// An iterator over the words under a `PrefixView`.
///
/// Performs a depth-first traversal with an explicit stack (deep tries must
/// not exhaust the call stack), visiting children in ascending symbol order
/// so words come out lexicographically.
pub struct PrefixViewIter<'a> {
    /// Nodes left to visit, each with the word spelled by its root path
    stack: Vec<(&'a TrieNode, Vec<u8>)>,
}

impl Iterator for PrefixViewIter<'_> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Vec<u8>> {
        while let Some((node, word)) = self.stack.pop() {
            // Push larger symbols first so the smallest is popped next.
            let mut edges: Vec<(&u8, &TrieNode)> = node.children.iter().collect();
            edges.sort_by(|a, b| b.0.cmp(a.0));

            for (&byte, child) in edges {
                let mut child_word = word.clone();
                child_word.push(byte);
                self.stack.push((child, child_word));
            }

            if node.is_word {
                return Some(word);
            }
        }

        None
    }
}

impl<'a> IntoIterator for PrefixView<'a> {
    type Item = Vec<u8>;
    type IntoIter = PrefixViewIter<'a>;

    fn into_iter(self) -> PrefixViewIter<'a> {
        self.iter()
    }
}

impl<'a> IntoIterator for &PrefixView<'a> {
    type Item = Vec<u8>;
    type IntoIter = PrefixViewIter<'a>;

    fn into_iter(self) -> PrefixViewIter<'a> {
        self.iter()
    }
}
