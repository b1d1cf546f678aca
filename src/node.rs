//! Internal node implementation for the prefix-tree set.
//!
//! This module contains the internal `TrieNode` structure that forms the
//! backbone of the trie. Nodes are passive data holders: every traversal and
//! mutation is orchestrated by the `Trie` container.

use std::collections::HashMap;

/// Internal node type for the trie.
///
/// This type is not exposed in the public API but is used internally by the
/// `Trie` type. Each node holds one outgoing edge per symbol (byte) and a
/// flag marking whether the path from the root to this node is a stored word.
///
/// Children are owned by value: each node is exclusively owned by its parent
/// (or by the `Trie`, for the root), and dropping a node drops its entire
/// subtree. The structure is a strict tree with no shared or back references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct TrieNode {
    /// Child nodes indexed by the next symbol on the edge
    pub children: HashMap<u8, TrieNode>,

    /// Whether the path from the root to this node is a complete stored word,
    /// as distinct from merely being a prefix of a longer one
    pub is_word: bool,
}

impl TrieNode {
    /// Creates a new empty node: no children, not a word terminus.
    pub fn new() -> Self {
        TrieNode::default()
    }

    /// Returns whether this node is a leaf node (has no children)
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of words stored in this subtree, counting this
    /// node's own flag.
    ///
    /// Walks with an explicit stack so arbitrarily long keys cannot exhaust
    /// the call stack.
    pub fn word_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            if node.is_word {
                count += 1;
            }
            stack.extend(node.children.values());
        }

        count
    }

    /// Returns the number of descendant nodes below this one.
    pub fn descendant_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&TrieNode> = self.children.values().collect();

        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.values());
        }

        count
    }
}

impl Drop for TrieNode {
    // A chain is as deep as its longest key, so the default recursive drop
    // glue could exhaust the call stack; tear down iteratively instead.
    fn drop(&mut self) {
        if self.children.is_empty() {
            return;
        }
        let mut stack = vec![std::mem::take(&mut self.children)];
        while let Some(map) = stack.pop() {
            for (_, mut child) in map {
                if !child.children.is_empty() {
                    stack.push(std::mem::take(&mut child.children));
                }
            }
        }
    }
}
