//! The main trie implementation.
//!
//! This module contains the `Trie` type, which provides the primary API for
//! working with the prefix-tree set.

use crate::node::TrieNode;
use crate::prefix_view::PrefixView;

/// A mutable prefix tree storing a set of byte-sequence words.
///
/// Keys are opaque symbol sequences: each edge of the tree consumes one byte,
/// and a node's terminal flag marks the path to it as a complete stored word.
/// Lookup distinguishes exact matches from prefix matches, and removal prunes
/// chains of nodes that no longer serve any stored word.
///
/// The trie is a single-threaded value: mutation goes through `&mut self`, so
/// the borrow checker enforces the exclusive access the structure requires.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trie {
    /// The root node of the trie; always present and never pruned
    pub(crate) root: TrieNode,

    /// The number of words stored in the trie
    size: usize,
}

impl Trie {
    /// Creates a new, empty trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_set::Trie;
    ///
    /// let trie = Trie::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        Trie {
            root: TrieNode::new(),
            size: 0,
        }
    }

    /// Returns the number of words stored in the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_set::Trie;
    ///
    /// let mut trie = Trie::new();
    /// assert_eq!(trie.len(), 0);
    ///
    /// trie.add("hello");
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the trie contains no words.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_set::Trie;
    ///
    /// let mut trie = Trie::new();
    /// assert!(trie.is_empty());
    ///
    /// trie.add("hello");
    /// assert!(!trie.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of allocated nodes, excluding the root.
    ///
    /// A diagnostic counter that makes pruning observable: after a word is
    /// removed, no flagless leaf survives, so tearing down every word brings
    /// the count back to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_set::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.add("cat").add("car");
    /// assert_eq!(trie.node_count(), 4); // c, a, t, r
    ///
    /// trie.remove("cat");
    /// assert_eq!(trie.node_count(), 3); // the 't' leaf is pruned
    /// ```
    pub fn node_count(&self) -> usize {
        self.root.descendant_count()
    }

    /// Inserts a word into the trie.
    ///
    /// Missing nodes along the path are created on demand; existing structure
    /// is never disturbed. Inserting a word twice leaves the trie in the same
    /// observable state as inserting it once. Returns `&mut self` so calls
    /// can be chained.
    ///
    /// The empty word is accepted but never stored: the root's terminal flag
    /// stays untouched, so `find("", false)` remains `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_set::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.add("bat").add("batman");
    ///
    /// assert!(trie.find("bat", false));
    /// assert!(trie.find("batman", false));
    /// assert_eq!(trie.len(), 2);
    /// ```
    pub fn add(&mut self, word: impl AsRef<[u8]>) -> &mut Self {
        let word = word.as_ref();

        let mut node = &mut self.root;
        for &byte in word {
            node = node.children.entry(byte).or_default();
        }

        // The root is never marked: the empty word is not a storable key.
        if !word.is_empty() && !node.is_word {
            node.is_word = true;
            self.size += 1;
        }

        self
    }

    /// Looks up a word, in exact or prefix mode.
    ///
    /// Walks from the root consuming one symbol at a time; an absent edge
    /// fails the lookup immediately. Once every symbol is consumed, the
    /// result is `true` in prefix mode (any continuation, including none,
    /// suffices), and the final node's terminal flag otherwise.
    ///
    /// Read-only: no mutation, no allocation, `O(word.len())`.
    ///
    /// The empty word matches every trie in prefix mode (the root always
    /// exists) and no trie in exact mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_set::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.add("hello");
    ///
    /// assert!(trie.find("hello", false));
    /// assert!(trie.find("hel", true));
    /// assert!(!trie.find("hel", false));
    /// assert!(!trie.find("help", true));
    /// ```
    pub fn find(&self, word: impl AsRef<[u8]>, prefix_match: bool) -> bool {
        let mut node = &self.root;
        for &byte in word.as_ref() {
            match node.children.get(&byte) {
                Some(child) => node = child,
                None => return false,
            }
        }

        prefix_match || node.is_word
    }

    /// Returns `true` if the trie stores exactly this word.
    ///
    /// Equivalent to `find(word, false)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_set::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.add("hello");
    ///
    /// assert!(trie.contains("hello"));
    /// assert!(!trie.contains("hell"));
    /// ```
    pub fn contains(&self, word: impl AsRef<[u8]>) -> bool {
        self.find(word, false)
    }

    /// Returns `true` if any stored word starts with the given prefix.
    ///
    /// Equivalent to `find(prefix, true)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_set::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.add("hello");
    ///
    /// assert!(trie.contains_prefix("hell"));
    /// assert!(!trie.contains_prefix("help"));
    /// ```
    pub fn contains_prefix(&self, prefix: impl AsRef<[u8]>) -> bool {
        self.find(prefix, true)
    }

    /// Removes a word from the trie.
    ///
    /// Returns `true` if the word was present and was removed, `false`
    /// otherwise. Exact match only; removal by prefix is not supported.
    ///
    /// After the terminal flag is cleared, any chain of nodes left serving no
    /// stored word is pruned bottom-up. Pruning stops at the deepest ancestor
    /// that is itself a word terminus or still has another child, so no other
    /// stored word — prefix or extension of the removed one — is affected.
    /// The root is never pruned.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_set::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.add("bat").add("batman");
    ///
    /// assert!(trie.remove("bat"));
    /// assert!(!trie.find("bat", false));
    /// assert!(trie.find("batman", false));
    ///
    /// assert!(!trie.remove("bat"));
    /// ```
    pub fn remove(&mut self, word: impl AsRef<[u8]>) -> bool {
        let word = word.as_ref();

        // Clear the terminal flag, failing if the word is not stored.
        let mut node = &mut self.root;
        for &byte in word {
            match node.children.get_mut(&byte) {
                Some(child) => node = child,
                None => return false,
            }
        }
        if !node.is_word {
            return false;
        }
        node.is_word = false;
        self.size -= 1;

        // Still a prefix of longer stored words: nothing to prune.
        if !node.is_leaf() {
            return true;
        }

        // The terminal node became a flagless leaf. Find the cut point: the
        // deepest node on the path that must survive, i.e. the root, a word
        // terminus, or a node with another child branching off the path.
        // Everything below it serves no stored word.
        let mut cut = 0;
        let mut node = &self.root;
        for (depth, &byte) in word.iter().enumerate() {
            if depth > 0 && (node.is_word || node.children.len() > 1) {
                cut = depth;
            }
            node = &node.children[&byte];
        }

        // Detach the dead chain; dropping the child drops its whole subtree.
        let mut parent = &mut self.root;
        for &byte in &word[..cut] {
            parent = parent.children.get_mut(&byte).unwrap();
        }
        parent.children.remove(&word[cut]);

        true
    }

    /// Creates a read-only view of the words stored under the given prefix.
    ///
    /// The view borrows the trie; it supports existence/size queries and
    /// lexicographic iteration over the matching words.
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
    /// assert_eq!(view.len(), 2);
    ///
    /// let words: Vec<Vec<u8>> = view.into_iter().collect();
    /// assert_eq!(words, vec![b"hello".to_vec(), b"help".to_vec()]);
    /// ```
    pub fn view_prefix(&self, prefix: impl AsRef<[u8]>) -> PrefixView<'_> {
        PrefixView::new(self, prefix.as_ref())
    }
}

impl<W: AsRef<[u8]>> FromIterator<W> for Trie {
    fn from_iter<T: IntoIterator<Item = W>>(iter: T) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl<W: AsRef<[u8]>> Extend<W> for Trie {
    fn extend<T: IntoIterator<Item = W>>(&mut self, iter: T) {
        for word in iter {
            self.add(word);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trie() {
        let trie = Trie::new();

        assert!(trie.is_empty());
        assert_eq!(trie.len(), 0);
        assert_eq!(trie.node_count(), 0);
    }

    #[test]
    fn test_find_on_empty() {
        let trie = Trie::new();

        assert!(!trie.find("hello", false));
        assert!(!trie.find("hello", true));
    }

    #[test]
    fn test_add_and_find() {
        let mut trie = Trie::new();
        trie.add("hello");

        assert_eq!(trie.len(), 1);
        assert!(trie.find("hello", false));
        assert!(!trie.find("world", false));
        assert!(!trie.find("hell", false));
        assert!(!trie.find("hellos", false));
    }

    #[test]
    fn test_add_chaining() {
        let mut trie = Trie::new();
        trie.add("hello").add("help").add("world");

        assert_eq!(trie.len(), 3);
        assert!(trie.contains("hello"));
        assert!(trie.contains("help"));
        assert!(trie.contains("world"));
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut trie = Trie::new();
        trie.add("hello").add("hello");

        let mut once = Trie::new();
        once.add("hello");

        assert_eq!(trie.len(), 1);
        assert_eq!(trie, once);
    }

    #[test]
    fn test_prefix_find() {
        let mut trie = Trie::new();
        trie.add("hello");

        for end in 0..=5 {
            assert!(trie.find(&"hello"[..end], true));
        }
        assert!(!trie.find("help", true));
        assert!(!trie.find("hellos", true));
    }

    #[test]
    fn test_word_stored_at_shared_prefix() {
        let mut trie = Trie::new();
        trie.add("hell").add("hello");

        assert!(trie.find("hell", false));
        assert!(trie.find("hello", false));
        // "hel" is a prefix of both but was never added itself
        assert!(trie.find("hel", true));
        assert!(!trie.find("hel", false));
    }

    #[test]
    fn test_remove_missing_word() {
        let mut trie = Trie::new();
        trie.add("hello");
        let before = trie.clone();

        assert!(!trie.remove("world"));
        assert!(!trie.remove("hell"));
        assert!(!trie.remove("hellos"));
        assert_eq!(trie, before);
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_remove_keeps_extension() {
        let mut trie = Trie::new();
        trie.add("bat").add("batman");

        assert!(trie.remove("bat"));
        assert!(!trie.find("bat", false));
        assert!(trie.find("batman", false));
        // the "bat" node keeps its child chain, so nothing is pruned
        assert_eq!(trie.node_count(), 6);
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_remove_keeps_prefix_word() {
        let mut trie = Trie::new();
        trie.add("bat").add("batman");

        assert!(trie.remove("batman"));
        assert!(trie.find("bat", false));
        assert!(!trie.find("batman", false));
        // the chain below "bat" is pruned
        assert_eq!(trie.node_count(), 3);
    }

    #[test]
    fn test_remove_prunes_to_shared_prefix() {
        let mut trie = Trie::new();
        trie.add("cat").add("car");

        assert!(trie.remove("cat"));
        assert!(trie.find("car", false));
        assert!(trie.find("ca", true));
        assert!(!trie.find("cat", true));
        assert_eq!(trie.node_count(), 3);
    }

    #[test]
    fn test_remove_last_word_empties_trie() {
        let mut trie = Trie::new();
        trie.add("go");

        assert!(trie.remove("go"));
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 0);
        assert!(!trie.find("go", true));
        // the root always matches the empty prefix
        assert!(trie.find("", true));
    }

    #[test]
    fn test_remove_long_chain() {
        let mut trie = Trie::new();
        trie.add("a").add("abcdefgh");

        assert!(trie.remove("abcdefgh"));
        assert!(trie.contains("a"));
        assert_eq!(trie.node_count(), 1);
    }

    #[test]
    fn test_empty_word_is_never_stored() {
        // Documented quirk: the insertion walk never reaches a node to mark
        // for the empty word, so it cannot be stored or removed.
        let mut trie = Trie::new();
        trie.add("");

        assert!(trie.is_empty());
        assert!(!trie.find("", false));
        assert!(trie.find("", true));
        assert!(!trie.remove(""));

        trie.add("hello");
        assert!(!trie.find("", false));
        assert!(!trie.remove(""));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_from_iterator() {
        let trie: Trie = ["one", "two", "three"].into_iter().collect();

        assert_eq!(trie.len(), 3);
        assert!(trie.contains("two"));
        assert!(!trie.contains("four"));
    }

    #[test]
    fn test_extend() {
        let mut trie = Trie::new();
        trie.extend(vec![b"ab".to_vec(), b"ac".to_vec()]);

        assert_eq!(trie.len(), 2);
        assert_eq!(trie.node_count(), 3);
    }

    #[test]
    fn test_structural_equality() {
        let mut a = Trie::new();
        a.add("cat").add("car");

        let mut b = Trie::new();
        b.add("car").add("cat");

        assert_eq!(a, b);

        b.remove("car");
        assert_ne!(a, b);
    }

    #[test]
    fn test_non_utf8_keys() {
        let mut trie = Trie::new();
        trie.add([0xff, 0x00, 0xfe]).add([0xff, 0x00]);

        assert!(trie.contains([0xff, 0x00, 0xfe]));
        assert!(trie.remove([0xff, 0x00, 0xfe]));
        assert!(trie.contains([0xff, 0x00]));
        assert_eq!(trie.node_count(), 2);
    }
}
