//! # Prefix Set
//!
//! A mutable prefix tree (trie) storing a set of byte-sequence words.
//!
//! This crate provides an in-memory dictionary/autocomplete index for string
//! keys. Keys are opaque symbol sequences: one byte per edge, no Unicode
//! normalization or case folding.
//!
//! ## Features
//!
//! - **Insertion**: idempotent, chainable `add`
//! - **Lookup**: exact and prefix matching in `O(word.len())`
//! - **Removal**: exact-match `remove` with bottom-up pruning of nodes that
//!   no longer serve any stored word
//! - **Prefix views**: borrowed views that enumerate the words under a
//!   prefix in lexicographic order
//!
//! ## Example
//!
//! ```rust
//! use prefix_set::Trie;
//!
//! let mut trie = Trie::new();
//! trie.add("bat").add("batman");
//!
//! assert!(trie.find("bat", false));
//! assert!(trie.find("ba", true));
//!
//! // Removing "bat" leaves "batman" untouched
//! assert!(trie.remove("bat"));
//! assert!(!trie.find("bat", false));
//! assert!(trie.find("batman", false));
//! ```

mod node;
mod prefix_view;
mod trie;

// Re-export public types
pub use crate::prefix_view::{PrefixView, PrefixViewIter};
pub use crate::trie::Trie;
