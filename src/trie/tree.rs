//! Prefix trie over a word set

use super::{Alphabet, TrieNode};
use crate::Result;
use tracing::warn;

/// A trie of words supporting exact and prefix lookups
///
/// The trie owns its root; every node is owned by its parent. `len` tracks
/// the number of terminal nodes so merges can be checked against a serial
/// build.
#[derive(Clone, Debug, Default)]
pub struct Trie {
    root: TrieNode,
    words: usize,
    alphabet: Alphabet,
}

impl Trie {
    /// Create a new empty trie accepting any characters
    pub fn new() -> Self {
        Trie::default()
    }

    /// Create a new empty trie that rejects words outside `alphabet`
    pub fn with_alphabet(alphabet: Alphabet) -> Self {
        Trie {
            alphabet,
            ..Trie::default()
        }
    }

    /// Build a trie serially from a word list
    pub fn from_words<W: AsRef<str>>(words: &[W], alphabet: Alphabet) -> Result<Self> {
        let mut trie = Trie::with_alphabet(alphabet);
        for word in words {
            trie.insert(word.as_ref())?;
        }
        Ok(trie)
    }

    /// The character policy this trie enforces
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Number of distinct words stored
    pub fn len(&self) -> usize {
        self.words
    }

    /// True if no word (not even the empty string) is stored
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Borrow the root node
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Insert a word
    ///
    /// Returns `true` if the word was not present before. The word is checked
    /// against the alphabet before any node is created, so a rejected word
    /// leaves the trie untouched.
    pub fn insert(&mut self, word: &str) -> Result<bool> {
        self.alphabet.check(word)?;

        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.child_or_insert(ch);
        }
        let added = node.mark_terminal();
        if added {
            self.words += 1;
        }
        Ok(added)
    }

    fn insert_or_warn(&mut self, word: &str) {
        if let Err(e) = self.insert(word) {
            warn!(alphabet = %self.alphabet, error = %e, "skipping rejected word");
        }
    }

    /// Check whether `word` was inserted (exact match)
    pub fn contains(&self, word: &str) -> bool {
        self.node_at(word).is_some_and(TrieNode::is_terminal)
    }

    /// Check whether any stored word starts with `prefix`
    pub fn has_prefix(&self, prefix: &str) -> bool {
        // Only the root of an empty trie can be a non-terminal leaf.
        match self.node_at(prefix) {
            Some(node) => node.is_terminal() || !node.is_leaf(),
            None => false,
        }
    }

    /// Get the node reached by following `prefix` from the root
    pub fn node_at(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in prefix.chars() {
            node = node.child(ch)?;
        }
        Some(node)
    }

    /// All stored words beginning with `prefix`, in lexicographic order
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut results = Vec::new();
        if let Some(node) = self.node_at(prefix) {
            node.collect_words(prefix, &mut results);
        }
        results
    }

    /// Number of stored words beginning with `prefix`
    pub fn count_with_prefix(&self, prefix: &str) -> usize {
        self.node_at(prefix).map_or(0, TrieNode::terminal_count)
    }

    /// Every stored word, in lexicographic order
    pub fn all_words(&self) -> Vec<String> {
        self.words_with_prefix("")
    }

    /// Merge `source` into this trie, consuming it
    ///
    /// Afterwards this trie accepts the union of both word sets. Words present
    /// in both are counted once. Returns the number of newly added words.
    ///
    /// When `source` was built under a wider alphabet than this trie, every
    /// source word is checked first and the merge fails with
    /// [`Error::MalformedInput`](crate::Error::MalformedInput) before
    /// anything is moved.
    pub fn merge(&mut self, source: Trie) -> Result<usize> {
        if !self.alphabet.covers(source.alphabet) {
            for word in source.all_words() {
                self.alphabet.check(&word)?;
            }
        }
        let added = self.root.absorb(source.root);
        self.words += added;
        Ok(added)
    }
}

impl PartialEq for Trie {
    /// Tries are equal when they accept the same words
    fn eq(&self, other: &Self) -> bool {
        self.words == other.words && self.root == other.root
    }
}

impl Eq for Trie {}

impl<'w> FromIterator<&'w str> for Trie {
    fn from_iter<I: IntoIterator<Item = &'w str>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl FromIterator<String> for Trie {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl<'w> Extend<&'w str> for Trie {
    /// Insert every word; words the alphabet rejects are logged and skipped
    fn extend<I: IntoIterator<Item = &'w str>>(&mut self, iter: I) {
        for word in iter {
            self.insert_or_warn(word);
        }
    }
}

impl Extend<String> for Trie {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for word in iter {
            self.insert_or_warn(&word);
        }
    }
}
