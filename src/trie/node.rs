//! Trie node types

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// A node in the trie
///
/// Each node stands for one character position. Children are kept in a
/// `BTreeMap` so iteration (and therefore every enumeration built on it)
/// is in `char` order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    terminal: bool,
}

impl TrieNode {
    /// Create an empty, non-terminal node
    pub fn new() -> Self {
        TrieNode::default()
    }

    /// True if a complete word ends at this node
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Get the child reached by `ch`, if any
    pub fn child(&self, ch: char) -> Option<&TrieNode> {
        self.children.get(&ch)
    }

    /// Iterate over children in character order
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(ch, node)| (*ch, node))
    }

    /// True if this node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of terminal nodes in this subtree, including this one
    pub fn terminal_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.terminal {
                count += 1;
            }
            stack.extend(node.children.values());
        }
        count
    }

    /// Append every word in this subtree to `out`, each prefixed by `prefix`.
    ///
    /// Children are pushed in reverse so that they pop in character order,
    /// which yields lexicographic output.
    pub(crate) fn collect_words(&self, prefix: &str, out: &mut Vec<String>) {
        let mut stack: Vec<(&TrieNode, String)> = vec![(self, prefix.to_string())];
        while let Some((node, path)) = stack.pop() {
            for (ch, child) in node.children.iter().rev() {
                let mut next = String::with_capacity(path.len() + ch.len_utf8());
                next.push_str(&path);
                next.push(*ch);
                stack.push((child, next));
            }
            if node.terminal {
                out.push(path);
            }
        }
    }

    pub(crate) fn child_or_insert(&mut self, ch: char) -> &mut TrieNode {
        self.children.entry(ch).or_default()
    }

    /// Mark this node terminal; returns true if it was not terminal before
    pub(crate) fn mark_terminal(&mut self) -> bool {
        !std::mem::replace(&mut self.terminal, true)
    }

    /// Fold `source` into this node, consuming it.
    ///
    /// Subtrees missing here are moved over whole; shared paths recurse.
    /// Returns the number of words that were not already accepted here.
    pub(crate) fn absorb(&mut self, source: TrieNode) -> usize {
        let mut added = 0;
        if source.terminal && self.mark_terminal() {
            added += 1;
        }
        for (ch, child) in source.children {
            match self.children.entry(ch) {
                Entry::Vacant(slot) => {
                    added += child.terminal_count();
                    slot.insert(child);
                }
                Entry::Occupied(slot) => {
                    added += slot.into_mut().absorb(child);
                }
            }
        }
        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(word: &str) -> TrieNode {
        let mut root = TrieNode::new();
        let mut node = &mut root;
        for ch in word.chars() {
            node = node.child_or_insert(ch);
        }
        node.mark_terminal();
        root
    }

    #[test]
    fn test_mark_terminal_reports_first_time_only() {
        let mut node = TrieNode::new();
        assert!(node.mark_terminal());
        assert!(!node.mark_terminal());
        assert!(node.is_terminal());
    }

    #[test]
    fn test_collect_words_in_char_order() {
        let mut root = path("b");
        root.absorb(path("ab"));
        root.absorb(path("a"));

        let mut out = Vec::new();
        root.collect_words("", &mut out);
        assert_eq!(out, vec!["a", "ab", "b"]);
    }

    #[test]
    fn test_absorb_counts_only_new_words() {
        let mut root = path("car");
        root.absorb(path("cat"));
        assert_eq!(root.terminal_count(), 2);

        let added = root.absorb(path("car"));
        assert_eq!(added, 0);

        let mut other = path("card");
        other.absorb(path("dog"));
        assert_eq!(root.absorb(other), 2);
        assert_eq!(root.terminal_count(), 4);
    }
}
