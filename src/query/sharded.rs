//! Queries over unmerged partial tries

use crate::build::merge_all;
use crate::config::MergeStrategy;
use crate::trie::{Alphabet, Trie};
use crate::Result;
use rayon::prelude::*;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// The partial tries of a build, kept apart
///
/// Lets a consumer query as soon as the workers finish, before (or instead
/// of) merging. Every shard is searched in parallel and the sorted per-shard
/// answers are merged, so results match those of the merged trie.
#[derive(Clone, Debug, Default)]
pub struct ShardedTrie {
    shards: Vec<Trie>,
    alphabet: Alphabet,
}

impl ShardedTrie {
    pub fn new(shards: Vec<Trie>, alphabet: Alphabet) -> Self {
        ShardedTrie { shards, alphabet }
    }

    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    pub fn shards(&self) -> &[Trie] {
        &self.shards
    }

    /// Check whether any shard holds `word`
    pub fn contains(&self, word: &str) -> bool {
        self.shards.par_iter().any(|shard| shard.contains(word))
    }

    /// All distinct words starting with `prefix`, in lexicographic order
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let per_shard: Vec<Vec<String>> = self
            .shards
            .par_iter()
            .map(|shard| shard.words_with_prefix(prefix))
            .collect();
        merge_sorted(per_shard)
    }

    /// Merge the shards into one trie
    pub fn into_merged(self, strategy: MergeStrategy) -> Result<Trie> {
        let threads = self.shards.len();
        merge_all(self.shards, strategy, threads, self.alphabet)
    }
}

/// K-way merge of sorted lists, dropping duplicates
fn merge_sorted(lists: Vec<Vec<String>>) -> Vec<String> {
    let total = lists.iter().map(Vec::len).sum::<usize>();
    let mut iters: Vec<_> = lists.into_iter().map(Vec::into_iter).collect();
    let mut heap = BinaryHeap::with_capacity(iters.len());
    for (i, iter) in iters.iter_mut().enumerate() {
        if let Some(word) = iter.next() {
            heap.push(Reverse((word, i)));
        }
    }

    let mut merged: Vec<String> = Vec::with_capacity(total);
    while let Some(Reverse((word, i))) = heap.pop() {
        if let Some(next) = iters[i].next() {
            heap.push(Reverse((next, i)));
        }
        if merged.last() != Some(&word) {
            merged.push(word);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sharded() -> ShardedTrie {
        ShardedTrie::new(
            vec![
                ["car", "dog", "cat"].into_iter().collect(),
                ["card", "car"].into_iter().collect(),
                Trie::new(),
                ["ca", "do"].into_iter().collect(),
            ],
            Alphabet::Unrestricted,
        )
    }

    #[test]
    fn test_sharded_prefix_merges_and_dedups() {
        let sharded = sharded();
        assert_eq!(
            sharded.words_with_prefix("ca"),
            vec!["ca", "car", "card", "cat"]
        );
        assert_eq!(sharded.words_with_prefix("d"), vec!["do", "dog"]);
        assert!(sharded.words_with_prefix("x").is_empty());
    }

    #[test]
    fn test_sharded_contains() {
        let sharded = sharded();
        assert!(sharded.contains("card"));
        assert!(sharded.contains("do"));
        assert!(!sharded.contains("c"));
    }

    #[test]
    fn test_sharded_agrees_with_merged() {
        let sharded = sharded();
        let expected = sharded.words_with_prefix("");
        let merged = sharded.into_merged(MergeStrategy::Tree).unwrap();
        assert_eq!(merged.all_words(), expected);
        assert_eq!(merged.len(), 6);
    }

    #[test]
    fn test_merge_sorted_handles_empty_lists() {
        assert!(merge_sorted(Vec::new()).is_empty());
        let merged = merge_sorted(vec![
            vec![],
            vec!["b".to_string(), "d".to_string()],
            vec!["a".to_string(), "b".to_string()],
        ]);
        assert_eq!(merged, vec!["a", "b", "d"]);
    }
}
