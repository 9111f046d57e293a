//! Folding partial tries into one

use crate::config::MergeStrategy;
use crate::trie::{Alphabet, Trie};
use crate::{Error, Result};
use rayon::prelude::*;
use tracing::debug;

/// Merge `source` into `target`, consuming `source`
///
/// Returns the number of words `target` did not already hold. Source words
/// outside the target's alphabet fail the merge and leave `target` unchanged.
pub fn merge_into(target: &mut Trie, source: Trie) -> Result<usize> {
    target.merge(source)
}

/// Combine partial tries into a single trie
///
/// An empty input yields an empty trie using `alphabet`. With
/// [`MergeStrategy::Tree`], each round merges disjoint pairs on a rayon pool
/// of `threads` threads; every merge task owns exactly the two tries it folds.
pub fn merge_all(
    tries: Vec<Trie>,
    strategy: MergeStrategy,
    threads: usize,
    alphabet: Alphabet,
) -> Result<Trie> {
    let mut merged = Trie::with_alphabet(alphabet);
    let survivor = match strategy {
        MergeStrategy::Tree if tries.len() > 2 => merge_tree(tries, threads)?,
        _ => merge_sequential(tries)?,
    };
    if let Some(survivor) = survivor {
        merge_into(&mut merged, survivor)?;
    }
    Ok(merged)
}

fn merge_sequential(tries: Vec<Trie>) -> Result<Option<Trie>> {
    let mut tries = tries.into_iter();
    let Some(first) = tries.next() else {
        return Ok(None);
    };
    tries.try_fold(first, fold_pair).map(Some)
}

fn merge_tree(tries: Vec<Trie>, threads: usize) -> Result<Option<Trie>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads.max(1))
        .thread_name(|i| format!("triehard-merge-{}", i))
        .build()
        .map_err(|e| Error::InvalidConfiguration(format!("merge pool: {}", e)))?;

    let mut tries = pool.install(move || {
        let mut tries = tries;
        let mut round = 0;
        while tries.len() > 1 {
            round += 1;
            debug!(round, tries = tries.len(), "merge round");
            tries = tries
                .into_par_iter()
                .chunks(2)
                .map(merge_chunk)
                .collect::<Result<Vec<_>>>()?;
        }
        Ok::<_, Error>(tries)
    })?;
    Ok(tries.pop())
}

fn merge_chunk(pair: Vec<Trie>) -> Result<Trie> {
    let mut pair = pair.into_iter();
    let first = pair.next().unwrap_or_default();
    pair.try_fold(first, fold_pair)
}

fn fold_pair(mut target: Trie, source: Trie) -> Result<Trie> {
    merge_into(&mut target, source)?;
    Ok(target)
}
