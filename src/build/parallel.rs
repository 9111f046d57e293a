//! Fan-out build, fan-in merge

use super::chunk::{split, Partition};
use super::merge::merge_all;
use super::CancellationToken;
use crate::config::{BuildConfig, MergeStrategy};
use crate::error::PartitionFailure;
use crate::query::ShardedTrie;
use crate::trie::{Alphabet, Trie};
use crate::{Error, Result};
use serde::Serialize;
use std::any::Any;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Summary of a finished build
#[derive(Clone, Debug, Serialize)]
pub struct BuildReport {
    /// Input words, duplicates included
    pub input_words: usize,
    /// Distinct words in the resulting trie
    pub distinct_words: usize,
    /// Number of partitions built
    pub partitions: usize,
    /// Whether partitions were built on worker threads
    pub parallel: bool,
    pub merge: MergeStrategy,
    pub elapsed: Duration,
}

/// Builds a trie from a word list with one worker thread per partition
///
/// Each worker owns a private [`Trie`] for its partition, so nothing is locked
/// while inserting. The calling thread joins every worker before any merge
/// starts. A failure in any partition fails the whole build.
#[derive(Clone, Debug)]
pub struct ParallelBuilder {
    config: BuildConfig,
    cancel: CancellationToken,
}

impl ParallelBuilder {
    /// Create a builder, rejecting invalid configuration up front
    pub fn new(config: BuildConfig) -> Result<Self> {
        config.validate()?;
        Ok(ParallelBuilder {
            config,
            cancel: CancellationToken::new(),
        })
    }

    /// Use an externally owned cancellation token
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Token that cancels builds started by this builder
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Build and merge a trie equivalent to inserting `words` serially
    pub fn build<W: AsRef<str> + Sync>(&self, words: &[W]) -> Result<Trie> {
        self.build_with_report(words).map(|(trie, _)| trie)
    }

    /// Like [`build`](Self::build), also returning timing and shape details
    pub fn build_with_report<W: AsRef<str> + Sync>(
        &self,
        words: &[W],
    ) -> Result<(Trie, BuildReport)> {
        let start = Instant::now();
        let workers = self.config.effective_workers()?;
        let (tries, parallel) = self.build_partials(words, workers)?;
        let partitions = tries.len();

        let trie = merge_all(tries, self.config.merge, workers, self.config.alphabet)?;
        if self.cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let report = BuildReport {
            input_words: words.len(),
            distinct_words: trie.len(),
            partitions,
            parallel,
            merge: self.config.merge,
            elapsed: start.elapsed(),
        };
        info!(
            input_words = report.input_words,
            distinct_words = report.distinct_words,
            partitions = report.partitions,
            parallel = report.parallel,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "built trie"
        );
        Ok((trie, report))
    }

    /// Build one trie per partition without merging them
    pub fn build_local<W: AsRef<str> + Sync>(&self, words: &[W]) -> Result<ShardedTrie> {
        let workers = self.config.effective_workers()?;
        let (tries, _) = self.build_partials(words, workers)?;
        Ok(ShardedTrie::new(tries, self.config.alphabet))
    }

    /// Build the partial tries, returning them in partition order
    ///
    /// Inputs with fewer words than workers are built serially on the
    /// calling thread.
    fn build_partials<W: AsRef<str> + Sync>(
        &self,
        words: &[W],
        workers: usize,
    ) -> Result<(Vec<Trie>, bool)> {
        if words.len() < workers {
            debug!(
                words = words.len(),
                workers,
                "input smaller than worker count, building serially"
            );
            let partitions = split(words, 1)?;
            let tries = self.join_all(partitions.iter().map(|part| {
                let result = build_partition(*part, self.config.alphabet, &self.cancel);
                (*part, result.map_err(failure_from_error))
            }))?;
            return Ok((tries, false));
        }

        let partitions = split(words, workers)?;
        let alphabet = self.config.alphabet;
        let cancel = &self.cancel;

        let tries = thread::scope(|scope| {
            let handles: Vec<_> = partitions
                .iter()
                .map(|part| {
                    let part = *part;
                    let spawned = thread::Builder::new()
                        .name(format!("triehard-build-{}", part.index()))
                        .spawn_scoped(scope, move || build_partition(part, alphabet, cancel));
                    (part, spawned)
                })
                .collect();

            // Join barrier: every worker finishes before any result is used.
            let joined: Vec<_> = handles
                .into_iter()
                .map(|(part, spawned)| {
                    let outcome = match spawned {
                        Err(e) => Err(format!("failed to spawn worker: {}", e)),
                        Ok(handle) => match handle.join() {
                            Ok(result) => result.map_err(failure_from_error),
                            Err(payload) => Err(panic_message(payload.as_ref())),
                        },
                    };
                    (part, outcome)
                })
                .collect();

            self.join_all(joined)
        })?;
        Ok((tries, true))
    }

    /// Collect worker outcomes, failing with every failed partition named
    fn join_all<'a, W: 'a>(
        &self,
        outcomes: impl IntoIterator<Item = (Partition<'a, W>, std::result::Result<Trie, String>)>,
    ) -> Result<Vec<Trie>> {
        let mut tries = Vec::new();
        let mut failures = Vec::new();
        for (part, outcome) in outcomes {
            match outcome {
                Ok(trie) => tries.push(trie),
                Err(cause) => failures.push(PartitionFailure {
                    partition: part.index(),
                    span: part.span(),
                    cause,
                }),
            }
        }

        // Partial tries of a cancelled build are discarded, never merged.
        if self.cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
        if !failures.is_empty() {
            for failure in &failures {
                warn!(
                    partition = failure.partition,
                    start = failure.span.start,
                    end = failure.span.end,
                    cause = %failure.cause,
                    "partition build failed"
                );
            }
            return Err(Error::WorkerFailure { failures });
        }
        Ok(tries)
    }
}

impl Default for ParallelBuilder {
    fn default() -> Self {
        ParallelBuilder {
            config: BuildConfig::default(),
            cancel: CancellationToken::new(),
        }
    }
}

/// Build a trie for `words`, deciding between serial and parallel by size
///
/// Returns the trie together with whether worker threads were used.
pub fn build_global_trie<W: AsRef<str> + Sync>(
    words: &[W],
    config: &BuildConfig,
) -> Result<(Trie, bool)> {
    let builder = ParallelBuilder::new(config.clone())?;
    let (trie, report) = builder.build_with_report(words)?;
    Ok((trie, report.parallel))
}

fn build_partition<W: AsRef<str>>(
    part: Partition<'_, W>,
    alphabet: Alphabet,
    cancel: &CancellationToken,
) -> Result<Trie> {
    let mut trie = Trie::with_alphabet(alphabet);
    for word in part.words() {
        if cancel.is_cancelled() {
            debug!(partition = part.index(), "worker observed cancellation");
            return Err(Error::Cancelled);
        }
        trie.insert(word.as_ref())?;
    }
    debug!(
        partition = part.index(),
        words = part.len(),
        distinct = trie.len(),
        "partition built"
    );
    Ok(trie)
}

fn failure_from_error(e: Error) -> String {
    e.to_string()
}

fn panic_message(payload: &(dyn Any + Send + 'static)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        format!("worker panicked: {}", msg)
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        format!("worker panicked: {}", msg)
    } else {
        "worker panicked".to_string()
    }
}
