//! # triehard
//!
//! Thread-parallel trie construction and prefix matching for large word
//! lists.
//!
//! A word list is split into contiguous partitions, each partition is
//! inserted into a private trie on its own worker thread, and the partial
//! tries are merged into one global trie after every worker has been joined.
//! The result answers prefix queries in lexicographic order.
//!
//! ## Core Concepts
//!
//! - **Trie**: character-keyed tree; terminal nodes mark inserted words
//! - **Partition**: contiguous slice of the input owned by one worker
//! - **Merge**: union of partial tries, duplicates collapsed
//! - **QueryEngine**: stateless prefix queries, with incremental narrowing
//!
//! ## Example
//!
//! ```
//! use triehard::{BuildConfig, ParallelBuilder, QueryEngine};
//!
//! let words = ["cat", "car", "card", "dog"];
//! let builder = ParallelBuilder::new(BuildConfig::new().with_workers(2))?;
//! let trie = builder.build(&words)?;
//!
//! let engine = QueryEngine::new(&trie);
//! assert_eq!(engine.query("ca"), vec!["car", "card", "cat"]);
//! assert!(!trie.contains("ca"));
//! # Ok::<(), triehard::Error>(())
//! ```

pub mod build;
pub mod config;
pub mod query;
pub mod trie;
pub mod wordlist;

mod error;

pub use build::{build_global_trie, BuildReport, CancellationToken, ParallelBuilder, Partition};
pub use config::{BuildConfig, MergeStrategy};
pub use error::{Error, PartitionFailure, Result};
pub use query::{LiveQuery, QueryEngine, ShardedTrie, SharedIndex};
pub use trie::{Alphabet, Trie, TrieNode};
