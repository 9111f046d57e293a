//! Parallel trie construction
//!
//! A word list is split into contiguous partitions, each partition is built
//! into a private trie on its own thread, and the partial tries are merged
//! once every worker has been joined.

mod cancel;
mod chunk;
mod merge;
mod parallel;

pub use cancel::CancellationToken;
pub use chunk::{split, Partition};
pub use merge::{merge_all, merge_into};
pub use parallel::{build_global_trie, BuildReport, ParallelBuilder};
