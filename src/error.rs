//! Error types for triehard

use std::fmt;
use std::ops::Range;
use thiserror::Error;

/// Result type alias for triehard operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in triehard operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Malformed input {word:?}: {reason}")]
    MalformedInput { word: String, reason: String },

    #[error("{} of the build partitions failed: {}", .failures.len(), FailureList(.failures))]
    WorkerFailure { failures: Vec<PartitionFailure> },

    #[error("Build cancelled")]
    Cancelled,

    #[error("Index not ready")]
    NotReady,
}

/// Why a single build partition did not produce a trie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionFailure {
    /// Position of the partition in chunk order
    pub partition: usize,
    /// Input offsets covered by the partition
    pub span: Range<usize>,
    /// Human-readable cause (error message or panic payload)
    pub cause: String,
}

impl fmt::Display for PartitionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "partition {} (words {}..{}): {}",
            self.partition, self.span.start, self.span.end, self.cause
        )
    }
}

struct FailureList<'a>(&'a [PartitionFailure]);

impl fmt::Display for FailureList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", failure)?;
        }
        Ok(())
    }
}
