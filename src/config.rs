//! Build configuration
//!
//! Settings are layered: built-in defaults, then an optional JSON config
//! file, then the `TRIEHARD_WORKERS` environment variable, then whatever the
//! caller sets explicitly.

use crate::trie::Alphabet;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Environment variable overriding the worker count
pub const WORKERS_ENV: &str = "TRIEHARD_WORKERS";

/// How partial tries are combined after the build phase
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeStrategy {
    /// Fold every partial trie into the first one on the calling thread
    #[default]
    Sequential,
    /// Pairwise merges in parallel rounds until one trie is left
    Tree,
}

impl std::str::FromStr for MergeStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sequential" => Ok(MergeStrategy::Sequential),
            "tree" => Ok(MergeStrategy::Tree),
            other => Err(Error::InvalidConfiguration(format!(
                "unknown merge strategy '{}'",
                other
            ))),
        }
    }
}

/// Configuration consumed by the parallel builder
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Number of build workers; `None` means available parallelism
    pub workers: Option<usize>,
    /// Merge strategy for partial tries
    pub merge: MergeStrategy,
    /// Characters accepted in words
    pub alphabet: Alphabet,
}

impl BuildConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: fixed worker count
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Builder: merge strategy
    pub fn with_merge(mut self, merge: MergeStrategy) -> Self {
        self.merge = merge;
        self
    }

    /// Builder: alphabet policy
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Load config from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Load config from `path`, or from the default location if that file
    /// exists, or fall back to defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Save config as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Default config file location (`<config dir>/triehard/config.json`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("triehard").join("config.json"))
    }

    /// Apply the `TRIEHARD_WORKERS` environment override, if set
    pub fn apply_env(self) -> Result<Self> {
        match std::env::var(WORKERS_ENV) {
            Ok(value) => self.apply_workers_var(&value),
            Err(_) => Ok(self),
        }
    }

    fn apply_workers_var(mut self, value: &str) -> Result<Self> {
        let workers = value.trim().parse::<usize>().map_err(|_| {
            Error::InvalidConfiguration(format!(
                "{} must be a positive integer, got '{}'",
                WORKERS_ENV, value
            ))
        })?;
        self.workers = Some(workers);
        Ok(self)
    }

    /// Reject settings the builder cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.workers == Some(0) {
            return Err(Error::InvalidConfiguration(
                "worker count must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Worker count to use, resolving `None` to available parallelism
    pub fn effective_workers(&self) -> Result<usize> {
        self.validate()?;
        Ok(self.workers.unwrap_or_else(available_parallelism))
    }
}

/// Hardware parallelism, or 1 if it cannot be determined
pub fn available_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}
