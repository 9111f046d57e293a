//! A query handle that becomes usable once a background build publishes

use super::QueryEngine;
use crate::build::{BuildReport, ParallelBuilder};
use crate::trie::Trie;
use crate::{Error, Result};
use parking_lot::RwLock;
use std::sync::Arc;
use std::thread::JoinHandle;

/// Shared slot holding the current fully built trie
///
/// Consumers may query while a build is in flight; until a trie has been
/// published they get [`Error::NotReady`]. Only complete tries are ever
/// published, so a partially built index is never visible.
#[derive(Clone, Debug, Default)]
pub struct SharedIndex {
    current: Arc<RwLock<Option<Arc<Trie>>>>,
}

impl SharedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current trie
    pub fn publish(&self, trie: Trie) {
        *self.current.write() = Some(Arc::new(trie));
    }

    pub fn is_ready(&self) -> bool {
        self.current.read().is_some()
    }

    /// The published trie, if any
    pub fn snapshot(&self) -> Option<Arc<Trie>> {
        self.current.read().clone()
    }

    /// Query the published trie
    pub fn query(&self, prefix: &str) -> Result<Vec<String>> {
        let trie = self.snapshot().ok_or(Error::NotReady)?;
        Ok(QueryEngine::new(&trie).query(prefix))
    }

    /// Build `words` on a background thread and publish the result
    ///
    /// On failure nothing is published and the previous trie (if any) stays
    /// in place.
    pub fn spawn_build(
        &self,
        builder: ParallelBuilder,
        words: Vec<String>,
    ) -> JoinHandle<Result<BuildReport>> {
        let index = self.clone();
        std::thread::spawn(move || {
            let (trie, report) = builder.build_with_report(&words)?;
            index.publish(trie);
            Ok(report)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildConfig;

    #[test]
    fn test_not_ready_until_published() {
        let index = SharedIndex::new();
        assert!(!index.is_ready());
        assert!(matches!(index.query("a"), Err(Error::NotReady)));

        index.publish(["apple", "avocado"].into_iter().collect());
        assert!(index.is_ready());
        assert_eq!(index.query("a").unwrap(), vec!["apple", "avocado"]);
    }

    #[test]
    fn test_background_build_publishes() {
        let index = SharedIndex::new();
        let words: Vec<String> = (0..200).map(|i| format!("word{:03}", i)).collect();
        let builder = ParallelBuilder::new(BuildConfig::new().with_workers(4)).unwrap();

        let report = index.spawn_build(builder, words).join().unwrap().unwrap();
        assert_eq!(report.distinct_words, 200);
        assert_eq!(index.query("word19").unwrap().len(), 10);
    }

    #[test]
    fn test_failed_build_keeps_previous_trie() {
        let index = SharedIndex::new();
        index.publish(["kept"].into_iter().collect());

        let builder = ParallelBuilder::new(BuildConfig::new().with_workers(2)).unwrap();
        builder.cancellation_token().cancel();
        let result = index
            .spawn_build(builder, vec!["a".into(), "b".into()])
            .join()
            .unwrap();

        assert!(matches!(result, Err(Error::Cancelled)));
        assert_eq!(index.query("").unwrap(), vec!["kept"]);
    }
}
