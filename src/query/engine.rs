//! Prefix queries over a built trie

use crate::trie::Trie;

/// Read-only query front end for a [`Trie`]
///
/// Holds nothing but the trie reference, so every answer depends only on
/// `(trie, prefix)`. The engine is `Copy` and can be shared across threads.
#[derive(Clone, Copy, Debug)]
pub struct QueryEngine<'a> {
    trie: &'a Trie,
}

impl<'a> QueryEngine<'a> {
    pub fn new(trie: &'a Trie) -> Self {
        QueryEngine { trie }
    }

    pub fn trie(&self) -> &'a Trie {
        self.trie
    }

    /// All words starting with `prefix`, in lexicographic order
    pub fn query(&self, prefix: &str) -> Vec<String> {
        self.trie.words_with_prefix(prefix)
    }

    /// Answer `new_prefix` by narrowing the previous answer when possible
    ///
    /// `previous_results` must be the output of `query(previous_prefix)`.
    /// When `new_prefix` extends `previous_prefix`, its matches are a subset
    /// of the previous ones and are obtained by filtering; otherwise the trie
    /// is queried afresh. Either way the result equals `query(new_prefix)`.
    pub fn incremental_query(
        &self,
        previous_prefix: &str,
        previous_results: &[String],
        new_prefix: &str,
    ) -> Vec<String> {
        if new_prefix.starts_with(previous_prefix) {
            previous_results
                .iter()
                .filter(|word| word.starts_with(new_prefix))
                .cloned()
                .collect()
        } else {
            self.query(new_prefix)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie() -> Trie {
        ["cat", "car", "card", "care", "dog", "do", "cab"]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_query_delegates() {
        let trie = trie();
        let engine = QueryEngine::new(&trie);
        assert_eq!(engine.query("car"), vec!["car", "card", "care"]);
        assert!(engine.query("x").is_empty());
    }

    #[test]
    fn test_incremental_query_narrows() {
        let trie = trie();
        let engine = QueryEngine::new(&trie);

        let step1 = engine.query("c");
        let step2 = engine.incremental_query("c", &step1, "car");
        assert_eq!(step2, engine.query("car"));

        let step3 = engine.incremental_query("car", &step2, "card");
        assert_eq!(step3, vec!["card"]);

        let step4 = engine.incremental_query("card", &step3, "cardz");
        assert!(step4.is_empty());
    }

    #[test]
    fn test_incremental_query_backspace_falls_back() {
        let trie = trie();
        let engine = QueryEngine::new(&trie);

        let narrow = engine.query("card");
        let wider = engine.incremental_query("card", &narrow, "ca");
        assert_eq!(wider, vec!["cab", "car", "card", "care", "cat"]);

        let elsewhere = engine.incremental_query("card", &narrow, "do");
        assert_eq!(elsewhere, vec!["do", "dog"]);
    }

    #[test]
    fn test_concurrent_queries() {
        let trie = trie();
        let engine = QueryEngine::new(&trie);

        std::thread::scope(|scope| {
            let handles: Vec<_> = ["c", "ca", "d", ""]
                .into_iter()
                .map(|prefix| scope.spawn(move || (prefix, engine.query(prefix))))
                .collect();
            for handle in handles {
                let (prefix, results) = handle.join().unwrap();
                assert_eq!(results, trie.words_with_prefix(prefix));
            }
        });
    }
}
