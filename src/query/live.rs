//! Type-ahead session that narrows results keystroke by keystroke

use super::QueryEngine;

/// Remembers the last prefix and its matches for an interactive consumer
#[derive(Debug)]
pub struct LiveQuery<'a> {
    engine: QueryEngine<'a>,
    last: Option<(String, Vec<String>)>,
}

impl<'a> LiveQuery<'a> {
    pub fn new(engine: QueryEngine<'a>) -> Self {
        LiveQuery { engine, last: None }
    }

    /// Move to `prefix` and return its matches
    pub fn update(&mut self, prefix: &str) -> &[String] {
        let results = match self.last.take() {
            Some((previous, results)) => {
                self.engine.incremental_query(&previous, &results, prefix)
            }
            None => self.engine.query(prefix),
        };
        let (_, results) = self.last.insert((prefix.to_string(), results));
        results
    }

    /// Prefix of the last update, if any
    pub fn prefix(&self) -> Option<&str> {
        self.last.as_ref().map(|(prefix, _)| prefix.as_str())
    }

    /// Forget the previous answer
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trie::Trie;

    #[test]
    fn test_typing_sequence_matches_fresh_queries() {
        let trie: Trie = ["tea", "ten", "ted", "to", "tore", "torn", "inn"]
            .into_iter()
            .collect();
        let engine = QueryEngine::new(&trie);
        let mut live = LiveQuery::new(engine);

        for prefix in ["t", "to", "tor", "torn", "to", "te", "", "i", "inn", "innn"] {
            let expected = engine.query(prefix);
            assert_eq!(live.update(prefix), expected.as_slice(), "prefix {:?}", prefix);
            assert_eq!(live.prefix(), Some(prefix));
        }

        live.reset();
        assert_eq!(live.prefix(), None);
    }
}
