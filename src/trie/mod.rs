//! Character trie for prefix matching
//!
//! This implements a plain (uncompressed) trie where:
//! - Each edge is labelled by one `char`
//! - Terminal nodes mark complete words
//! - Children iterate in `char` order, so enumerations are lexicographic

mod alphabet;
mod node;
mod tree;

pub use alphabet::Alphabet;
pub use node::TrieNode;
pub use tree::Trie;
