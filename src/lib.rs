pub mod dict;
pub mod trie;

pub use trie::{Trie, TrieError};
