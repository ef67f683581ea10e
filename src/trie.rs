use thiserror::Error;

const ALPHABET_LEN: usize = 26;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrieError {
    #[error("word {word:?} contains unsupported character {ch:?}, only a-z is accepted")]
    InvalidCharacter { word: String, ch: char },
    #[error("empty words cannot be inserted")]
    EmptyWord,
}

struct TrieNode {
    children: [Option<Box<Self>>; ALPHABET_LEN], // a..z
    count: u32,
}

impl TrieNode {
    fn new() -> Self {
        Self {
            children: std::array::from_fn(|_| None),
            count: 0,
        }
    }
}

/// Prefix tree counting occurrences of exact lowercase-alphabetic words.
///
/// Shared prefixes share path nodes; a node with `count > 0` marks a word
/// that was inserted that many times, a node with `count == 0` is only a
/// prefix of longer words. Single-threaded use only.
pub struct Trie {
    root: TrieNode,
    words: usize,
}

fn byte2idx(b: u8) -> usize {
    (b - b'a').into()
}

fn validate(word: &str) -> Result<(), TrieError> {
    if word.is_empty() {
        return Err(TrieError::EmptyWord);
    }
    match word.chars().find(|c| !c.is_ascii_lowercase()) {
        Some(ch) => Err(TrieError::InvalidCharacter {
            word: word.to_string(),
            ch,
        }),
        None => Ok(()),
    }
}

impl Trie {
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            words: 0,
        }
    }

    /// Adds one occurrence of `word`, creating missing path nodes lazily.
    ///
    /// The whole word is validated before any node is created, so a
    /// rejected word leaves the trie untouched.
    pub fn insert(&mut self, word: &str) -> Result<(), TrieError> {
        validate(word)?;

        let mut node = &mut self.root;
        for b in word.bytes() {
            if node.children[byte2idx(b)].is_none() {
                node.children[byte2idx(b)] = Some(Box::new(TrieNode::new()));
            }
            node = node.children[byte2idx(b)].as_mut().expect("Not None");
        }

        if node.count == 0 {
            self.words += 1;
        }
        node.count += 1;
        Ok(())
    }

    fn find_node(&self, word: &str) -> Option<&TrieNode> {
        let mut node = &self.root;

        for b in word.bytes() {
            // A word holding such a byte can never have been inserted.
            if !b.is_ascii_lowercase() {
                return None;
            }
            node = match node.children[byte2idx(b)].is_some() {
                true => node.children[byte2idx(b)].as_ref().expect("Not None"),
                false => return None,
            }
        }

        Some(node)
    }

    /// Number of times exactly `word` was inserted. Read-only; 0 both for
    /// words never seen and for pure prefixes of longer inserted words.
    pub fn occurrences(&self, word: &str) -> u32 {
        self.find_node(word).map_or(0, |node| node.count)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.occurrences(word) > 0
    }

    /// Number of distinct words currently stored.
    pub fn word_count(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Consumes the trie, releasing every node exactly once. Dropping the
    /// trie does the same; this exists for callers that want an explicit
    /// teardown point, and the move makes any later use a compile error.
    pub fn deallocate(self) {}
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Trie {
    fn drop(&mut self) {
        // Detach subtrees onto an explicit stack so teardown depth does
        // not track the longest inserted word.
        let mut stack = self
            .root
            .children
            .iter_mut()
            .filter_map(Option::take)
            .collect::<Vec<Box<TrieNode>>>();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}
