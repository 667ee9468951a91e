//! Known-word lexicon backing the classifier and the word-boundary search.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Embedded default word list.
pub const DEFAULT_WORDS: &str = include_str!("lexicon.txt");

struct Node {
    children: HashMap<u8, Node>,
    terminal: bool,
}

impl Node {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            terminal: false,
        }
    }
}

/// Byte trie over lowercase word forms.
pub struct Lexicon {
    root: Node,
    len: usize,
}

impl Lexicon {
    /// Get or initialize the global singleton built from the embedded list.
    pub fn global() -> &'static Lexicon {
        static INSTANCE: OnceLock<Lexicon> = OnceLock::new();
        INSTANCE.get_or_init(|| Lexicon::from_words(parse_word_list(DEFAULT_WORDS)))
    }

    /// Build from an iterator of words. Entries are folded to lowercase, the
    /// case the lookups use.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Lexicon {
            root: Node::new(),
            len: 0,
        };
        for word in words {
            lexicon.insert(&word.as_ref().to_ascii_lowercase());
        }
        lexicon
    }

    fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        let mut node = &mut self.root;
        for &b in word.as_bytes() {
            node = node.children.entry(b).or_insert_with(Node::new);
        }
        if !node.terminal {
            node.terminal = true;
            self.len += 1;
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        let mut node = &self.root;
        for &b in word.as_bytes() {
            match node.children.get(&b) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.terminal && !word.is_empty()
    }

    /// Byte lengths of all lexicon words that are prefixes of `query`,
    /// shortest first.
    pub fn prefix_lengths(&self, query: &str) -> Vec<usize> {
        let mut out = Vec::new();
        let mut node = &self.root;
        for (depth, &b) in query.as_bytes().iter().enumerate() {
            match node.children.get(&b) {
                Some(child) => {
                    node = child;
                    if node.terminal {
                        out.push(depth + 1);
                    }
                }
                None => break,
            }
        }
        out
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Split a word-list text into entries: one word per line, surrounding
/// whitespace trimmed, blank lines and `#` comments skipped.
pub fn parse_word_list(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}
