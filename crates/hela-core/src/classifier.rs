//! Token classification.
//!
//! Splits raw input into a lossless sequence of typed tokens: Singlish words
//! to convert, foreign words and everything else to pass through verbatim.

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::Serialize;

use crate::lexicon::{parse_word_list, Lexicon};
use crate::settings::settings;
use crate::unicode::is_latin;

/// Embedded default foreign-word list.
pub const DEFAULT_FOREIGN_WORDS: &str = include_str!("foreign_words.txt");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Romanized Sinhala, goes through phonetic conversion.
    SinglishWord,
    /// English word kept verbatim.
    ForeignWord,
    /// Digit run, optionally led by a currency symbol.
    Number,
    /// Single symbol or non-ASCII character.
    Punctuation,
    /// Maximal whitespace run.
    Whitespace,
}

/// One classified span of the input. `raw` borrows the exact input bytes;
/// concatenating `raw` over a token sequence reproduces the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub raw: &'a str,
    pub start: usize,
    pub end: usize,
}

/// Case-insensitive set of words to keep in Latin script.
pub struct Allowlist {
    words: HashSet<String>,
}

impl Allowlist {
    /// Get or initialize the global singleton built from the embedded list.
    pub fn global() -> &'static Allowlist {
        static INSTANCE: OnceLock<Allowlist> = OnceLock::new();
        INSTANCE.get_or_init(|| Allowlist::from_words(parse_word_list(DEFAULT_FOREIGN_WORDS)))
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Allowlist {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }

    /// Membership check on the lowercase form.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

const CURRENCY_SYMBOLS: [char; 4] = ['$', '€', '£', '₹'];

/// Partition `input` into tokens. Every input byte lands in exactly one
/// token, in order, so pass-through reassembly is byte-exact.
pub fn tokenize<'a>(input: &'a str, allowlist: &Allowlist, lexicon: &Lexicon) -> Vec<Token<'a>> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;
    while pos < input.len() {
        let start = pos;
        let Some(c) = input[pos..].chars().next() else {
            break;
        };
        let kind = if is_latin(c) {
            while let Some(l) = input[pos..].chars().next() {
                if !is_latin(l) {
                    break;
                }
                pos += l.len_utf8();
            }
            classify_word(&input[start..pos], allowlist, lexicon)
        } else if c.is_ascii_digit() {
            pos = scan_number(bytes, pos);
            TokenKind::Number
        } else if is_currency_start(input, pos, c) {
            pos = scan_number(bytes, pos + c.len_utf8());
            TokenKind::Number
        } else if c.is_whitespace() {
            while let Some(w) = input[pos..].chars().next() {
                if !w.is_whitespace() {
                    break;
                }
                pos += w.len_utf8();
            }
            TokenKind::Whitespace
        } else {
            pos += c.len_utf8();
            TokenKind::Punctuation
        };
        tokens.push(Token {
            kind,
            raw: &input[start..pos],
            start,
            end: pos,
        });
    }
    tokens
}

fn classify_word(raw: &str, allowlist: &Allowlist, lexicon: &Lexicon) -> TokenKind {
    let lower = raw.to_ascii_lowercase();
    if allowlist.contains(&lower) {
        return TokenKind::ForeignWord;
    }
    let acronym_min = settings().classifier.acronym_min_chars;
    if raw.len() >= acronym_min && raw.bytes().all(|b| b.is_ascii_uppercase()) {
        return TokenKind::ForeignWord;
    }
    if is_title_case(raw) && !lexicon.contains(&lower) {
        return TokenKind::ForeignWord;
    }
    TokenKind::SinglishWord
}

/// First letter uppercase, everything after lowercase. Capitalized lexicon
/// words ("Magee" at a sentence start) stay Singlish; unknown capitalized
/// words are treated as proper nouns.
fn is_title_case(raw: &str) -> bool {
    let mut bytes = raw.bytes();
    match bytes.next() {
        Some(first) if first.is_ascii_uppercase() => bytes.all(|b| b.is_ascii_lowercase()),
        _ => false,
    }
}

fn is_currency_start(input: &str, pos: usize, c: char) -> bool {
    CURRENCY_SYMBOLS.contains(&c)
        && input[pos + c.len_utf8()..]
            .bytes()
            .next()
            .is_some_and(|b| b.is_ascii_digit())
}

/// Consume a digit run starting at `pos`. A `.` or `,` is absorbed only
/// between digits, so "5,343.50" is one token and a trailing "." is not.
fn scan_number(bytes: &[u8], mut pos: usize) -> usize {
    loop {
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        let separated = pos < bytes.len()
            && (bytes[pos] == b'.' || bytes[pos] == b',')
            && pos + 1 < bytes.len()
            && bytes[pos + 1].is_ascii_digit();
        if !separated {
            return pos;
        }
        pos += 1;
    }
}
