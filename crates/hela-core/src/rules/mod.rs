//! Singlish-to-Sinhala glyph rules.
//!
//! A TOML scheme file defines vowel and consonant mappings plus context-gated
//! special rules; a byte trie over the patterns drives longest-match scanning.

mod config;
mod table;
mod trie;

pub use config::{
    parse_rules_toml, NextClass, PrevClass, RuleEntry, RuleOutput, RulesConfigError,
};
pub use table::DEFAULT_TOML;
pub use trie::RuleTrie;
