use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

/// How a matched pattern renders into Sinhala.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutput {
    /// A consonant letter carrying the inherent "a" vowel.
    Consonant { base: String },
    /// A vowel: independent letter at a word start or after a vowel,
    /// dependent sign after a consonant.
    Vowel { independent: String, sign: String },
    /// Fixed text spliced in as-is (anusvaraya, vocalic-r signs).
    Literal { text: String },
}

/// Constraint on the phoneme class emitted just before the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PrevClass {
    Consonant,
}

/// Constraint on the input byte just after the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NextClass {
    Velar,
}

#[derive(Debug, Clone)]
pub struct RuleEntry {
    pub pattern: String,
    pub output: RuleOutput,
    pub when_prev: Option<PrevClass>,
    pub when_next: Option<NextClass>,
    /// Breaks ties between rules matching the same pattern length.
    /// Higher wins; plain vowel/consonant entries sit at 0.
    pub priority: i32,
}

#[derive(Deserialize)]
struct RulesConfig {
    vowels: BTreeMap<String, VowelSpec>,
    consonants: BTreeMap<String, String>,
    #[serde(default)]
    special: Vec<SpecialSpec>,
}

#[derive(Deserialize)]
struct VowelSpec {
    ind: String,
    sign: String,
}

#[derive(Deserialize)]
struct SpecialSpec {
    pattern: String,
    output: String,
    #[serde(default)]
    when_prev: Option<String>,
    #[serde(default)]
    when_next: Option<String>,
    #[serde(default)]
    priority: i32,
}

#[derive(Debug, thiserror::Error)]
pub enum RulesConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("no rules defined")]
    Empty,
    #[error("pattern must be lowercase ASCII letters: {0:?}")]
    InvalidPattern(String),
    #[error("empty output for pattern: {0}")]
    EmptyOutput(String),
    #[error("duplicate rule for pattern: {0}")]
    DuplicatePattern(String),
    #[error("unknown context {value:?} for pattern: {pattern}")]
    UnknownContext { pattern: String, value: String },
    #[error("rule trie already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a flat rule list: vowels, then consonants, then
/// specials. Within one pattern length the scanner prefers higher priority,
/// then earlier list position.
pub fn parse_rules_toml(toml_str: &str) -> Result<Vec<RuleEntry>, RulesConfigError> {
    let config: RulesConfig =
        toml::from_str(toml_str).map_err(|e| RulesConfigError::Parse(e.to_string()))?;

    if config.vowels.is_empty() && config.consonants.is_empty() && config.special.is_empty() {
        return Err(RulesConfigError::Empty);
    }

    let mut entries = Vec::new();
    let mut plain_seen = BTreeSet::new();
    let mut special_seen = BTreeSet::new();

    for (pattern, spec) in &config.vowels {
        check_pattern(pattern)?;
        if spec.ind.is_empty() {
            return Err(RulesConfigError::EmptyOutput(pattern.clone()));
        }
        if !plain_seen.insert(pattern.clone()) {
            return Err(RulesConfigError::DuplicatePattern(pattern.clone()));
        }
        entries.push(RuleEntry {
            pattern: pattern.clone(),
            output: RuleOutput::Vowel {
                independent: spec.ind.clone(),
                sign: spec.sign.clone(),
            },
            when_prev: None,
            when_next: None,
            priority: 0,
        });
    }

    for (pattern, base) in &config.consonants {
        check_pattern(pattern)?;
        if base.is_empty() {
            return Err(RulesConfigError::EmptyOutput(pattern.clone()));
        }
        if !plain_seen.insert(pattern.clone()) {
            return Err(RulesConfigError::DuplicatePattern(pattern.clone()));
        }
        entries.push(RuleEntry {
            pattern: pattern.clone(),
            output: RuleOutput::Consonant { base: base.clone() },
            when_prev: None,
            when_next: None,
            priority: 0,
        });
    }

    for spec in &config.special {
        check_pattern(&spec.pattern)?;
        if spec.output.is_empty() {
            return Err(RulesConfigError::EmptyOutput(spec.pattern.clone()));
        }
        let when_prev = spec
            .when_prev
            .as_deref()
            .map(|v| parse_prev(&spec.pattern, v))
            .transpose()?;
        let when_next = spec
            .when_next
            .as_deref()
            .map(|v| parse_next(&spec.pattern, v))
            .transpose()?;
        let key = (spec.pattern.clone(), when_prev, when_next);
        if !special_seen.insert(key) {
            return Err(RulesConfigError::DuplicatePattern(spec.pattern.clone()));
        }
        entries.push(RuleEntry {
            pattern: spec.pattern.clone(),
            output: RuleOutput::Literal {
                text: spec.output.clone(),
            },
            when_prev,
            when_next,
            priority: spec.priority,
        });
    }

    Ok(entries)
}

fn check_pattern(pattern: &str) -> Result<(), RulesConfigError> {
    if pattern.is_empty() || !pattern.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(RulesConfigError::InvalidPattern(pattern.to_string()));
    }
    Ok(())
}

fn parse_prev(pattern: &str, value: &str) -> Result<PrevClass, RulesConfigError> {
    match value {
        "consonant" => Ok(PrevClass::Consonant),
        _ => Err(RulesConfigError::UnknownContext {
            pattern: pattern.to_string(),
            value: value.to_string(),
        }),
    }
}

fn parse_next(pattern: &str, value: &str) -> Result<NextClass, RulesConfigError> {
    match value {
        "velar" => Ok(NextClass::Velar),
        _ => Err(RulesConfigError::UnknownContext {
            pattern: pattern.to_string(),
            value: value.to_string(),
        }),
    }
}
