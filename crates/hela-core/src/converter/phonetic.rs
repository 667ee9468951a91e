use serde::Serialize;

use crate::rules::{NextClass, PrevClass, RuleEntry, RuleOutput, RuleTrie};
use crate::unicode::{AL_LAKUNA, ZERO_WIDTH_JOINER};

/// How much of a token the glyph rules accounted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    /// Every scan step consumed a rule match.
    Full,
    /// At least one character was copied through unconverted.
    Partial,
    /// The token class skipped conversion entirely.
    Passthrough,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    pub text: String,
    pub confidence: Confidence,
}

impl ConversionResult {
    pub fn passthrough(raw: &str) -> Self {
        ConversionResult {
            text: raw.to_string(),
            confidence: Confidence::Passthrough,
        }
    }
}

/// Transcribe one lowercase token by longest-match scanning.
///
/// The scanner keeps a single piece of state: whether a consonant is open,
/// still waiting for its vowel. A following vowel renders as the dependent
/// sign; anything else closes the consonant with the al-lakuna first. An
/// unmatched character is copied through raw and degrades the confidence to
/// `Partial`, so output is never empty for non-empty input.
pub fn transcribe(rules: &RuleTrie, word: &str) -> ConversionResult {
    let bytes = word.as_bytes();
    let mut text = String::with_capacity(word.len() * 3);
    let mut open_consonant = false;
    let mut fully_matched = true;
    let mut pos = 0;

    while pos < bytes.len() {
        let matches = rules.matches_at(&bytes[pos..]);
        match select(rules, &matches, open_consonant, &bytes[pos..]) {
            Some((len, entry)) => {
                emit(entry, &mut text, &mut open_consonant);
                pos += len;
            }
            None => {
                if open_consonant {
                    text.push(AL_LAKUNA);
                    open_consonant = false;
                }
                let Some(c) = word[pos..].chars().next() else {
                    break;
                };
                text.push(c);
                pos += c.len_utf8();
                fully_matched = false;
            }
        }
    }
    if open_consonant {
        text.push(AL_LAKUNA);
    }

    ConversionResult {
        text,
        confidence: if fully_matched {
            Confidence::Full
        } else {
            Confidence::Partial
        },
    }
}

/// Pick the winning rule: longest pattern first, then highest priority,
/// skipping rules whose context does not hold here.
fn select<'a>(
    rules: &'a RuleTrie,
    matches: &[(usize, &[u32])],
    open_consonant: bool,
    rest: &[u8],
) -> Option<(usize, &'a RuleEntry)> {
    for &(len, ids) in matches {
        for &id in ids {
            let entry = rules.entry(id);
            if context_holds(entry, open_consonant, &rest[len..]) {
                return Some((len, entry));
            }
        }
    }
    None
}

fn context_holds(entry: &RuleEntry, open_consonant: bool, after: &[u8]) -> bool {
    let prev_ok = match entry.when_prev {
        None => true,
        Some(PrevClass::Consonant) => open_consonant,
    };
    let next_ok = match entry.when_next {
        None => true,
        Some(NextClass::Velar) => matches!(after.first(), Some(&(b'k' | b'g'))),
    };
    prev_ok && next_ok
}

fn emit(entry: &RuleEntry, text: &mut String, open_consonant: &mut bool) {
    match &entry.output {
        RuleOutput::Consonant { base } => {
            if *open_consonant {
                text.push(AL_LAKUNA);
                // ය and ර after a dead consonant take the ligated
                // yansaya/rakaransaya form.
                if base == "ය" || base == "ර" {
                    text.push(ZERO_WIDTH_JOINER);
                }
            }
            text.push_str(base);
            *open_consonant = true;
        }
        RuleOutput::Vowel { independent, sign } => {
            if *open_consonant {
                text.push_str(sign);
            } else {
                text.push_str(independent);
            }
            *open_consonant = false;
        }
        RuleOutput::Literal { text: literal } => {
            text.push_str(literal);
            *open_consonant = false;
        }
    }
}
