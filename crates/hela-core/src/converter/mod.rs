//! Singlish-to-Sinhala conversion via glyph rules and lattice search.
//!
//! Classifies the input into tokens, transcribes each Singlish word by
//! longest-match rule scanning, and recovers word boundaries in run-together
//! words with a lexicon lattice and a shortest-path search.

pub mod explain;
mod lattice;
mod phonetic;
mod viterbi;

#[cfg(test)]
mod tests;

use tracing::{debug, debug_span};

use crate::assembler::assemble;
use crate::classifier::{tokenize, Allowlist, TokenKind};
use crate::lexicon::Lexicon;
use crate::rules::RuleTrie;
use crate::settings::settings;

pub use lattice::{build_lattice, Lattice, LatticeNode};
pub use phonetic::{transcribe, Confidence, ConversionResult};
pub use viterbi::best_path;

/// Convert a full line of mixed input using the built-in tables.
pub fn convert(input: &str) -> String {
    convert_with(
        RuleTrie::global(),
        Lexicon::global(),
        Allowlist::global(),
        input,
    )
}

/// Convert a full line of mixed input against explicit tables.
///
/// Singlish words are converted; every other token class passes through
/// byte for byte, so numbers, punctuation, foreign words, and whitespace
/// runs survive exactly as typed.
pub fn convert_with(
    rules: &RuleTrie,
    lexicon: &Lexicon,
    allowlist: &Allowlist,
    input: &str,
) -> String {
    let _span = debug_span!("convert", len = input.len()).entered();
    let tokens = tokenize(input, allowlist, lexicon);
    let results: Vec<Option<ConversionResult>> = tokens
        .iter()
        .map(|token| match token.kind {
            TokenKind::SinglishWord => Some(convert_word(rules, lexicon, token.raw)),
            _ => None,
        })
        .collect();
    assemble(&tokens, &results)
}

/// Convert one word token to Sinhala.
///
/// Case is folded first. Lexicon words and tokens outside the segmenter's
/// length window convert in one pass. Anything else is run through the
/// boundary search, and the split is kept only when it lands on two or more
/// pieces that are all lexicon words; the pieces are converted individually
/// and joined with single spaces. Otherwise the whole token converts as one
/// word.
pub fn convert_word(rules: &RuleTrie, lexicon: &Lexicon, word: &str) -> ConversionResult {
    let lower = word.to_ascii_lowercase();
    let _span = debug_span!("convert_word", len = lower.len()).entered();

    let Some(pieces) = boundary_split(lexicon, &lower) else {
        return transcribe(rules, &lower);
    };

    let mut text = String::new();
    let mut confidence = Confidence::Full;
    for (i, piece) in pieces.iter().enumerate() {
        if i > 0 {
            text.push(' ');
        }
        let converted = transcribe(rules, piece);
        if converted.confidence != Confidence::Full {
            confidence = Confidence::Partial;
        }
        text.push_str(&converted.text);
    }
    ConversionResult { text, confidence }
}

/// Search for a word-boundary split of a lowercase token.
///
/// Returns the pieces only when the best lattice path covers the whole token
/// with two or more lexicon words. Tokens outside the segmenter's length
/// window, non-ASCII tokens, and tokens that are themselves lexicon words
/// are never split.
pub(crate) fn boundary_split(lexicon: &Lexicon, lower: &str) -> Option<Vec<String>> {
    let seg = &settings().segmenter;
    if !lower.is_ascii()
        || lower.len() < seg.min_word_chars
        || lower.len() > seg.max_word_chars
        || lexicon.contains(lower)
    {
        return None;
    }

    let lattice = build_lattice(lexicon, lower);
    let path = best_path(&lattice);
    if path.len() < 2 || !path.iter().all(|&idx| lattice.nodes[idx].known) {
        debug!(pieces = path.len(), "no full-coverage split");
        return None;
    }
    debug!(pieces = path.len(), "split accepted");
    Some(
        path.iter()
            .map(|&idx| lattice.nodes[idx].piece.clone())
            .collect(),
    )
}
