use serde::Serialize;

use crate::classifier::{tokenize, Allowlist, TokenKind};
use crate::lexicon::Lexicon;
use crate::rules::RuleTrie;

use super::{boundary_split, convert_word, Confidence, ConversionResult};

/// Full diagnostic breakdown for one line of input.
#[derive(Debug, Serialize)]
pub struct ExplainResult {
    pub input: String,
    pub tokens: Vec<ExplainToken>,
}

/// One token with the output span it produced.
#[derive(Debug, Serialize)]
pub struct ExplainToken {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
    pub raw: String,
    pub output: String,
    pub confidence: Confidence,
    /// Lexicon pieces when a word-boundary split was accepted, empty otherwise.
    pub pieces: Vec<String>,
}

/// Run the full conversion pipeline and capture a per-token breakdown.
pub fn explain(input: &str) -> ExplainResult {
    explain_with(
        RuleTrie::global(),
        Lexicon::global(),
        Allowlist::global(),
        input,
    )
}

/// Per-token breakdown against explicit tables.
pub fn explain_with(
    rules: &RuleTrie,
    lexicon: &Lexicon,
    allowlist: &Allowlist,
    input: &str,
) -> ExplainResult {
    let tokens = tokenize(input, allowlist, lexicon)
        .iter()
        .map(|token| {
            let (result, pieces) = match token.kind {
                TokenKind::SinglishWord => {
                    let lower = token.raw.to_ascii_lowercase();
                    let pieces = boundary_split(lexicon, &lower).unwrap_or_default();
                    (convert_word(rules, lexicon, token.raw), pieces)
                }
                _ => (ConversionResult::passthrough(token.raw), Vec::new()),
            };
            ExplainToken {
                kind: token.kind,
                start: token.start,
                end: token.end,
                raw: token.raw.to_string(),
                output: result.text,
                confidence: result.confidence,
                pieces,
            }
        })
        .collect();

    ExplainResult {
        input: input.to_string(),
        tokens,
    }
}

fn kind_label(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::SinglishWord => "singlish",
        TokenKind::ForeignWord => "foreign",
        TokenKind::Number => "number",
        TokenKind::Punctuation => "punct",
        TokenKind::Whitespace => "space",
    }
}

fn confidence_label(confidence: Confidence) -> &'static str {
    match confidence {
        Confidence::Full => "full",
        Confidence::Partial => "partial",
        Confidence::Passthrough => "pass",
    }
}

/// Format an ExplainResult as human-readable text.
pub fn format_text(result: &ExplainResult) -> String {
    use unicode_width::UnicodeWidthStr;
    let mut out = String::new();

    out.push_str(&format!(
        "=== Breakdown for {:?} ({} tokens, {} bytes) ===\n",
        result.input,
        result.tokens.len(),
        result.input.len(),
    ));

    for t in &result.tokens {
        let raw_display = format!("{:?}", t.raw);
        let pad_width = 18;
        let display_width = UnicodeWidthStr::width(raw_display.as_str());
        let padded = if display_width < pad_width {
            format!("{}{}", raw_display, " ".repeat(pad_width - display_width))
        } else {
            raw_display
        };
        out.push_str(&format!(
            "  [{},{}]\t{:<8} {} -> {}  ({})\n",
            t.start,
            t.end,
            kind_label(t.kind),
            padded,
            t.output,
            confidence_label(t.confidence),
        ));
        if !t.pieces.is_empty() {
            out.push_str(&format!("      pieces: {}\n", t.pieces.join(" + ")));
        }
    }

    out
}
