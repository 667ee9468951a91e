//! Output assembly: splice converted text and pass-through spans back
//! together in input order.

use crate::classifier::Token;
use crate::converter::ConversionResult;

/// Join per-token results into the final output. `results` runs parallel to
/// `tokens`; `None` marks a pass-through token whose raw bytes are kept
/// exactly as they appeared in the input.
pub fn assemble(tokens: &[Token<'_>], results: &[Option<ConversionResult>]) -> String {
    debug_assert_eq!(tokens.len(), results.len());
    let mut out = String::new();
    for (token, result) in tokens.iter().zip(results) {
        match result {
            Some(r) => out.push_str(&r.text),
            None => out.push_str(token.raw),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{tokenize, Allowlist};
    use crate::converter::Confidence;
    use crate::lexicon::Lexicon;

    #[test]
    fn test_splices_converted_and_raw() {
        let allowlist = Allowlist::from_words(["zoom"]);
        let lexicon = Lexicon::from_words(["mama"]);
        let tokens = tokenize("Zoom, mama!", &allowlist, &lexicon);
        let results: Vec<Option<ConversionResult>> = tokens
            .iter()
            .map(|t| {
                (t.raw == "mama").then(|| ConversionResult {
                    text: "මම".to_string(),
                    confidence: Confidence::Full,
                })
            })
            .collect();
        assert_eq!(assemble(&tokens, &results), "Zoom, මම!");
    }

    #[test]
    fn test_all_passthrough_reproduces_input() {
        let allowlist = Allowlist::from_words(["zoom"]);
        let lexicon = Lexicon::from_words(["mama"]);
        let input = "Zoom 5,343.50 ... !";
        let tokens = tokenize(input, &allowlist, &lexicon);
        let results = vec![None; tokens.len()];
        assert_eq!(assemble(&tokens, &results), input);
    }

    #[test]
    fn test_empty() {
        assert_eq!(assemble(&[], &[]), "");
    }
}
