//! Character-level Unicode classification for Sinhala text.

/// Al-lakuna (virama, U+0DCA). Appended to a consonant to suppress its
/// inherent "a" vowel.
pub const AL_LAKUNA: char = '\u{0DCA}';

/// Zero-width joiner (U+200D). Between al-lakuna and ය/ර it requests the
/// ligated yansaya/rakaransaya form instead of a bare stacked cluster.
pub const ZERO_WIDTH_JOINER: char = '\u{200D}';

/// Check the full Sinhala block (U+0D80..U+0DFF). The block contains a few
/// unassigned codepoints but those never appear in converter output, so the
/// simpler block-level check is preferred over an exact list.
pub fn is_sinhala(c: char) -> bool {
    ('\u{0D80}'..='\u{0DFF}').contains(&c)
}

/// Consonant letters ක (U+0D9A) through ෆ (U+0DC6).
pub fn is_sinhala_consonant(c: char) -> bool {
    ('\u{0D9A}'..='\u{0DC6}').contains(&c)
}

/// Independent vowel letters අ (U+0D85) through ඖ (U+0D96), used at a word
/// start or after another vowel.
pub fn is_sinhala_vowel(c: char) -> bool {
    ('\u{0D85}'..='\u{0D96}').contains(&c)
}

/// Dependent vowel signs (pili) that attach to a preceding consonant:
/// U+0DCF..U+0DDF plus the long gayanukitta pair U+0DF2..U+0DF3.
pub fn is_vowel_sign(c: char) -> bool {
    ('\u{0DCF}'..='\u{0DDF}').contains(&c) || ('\u{0DF2}'..='\u{0DF3}').contains(&c)
}

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}
