
use crate::lexicon::Lexicon;

pub(super) fn small_lexicon() -> Lexicon {
    Lexicon::from_words(["mama", "gedhara", "yanavaa", "kadeeta"])
}
