//! Best-effort language guess for requests that omit a language tag.

use crate::matching::MatchRule;
use crate::models::Language;
use crate::vocabulary::vocabulary;

/// Weight of a German-only letter (ä, ö, ü, ß) relative to one stopword hit.
const UMLAUT_BONUS: usize = 2;

/// Picks German when German stopwords (plus an umlaut bonus) outnumber English
/// stopwords. Ties and empty input fall back to English.
pub fn detect_language(text: &str) -> Language {
    let hits = |language: Language| -> usize {
        vocabulary(language)
            .stopwords
            .iter()
            .map(|word| MatchRule::WordBoundary.count(text, word))
            .sum()
    };

    let english = hits(Language::En);
    let mut german = hits(Language::De);
    if text.chars().any(|c| matches!(c, 'ä' | 'ö' | 'ü' | 'ß' | 'Ä' | 'Ö' | 'Ü')) {
        german += UMLAUT_BONUS;
    }

    if german > english {
        Language::De
    } else {
        Language::En
    }
}
