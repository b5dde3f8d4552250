//! Descriptive text statistics: counts, readability, keyword density.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::matching::MatchRule;
use crate::models::Language;
use crate::vocabulary::Vocabulary;

/// Leading constant of the readability formula per language. The German value is
/// a project-specific adjustment, not a published Flesch variant.
const EN_BASE: f64 = 206.835;
const DE_BASE: f64 = 180.0;
const SENTENCE_WEIGHT: f64 = 1.015;
const SYLLABLE_WEIGHT: f64 = 84.6;

static SENTENCE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("valid sentence pattern"));

pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

pub fn character_count(content: &str) -> usize {
    content.chars().count()
}

pub fn sentence_count(content: &str) -> usize {
    SENTENCE_BREAK
        .split(content)
        .filter(|sentence| !sentence.trim().is_empty())
        .count()
}

/// Approximate syllables in one word, never less than 1.
///
/// English counts vowel groups and drops a silent trailing "e". German counts
/// individual vowels, umlauts included.
pub fn syllables(word: &str, language: Language) -> usize {
    let word: String = word
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphabetic())
        .collect();

    let count = match language {
        Language::En => {
            let mut groups: usize = 0;
            let mut in_group = false;
            for c in word.chars() {
                let vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
                if vowel && !in_group {
                    groups += 1;
                }
                in_group = vowel;
            }
            if word.ends_with('e') {
                groups = groups.saturating_sub(1);
            }
            groups
        }
        Language::De => word
            .chars()
            .filter(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'ä' | 'ö' | 'ü'))
            .count(),
    };

    count.max(1)
}

/// Reading-ease approximation clamped to [0, 100]. Zero when there are no words
/// or no sentences.
pub fn readability(content: &str, language: Language) -> f64 {
    let words: Vec<&str> = content.split_whitespace().collect();
    let sentences = sentence_count(content);
    if words.is_empty() || sentences == 0 {
        return 0.0;
    }

    let total_syllables: usize = words.iter().map(|w| syllables(w, language)).sum();
    let words_per_sentence = words.len() as f64 / sentences as f64;
    let syllables_per_word = total_syllables as f64 / words.len() as f64;

    let base = match language {
        Language::En => EN_BASE,
        Language::De => DE_BASE,
    };

    (base - SENTENCE_WEIGHT * words_per_sentence - SYLLABLE_WEIGHT * syllables_per_word)
        .clamp(0.0, 100.0)
}

/// Percentage of total words taken by each ATS keyword, two decimals.
/// Keywords that never occur are left out.
pub fn keyword_density(content: &str, vocab: &Vocabulary, rule: MatchRule) -> BTreeMap<String, f64> {
    let total_words = word_count(content);
    if total_words == 0 {
        return BTreeMap::new();
    }

    vocab
        .ats_keywords
        .iter()
        .filter_map(|keyword| {
            let occurrences = rule.count(content, keyword);
            (occurrences > 0).then(|| {
                let density = occurrences as f64 / total_words as f64 * 100.0;
                (keyword.to_string(), round2(density))
            })
        })
        .collect()
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::vocabulary;

    #[test]
    fn test_word_and_character_counts() {
        assert_eq!(word_count("  Senior   engineer\n\tleading teams "), 4);
        assert_eq!(word_count(""), 0);
        assert_eq!(character_count("Grüße"), 5);
    }

    #[test]
    fn test_sentence_count_ignores_empty_fragments() {
        assert_eq!(sentence_count("One. Two!! Three?"), 3);
        assert_eq!(sentence_count("..."), 0);
        assert_eq!(sentence_count("No terminator"), 1);
    }

    #[test]
    fn test_english_syllables() {
        assert_eq!(syllables("cat", Language::En), 1);
        assert_eq!(syllables("happy", Language::En), 2);
        assert_eq!(syllables("make", Language::En), 1);
        assert_eq!(syllables("the", Language::En), 1);
        assert_eq!(syllables("documentation", Language::En), 5);
        assert_eq!(syllables("2024", Language::En), 1);
    }

    #[test]
    fn test_german_syllables_count_vowels() {
        assert_eq!(syllables("Hund", Language::De), 1);
        assert_eq!(syllables("Haus", Language::De), 2);
        assert_eq!(syllables("Bücher", Language::De), 2);
        assert_eq!(syllables("xyz", Language::De), 1);
    }

    #[test]
    fn test_readability_formula() {
        let text = format!("{}.", vec!["happy"; 20].join(" "));
        // 206.835 - 1.015 * 20 - 84.6 * 2
        assert!((readability(&text, Language::En) - 17.335).abs() < 1e-9);

        let text = format!("{}.", vec!["Hund"; 10].join(" "));
        // 180 - 1.015 * 10 - 84.6 * 1
        assert!((readability(&text, Language::De) - 85.25).abs() < 1e-9);
    }

    #[test]
    fn test_readability_is_clamped() {
        assert_eq!(readability("The cat sat on the mat.", Language::En), 100.0);
        assert_eq!(
            readability(
                "Organizational responsibilities necessitate comprehensive documentation.",
                Language::En
            ),
            0.0
        );
    }

    #[test]
    fn test_readability_zero_without_words_or_sentences() {
        assert_eq!(readability("", Language::En), 0.0);
        assert_eq!(readability("   ", Language::De), 0.0);
        assert_eq!(readability("?!.", Language::En), 0.0);
    }

    #[test]
    fn test_keyword_density_counts_each_occurrence_once() {
        let vocab = vocabulary(Language::En);
        let content = "Led Python projects. Built Python tools. Strong leadership.";
        let density = keyword_density(content, vocab, MatchRule::WordBoundary);
        // 8 words
        assert_eq!(density.get("python"), Some(&25.0));
        assert_eq!(density.get("led"), Some(&12.5));
        assert_eq!(density.get("built"), Some(&12.5));
        assert_eq!(density.get("leadership"), Some(&12.5));
        assert!(!density.contains_key("java"));
    }

    #[test]
    fn test_keyword_density_handles_phrases() {
        let vocab = vocabulary(Language::En);
        let density = keyword_density("Known for problem solving", vocab, MatchRule::WordBoundary);
        assert_eq!(density.get("problem solving"), Some(&25.0));
    }

    #[test]
    fn test_keyword_density_rounds_to_two_decimals() {
        let vocab = vocabulary(Language::En);
        let density = keyword_density("python is one of three", vocab, MatchRule::WordBoundary);
        assert_eq!(density.get("python"), Some(&20.0));
        let density = keyword_density("python a b c d e", vocab, MatchRule::WordBoundary);
        assert_eq!(density.get("python"), Some(&16.67));
    }

    #[test]
    fn test_keyword_density_empty_content() {
        assert!(keyword_density("", vocabulary(Language::En), MatchRule::WordBoundary).is_empty());
    }
}
