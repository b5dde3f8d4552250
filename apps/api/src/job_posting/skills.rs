use crate::matching::MatchRule;
use crate::vocabulary::Vocabulary;

/// Vocabulary skills mentioned anywhere in `text`, in vocabulary order.
pub fn extract_skills(text: &str, vocab: &Vocabulary, rule: MatchRule) -> Vec<String> {
    vocab
        .skills
        .iter()
        .filter(|skill| rule.contains(text, skill))
        .map(|skill| skill.to_string())
        .collect()
}

/// True iff any remote-work keyword appears in `text`, ignoring case.
pub fn mentions_remote(text: &str, vocab: &Vocabulary) -> bool {
    let lower = text.to_lowercase();
    vocab.remote_keywords.iter().any(|kw| lower.contains(kw))
}
