//! Term matching shared by the skill scan, the resume/job skill comparison,
//! and keyword density counting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a vocabulary term is located inside free text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    /// The occurrence must not be glued to a letter or digit on either side,
    /// so `java` does not match inside `javascript`.
    #[default]
    WordBoundary,
    /// Any case-insensitive substring occurrence counts.
    Substring,
}

impl fmt::Display for MatchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchRule::WordBoundary => f.write_str("word_boundary"),
            MatchRule::Substring => f.write_str("substring"),
        }
    }
}

impl FromStr for MatchRule {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "word_boundary" | "word-boundary" | "boundary" => Ok(MatchRule::WordBoundary),
            "substring" => Ok(MatchRule::Substring),
            other => Err(format!(
                "unknown match rule '{other}' (expected 'word_boundary' or 'substring')"
            )),
        }
    }
}

impl MatchRule {
    /// Counts occurrences of `term` in `text`, ignoring case.
    ///
    /// Occurrences are non-overlapping. Both arguments are lowercased here, so
    /// callers may pass either form.
    pub fn count(&self, text: &str, term: &str) -> usize {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return 0;
        }
        let text = text.to_lowercase();

        text.match_indices(term.as_str())
            .filter(|(start, matched)| match self {
                MatchRule::Substring => true,
                MatchRule::WordBoundary => is_isolated(&text, *start, start + matched.len()),
            })
            .count()
    }

    pub fn contains(&self, text: &str, term: &str) -> bool {
        self.count(text, term) > 0
    }

    /// Symmetric comparison used for resume skill vs job skill.
    /// True when either side contains the other under this rule.
    pub fn overlaps(&self, a: &str, b: &str) -> bool {
        if a.trim().is_empty() || b.trim().is_empty() {
            return false;
        }
        self.contains(a, b) || self.contains(b, a)
    }
}

fn is_isolated(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_boundary_rejects_embedded_match() {
        let rule = MatchRule::WordBoundary;
        assert!(!rule.contains("We use JavaScript daily", "Java"));
        assert!(rule.contains("Java and JavaScript", "java"));
    }

    #[test]
    fn test_substring_accepts_embedded_match() {
        assert!(MatchRule::Substring.contains("We use JavaScript daily", "Java"));
    }

    #[test]
    fn test_symbols_in_terms_are_matched() {
        let rule = MatchRule::WordBoundary;
        assert!(rule.contains("Experience with C++ and C#.", "C++"));
        assert!(rule.contains("Experience with C++ and C#.", "c#"));
        assert!(rule.contains("Backend in Node.js", "node.js"));
        assert!(rule.contains("CI/CD pipelines", "ci/cd"));
    }

    #[test]
    fn test_count_is_case_insensitive_and_non_overlapping() {
        let rule = MatchRule::WordBoundary;
        assert_eq!(rule.count("Led the team. LED migration. Filed reports.", "led"), 2);
        assert_eq!(MatchRule::Substring.count("Led. LED. Filed.", "led"), 3);
    }

    #[test]
    fn test_multi_word_terms() {
        assert_eq!(
            MatchRule::WordBoundary.count("Strong problem solving and Problem Solving", "problem solving"),
            2
        );
    }

    #[test]
    fn test_overlaps_is_bidirectional() {
        let rule = MatchRule::WordBoundary;
        assert!(rule.overlaps("React", "React Native"));
        assert!(rule.overlaps("React Native", "react"));
        assert!(!rule.overlaps("Java", "JavaScript"));
        assert!(MatchRule::Substring.overlaps("Java", "JavaScript"));
    }

    #[test]
    fn test_empty_terms_never_match() {
        assert!(!MatchRule::Substring.contains("anything", ""));
        assert!(!MatchRule::Substring.overlaps("", "Python"));
    }

    #[test]
    fn test_parse_rule_names() {
        assert_eq!("substring".parse::<MatchRule>().unwrap(), MatchRule::Substring);
        assert_eq!("WORD_BOUNDARY".parse::<MatchRule>().unwrap(), MatchRule::WordBoundary);
        assert!("fuzzy".parse::<MatchRule>().is_err());
    }
}
