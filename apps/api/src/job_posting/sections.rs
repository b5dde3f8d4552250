//! Section-scoped extraction: description, requirements, benefits.
//!
//! A section starts at the first header line mentioning one of its keywords and
//! runs until a header of another known section, its cap, or the end of the text.

use crate::vocabulary::{Section, Vocabulary};

pub const MAX_REQUIREMENTS: usize = 10;
pub const MAX_BENEFITS: usize = 8;
pub const MAX_DESCRIPTION_CHARS: usize = 300;

/// Longer lines are content, never headers.
const MAX_HEADER_CHARS: usize = 60;
/// Shorter items are treated as noise.
const MIN_ITEM_CHARS: usize = 5;

const BULLET_MARKERS: &[char] = &['•', '-', '*', '+'];

/// Trims the line and any leading bullet markers.
pub fn strip_bullet(line: &str) -> &str {
    line.trim().trim_start_matches(BULLET_MARKERS).trim()
}

fn is_header(line: &str, keywords: &[&str]) -> bool {
    let line = line.trim();
    if line.is_empty() || line.starts_with(BULLET_MARKERS) {
        return false;
    }
    if line.chars().count() > MAX_HEADER_CHARS {
        return false;
    }
    let lower = line.to_lowercase();
    keywords.iter().any(|kw| lower.contains(kw))
}

/// Cleaned member lines of `section`, in order, without any cap applied.
fn section_items<'a>(
    text: &'a str,
    section: Section,
    vocab: &Vocabulary,
) -> impl Iterator<Item = &'a str> {
    let own = vocab.section_keywords(section);
    let terminators = vocab.terminators(section);

    let mut lines = text.lines();
    let found = lines.by_ref().any(|line| is_header(line, own));

    lines
        .take_while(move |line| found && !is_header(line, &terminators))
        .map(strip_bullet)
        .filter(|item| item.chars().count() >= MIN_ITEM_CHARS)
}

pub fn extract_requirements(text: &str, vocab: &Vocabulary) -> Vec<String> {
    section_items(text, Section::Requirements, vocab)
        .take(MAX_REQUIREMENTS)
        .map(str::to_string)
        .collect()
}

pub fn extract_benefits(text: &str, vocab: &Vocabulary) -> Vec<String> {
    section_items(text, Section::Benefits, vocab)
        .take(MAX_BENEFITS)
        .map(str::to_string)
        .collect()
}

/// Joins description lines until roughly `MAX_DESCRIPTION_CHARS` characters are collected.
pub fn extract_description(text: &str, vocab: &Vocabulary) -> Option<String> {
    let mut description = String::new();

    for item in section_items(text, Section::Description, vocab) {
        if !description.is_empty() {
            description.push(' ');
        }
        description.push_str(item);
        if description.chars().count() >= MAX_DESCRIPTION_CHARS {
            break;
        }
    }

    if description.chars().count() > MAX_DESCRIPTION_CHARS {
        description = description.chars().take(MAX_DESCRIPTION_CHARS).collect();
        description.truncate(description.trim_end().len());
        description.push_str("...");
    }

    (!description.is_empty()).then_some(description)
}
