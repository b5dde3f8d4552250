//! Per-field extraction chains.
//!
//! Each field is an ordered list of strategies `text -> Option<String>`; the first
//! strategy that returns `Some` wins. Labelled `<label>: value` lines come first,
//! field-specific heuristics after them.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::job_posting::sections::strip_bullet;
use crate::matching::MatchRule;
use crate::vocabulary::Vocabulary;

pub type Strategy = fn(&str, &Vocabulary) -> Option<String>;

pub struct FieldChain {
    pub field: &'static str,
    pub strategies: &'static [(&'static str, Strategy)],
}

impl FieldChain {
    pub fn run(&self, text: &str, vocab: &Vocabulary) -> Option<String> {
        self.strategies.iter().find_map(|(name, strategy)| {
            let value = strategy(text, vocab)?;
            trace!(field = self.field, strategy = name, "field extracted");
            Some(value)
        })
    }
}

pub const TITLE: FieldChain = FieldChain {
    field: "title",
    strategies: &[("label", title_label), ("first_line", title_first_line)],
};

pub const COMPANY: FieldChain = FieldChain {
    field: "company",
    strategies: &[("label", company_label), ("legal_suffix", company_legal_suffix)],
};

pub const LOCATION: FieldChain = FieldChain {
    field: "location",
    strategies: &[
        ("label", location_label),
        ("phrase", location_phrase),
        ("city_region", location_city_region),
    ],
};

pub const SALARY: FieldChain = FieldChain {
    field: "salary",
    strategies: &[
        ("label", salary_label),
        ("currency_prefix", salary_currency_prefix),
        ("currency_suffix", salary_currency_suffix),
    ],
};

pub const EDUCATION: FieldChain = FieldChain {
    field: "education",
    strategies: &[("label", education_label), ("keyword_line", education_keyword_line)],
};

pub const JOB_TYPE: FieldChain = FieldChain {
    field: "job_type",
    strategies: &[("label", job_type_label), ("keyword", job_type_keyword)],
};

pub const EXPERIENCE: FieldChain = FieldChain {
    field: "experience",
    strategies: &[
        ("years", experience_years),
        ("minimum", experience_minimum),
        ("seniority", experience_seniority),
    ],
};

const TITLE_MIN_CHARS: usize = 10;
const TITLE_MAX_CHARS: usize = 100;

static CITY_REGION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b([A-ZÄÖÜ][a-zäöüß]+(?:[ \-][A-ZÄÖÜ][a-zäöüß]+)?,[ \t]*[A-Z]{2,3})\b")
        .expect("valid city/region pattern")
});

static SALARY_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[$€][ \t]?\d[\d,.]*[ \t]?[kK]?(?:[ \t]*(?:-|–|to|bis)[ \t]*[$€]?[ \t]?\d[\d,.]*[ \t]?[kK]?)?")
        .expect("valid salary pattern")
});

static SALARY_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d[\d,.]*[ \t]?[kK]?[ \t]?€(?:[ \t]*(?:-|–|bis|to)[ \t]*\d[\d,.]*[ \t]?[kK]?[ \t]?€)?")
        .expect("valid salary pattern")
});

/// First non-empty capture of the first pattern that yields one.
fn first_labelled(patterns: &[Regex], text: &str) -> Option<String> {
    patterns.iter().find_map(|pattern| {
        pattern
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
            .find(|value| !value.is_empty())
            .map(str::to_string)
    })
}

fn title_label(text: &str, vocab: &Vocabulary) -> Option<String> {
    first_labelled(&vocab.patterns.title, text)
}

fn title_first_line(text: &str, _vocab: &Vocabulary) -> Option<String> {
    let line = text.lines().map(str::trim).find(|l| !l.is_empty())?;
    let len = line.chars().count();
    (TITLE_MIN_CHARS..=TITLE_MAX_CHARS)
        .contains(&len)
        .then(|| line.to_string())
}

fn company_label(text: &str, vocab: &Vocabulary) -> Option<String> {
    first_labelled(&vocab.patterns.company, text)
}

fn company_legal_suffix(text: &str, vocab: &Vocabulary) -> Option<String> {
    vocab
        .patterns
        .company_heuristic
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

fn location_label(text: &str, vocab: &Vocabulary) -> Option<String> {
    first_labelled(&vocab.patterns.location, text)
}

fn location_phrase(text: &str, vocab: &Vocabulary) -> Option<String> {
    vocab
        .patterns
        .location_phrase
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

fn location_city_region(text: &str, _vocab: &Vocabulary) -> Option<String> {
    CITY_REGION
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn salary_label(text: &str, vocab: &Vocabulary) -> Option<String> {
    first_labelled(&vocab.patterns.salary, text)
}

fn salary_currency_prefix(text: &str, _vocab: &Vocabulary) -> Option<String> {
    SALARY_PREFIX.find(text).map(|m| m.as_str().trim().to_string())
}

fn salary_currency_suffix(text: &str, _vocab: &Vocabulary) -> Option<String> {
    SALARY_SUFFIX.find(text).map(|m| m.as_str().trim().to_string())
}

fn education_label(text: &str, vocab: &Vocabulary) -> Option<String> {
    first_labelled(&vocab.patterns.education, text)
}

fn education_keyword_line(text: &str, vocab: &Vocabulary) -> Option<String> {
    text.lines()
        .map(strip_bullet)
        .find(|line| {
            vocab
                .education_keywords
                .iter()
                .any(|kw| MatchRule::WordBoundary.contains(line, kw))
        })
        .map(str::to_string)
}

fn job_type_label(text: &str, vocab: &Vocabulary) -> Option<String> {
    first_labelled(&vocab.patterns.job_type, text)
}

fn job_type_keyword(text: &str, vocab: &Vocabulary) -> Option<String> {
    vocab
        .job_types
        .iter()
        .find(|(keyword, _)| MatchRule::WordBoundary.contains(text, keyword))
        .map(|(_, label)| label.to_string())
}

fn experience_years(text: &str, vocab: &Vocabulary) -> Option<String> {
    let caps = vocab.patterns.experience_years.captures(text)?;
    Some(format!("{}+ {}", &caps[1], vocab.seniority.years_unit))
}

fn experience_minimum(text: &str, vocab: &Vocabulary) -> Option<String> {
    let caps = vocab.patterns.experience_minimum.captures(text)?;
    Some(format!("{}+ {}", &caps[1], vocab.seniority.years_unit))
}

fn experience_seniority(text: &str, vocab: &Vocabulary) -> Option<String> {
    let seniority = &vocab.seniority;
    let mentions =
        |keywords: &[&str]| keywords.iter().any(|kw| MatchRule::WordBoundary.contains(text, kw));

    if mentions(seniority.junior_keywords) {
        Some(seniority.junior_label.to_string())
    } else if mentions(seniority.senior_keywords) {
        Some(seniority.senior_label.to_string())
    } else {
        None
    }
}
