use std::sync::Arc;

use crate::config::Config;
use crate::detect::detect_language;
use crate::errors::AppError;
use crate::job_posting::matcher::{MatchScorer, SkillOverlapScorer};
use crate::models::Language;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable match scorer. Default: SkillOverlapScorer with the configured rule.
    pub match_scorer: Arc<dyn MatchScorer>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let match_scorer = Arc::new(SkillOverlapScorer {
            rule: config.skill_match_rule,
        });
        AppState {
            config,
            match_scorer,
        }
    }

    /// Rejects a text field longer than `max_input_chars` characters.
    pub fn check_input_size(&self, text: &str) -> Result<(), AppError> {
        let limit = self.config.max_input_chars;
        let length = text.chars().count();
        if length > limit {
            return Err(AppError::PayloadTooLarge { length, limit });
        }
        Ok(())
    }

    pub fn check_input_sizes<'a>(
        &self,
        fields: impl IntoIterator<Item = &'a str>,
    ) -> Result<(), AppError> {
        fields
            .into_iter()
            .try_for_each(|field| self.check_input_size(field))
    }

    /// An explicit tag wins; otherwise the text is inspected. Blank text falls
    /// back to the configured default.
    pub fn resolve_language(&self, requested: Option<Language>, text: &str) -> Language {
        match requested {
            Some(language) => language,
            None if text.trim().is_empty() => self.config.default_language,
            None => detect_language(text),
        }
    }
}
