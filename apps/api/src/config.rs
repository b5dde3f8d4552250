use anyhow::{anyhow, Context, Result};

use crate::matching::MatchRule;
use crate::models::Language;

/// Application configuration loaded from environment variables.
/// Every variable is optional; an unparseable value fails startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Used when a request omits `language` and detection is not applicable.
    pub default_language: Language,
    pub skill_match_rule: MatchRule,
    /// Upper bound on the characters of any single text field in a request.
    pub max_input_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            default_language: Language::En,
            skill_match_rule: MatchRule::WordBoundary,
            max_input_chars: 50_000,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => defaults.port,
        };
        let default_language = match lookup("DEFAULT_LANGUAGE") {
            Some(value) => value
                .parse::<Language>()
                .context("DEFAULT_LANGUAGE must be 'en' or 'de'")?,
            None => defaults.default_language,
        };
        let skill_match_rule = match lookup("SKILL_MATCH_RULE") {
            Some(value) => value
                .parse::<MatchRule>()
                .map_err(|e| anyhow!(e))
                .context("SKILL_MATCH_RULE is invalid")?,
            None => defaults.skill_match_rule,
        };
        let max_input_chars = match lookup("MAX_INPUT_CHARS") {
            Some(value) => value
                .parse::<usize>()
                .context("MAX_INPUT_CHARS must be a positive integer")?,
            None => defaults.max_input_chars,
        };
        if max_input_chars == 0 {
            anyhow::bail!("MAX_INPUT_CHARS must be greater than zero");
        }

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            default_language,
            skill_match_rule,
            max_input_chars,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = load(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.default_language, Language::En);
        assert_eq!(config.skill_match_rule, MatchRule::WordBoundary);
        assert_eq!(config.max_input_chars, 50_000);
    }

    #[test]
    fn test_values_are_parsed() {
        let config = load(&[
            ("PORT", "9000"),
            ("RUST_LOG", "debug"),
            ("DEFAULT_LANGUAGE", "de"),
            ("SKILL_MATCH_RULE", "substring"),
            ("MAX_INPUT_CHARS", "1000"),
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.rust_log, "debug");
        assert_eq!(config.default_language, Language::De);
        assert_eq!(config.skill_match_rule, MatchRule::Substring);
        assert_eq!(config.max_input_chars, 1000);
    }

    #[test]
    fn test_invalid_values_fail_with_context() {
        let err = load(&[("PORT", "not-a-port")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));

        let err = load(&[("DEFAULT_LANGUAGE", "fr")]).unwrap_err();
        assert!(err.to_string().contains("DEFAULT_LANGUAGE"));

        let err = load(&[("SKILL_MATCH_RULE", "fuzzy")]).unwrap_err();
        assert!(err.to_string().contains("SKILL_MATCH_RULE"));

        assert!(load(&[("MAX_INPUT_CHARS", "0")]).is_err());
    }
}
