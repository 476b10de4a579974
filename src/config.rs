use crate::logger;
use crate::models::QuestionType;
use crate::quiz::DEFAULT_QUESTION_COUNT;
use std::path::PathBuf;

pub const QUESTION_COUNT_VAR: &str = "ANIMAL_QUIZ_QUESTION_COUNT";
pub const QUESTION_TYPES_VAR: &str = "ANIMAL_QUIZ_TYPES";
pub const CATALOG_VAR: &str = "ANIMAL_QUIZ_CATALOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub question_count: usize,
    /// Types the builder may draw from. Empty means all of them.
    pub question_types: Vec<QuestionType>,
    /// `None` uses the bundled catalog.
    pub catalog_path: Option<PathBuf>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            question_count: DEFAULT_QUESTION_COUNT,
            question_types: Vec::new(),
            catalog_path: None,
        }
    }
}

impl QuizConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Unparseable values keep the
    /// default and are logged.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(QUESTION_COUNT_VAR) {
            match raw.trim().parse::<usize>() {
                Ok(count) if count > 0 => config.question_count = count,
                _ => logger::log(&format!("Ignoring {}={}", QUESTION_COUNT_VAR, raw)),
            }
        }

        if let Some(raw) = lookup(QUESTION_TYPES_VAR) {
            for name in raw.split(',').filter(|n| !n.trim().is_empty()) {
                match name.parse::<QuestionType>() {
                    Ok(question_type) if !config.question_types.contains(&question_type) => {
                        config.question_types.push(question_type)
                    }
                    Ok(_) => {}
                    Err(e) => logger::log(&format!("Ignoring {} entry: {}", QUESTION_TYPES_VAR, e)),
                }
            }
        }

        if let Some(raw) = lookup(CATALOG_VAR)
            && !raw.trim().is_empty()
        {
            config.catalog_path = Some(PathBuf::from(raw.trim()));
        }

        config
    }
}
