use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::loader::LoaderConfig;
use self::translator::TranslatorConfig;
use self::words::WordsConfig;

pub mod loader;
pub mod translator;
pub mod words;

pub const API_KEY_VAR: &str = "TRANSLATE_API_KEY";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub translator: TranslatorConfig,
    pub words: WordsConfig,
    pub loader: LoaderConfig,
}

impl Config {
    /// Defaults overridden by process environment
    pub fn new() -> Self {
        let mut translator = TranslatorConfig::default();
        if let Ok(key) = env::var(API_KEY_VAR) {
            translator.api_key = key;
        }
        if let Ok(url) = env::var("TRANSLATE_API_URL") {
            translator.api_url = url;
        }

        let mut words = WordsConfig::default();
        if let Ok(url) = env::var("WORD_API_URL") {
            words.word_api_url = url;
        }
        if let Ok(url) = env::var("DICTIONARY_API_URL") {
            words.dictionary_url = url;
        }
        if let Some(ms) = env_number("RETRY_DELAY_MS") {
            words.retry_delay_ms = ms;
        }

        let mut loader = LoaderConfig::default();
        if let Some(ms) = env_number("SLOT_DELAY_MS") {
            loader.slot_delay_ms = ms;
        }
        if let Some(max) = env_number("MAX_WORD_COUNT") {
            loader.max_word_count = max as usize;
        }

        Config {
            translator,
            words,
            loader,
        }
    }

    /// Load a JSON config file. Missing fields take their defaults and an
    /// empty api key falls back to the environment.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let mut config: Config =
            serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        if config.translator.api_key.is_empty() {
            config.translator.api_key = env::var(API_KEY_VAR).unwrap_or_default();
        }

        Ok(config)
    }
}

fn env_number(name: &str) -> Option<u64> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "loader": { "slot_delay_ms": 0 } }"#).unwrap();

        assert_eq!(config.loader.slot_delay_ms, 0);
        assert_eq!(config.loader.max_attempts_per_word, 5);
        assert_eq!(config.words.fetch_retries, 3);
        assert_eq!(config.translator.to_lang, "ko");
    }

    #[test]
    fn missing_file_is_reported() {
        let err = Config::from_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
