use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_word_api_url() -> String {
    "https://random-word-api.herokuapp.com/word".to_string()
}

fn default_dictionary_url() -> String {
    "https://api.dictionaryapi.dev/api/v2/entries/en".to_string()
}

fn default_fetch_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    1000
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct WordsConfig {
    /// Returns a one-element JSON list with a random English word
    #[serde(default = "default_word_api_url")]
    pub word_api_url: String,
    /// Base of `{dictionary_url}/{word}`
    #[serde(default = "default_dictionary_url")]
    pub dictionary_url: String,
    /// Extra attempts after the first one
    #[serde(default = "default_fetch_retries")]
    pub fetch_retries: u32,
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl WordsConfig {
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

impl Default for WordsConfig {
    fn default() -> Self {
        Self {
            word_api_url: default_word_api_url(),
            dictionary_url: default_dictionary_url(),
            fetch_retries: default_fetch_retries(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}
