use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_max_attempts_per_word() -> u32 {
    5
}

fn default_slot_delay_ms() -> u64 {
    1000
}

fn default_max_word_count() -> usize {
    50
}

fn default_placeholder_message_len() -> usize {
    40
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoaderConfig {
    #[serde(default = "default_max_attempts_per_word")]
    pub max_attempts_per_word: u32,
    /// Pause after every resolved pair and after every failed attempt
    #[serde(default = "default_slot_delay_ms")]
    pub slot_delay_ms: u64,
    #[serde(default = "default_max_word_count")]
    pub max_word_count: usize,
    /// Characters of the error message kept in a placeholder pair
    #[serde(default = "default_placeholder_message_len")]
    pub placeholder_message_len: usize,
}

impl LoaderConfig {
    pub fn slot_delay(&self) -> Duration {
        Duration::from_millis(self.slot_delay_ms)
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            max_attempts_per_word: default_max_attempts_per_word(),
            slot_delay_ms: default_slot_delay_ms(),
            max_word_count: default_max_word_count(),
            placeholder_message_len: default_placeholder_message_len(),
        }
    }
}
