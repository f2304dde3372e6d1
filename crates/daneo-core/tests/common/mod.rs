#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use daneo_config::loader::LoaderConfig;
use daneo_translator::{
    ProviderMetadata, TranslateError, Translation, TranslationClient, Translator,
};
use daneo_words::{WordApi, WordApiError, WordSource, WordSourceError};

/// Hands out scripted words; an exhausted script keeps failing
pub struct ScriptedWords {
    replies: Mutex<VecDeque<Option<&'static str>>>,
    pub calls: AtomicUsize,
}

impl ScriptedWords {
    pub fn new(replies: Vec<Option<&'static str>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WordSource for ScriptedWords {
    async fn fetch_word(&self) -> Result<String, WordSourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let reply = self.replies.lock().unwrap().pop_front().flatten();
        reply
            .map(str::to_string)
            .ok_or_else(|| WordSourceError::SourceUnavailable {
                attempts: 4,
                cause: "service answered with status 503".to_string(),
            })
    }
}

/// Random-word API that fails `failures` times before answering
pub struct FlakyApi {
    failures: usize,
    word: &'static str,
    pub fetches: Arc<AtomicUsize>,
}

impl FlakyApi {
    pub fn new(failures: usize, word: &'static str) -> Self {
        Self {
            failures,
            word,
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl WordApi for FlakyApi {
    async fn random_word(&self) -> Result<String, WordApiError> {
        let n = self.fetches.fetch_add(1, Ordering::SeqCst);
        if n < self.failures {
            Err(WordApiError::EmptyResponse)
        } else {
            Ok(self.word.to_string())
        }
    }

    async fn lookup(&self, _word: &str) -> Result<(), WordApiError> {
        Ok(())
    }
}

/// Prefixes the word so results are easy to assert on
pub struct EchoTranslator;

#[async_trait]
impl Translator for EchoTranslator {
    async fn translate(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<Translation, TranslateError> {
        Ok(Translation {
            text: format!("ko:{text}"),
            from: from.to_string(),
            to: to.to_string(),
            provider: "echo".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "echo".to_string(),
            requires_api_key: false,
        }
    }
}

pub fn echo_client() -> TranslationClient {
    let translator: Arc<dyn Translator> = Arc::new(EchoTranslator);
    TranslationClient::new(Some(translator), "en", "ko")
}

pub fn missing_key_client() -> TranslationClient {
    TranslationClient::new(None, "en", "ko")
}

pub fn fast_config() -> LoaderConfig {
    LoaderConfig {
        slot_delay_ms: 0,
        ..LoaderConfig::default()
    }
}

pub fn delayed_config(slot_delay_ms: u64) -> LoaderConfig {
    LoaderConfig {
        slot_delay_ms,
        ..LoaderConfig::default()
    }
}
