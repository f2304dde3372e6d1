use async_trait::async_trait;
use daneo_config::words::WordsConfig;

use crate::{WordApi, WordApiError};

/// Random-word service plus dictionary lookup over HTTP
#[derive(Clone)]
pub struct HttpWordApi {
    client: reqwest::Client,
    word_api_url: String,
    dictionary_url: String,
}

impl HttpWordApi {
    pub fn new(word_api_url: String, dictionary_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            word_api_url,
            dictionary_url,
        }
    }

    pub fn from_config(config: &WordsConfig) -> Self {
        Self::new(config.word_api_url.clone(), config.dictionary_url.clone())
    }

    fn entry_url(&self, word: &str) -> String {
        format!("{}/{}", self.dictionary_url.trim_end_matches('/'), word)
    }
}

#[async_trait]
impl WordApi for HttpWordApi {
    async fn random_word(&self) -> Result<String, WordApiError> {
        let response = self.client.get(&self.word_api_url).send().await?;

        if !response.status().is_success() {
            return Err(WordApiError::Status(response.status()));
        }

        let words: Vec<String> = response.json().await?;
        words.into_iter().next().ok_or(WordApiError::EmptyResponse)
    }

    async fn lookup(&self, word: &str) -> Result<(), WordApiError> {
        let response = self.client.get(self.entry_url(word)).send().await?;

        if !response.status().is_success() {
            return Err(WordApiError::Status(response.status()));
        }

        Ok(())
    }
}
