mod http;
mod preprocess;
mod source;

pub use http::HttpWordApi;
pub use preprocess::{DefaultPreprocessor, Preprocessor};
pub use source::RetryingWordSource;

use async_trait::async_trait;

/// Single-shot calls against the word and dictionary services, no retry
#[async_trait]
pub trait WordApi: Send + Sync {
    /// One random English word
    async fn random_word(&self) -> Result<String, WordApiError>;

    /// `Ok` only if the dictionary has an entry for `word`
    async fn lookup(&self, word: &str) -> Result<(), WordApiError>;
}

/// Produces dictionary-validated words
#[async_trait]
pub trait WordSource: Send + Sync {
    async fn fetch_word(&self) -> Result<String, WordSourceError>;
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum WordApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service answered with status {0}")]
    Status(reqwest::StatusCode),

    #[error("service returned no word")]
    EmptyResponse,
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum WordSourceError {
    #[error("{cause} (after {attempts} attempts)")]
    SourceUnavailable { attempts: u32, cause: String },

    #[error("not in dictionary: '{word}' (after {attempts} attempts)")]
    WordNotValid { attempts: u32, word: String },
}
