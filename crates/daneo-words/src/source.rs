use std::time::Duration;

use async_trait::async_trait;
use daneo_config::words::WordsConfig;

use crate::{
    DefaultPreprocessor, HttpWordApi, Preprocessor, WordApi, WordApiError, WordSource,
    WordSourceError,
};

enum AttemptError {
    Unavailable(WordApiError),
    Invalid(String),
}

/// Fetches a random word and checks it against the dictionary, retrying a
/// bounded number of times with a fixed delay.
pub struct RetryingWordSource<A> {
    api: A,
    retries: u32,
    delay: Duration,
    preprocessor: DefaultPreprocessor,
}

impl<A: WordApi> RetryingWordSource<A> {
    pub fn new(api: A, retries: u32, delay: Duration) -> Self {
        Self {
            api,
            retries,
            delay,
            preprocessor: DefaultPreprocessor,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.retries + 1
    }

    async fn attempt(&self) -> Result<String, AttemptError> {
        let raw = self.api.random_word().await.map_err(AttemptError::Unavailable)?;
        tracing::debug!("Candidate word: '{}'", raw);

        let Some(word) = self.preprocessor.process(&raw) else {
            return Err(AttemptError::Invalid(raw));
        };

        match self.api.lookup(&word).await {
            Ok(()) => Ok(word),
            Err(e) => {
                tracing::debug!("Dictionary rejected '{}': {}", word, e);
                Err(AttemptError::Invalid(word))
            }
        }
    }
}

impl RetryingWordSource<HttpWordApi> {
    pub fn from_config(config: &WordsConfig) -> Self {
        Self::new(
            HttpWordApi::from_config(config),
            config.fetch_retries,
            config.retry_delay(),
        )
    }
}

#[async_trait]
impl<A: WordApi> WordSource for RetryingWordSource<A> {
    async fn fetch_word(&self) -> Result<String, WordSourceError> {
        let attempts = self.max_attempts();
        let mut last = None;

        for attempt in 1..=attempts {
            match self.attempt().await {
                Ok(word) => return Ok(word),
                Err(AttemptError::Unavailable(e)) => {
                    tracing::warn!("Word fetch attempt {}/{} failed: {}", attempt, attempts, e);
                    last = Some(AttemptError::Unavailable(e));
                }
                Err(AttemptError::Invalid(word)) => {
                    tracing::warn!(
                        "Word fetch attempt {}/{} gave invalid word '{}'",
                        attempt,
                        attempts,
                        word
                    );
                    last = Some(AttemptError::Invalid(word));
                }
            }

            if attempt < attempts {
                tokio::time::sleep(self.delay).await;
            }
        }

        Err(match last {
            Some(AttemptError::Invalid(word)) => WordSourceError::WordNotValid { attempts, word },
            Some(AttemptError::Unavailable(e)) => WordSourceError::SourceUnavailable {
                attempts,
                cause: e.to_string(),
            },
            None => WordSourceError::SourceUnavailable {
                attempts,
                cause: "no attempt made".to_string(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Clone, Default)]
    struct Calls {
        fetches: Arc<AtomicUsize>,
        lookups: Arc<AtomicUsize>,
    }

    impl Calls {
        fn fetches(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }

        fn lookups(&self) -> usize {
            self.lookups.load(Ordering::SeqCst)
        }
    }

    /// Replays scripted random-word replies; the dictionary knows `known` only
    struct ScriptedApi {
        replies: Mutex<VecDeque<Result<&'static str, u16>>>,
        known: Vec<&'static str>,
        calls: Calls,
    }

    fn source(
        replies: Vec<Result<&'static str, u16>>,
        known: Vec<&'static str>,
    ) -> (RetryingWordSource<ScriptedApi>, Calls) {
        source_with_delay(replies, known, Duration::ZERO)
    }

    fn source_with_delay(
        replies: Vec<Result<&'static str, u16>>,
        known: Vec<&'static str>,
        delay: Duration,
    ) -> (RetryingWordSource<ScriptedApi>, Calls) {
        let calls = Calls::default();
        let api = ScriptedApi {
            replies: Mutex::new(replies.into()),
            known,
            calls: calls.clone(),
        };
        (RetryingWordSource::new(api, 3, delay), calls)
    }

    #[async_trait]
    impl WordApi for ScriptedApi {
        async fn random_word(&self) -> Result<String, WordApiError> {
            self.calls.fetches.fetch_add(1, Ordering::SeqCst);
            let reply = self.replies.lock().unwrap().pop_front().unwrap_or(Err(500));
            match reply {
                Ok(word) => Ok(word.to_string()),
                Err(code) => Err(WordApiError::Status(
                    reqwest::StatusCode::from_u16(code).unwrap(),
                )),
            }
        }

        async fn lookup(&self, word: &str) -> Result<(), WordApiError> {
            self.calls.lookups.fetch_add(1, Ordering::SeqCst);
            if self.known.contains(&word) {
                Ok(())
            } else {
                Err(WordApiError::Status(reqwest::StatusCode::NOT_FOUND))
            }
        }
    }

    #[tokio::test]
    async fn first_valid_word_is_returned() {
        let (source, calls) = source(vec![Ok("apple")], vec!["apple"]);

        assert_eq!(source.fetch_word().await.unwrap(), "apple");
        assert_eq!(calls.fetches(), 1);
        assert_eq!(calls.lookups(), 1);
    }

    #[tokio::test]
    async fn succeeds_on_fourth_call_after_three_failures() {
        let (source, calls) = source(
            vec![Err(503), Err(503), Err(503), Ok("river")],
            vec!["river"],
        );

        assert_eq!(source.fetch_word().await.unwrap(), "river");
        assert_eq!(calls.fetches(), 4);
    }

    #[tokio::test]
    async fn gives_up_after_four_attempts() {
        let (source, calls) = source(vec![], vec![]);
        assert_eq!(source.max_attempts(), 4);

        let err = source.fetch_word().await.unwrap_err();
        assert!(err.to_string().starts_with("service answered with status 500"));
        assert!(matches!(
            err,
            WordSourceError::SourceUnavailable { attempts: 4, .. }
        ));
        assert_eq!(calls.fetches(), 4);
        assert_eq!(calls.lookups(), 0);
    }

    #[tokio::test]
    async fn dictionary_miss_is_retried_then_reported() {
        let (source, calls) = source(
            vec![Ok("qwzx"), Ok("blorp"), Ok("zzzt"), Ok("flib")],
            vec!["apple"],
        );

        let err = source.fetch_word().await.unwrap_err();
        assert!(err.to_string().starts_with("not in dictionary: 'flib'"));
        match err {
            WordSourceError::WordNotValid { attempts, word } => {
                assert_eq!(attempts, 4);
                assert_eq!(word, "flib");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(calls.lookups(), 4);
    }

    #[tokio::test]
    async fn unvalidated_words_are_never_returned() {
        let (source, calls) = source(vec![Ok("blorp"), Ok("Apple ")], vec!["apple"]);

        assert_eq!(source.fetch_word().await.unwrap(), "apple");
        assert_eq!(calls.lookups(), 2);
    }

    #[tokio::test]
    async fn malformed_candidate_skips_dictionary() {
        let (source, calls) = source(vec![Ok("42"), Ok("tree")], vec!["tree"]);

        assert_eq!(source.fetch_word().await.unwrap(), "tree");
        assert_eq!(calls.lookups(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn waits_between_attempts() {
        let (source, _calls) = source_with_delay(
            vec![Err(503), Err(503), Err(503), Ok("river")],
            vec!["river"],
            Duration::from_millis(100),
        );

        let start = tokio::time::Instant::now();
        assert_eq!(source.fetch_word().await.unwrap(), "river");

        let elapsed = start.elapsed();
        assert!(
            elapsed >= Duration::from_millis(300) && elapsed < Duration::from_millis(400),
            "expected three delays, took {elapsed:?}"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn no_wait_after_last_attempt() {
        let (source, calls) = source_with_delay(vec![], vec![], Duration::from_millis(100));

        let start = tokio::time::Instant::now();
        assert!(source.fetch_word().await.is_err());

        let elapsed = start.elapsed();
        assert_eq!(calls.fetches(), 4);
        assert!(
            elapsed >= Duration::from_millis(300) && elapsed < Duration::from_millis(400),
            "expected three delays, took {elapsed:?}"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn no_wait_when_first_attempt_succeeds() {
        let (source, _calls) =
            source_with_delay(vec![Ok("apple")], vec!["apple"], Duration::from_millis(100));

        let start = tokio::time::Instant::now();
        source.fetch_word().await.unwrap();
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
