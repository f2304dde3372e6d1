use std::sync::Arc;

use daneo_config::loader::LoaderConfig;
use daneo_translator::TranslationClient;
use daneo_types::{LoadEvent, LoadPhase, SessionId, WordPair};
use daneo_words::WordSource;
use kanal::AsyncSender;

use crate::error::SessionError;

/// Outcome of filling every slot of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub words: Vec<WordPair>,
    /// Slots that fell back to a placeholder pair
    pub failed_slots: Vec<usize>,
}

impl LoadReport {
    pub fn is_degraded(&self) -> bool {
        !self.failed_slots.is_empty()
    }

    pub fn warning(&self) -> Option<SessionError> {
        partial_failure(self.failed_slots.len(), self.words.len())
    }
}

/// Aggregate warning for a session where `failed` of `total` slots hold placeholders
pub(crate) fn partial_failure(failed: usize, total: usize) -> Option<SessionError> {
    (failed > 0).then_some(SessionError::PartiallyFailed { failed, total })
}

/// Fetches and translates words one slot at a time, strictly in order
pub struct SessionLoader {
    words: Arc<dyn WordSource>,
    translator: TranslationClient,
    config: LoaderConfig,
    events: Option<AsyncSender<LoadEvent>>,
}

impl SessionLoader {
    pub fn new(
        words: Arc<dyn WordSource>,
        translator: TranslationClient,
        config: LoaderConfig,
    ) -> Self {
        Self {
            words,
            translator,
            config,
            events: None,
        }
    }

    /// Report progress on `events` while loading
    pub fn with_events(mut self, events: AsyncSender<LoadEvent>) -> Self {
        self.events = Some(events);
        self
    }

    /// Fill `count` slots. Every slot ends up with a real pair or a
    /// placeholder, so the report always holds `count` words.
    ///
    /// # Errors
    ///
    /// `SessionError::Empty` when nothing was produced (only for `count == 0`).
    #[tracing::instrument(name = "load_session", skip(self), fields(session = %session))]
    pub async fn load(&self, session: SessionId, count: usize) -> Result<LoadReport, SessionError> {
        let attempts = self.config.max_attempts_per_word.max(1);
        let delay = self.config.slot_delay();

        let mut words = Vec::with_capacity(count);
        let mut failed_slots = Vec::new();

        self.emit(LoadEvent::Started {
            session,
            total: count,
        })
        .await;

        for slot in 0..count {
            let mut resolved = None;
            let mut last_error = String::new();

            for attempt in 1..=attempts {
                self.emit(LoadEvent::Progress {
                    slot,
                    total: count,
                    phase: LoadPhase::Fetching,
                })
                .await;

                match self.words.fetch_word().await {
                    Ok(word) => {
                        self.emit(LoadEvent::Progress {
                            slot,
                            total: count,
                            phase: LoadPhase::Translating,
                        })
                        .await;

                        let target = self.translator.translate(&word).await;
                        resolved = Some(WordPair::new(word, target));
                        tokio::time::sleep(delay).await;
                        break;
                    }
                    Err(e) => {
                        tracing::warn!(
                            "Slot {} attempt {}/{} failed: {}",
                            slot + 1,
                            attempt,
                            attempts,
                            e
                        );
                        last_error = e.to_string();
                        tokio::time::sleep(delay).await;
                    }
                }
            }

            match resolved {
                Some(pair) => {
                    tracing::info!(
                        "Slot {}/{}: {} -> {}",
                        slot + 1,
                        count,
                        pair.source(),
                        pair.target()
                    );
                    self.emit(LoadEvent::SlotResolved {
                        slot,
                        pair: pair.clone(),
                    })
                    .await;
                    words.push(pair);
                }
                None => {
                    tracing::error!(
                        "Slot {}/{} exhausted {} attempts: {}",
                        slot + 1,
                        count,
                        attempts,
                        last_error
                    );
                    let message = truncate(&last_error, self.config.placeholder_message_len);
                    self.emit(LoadEvent::SlotFailed {
                        slot,
                        reason: last_error,
                    })
                    .await;
                    words.push(WordPair::placeholder(message));
                    failed_slots.push(slot);
                }
            }
        }

        self.emit(LoadEvent::Finished {
            resolved: words.len() - failed_slots.len(),
            failed: failed_slots.len(),
        })
        .await;

        if words.is_empty() {
            return Err(SessionError::Empty);
        }

        let report = LoadReport {
            words,
            failed_slots,
        };

        if let Some(warning) = report.warning() {
            tracing::warn!("{}", warning);
        }

        Ok(report)
    }

    async fn emit(&self, event: LoadEvent) {
        if let Some(tx) = &self.events {
            // Nobody listening is not an error for the loader
            let _ = tx.send(event).await;
        }
    }
}

fn truncate(message: &str, max_chars: usize) -> String {
    message.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("번역 실패: timeout", 5), "번역 실패");
        assert_eq!(truncate("short", 40), "short");
    }

    #[test]
    fn warning_only_when_degraded() {
        let clean = LoadReport {
            words: vec![WordPair::new("apple", "사과")],
            failed_slots: vec![],
        };
        assert_eq!(clean.warning(), None);

        let degraded = LoadReport {
            words: vec![WordPair::new("apple", "사과"), WordPair::placeholder("boom")],
            failed_slots: vec![1],
        };
        assert_eq!(
            degraded.warning(),
            Some(SessionError::PartiallyFailed {
                failed: 1,
                total: 2
            })
        );
    }
}
