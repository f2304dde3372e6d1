use daneo_types::{SessionId, TestHandoff, WordPair};

use crate::error::{FlowError, SessionError};
use crate::loader::{LoadReport, partial_failure};

/// Screens of a study session: `Setup -> Loading -> Browsing -> Finished`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Setup,
    Loading { requested: usize },
    Browsing { cursor: usize },
    Finished,
}

impl Screen {
    fn name(&self) -> &'static str {
        match self {
            Screen::Setup => "in setup",
            Screen::Loading { .. } => "loading",
            Screen::Browsing { .. } => "browsing",
            Screen::Finished => "finished",
        }
    }
}

/// Result of moving forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Moved(usize),
    Finished,
}

/// Owns the session word list and cursor. All transitions are guarded;
/// an illegal one leaves the state untouched.
#[derive(Debug)]
pub struct SessionFlow {
    id: SessionId,
    screen: Screen,
    words: Vec<WordPair>,
    failed_slots: Vec<usize>,
    max_word_count: usize,
    last_error: Option<SessionError>,
}

impl SessionFlow {
    pub fn new(max_word_count: usize) -> Self {
        Self {
            id: SessionId::new(),
            screen: Screen::Setup,
            words: Vec::new(),
            failed_slots: Vec::new(),
            max_word_count,
            last_error: None,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn words(&self) -> &[WordPair] {
        &self.words
    }

    pub fn cursor(&self) -> Option<usize> {
        match self.screen {
            Screen::Browsing { cursor } => Some(cursor),
            _ => None,
        }
    }

    /// Word under the cursor, only while browsing
    pub fn current(&self) -> Option<&WordPair> {
        self.cursor().and_then(|i| self.words.get(i))
    }

    /// Why the last load left the session without words
    pub fn last_error(&self) -> Option<&SessionError> {
        self.last_error.as_ref()
    }

    /// Aggregate warning for a session that used placeholders
    pub fn warning(&self) -> Option<SessionError> {
        partial_failure(self.failed_slots.len(), self.words.len())
    }

    pub fn begin_loading(&mut self, count: usize) -> Result<(), FlowError> {
        self.guard(matches!(self.screen, Screen::Setup), "start loading")?;

        if count == 0 || count > self.max_word_count {
            return Err(SessionError::InvalidCount {
                requested: count,
                max: self.max_word_count,
            }
            .into());
        }

        self.last_error = None;
        self.screen = Screen::Loading { requested: count };
        Ok(())
    }

    /// Hand the loader's outcome to the flow. A session without words goes
    /// back to `Setup` with no current word and the error is returned.
    pub fn finish_loading(
        &mut self,
        outcome: Result<LoadReport, SessionError>,
    ) -> Result<(), FlowError> {
        self.guard(matches!(self.screen, Screen::Loading { .. }), "finish loading")?;

        match outcome {
            Ok(report) if !report.words.is_empty() => {
                self.words = report.words;
                self.failed_slots = report.failed_slots;
                self.screen = Screen::Browsing { cursor: 0 };
                Ok(())
            }
            Ok(_) => self.fail(SessionError::Empty),
            Err(e) => self.fail(e),
        }
    }

    pub fn previous(&mut self) -> Result<usize, FlowError> {
        let Screen::Browsing { cursor } = self.screen else {
            return Err(self.invalid("go back"));
        };

        if cursor == 0 {
            return Err(FlowError::AtFirstWord);
        }

        self.screen = Screen::Browsing { cursor: cursor - 1 };
        Ok(cursor - 1)
    }

    /// Advance one word; past the last word the session is finished
    pub fn next(&mut self) -> Result<Step, FlowError> {
        let Screen::Browsing { cursor } = self.screen else {
            return Err(self.invalid("advance"));
        };

        if cursor + 1 >= self.words.len() {
            self.screen = Screen::Finished;
            return Ok(Step::Finished);
        }

        self.screen = Screen::Browsing { cursor: cursor + 1 };
        Ok(Step::Moved(cursor + 1))
    }

    /// The word list for the test screen, once browsing is done
    pub fn handoff(&self) -> Option<TestHandoff> {
        matches!(self.screen, Screen::Finished).then(|| TestHandoff {
            session: self.id,
            words: self.words.clone(),
            degraded: !self.failed_slots.is_empty(),
        })
    }

    /// Start over with a fresh session id
    pub fn reset(&mut self) -> Result<(), FlowError> {
        self.guard(
            !matches!(self.screen, Screen::Loading { .. }),
            "reset",
        )?;

        *self = Self::new(self.max_word_count);
        Ok(())
    }

    fn fail(&mut self, error: SessionError) -> Result<(), FlowError> {
        tracing::error!("Session {} failed: {}", self.id, error);
        self.words.clear();
        self.failed_slots.clear();
        self.screen = Screen::Setup;
        self.last_error = Some(error.clone());
        Err(error.into())
    }

    fn guard(&self, allowed: bool, action: &'static str) -> Result<(), FlowError> {
        if allowed {
            Ok(())
        } else {
            Err(self.invalid(action))
        }
    }

    fn invalid(&self, action: &'static str) -> FlowError {
        FlowError::InvalidTransition {
            screen: self.screen.name(),
            action,
        }
    }
}
