use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Source word shown in place of a slot that could not be resolved
pub const PLACEHOLDER_SOURCE: &str = "error word";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// English word and its Korean translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPair {
    source: String,
    target: String,
    placeholder: bool,
}

impl WordPair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            placeholder: false,
        }
    }

    /// Pair substituted for a slot whose attempts were all exhausted.
    ///
    /// `target` carries the (already truncated) error message.
    pub fn placeholder(message: impl Into<String>) -> Self {
        Self {
            source: PLACEHOLDER_SOURCE.to_string(),
            target: message.into(),
            placeholder: true,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadPhase {
    Fetching,
    Translating,
}

impl fmt::Display for LoadPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadPhase::Fetching => f.write_str("fetching"),
            LoadPhase::Translating => f.write_str("translating"),
        }
    }
}

/// Events emitted by the loader while a session is being filled
#[derive(Debug, Clone)]
pub enum LoadEvent {
    Started {
        session: SessionId,
        total: usize,
    },
    Progress {
        slot: usize,
        total: usize,
        phase: LoadPhase,
    },
    SlotResolved {
        slot: usize,
        pair: WordPair,
    },
    SlotFailed {
        slot: usize,
        reason: String,
    },
    Finished {
        resolved: usize,
        failed: usize,
    },
}

/// Everything the test screen receives once browsing is over
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestHandoff {
    pub session: SessionId,
    pub words: Vec<WordPair>,
    /// At least one slot holds a placeholder
    pub degraded: bool,
}
