pub mod types;

pub use types::{LoadEvent, LoadPhase, SessionId, TestHandoff, WordPair};
