pub mod error;
pub mod loader;
pub mod session;

pub use error::{FlowError, SessionError};
pub use loader::{LoadReport, SessionLoader};
pub use session::{Screen, SessionFlow, Step};
