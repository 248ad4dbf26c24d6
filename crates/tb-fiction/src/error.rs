//! Error types for the fiction engine.
//!
//! Player mistakes such as unknown commands or missing items are not errors:
//! they come back as feedback lines. These variants are genuine faults.

use thiserror::Error;

use crate::session::SessionState;

/// Result type for fiction operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors that can occur while running a session.
#[derive(Debug, Error)]
pub enum FictionError {
    /// The location graph is incomplete or inconsistent.
    #[error(transparent)]
    Graph(#[from] tb_core::CoreError),

    /// Input arrived after the session ended.
    #[error("the session is over ({0:?})")]
    SessionOver(SessionState),

    /// A command was executed while a door code was expected.
    #[error("waiting for a door code, not a command")]
    AwaitingCode,
}
