//! Interactive fiction engine for Tractor Beam.
//!
//! Turns free-form player input into canonical actions, runs them against the
//! location graph and story state, and picks the narration for wherever the
//! player ends up. The engine never touches a terminal: every turn returns
//! [`Line`]s for a display sink to render.

/// Session configuration.
pub mod config;
/// Error types for the fiction engine.
pub mod error;
/// Narration selection for locations.
pub mod narrator;
/// Styled output lines.
pub mod output;
/// Command parsing and exit-name suggestions.
pub mod parser;
/// Fixed narrative text.
pub mod script;
/// The game session and its state machine.
pub mod session;

pub use config::SessionConfig;
pub use error::{FictionError, FictionResult};
pub use output::{Line, LineStyle};
pub use parser::{Action, parse_command};
pub use session::{FictionSession, SessionState};
