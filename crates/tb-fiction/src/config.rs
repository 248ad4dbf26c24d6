//! Configuration for a game session.

use tb_core::LocationId;

/// Code that opens the Control Room unless configured otherwise.
pub const DEFAULT_CONTROL_ROOM_CODE: &str = "1986";

/// Configuration for a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Secret code for the Control Room door.
    pub control_room_code: String,
    /// Where the player wakes up.
    pub start: LocationId,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            control_room_code: DEFAULT_CONTROL_ROOM_CODE.to_string(),
            start: LocationId::HoldingCell,
        }
    }
}

impl SessionConfig {
    /// Set the Control Room code. Surrounding whitespace is dropped.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.control_room_code = code.into().trim().to_string();
        self
    }

    /// Set the starting location.
    pub fn with_start(mut self, start: LocationId) -> Self {
        self.start = start;
        self
    }
}
