//! Command parsing and exit-name suggestions.

mod command;
mod resolver;

pub use command::{Action, DOOR_PHRASES, parse_command};
pub use resolver::{FUZZY_THRESHOLD, suggest_exit};
