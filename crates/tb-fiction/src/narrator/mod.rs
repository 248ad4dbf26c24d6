//! Narration selection for locations.

mod rules;

pub use rules::{Ending, Narration, narrate, surroundings};
