//! Core types for Tractor Beam: locations, the location graph, and story state.
//!
//! This crate defines the data model that location definitions load into. It
//! is independent of the loader and the command interpreter: you can build a
//! [`LocationGraph`] programmatically or deserialize one from JSON.

/// Error types used throughout the crate.
pub mod error;
/// The location graph that owns every location aboard the ship.
pub mod graph;
/// Location identifiers, locations, and exit-name normalization.
pub mod location;
/// Mutable narrative progress: position, inventory, and story flags.
pub mod story;

/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export graph types.
pub use graph::LocationGraph;
/// Re-export location types.
pub use location::{Location, LocationId, normalize_exit};
/// Re-export story state.
pub use story::StoryState;
