use crate::location::LocationId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when building or querying a location graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The same location was defined twice.
    #[error("location defined more than once: {0}")]
    DuplicateLocation(LocationId),

    /// A location required by the game is absent from the graph.
    #[error("location not defined: {0}")]
    MissingLocation(LocationId),

    /// A connection points at a location that is absent from the graph.
    #[error("exit \"{exit}\" from {from} leads to undefined location {target}")]
    DanglingConnection {
        /// The location the exit belongs to.
        from: LocationId,
        /// The exit name as written.
        exit: String,
        /// The unresolved target.
        target: LocationId,
    },
}
