//! Error types for Cavern.

use thiserror::Error;

use crate::ids::RoomId;

/// Top-level error type for Cavern operations.
#[derive(Debug, Error)]
pub enum CavernError {
    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Logical invariant violations found while building a world.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    /// A graph edge names a room that was never created
    #[error("edge {from} -> {to} references a missing room")]
    DanglingEdge {
        /// Source room of the edge
        from: RoomId,
        /// Destination room of the edge
        to: RoomId,
    },

    /// Two rooms were created with the same ID
    #[error("duplicate room id {0}")]
    DuplicateRoom(RoomId),

    /// A lookup named a room that does not exist
    #[error("unknown room {0}")]
    UnknownRoom(RoomId),
}

/// Returned when parsing an unknown ability name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown ability: {0}")]
pub struct ParseAbilityError(pub String);

/// Result type alias for Cavern operations.
pub type CavernResult<T> = Result<T, CavernError>;
