//! TrackerError and its coarse classification.

use crate::models::player::PlayerId;

/// Errors that can occur during registry, match or storage operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TrackerError {
    /// Player name is empty after trimming.
    EmptyName,
    /// Not enough participants selected to begin a match.
    NotEnoughPlayers { required: usize, selected: usize },
    /// The live match is not in a state that allows this action.
    InvalidState,
    /// No registered player with this id.
    PlayerNotFound(PlayerId),
    /// The id is not part of the live match roster.
    ParticipantNotFound(PlayerId),
    /// Finalize was reached with zero participants. Unreachable through `begin_match`.
    NoParticipants,
    /// Writing a collection to the store failed.
    Storage(String),
}

/// How a caller should treat a [`TrackerError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Bad user input; nothing was mutated.
    Validation,
    /// Unknown player or participant id.
    NotFound,
    /// Programming error, not user-recoverable.
    Invariant,
    /// Persistence backend failure.
    Storage,
}

impl TrackerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TrackerError::EmptyName
            | TrackerError::NotEnoughPlayers { .. }
            | TrackerError::InvalidState => ErrorKind::Validation,
            TrackerError::PlayerNotFound(_) | TrackerError::ParticipantNotFound(_) => {
                ErrorKind::NotFound
            }
            TrackerError::NoParticipants => ErrorKind::Invariant,
            TrackerError::Storage(_) => ErrorKind::Storage,
        }
    }
}

impl std::fmt::Display for TrackerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackerError::EmptyName => write!(f, "Player name must not be empty"),
            TrackerError::NotEnoughPlayers { required, selected } => write!(
                f,
                "At least {} players required to start a match (selected {})",
                required, selected
            ),
            TrackerError::InvalidState => write!(f, "Invalid match state for this action"),
            TrackerError::PlayerNotFound(id) => write!(f, "Player not found: {}", id),
            TrackerError::ParticipantNotFound(id) => {
                write!(f, "Player {} is not part of this match", id)
            }
            TrackerError::NoParticipants => write!(f, "Cannot finalize a match without participants"),
            TrackerError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for TrackerError {}

impl From<std::io::Error> for TrackerError {
    fn from(e: std::io::Error) -> Self {
        TrackerError::Storage(e.to_string())
    }
}
