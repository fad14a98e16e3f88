//! Data structures for the score tracker: players, matches, live session, errors.

mod error;
mod game;
mod id;
mod player;
mod registry;
mod session;

pub use error::{ErrorKind, TrackerError};
pub use game::{GameMatch, MatchId, MatchParticipant, MatchPlayer, Winner};
pub use id::timestamp_id;
pub use player::{Player, PlayerId, PlayerStats, PLACEHOLDER_AVATAR_URL};
pub use registry::PlayerRegistry;
pub use session::{MatchSession, SessionState};
