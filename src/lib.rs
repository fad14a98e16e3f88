//! Billiard score tracker: library with models, match/stats logic and persistence.

pub mod logic;
pub mod models;
pub mod store;
pub mod tracker;

pub use logic::{
    adjust_score, begin_match, best_player, compute_all_stats, compute_player_stats,
    determine_winner, finalize_match, format_match_date, highest_scoring_player, leaderboard,
    matches_newest_first, summarize, StatsSummary, MIN_PLAYERS,
};
pub use models::{
    ErrorKind, GameMatch, MatchId, MatchParticipant, MatchPlayer, MatchSession, Player, PlayerId,
    PlayerRegistry, PlayerStats, SessionState, TrackerError, Winner, PLACEHOLDER_AVATAR_URL,
};
pub use store::{FileStore, MemoryStore, Store, MATCHES_KEY, PLAYERS_KEY};
pub use tracker::Tracker;
