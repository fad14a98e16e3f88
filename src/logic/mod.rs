//! Tracker business logic: live match play, statistics and history views.

mod history;
mod match_play;
mod statistics;

pub use history::{format_match_date, leaderboard, matches_newest_first};
pub use match_play::{adjust_score, begin_match, determine_winner, finalize_match, MIN_PLAYERS};
pub use statistics::{
    best_player, compute_all_stats, compute_player_stats, highest_scoring_player, summarize,
    StatsSummary,
};
