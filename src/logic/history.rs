//! Display-ordered views over players and match history.

use crate::models::{GameMatch, Player};
use chrono::{DateTime, Utc};

/// Matches sorted newest first. The stored history itself stays in append order.
pub fn matches_newest_first(matches: &[GameMatch]) -> Vec<GameMatch> {
    let mut sorted = matches.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

/// Players sorted by wins, most first (stable for equal wins).
pub fn leaderboard(players: &[Player]) -> Vec<Player> {
    let mut sorted = players.to_vec();
    sorted.sort_by(|a, b| b.wins.cmp(&a.wins));
    sorted
}

/// Short day-first display form of a match date, e.g. `07/03/2025 21:45`.
pub fn format_match_date(date: &DateTime<Utc>) -> String {
    date.format("%d/%m/%Y %H:%M").to_string()
}
