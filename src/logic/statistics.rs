//! Statistics derived from the player list and the full match history.
//!
//! Nothing here is cached or written back; every call recomputes from its inputs.

use crate::models::{GameMatch, Player, PlayerStats};
use serde::{Deserialize, Serialize};

/// Stats page content: per-player stats plus the two headline players.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    /// Number of matches in the history.
    pub total_matches: usize,
    /// Ordered by win rate, best first (stable for equal rates).
    pub players: Vec<PlayerStats>,
    /// None until the history holds at least one match.
    pub best_player: Option<PlayerStats>,
    pub highest_scoring_player: Option<PlayerStats>,
}

/// Stats for one player from every score recorded under their id.
pub fn compute_player_stats(player: &Player, matches: &[GameMatch]) -> PlayerStats {
    let scores: Vec<u32> = matches
        .iter()
        .flat_map(|m| m.players.iter().filter(|p| p.id == player.id))
        .map(|p| p.score)
        .collect();

    let total: u64 = scores.iter().map(|&s| u64::from(s)).sum();
    let average_score = if scores.is_empty() {
        0.0
    } else {
        total as f64 / scores.len() as f64
    };
    let highest_score = scores.iter().copied().max().unwrap_or(0);
    let win_rate = if player.games_played > 0 {
        f64::from(player.wins) / f64::from(player.games_played) * 100.0
    } else {
        0.0
    };

    PlayerStats {
        player: player.clone(),
        win_rate,
        average_score,
        highest_score,
    }
}

/// Stats for every player, in the order of `players`.
pub fn compute_all_stats(players: &[Player], matches: &[GameMatch]) -> Vec<PlayerStats> {
    players
        .iter()
        .map(|p| compute_player_stats(p, matches))
        .collect()
}

/// Left-to-right strict `>` reduction: on equal keys the earlier element is kept.
fn first_max_by<T>(items: &[T], key: impl Fn(&T) -> f64) -> Option<&T> {
    items.iter().fold(None, |best, item| match best {
        Some(b) if key(item) <= key(b) => Some(b),
        _ => Some(item),
    })
}

/// Player with the highest win rate; ties go to the first in collection order.
pub fn best_player(stats: &[PlayerStats]) -> Option<&PlayerStats> {
    first_max_by(stats, |s| s.win_rate)
}

/// Player with the highest single-match score; ties go to the first in collection order.
pub fn highest_scoring_player(stats: &[PlayerStats]) -> Option<&PlayerStats> {
    first_max_by(stats, |s| f64::from(s.highest_score))
}

/// Everything the stats view shows, recomputed from scratch.
pub fn summarize(players: &[Player], matches: &[GameMatch]) -> StatsSummary {
    let stats = compute_all_stats(players, matches);
    // Nobody stands out before a single match has been played.
    let (best_player, highest_scoring_player) = if matches.is_empty() {
        (None, None)
    } else {
        (
            best_player(&stats).cloned(),
            highest_scoring_player(&stats).cloned(),
        )
    };

    let mut ranked = stats;
    ranked.sort_by(|a, b| b.win_rate.total_cmp(&a.win_rate));

    StatsSummary {
        total_matches: matches.len(),
        players: ranked,
        best_player,
        highest_scoring_player,
    }
}
