//! Persisted match records and the transient participant of a live match.

use crate::models::player::{normalize_avatar, Player, PlayerId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a match (timestamp-derived).
pub type MatchId = String;

/// A player's line in a finished match, frozen at finalization time.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchPlayer {
    pub id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub score: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Identity of the match winner, frozen at finalization time.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Winner {
    pub id: PlayerId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// A finished match. Immutable once appended to the history.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    /// Finalization time, serialized as ISO-8601.
    pub date: DateTime<Utc>,
    /// Participants in roster order.
    pub players: Vec<MatchPlayer>,
    /// None only when the match had no participants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<Winner>,
}

impl GameMatch {
    /// Score recorded for `player_id` in this match, if they took part.
    pub fn score_of(&self, player_id: &str) -> Option<u32> {
        self.players.iter().find(|p| p.id == player_id).map(|p| p.score)
    }

    pub fn is_winner(&self, player_id: &str) -> bool {
        self.winner.as_ref().is_some_and(|w| w.id == player_id)
    }
}

/// A player taking part in the live match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchParticipant {
    pub id: PlayerId,
    pub name: String,
    pub avatar_url: Option<String>,
    /// Never below zero; see `MatchSession::adjust_score`.
    pub score: u32,
    /// Only meaningful while the roster is being picked.
    pub selected: bool,
}

impl MatchParticipant {
    /// Unselected participant with score 0, snapshotting the player's identity.
    pub fn from_player(p: &Player) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            avatar_url: normalize_avatar(p.avatar_url.clone()),
            score: 0,
            selected: false,
        }
    }

    pub fn to_match_player(&self) -> MatchPlayer {
        MatchPlayer {
            id: self.id.clone(),
            name: self.name.clone(),
            score: self.score,
            avatar_url: self.avatar_url.clone(),
        }
    }

    pub fn to_winner(&self) -> Winner {
        Winner {
            id: self.id.clone(),
            name: self.name.clone(),
            avatar_url: self.avatar_url.clone(),
        }
    }
}
