//! Player and PlayerStats data structures.

use serde::{Deserialize, Serialize};

/// Unique identifier for a player (timestamp-derived, opaque to callers).
pub type PlayerId = String;

/// Image shown when a player has no avatar or it fails to load.
pub const PLACEHOLDER_AVATAR_URL: &str = "https://via.placeholder.com/150?text=?";

/// A registered player with career counters.
///
/// Counters are only touched by match finalization; `wins + losses == games_played`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub games_played: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl Player {
    /// Create a player with zeroed counters. The caller is responsible for id uniqueness.
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>, avatar_url: Option<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            wins: 0,
            losses: 0,
            games_played: 0,
            avatar_url: normalize_avatar(avatar_url),
        }
    }

    /// Record a win for this player.
    pub fn add_win(&mut self) {
        self.wins = self.wins.saturating_add(1);
        self.games_played = self.games_played.saturating_add(1);
    }

    /// Record a loss for this player.
    pub fn add_loss(&mut self) {
        self.losses = self.losses.saturating_add(1);
        self.games_played = self.games_played.saturating_add(1);
    }

    /// Check a record read from storage.
    ///
    /// Blank names and counters whose sum overflows are rejected. A `games_played` that
    /// disagrees with `wins + losses` is rebuilt from the two.
    pub fn validated(mut self) -> Result<Self, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(format!("player {} has an empty name", self.id));
        }
        self.name = name.to_string();
        let total = self
            .wins
            .checked_add(self.losses)
            .ok_or_else(|| format!("player {} has out-of-range counters", self.id))?;
        if total != self.games_played {
            log::warn!(
                "Player {}: gamesPlayed {} does not match wins {} + losses {}, using {}",
                self.id,
                self.games_played,
                self.wins,
                self.losses,
                total
            );
            self.games_played = total;
        }
        self.avatar_url = normalize_avatar(self.avatar_url.take());
        Ok(self)
    }

    /// Avatar URL to display, falling back to the placeholder image.
    pub fn avatar_or_placeholder(&self) -> &str {
        self.avatar_url.as_deref().unwrap_or(PLACEHOLDER_AVATAR_URL)
    }
}

/// Blank avatar URLs are treated as "no avatar".
pub(crate) fn normalize_avatar(avatar_url: Option<String>) -> Option<String> {
    avatar_url
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
}

/// Derived statistics for one player (for API / display). Never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    #[serde(flatten)]
    pub player: Player,
    /// Percentage in `0.0..=100.0`; 0 when no games were played.
    pub win_rate: f64,
    /// Mean of every score recorded under this player's id; 0 without scores.
    pub average_score: f64,
    pub highest_score: u32,
}
