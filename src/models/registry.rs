//! PlayerRegistry: the ordered collection of registered players.

use crate::models::error::TrackerError;
use crate::models::id::timestamp_id;
use crate::models::player::{normalize_avatar, Player, PlayerId};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// All registered players, in registration order.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerRegistry {
    players: Vec<Player>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_players(players: Vec<Player>) -> Self {
        Self { players }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn into_players(self) -> Vec<Player> {
        self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// Register a new player with zeroed counters. The name is stored trimmed.
    pub fn register(
        &mut self,
        name: &str,
        avatar_url: Option<String>,
    ) -> Result<Player, TrackerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TrackerError::EmptyName);
        }
        let id = timestamp_id(Utc::now(), |candidate| self.get(candidate).is_some());
        let player = Player::new(id, name, avatar_url);
        self.players.push(player.clone());
        Ok(player)
    }

    /// Overwrite a player's name and avatar. Counters are left alone.
    pub fn rename(
        &mut self,
        id: &str,
        new_name: &str,
        new_avatar_url: Option<String>,
    ) -> Result<Player, TrackerError> {
        let new_name = new_name.trim();
        let p = self
            .get_mut(id)
            .ok_or_else(|| TrackerError::PlayerNotFound(id.to_string()))?;
        if new_name.is_empty() {
            return Err(TrackerError::EmptyName);
        }
        p.name = new_name.to_string();
        p.avatar_url = normalize_avatar(new_avatar_url);
        Ok(p.clone())
    }

    /// Delete a player. Match history keeps its snapshots of them.
    pub fn remove(&mut self, id: &str) -> Result<Player, TrackerError> {
        let idx = self
            .players
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| TrackerError::PlayerNotFound(id.to_string()))?;
        Ok(self.players.remove(idx))
    }

    /// Count one game for each registered participant: a win for `winner_id`, a loss otherwise.
    ///
    /// Ids that are no longer registered (deleted mid-match) are skipped.
    pub fn apply_match_result(&mut self, participant_ids: &[PlayerId], winner_id: &str) {
        for pid in participant_ids {
            match self.get_mut(pid) {
                Some(p) if p.id == winner_id => p.add_win(),
                Some(p) => p.add_loss(),
                None => log::debug!("Skipping result for unregistered player {}", pid),
            }
        }
    }
}
