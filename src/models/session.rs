//! MatchSession and SessionState: the live match before it is persisted.

use crate::models::error::TrackerError;
use crate::models::game::MatchParticipant;
use crate::models::player::Player;
use serde::{Deserialize, Serialize};

/// Phase of the live match.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Picking who plays; selection can be toggled.
    #[default]
    Roster,
    /// Scores are being kept. Only finalization leaves this state.
    InProgress,
}

/// A match being set up or played.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchSession {
    pub state: SessionState,
    /// Every registered player while in Roster; exactly the selected ones once InProgress.
    pub participants: Vec<MatchParticipant>,
}

impl MatchSession {
    /// Load the registered players as unselected participants with score 0.
    pub fn select_roster(players: &[Player]) -> Self {
        Self {
            state: SessionState::Roster,
            participants: players.iter().map(MatchParticipant::from_player).collect(),
        }
    }

    pub fn is_in_progress(&self) -> bool {
        self.state == SessionState::InProgress
    }

    /// Participants currently marked as selected, in roster order.
    pub fn selected(&self) -> impl Iterator<Item = &MatchParticipant> {
        self.participants.iter().filter(|p| p.selected)
    }

    pub fn selected_count(&self) -> usize {
        self.selected().count()
    }

    pub fn participant(&self, id: &str) -> Option<&MatchParticipant> {
        self.participants.iter().find(|p| p.id == id)
    }

    pub(crate) fn participant_mut(&mut self, id: &str) -> Option<&mut MatchParticipant> {
        self.participants.iter_mut().find(|p| p.id == id)
    }

    /// Flip a participant's selection. Ignored once the match is in progress.
    pub fn toggle_selection(&mut self, id: &str) -> Result<(), TrackerError> {
        if self.is_in_progress() {
            return Ok(());
        }
        let p = self
            .participant_mut(id)
            .ok_or_else(|| TrackerError::ParticipantNotFound(id.to_string()))?;
        p.selected = !p.selected;
        Ok(())
    }
}
