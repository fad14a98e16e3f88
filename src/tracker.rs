//! Tracker: the store-backed entry point used by the web server and tests.
//!
//! Every operation reads the collections it needs from the store, validates, applies the
//! change in memory and only then writes back. Errors before the write leave the store
//! exactly as it was.

use crate::logic::{self, StatsSummary};
use crate::models::{GameMatch, MatchSession, Player, PlayerRegistry, TrackerError};
use crate::store::{self, Store};
use chrono::{DateTime, Utc};

/// Owns the persistence backend and exposes registry, match and stats operations.
#[derive(Debug)]
pub struct Tracker<S: Store> {
    store: S,
}

impl<S: Store> Tracker<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn registry(&self) -> PlayerRegistry {
        PlayerRegistry::from_players(store::load_players(&self.store))
    }

    fn save_registry(&mut self, registry: &PlayerRegistry) -> Result<(), TrackerError> {
        store::save_players(&mut self.store, registry.players())?;
        Ok(())
    }

    /// Registered players in registration order.
    pub fn players(&self) -> Vec<Player> {
        store::load_players(&self.store)
    }

    pub fn player(&self, id: &str) -> Option<Player> {
        self.registry().get(id).cloned()
    }

    /// Match history in creation order.
    pub fn matches(&self) -> Vec<GameMatch> {
        store::load_matches(&self.store)
    }

    pub fn matches_newest_first(&self) -> Vec<GameMatch> {
        logic::matches_newest_first(&self.matches())
    }

    pub fn leaderboard(&self) -> Vec<Player> {
        logic::leaderboard(&self.players())
    }

    pub fn register_player(
        &mut self,
        name: &str,
        avatar_url: Option<String>,
    ) -> Result<Player, TrackerError> {
        let mut registry = self.registry();
        let player = registry.register(name, avatar_url)?;
        self.save_registry(&registry)?;
        log::info!("Registered player {} ({})", player.name, player.id);
        Ok(player)
    }

    pub fn rename_player(
        &mut self,
        id: &str,
        new_name: &str,
        new_avatar_url: Option<String>,
    ) -> Result<Player, TrackerError> {
        let mut registry = self.registry();
        let player = registry.rename(id, new_name, new_avatar_url)?;
        self.save_registry(&registry)?;
        log::info!("Renamed player {} to {}", player.id, player.name);
        Ok(player)
    }

    /// Delete a player. Their snapshots in past matches are left as they are.
    pub fn remove_player(&mut self, id: &str) -> Result<Player, TrackerError> {
        let mut registry = self.registry();
        let player = registry.remove(id)?;
        self.save_registry(&registry)?;
        log::info!("Removed player {} ({})", player.name, player.id);
        Ok(player)
    }

    /// A fresh roster of every registered player, none selected.
    pub fn new_session(&self) -> MatchSession {
        MatchSession::select_roster(self.registry().players())
    }

    /// Finalize the live match at the current time. See [`Tracker::finish_match_at`].
    pub fn finish_match(&mut self, session: MatchSession) -> Result<GameMatch, TrackerError> {
        self.finish_match_at(session, Utc::now())
    }

    /// Persist the finished match and the updated player counters.
    ///
    /// The history is written before the players; if the players write fails the previous
    /// history text is put back so the two collections stay consistent.
    pub fn finish_match_at(
        &mut self,
        session: MatchSession,
        now: DateTime<Utc>,
    ) -> Result<GameMatch, TrackerError> {
        let mut registry = self.registry();
        let mut history = self.matches();
        let game = logic::finalize_match(session, &mut registry, &mut history, now)?;

        let previous_history = self.store.get(store::MATCHES_KEY);
        store::save_matches(&mut self.store, &history)?;
        if let Err(e) = store::save_players(&mut self.store, registry.players()) {
            // No previous text means no history yet: restore an empty collection.
            let text = previous_history.unwrap_or_else(|| "[]".to_string());
            if let Err(restore_err) = self.store.set(store::MATCHES_KEY, text) {
                log::error!("Could not restore match history: {}", restore_err);
            }
            return Err(e.into());
        }
        Ok(game)
    }

    /// Stats recomputed from the current players and full history.
    pub fn stats(&self) -> StatsSummary {
        logic::summarize(&self.players(), &self.matches())
    }
}
