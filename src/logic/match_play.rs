//! Live match: start, score keeping, winner determination and finalization.

use crate::models::{
    timestamp_id, GameMatch, MatchParticipant, MatchSession, PlayerId, PlayerRegistry,
    SessionState, TrackerError,
};
use chrono::{DateTime, Utc};

/// Minimum number of selected players to begin a match.
pub const MIN_PLAYERS: usize = 2;

/// Start the match: require at least 2 selected players, then freeze the roster to them.
///
/// Deselected players are dropped from the session, not just hidden. On error the session
/// is untouched and stays in Roster.
pub fn begin_match(session: &mut MatchSession) -> Result<(), TrackerError> {
    if session.state != SessionState::Roster {
        return Err(TrackerError::InvalidState);
    }
    let selected = session.selected_count();
    if selected < MIN_PLAYERS {
        return Err(TrackerError::NotEnoughPlayers {
            required: MIN_PLAYERS,
            selected,
        });
    }
    session.participants.retain(|p| p.selected);
    session.state = SessionState::InProgress;
    log::debug!("Match started with {} players", session.participants.len());
    Ok(())
}

/// Add `delta` (any sign) to a participant's score, clamping at zero. Returns the new score.
pub fn adjust_score(
    session: &mut MatchSession,
    participant_id: &str,
    delta: i64,
) -> Result<u32, TrackerError> {
    if session.state != SessionState::InProgress {
        return Err(TrackerError::InvalidState);
    }
    let p = session
        .participant_mut(participant_id)
        .ok_or_else(|| TrackerError::ParticipantNotFound(participant_id.to_string()))?;
    p.score = i64::from(p.score)
        .saturating_add(delta)
        .clamp(0, i64::from(u32::MAX)) as u32;
    Ok(p.score)
}

/// The participant with the strictly highest score, scanning in roster order.
///
/// A later participant with an equal score never displaces an earlier one, so a tie
/// always goes to whoever comes first in the roster. None only for an empty roster.
pub fn determine_winner(participants: &[MatchParticipant]) -> Option<&MatchParticipant> {
    participants.iter().fold(None, |best, p| match best {
        Some(b) if p.score <= b.score => Some(b),
        _ => Some(p),
    })
}

/// Finish the match: build the record, append it to `history` and update player counters.
///
/// Every check happens before anything is mutated. The session is consumed; a finished
/// match never returns to roster selection.
pub fn finalize_match(
    session: MatchSession,
    registry: &mut PlayerRegistry,
    history: &mut Vec<GameMatch>,
    now: DateTime<Utc>,
) -> Result<GameMatch, TrackerError> {
    if session.state != SessionState::InProgress {
        return Err(TrackerError::InvalidState);
    }
    let winner = determine_winner(&session.participants)
        .ok_or(TrackerError::NoParticipants)?
        .to_winner();

    let id = timestamp_id(now, |candidate| history.iter().any(|m| m.id == candidate));
    let game = GameMatch {
        id,
        date: now,
        players: session
            .participants
            .iter()
            .map(MatchParticipant::to_match_player)
            .collect(),
        winner: Some(winner.clone()),
    };

    let participant_ids: Vec<PlayerId> = session.participants.iter().map(|p| p.id.clone()).collect();
    history.push(game.clone());
    registry.apply_match_result(&participant_ids, &winner.id);

    log::info!(
        "Match {} finished: {} won among {} players",
        game.id,
        winner.name,
        participant_ids.len()
    );
    Ok(game)
}
