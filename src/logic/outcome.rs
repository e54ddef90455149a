//! Recording who won a match.

use crate::models::{EntityKind, GameMatch, MatchId, MatchState, Tournament, TournamentError};
use chrono::Utc;

/// Set the outcome of a match. A match that already has an outcome is overwritten
/// (logged as a warning); `finalized_at` always holds the latest call.
pub fn finalize_match(
    tournament: &mut Tournament,
    match_id: MatchId,
    main_player_won: bool,
) -> Result<&GameMatch, TournamentError> {
    let game_match = tournament
        .game_match_mut(match_id)
        .ok_or(TournamentError::NotFound {
            kind: EntityKind::Match,
            id: match_id,
        })?;
    let state = if main_player_won {
        MatchState::MainPlayerWon
    } else {
        MatchState::OpponentsWon
    };
    if game_match.state.is_finalized() {
        log::warn!(
            "Match #{} already finalized as {:?}, overwriting with {:?}",
            match_id,
            game_match.state,
            state
        );
    } else {
        log::info!("Match #{} finalized as {:?}", match_id, state);
    }
    game_match.state = state;
    game_match.finalized_at = Some(Utc::now());
    Ok(&*game_match)
}
