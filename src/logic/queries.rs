//! Match lookups by player.

use crate::models::{EntityKind, GameMatch, PlayerId, Tournament, TournamentError};

/// Matches a player takes part in, in scheduling order. With `main_only`, only
/// the matches scheduled for them. Unknown player ids are an error, not an empty list.
pub fn matches_for_player(
    tournament: &Tournament,
    player_id: PlayerId,
    main_only: bool,
) -> Result<Vec<&GameMatch>, TournamentError> {
    if tournament.player(player_id).is_none() {
        return Err(TournamentError::NotFound {
            kind: EntityKind::Player,
            id: player_id,
        });
    }
    Ok(tournament
        .matches()
        .iter()
        .filter(|m| {
            if main_only {
                m.player_id == player_id
            } else {
                m.involves(player_id)
            }
        })
        .collect())
}
