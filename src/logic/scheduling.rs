//! Match scheduling: fill opponent and game slots, pricing each slot by how it was filled.

use crate::models::{
    GameMatch, MatchRequest, Pick, PlayerId, Tournament, TournamentError, OPPONENTS_PER_MATCH,
};

/// Prize points for an opponent chosen by the operator.
pub const SCORE_PICKED_OPPONENT: u32 = 1;
/// Prize points for an opponent drawn at random.
pub const SCORE_RANDOM_OPPONENT: u32 = 3;
/// Prize points for a game chosen by the operator.
pub const SCORE_PICKED_GAME: u32 = 1;
/// Prize points for a game drawn at random.
pub const SCORE_RANDOM_GAME: u32 = 3;

/// Schedule a match for `request.player_id` and append it as `NotPlayed`.
///
/// 1. Check the main player and every explicit opponent/game id.
/// 2. Draw random opponents from players not already in the match (explicit picks included).
/// 3. Draw a random game if none was picked.
/// 4. Append with the next sequential id.
///
/// Nothing is appended on error.
pub fn schedule_match<'a>(
    tournament: &'a mut Tournament,
    request: &MatchRequest,
) -> Result<&'a GameMatch, TournamentError> {
    let player_id = request.player_id;
    if tournament.player(player_id).is_none() {
        return Err(TournamentError::UnknownPlayer(player_id));
    }

    let mut taken: Vec<PlayerId> = vec![player_id];
    for pick in &request.opponents {
        if let Pick::Picked(id) = *pick {
            if id == player_id {
                return Err(TournamentError::SelfPlay(id));
            }
            if tournament.player(id).is_none() {
                return Err(TournamentError::UnknownPlayer(id));
            }
            if taken.contains(&id) {
                return Err(TournamentError::DuplicateOpponent(id));
            }
            taken.push(id);
        }
    }
    if let Pick::Picked(id) = request.game {
        if tournament.game(id).is_none() {
            return Err(TournamentError::UnknownGame(id));
        }
    }

    let mut prize_score = 0;
    let mut opponent_ids = Vec::with_capacity(OPPONENTS_PER_MATCH);
    for pick in &request.opponents {
        let id = match *pick {
            Pick::Picked(id) => {
                prize_score += SCORE_PICKED_OPPONENT;
                id
            }
            Pick::Random => {
                let id = tournament.random_player(&taken)?.id;
                log::debug!("Randomized opponent {} for player {}", id, player_id);
                taken.push(id);
                prize_score += SCORE_RANDOM_OPPONENT;
                id
            }
        };
        opponent_ids.push(id);
    }

    let game_id = match request.game {
        Pick::Picked(id) => {
            prize_score += SCORE_PICKED_GAME;
            id
        }
        Pick::Random => {
            let id = tournament.random_game(&[])?.id;
            log::debug!("Randomized game {} for player {}", id, player_id);
            prize_score += SCORE_RANDOM_GAME;
            id
        }
    };

    let match_id = tournament.matches.last().map_or(1, |m| m.id + 1);
    log::info!(
        "Scheduled match #{}: player {} vs {:?}, game {}, prize {}",
        match_id,
        player_id,
        opponent_ids,
        game_id,
        prize_score
    );
    tournament.matches.push(GameMatch::new(
        match_id,
        player_id,
        opponent_ids,
        game_id,
        prize_score,
    ));
    let index = tournament.matches.len() - 1;
    Ok(&tournament.matches[index])
}
