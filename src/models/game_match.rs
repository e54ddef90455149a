//! Match (one main player against two opponents), its state, and scheduling picks.

use crate::models::game::GameId;
use crate::models::player::PlayerId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier for a match: 1-based, increasing in scheduling order.
pub type MatchId = u32;

/// Number of opponent slots in every match.
pub const OPPONENTS_PER_MATCH: usize = 2;

/// Outcome of a match. `NotPlayed` is the only non-terminal state.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchState {
    #[default]
    NotPlayed,
    MainPlayerWon,
    OpponentsWon,
}

impl MatchState {
    pub fn is_finalized(self) -> bool {
        self != MatchState::NotPlayed
    }
}

/// How one scheduling slot is filled: drawn at random or picked explicitly.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pick<T> {
    Random,
    Picked(T),
}

/// Everything needed to schedule a match.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchRequest {
    pub player_id: PlayerId,
    pub opponents: [Pick<PlayerId>; OPPONENTS_PER_MATCH],
    pub game: Pick<GameId>,
}

impl MatchRequest {
    /// Request with every slot left to chance.
    pub fn random(player_id: PlayerId) -> Self {
        Self {
            player_id,
            opponents: [Pick::Random; OPPONENTS_PER_MATCH],
            game: Pick::Random,
        }
    }
}

/// A scheduled contest. Only `state` and `finalized_at` change after creation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct GameMatch {
    pub id: MatchId,
    /// The player this match was scheduled for.
    pub player_id: PlayerId,
    /// Never contains `player_id`.
    pub opponent_ids: Vec<PlayerId>,
    pub game_id: GameId,
    pub prize_score: u32,
    pub state: MatchState,
    /// Time of the most recent finalization.
    pub finalized_at: Option<DateTime<Utc>>,
}

impl GameMatch {
    pub fn new(
        id: MatchId,
        player_id: PlayerId,
        opponent_ids: Vec<PlayerId>,
        game_id: GameId,
        prize_score: u32,
    ) -> Self {
        Self {
            id,
            player_id,
            opponent_ids,
            game_id,
            prize_score,
            state: MatchState::NotPlayed,
            finalized_at: None,
        }
    }

    /// True if the player is the main player or one of the opponents.
    pub fn involves(&self, player_id: PlayerId) -> bool {
        self.player_id == player_id || self.opponent_ids.contains(&player_id)
    }
}
