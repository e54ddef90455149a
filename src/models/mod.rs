//! Data structures for the tournament: players, games, matches, tournament state.

mod game;
mod game_match;
mod player;
mod tournament;

pub use game::{Game, GameId};
pub use game_match::{GameMatch, MatchId, MatchRequest, MatchState, Pick, OPPONENTS_PER_MATCH};
pub use player::{Player, PlayerId};
pub use tournament::{EntityKind, ErrorCategory, MatchLine, Tournament, TournamentError};
