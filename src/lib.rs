//! Tournament bookkeeping: library with models and business logic.

pub mod config;
pub mod logic;
pub mod models;

pub use logic::{
    create_games, create_players, finalize_match, matches_for_player, opponent_share,
    parse_name_list, player_scores, schedule_match, scoreboard, ScoreboardEntry,
    SCORE_PICKED_GAME, SCORE_PICKED_OPPONENT, SCORE_RANDOM_GAME, SCORE_RANDOM_OPPONENT,
};
pub use models::{
    EntityKind, ErrorCategory, Game, GameId, GameMatch, MatchId, MatchLine, MatchRequest,
    MatchState, Pick, Player, PlayerId, Tournament, TournamentError, OPPONENTS_PER_MATCH,
};
