//! Tournament business logic: setup, scheduling, outcomes, scoring and queries.

mod outcome;
mod queries;
mod scheduling;
mod scoreboard;
mod setup;

pub use outcome::finalize_match;
pub use queries::matches_for_player;
pub use scheduling::{
    schedule_match, SCORE_PICKED_GAME, SCORE_PICKED_OPPONENT, SCORE_RANDOM_GAME,
    SCORE_RANDOM_OPPONENT,
};
pub use scoreboard::{opponent_share, player_scores, scoreboard, ScoreboardEntry};
pub use setup::{create_games, create_players, parse_name_list};
