//! Score aggregation over finalized matches. Scores are always recomputed from match history.

use crate::models::{MatchState, PlayerId, Tournament};
use serde::Serialize;
use std::collections::HashMap;

/// One scoreboard row.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ScoreboardEntry {
    pub player_id: PlayerId,
    pub name: String,
    pub score: u32,
}

/// Points each opponent receives when the opponents win. Rounded up, so the
/// shares can add up to more than the prize (5 split two ways pays 3 + 3).
pub fn opponent_share(prize_score: u32, opponent_count: usize) -> u32 {
    match u32::try_from(opponent_count) {
        Ok(0) | Err(_) => 0,
        Ok(count) => prize_score.div_ceil(count),
    }
}

/// Cumulative score of every registered player (0 if they have won nothing).
pub fn player_scores(tournament: &Tournament) -> HashMap<PlayerId, u32> {
    let mut scores: HashMap<PlayerId, u32> =
        tournament.players().iter().map(|p| (p.id, 0)).collect();

    for m in tournament.matches() {
        match m.state {
            MatchState::NotPlayed => {}
            MatchState::MainPlayerWon => {
                if let Some(score) = scores.get_mut(&m.player_id) {
                    *score += m.prize_score;
                }
            }
            MatchState::OpponentsWon => {
                let share = opponent_share(m.prize_score, m.opponent_ids.len());
                for id in &m.opponent_ids {
                    if let Some(score) = scores.get_mut(id) {
                        *score += share;
                    }
                }
            }
        }
    }

    scores
}

/// Players ranked by score, highest first; ties keep registration order.
pub fn scoreboard(tournament: &Tournament) -> Vec<ScoreboardEntry> {
    let scores = player_scores(tournament);
    let mut entries: Vec<ScoreboardEntry> = tournament
        .players()
        .iter()
        .map(|p| ScoreboardEntry {
            player_id: p.id,
            name: p.name.clone(),
            score: scores.get(&p.id).copied().unwrap_or(0),
        })
        .collect();
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries
}
