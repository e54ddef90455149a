//! Integration tests for finalizing matches and aggregating scores.

use tournament_ledger::{
    finalize_match, opponent_share, player_scores, schedule_match, scoreboard, EntityKind,
    MatchRequest, MatchState, Pick, Tournament, TournamentError,
};

fn abc_tournament() -> Tournament {
    Tournament::with_seed(&["A", "B", "C"], &["G"], 42).unwrap()
}

/// A vs B+C on a random game: prize 1 + 1 + 3 = 5.
fn schedule_prize_five(t: &mut Tournament) -> u32 {
    let m = schedule_match(
        t,
        &MatchRequest {
            player_id: 1,
            opponents: [Pick::Picked(2), Pick::Picked(3)],
            game: Pick::Random,
        },
    )
    .unwrap();
    assert_eq!(m.prize_score, 5);
    m.id
}

#[test]
fn finalize_sets_requested_state_and_timestamp() {
    let mut t = abc_tournament();
    let id = schedule_prize_five(&mut t);
    let m = finalize_match(&mut t, id, false).unwrap();
    assert_eq!(m.state, MatchState::OpponentsWon);
    assert!(m.finalized_at.is_some());
}

#[test]
fn finalize_touches_only_the_target_match() {
    let mut t = abc_tournament();
    let first = schedule_prize_five(&mut t);
    let second = schedule_prize_five(&mut t);
    finalize_match(&mut t, second, true).unwrap();
    assert_eq!(t.game_match(first).unwrap().state, MatchState::NotPlayed);
    assert_eq!(t.game_match(second).unwrap().state, MatchState::MainPlayerWon);
}

#[test]
fn finalize_again_overwrites_previous_outcome() {
    let mut t = abc_tournament();
    let id = schedule_prize_five(&mut t);
    finalize_match(&mut t, id, true).unwrap();
    let m = finalize_match(&mut t, id, false).unwrap();
    assert_eq!(m.state, MatchState::OpponentsWon);
}

#[test]
fn finalize_unknown_match_is_not_found() {
    let mut t = abc_tournament();
    assert_eq!(
        finalize_match(&mut t, 3, true).unwrap_err(),
        TournamentError::NotFound {
            kind: EntityKind::Match,
            id: 3
        }
    );
}

#[test]
fn every_player_starts_at_zero() {
    let t = abc_tournament();
    let scores = player_scores(&t);
    assert_eq!(scores.len(), 3);
    assert!(scores.values().all(|&s| s == 0));
}

#[test]
fn unfinalized_matches_score_nothing() {
    let mut t = abc_tournament();
    schedule_prize_five(&mut t);
    assert!(player_scores(&t).values().all(|&s| s == 0));
}

#[test]
fn main_player_win_pays_full_prize_to_main_player_only() {
    let mut t = abc_tournament();
    let id = schedule_prize_five(&mut t);
    finalize_match(&mut t, id, true).unwrap();
    let scores = player_scores(&t);
    assert_eq!(scores[&1], 5);
    assert_eq!(scores[&2], 0);
    assert_eq!(scores[&3], 0);
}

#[test]
fn opponents_win_splits_prize_rounding_up() {
    let mut t = abc_tournament();
    let id = schedule_prize_five(&mut t);
    finalize_match(&mut t, id, false).unwrap();
    let scores = player_scores(&t);
    assert_eq!(scores[&1], 0);
    assert_eq!(scores[&2], 3);
    assert_eq!(scores[&3], 3);
}

#[test]
fn opponent_share_rounds_up() {
    assert_eq!(opponent_share(5, 2), 3);
    assert_eq!(opponent_share(6, 2), 3);
    assert_eq!(opponent_share(3, 2), 2);
    assert_eq!(opponent_share(4, 1), 4);
    assert_eq!(opponent_share(4, 0), 0);
}

#[test]
fn all_explicit_scenario_main_player_wins_three() {
    let mut t = abc_tournament();
    let m = schedule_match(
        &mut t,
        &MatchRequest {
            player_id: 1,
            opponents: [Pick::Picked(2), Pick::Picked(3)],
            game: Pick::Picked(1),
        },
    )
    .unwrap();
    assert_eq!(m.prize_score, 3);
    assert_eq!(m.state, MatchState::NotPlayed);
    let id = m.id;

    finalize_match(&mut t, id, true).unwrap();
    let scores = player_scores(&t);
    assert_eq!(scores[&1], 3);
    assert_eq!(scores[&2], 0);
    assert_eq!(scores[&3], 0);
}

#[test]
fn scores_accumulate_across_matches() {
    let mut t = abc_tournament();
    let won = schedule_prize_five(&mut t);
    let lost = schedule_prize_five(&mut t);
    finalize_match(&mut t, won, true).unwrap();
    finalize_match(&mut t, lost, false).unwrap();
    let scores = player_scores(&t);
    assert_eq!(scores[&1], 5);
    assert_eq!(scores[&2], 3);
}

#[test]
fn scoreboard_ranks_by_score_keeping_registration_order_on_ties() {
    let mut t = abc_tournament();
    let id = schedule_prize_five(&mut t);
    finalize_match(&mut t, id, false).unwrap();
    let board = scoreboard(&t);
    let rows: Vec<(&str, u32)> = board.iter().map(|e| (e.name.as_str(), e.score)).collect();
    assert_eq!(rows, vec![("B", 3), ("C", 3), ("A", 0)]);
}
