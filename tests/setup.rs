//! Integration tests for setup: name parsing and player/game registration.

use tournament_ledger::{
    create_games, create_players, parse_name_list, EntityKind, ErrorCategory, Tournament,
    TournamentError,
};

#[test]
fn players_get_ids_in_input_order() {
    let players = create_players(&["Ann", "Bob", "Cid"]).unwrap();
    let ids: Vec<u32> = players.iter().map(|p| p.id).collect();
    let names: Vec<&str> = players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(names, vec!["Ann", "Bob", "Cid"]);
}

#[test]
fn games_get_ids_in_input_order() {
    let games = create_games(&["Darts", "Pool"]).unwrap();
    assert_eq!(games.len(), 2);
    assert_eq!(games[0].id, 1);
    assert_eq!(games[1].id, 2);
    assert_eq!(games[1].to_string(), "Pool");
}

#[test]
fn names_are_trimmed() {
    let players = create_players(&["  Ann ", "Bob"]).unwrap();
    assert_eq!(players[0].name, "Ann");
}

#[test]
fn blank_name_is_rejected_with_position() {
    let err = create_players(&["Ann", "   ", "Cid"]).unwrap_err();
    assert_eq!(
        err,
        TournamentError::BlankName {
            kind: EntityKind::Player,
            position: 2
        }
    );
    assert_eq!(err.category(), ErrorCategory::Validation);
}

#[test]
fn duplicate_name_is_rejected_case_insensitively() {
    let err = create_games(&["Darts", "darts"]).unwrap_err();
    assert!(matches!(
        err,
        TournamentError::DuplicateName {
            kind: EntityKind::Game,
            ..
        }
    ));
}

#[test]
fn duplicate_name_check_folds_non_ascii_case() {
    let err = create_players(&["Łukasz", "Ann", "łukasz"]).unwrap_err();
    assert_eq!(
        err,
        TournamentError::DuplicateName {
            kind: EntityKind::Player,
            name: "łukasz".to_string()
        }
    );
    assert!(create_players(&["Łukasz", "Lukasz"]).is_ok());
}

#[test]
fn empty_list_registers_nothing() {
    let names: [&str; 0] = [];
    assert!(create_players(&names).unwrap().is_empty());
}

#[test]
fn parse_name_list_splits_and_trims() {
    let names = parse_name_list("Ann, Bob ,Cid").unwrap();
    assert_eq!(names, vec!["Ann", "Bob", "Cid"]);
}

#[test]
fn parse_name_list_keeps_quoted_commas() {
    let names = parse_name_list("\"Smith, J\",Ann").unwrap();
    assert_eq!(names, vec!["Smith, J", "Ann"]);
}

#[test]
fn blank_field_fails_registration() {
    let names = parse_name_list("Ann, ,Bob").unwrap();
    assert_eq!(names.len(), 3);
    assert!(matches!(
        create_players(&names),
        Err(TournamentError::BlankName { position: 2, .. })
    ));
}

#[test]
fn tournament_new_rejects_bad_game_list() {
    let result = Tournament::new(&["A", "B", "C"], &["G", ""]);
    assert!(matches!(
        result,
        Err(TournamentError::BlankName {
            kind: EntityKind::Game,
            position: 2
        })
    ));
}

#[test]
fn tournament_lookups_return_none_for_unknown_ids() {
    let t = Tournament::with_seed(&["A", "B", "C"], &["G"], 1).unwrap();
    assert_eq!(t.player(2).map(|p| p.name.as_str()), Some("B"));
    assert!(t.player(0).is_none());
    assert!(t.player(4).is_none());
    assert!(t.game(2).is_none());
    assert!(t.game_match(1).is_none());
}
