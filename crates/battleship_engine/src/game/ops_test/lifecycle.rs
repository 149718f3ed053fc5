use battleship_core::Error;

use crate::game::data::{GameId, Mode, PlayerSlot};
use crate::game::ops;
use crate::game::ops_test::{cfg, one_ship_fleet, one_ship_templates, rng};

#[test]
fn single_player_game_starts_with_the_ai_fleet_already_placed() {
    let game = ops::create_game(
        GameId::new_v4(),
        "alice".to_string(),
        &one_ship_fleet(),
        &one_ship_templates(),
        Mode::SinglePlayer,
        &cfg(),
        &mut rng(1),
    )
    .unwrap();

    assert!(matches!(game.state, crate::game::data::GameState::WaitingForPlacement));
    assert!(game.player2_id.is_none());
    assert!(game.ai_state.is_some());
    assert_eq!(game.fleets[&PlayerSlot::Player2].ship_count(), 1);
    assert_eq!(game.boards[&PlayerSlot::Player2].occupied_count(), 2);
    assert_eq!(game.ships_remaining(PlayerSlot::Player1), 1);
    assert_eq!(game.ships_remaining(PlayerSlot::Player2), 0);
}

#[test]
fn multiplayer_game_waits_for_a_second_player() {
    let game = ops::create_game(
        GameId::new_v4(),
        "alice".to_string(),
        &one_ship_fleet(),
        &one_ship_templates(),
        Mode::Multiplayer,
        &cfg(),
        &mut rng(1),
    )
    .unwrap();

    assert!(matches!(game.state, crate::game::data::GameState::WaitingForPlayer2));
    assert!(game.player2_id.is_none());
    assert!(game.ai_state.is_none());
    assert!(!game.boards.contains_key(&PlayerSlot::Player2));
}

#[test]
fn create_game_rejects_a_fleet_with_an_unknown_template() {
    let mut fleet = one_ship_fleet();
    fleet.ship_template_ids.push("nonexistent".to_string());

    let result = ops::create_game(
        GameId::new_v4(),
        "alice".to_string(),
        &fleet,
        &one_ship_templates(),
        Mode::Multiplayer,
        &cfg(),
        &mut rng(1),
    );
    assert!(matches!(result, Err(Error::InvalidFleet(_))));
}

#[test]
fn join_game_sets_up_the_second_players_board_and_fleet() {
    let mut game = ops::create_game(
        GameId::new_v4(),
        "alice".to_string(),
        &one_ship_fleet(),
        &one_ship_templates(),
        Mode::Multiplayer,
        &cfg(),
        &mut rng(1),
    )
    .unwrap();

    ops::join_game(&mut game, "bob".to_string()).unwrap();

    assert!(matches!(game.state, crate::game::data::GameState::BothPlayersPlacing));
    assert_eq!(game.player2_id.as_deref(), Some("bob"));
    assert_eq!(game.ships_remaining(PlayerSlot::Player2), 1);
}

#[test]
fn join_game_rejects_the_creator_and_a_second_joiner() {
    let mut game = ops::create_game(
        GameId::new_v4(),
        "alice".to_string(),
        &one_ship_fleet(),
        &one_ship_templates(),
        Mode::Multiplayer,
        &cfg(),
        &mut rng(1),
    )
    .unwrap();

    assert!(matches!(ops::join_game(&mut game, "alice".to_string()), Err(Error::CannotJoinOwn)));

    ops::join_game(&mut game, "bob".to_string()).unwrap();
    assert!(matches!(ops::join_game(&mut game, "carol".to_string()), Err(Error::GameFull)));
}

#[test]
fn only_the_creator_may_delete_a_game_still_in_progress() {
    let mut game = ops::create_game(
        GameId::new_v4(),
        "alice".to_string(),
        &one_ship_fleet(),
        &one_ship_templates(),
        Mode::Multiplayer,
        &cfg(),
        &mut rng(1),
    )
    .unwrap();
    ops::join_game(&mut game, "bob".to_string()).unwrap();

    assert!(ops::can_delete(&game, "alice").is_ok());
    assert!(matches!(ops::can_delete(&game, "bob"), Err(Error::Unauthorized)));
    assert!(matches!(ops::can_delete(&game, "mallory"), Err(Error::Unauthorized)));
}

#[test]
fn either_participant_may_delete_a_finished_game() {
    let mut game = ops::create_game(
        GameId::new_v4(),
        "alice".to_string(),
        &one_ship_fleet(),
        &one_ship_templates(),
        Mode::Multiplayer,
        &cfg(),
        &mut rng(1),
    )
    .unwrap();
    ops::join_game(&mut game, "bob".to_string()).unwrap();
    game.state = crate::game::data::GameState::Finished { winner: PlayerSlot::Player1 };

    assert!(ops::can_delete(&game, "alice").is_ok());
    assert!(ops::can_delete(&game, "bob").is_ok());
    assert!(matches!(ops::can_delete(&game, "mallory"), Err(Error::Unauthorized)));
}
