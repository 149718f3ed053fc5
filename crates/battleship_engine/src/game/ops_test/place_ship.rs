use battleship_core::ship::Orientation;
use battleship_core::Error;

use crate::game::data::{GameId, GameState, Mode, PlayerSlot};
use crate::game::ops;
use crate::game::ops_test::{cfg, one_ship_fleet, one_ship_templates, rng, two_ship_fleet, two_ship_templates};

fn single_player_game() -> crate::game::data::Game {
    ops::create_game(
        GameId::new_v4(),
        "alice".to_string(),
        &one_ship_fleet(),
        &one_ship_templates(),
        Mode::SinglePlayer,
        &cfg(),
        &mut rng(1),
    )
    .unwrap()
}

#[test]
fn placing_the_last_ship_starts_the_game_with_player1_to_move() {
    let mut game = single_player_game();
    let result =
        ops::place_ship(&mut game, "alice", "patrol", 0, (1, 1), Orientation::Horizontal).unwrap();

    assert_eq!(result.ships_remaining, 0);
    assert_eq!(game.state, GameState::InProgress { turn: PlayerSlot::Player1 });
    assert!(game.started_at.is_some());
}

#[test]
fn placement_rejects_overlap_with_a_previous_ship() {
    let mut game = ops::create_game(
        GameId::new_v4(),
        "alice".to_string(),
        &two_ship_fleet(),
        &two_ship_templates(),
        Mode::SinglePlayer,
        &cfg(),
        &mut rng(1),
    )
    .unwrap();

    ops::place_ship(&mut game, "alice", "patrol", 0, (1, 1), Orientation::Horizontal).unwrap();
    let result = ops::place_ship(&mut game, "alice", "cruiser", 0, (1, 1), Orientation::Vertical);
    assert!(matches!(result, Err(Error::Overlap)));
}

#[test]
fn placement_rejects_coordinates_off_the_board() {
    let mut game = single_player_game();
    let result = ops::place_ship(&mut game, "alice", "patrol", 0, (5, 5), Orientation::Horizontal);
    assert!(matches!(result, Err(Error::OutOfBounds { .. })));
}

#[test]
fn placement_enforces_the_required_order() {
    let mut game = ops::create_game(
        GameId::new_v4(),
        "alice".to_string(),
        &two_ship_fleet(),
        &two_ship_templates(),
        Mode::SinglePlayer,
        &cfg(),
        &mut rng(1),
    )
    .unwrap();

    let result = ops::place_ship(&mut game, "alice", "cruiser", 0, (1, 1), Orientation::Horizontal);
    assert!(matches!(result, Err(Error::WrongPhase)));
}

#[test]
fn placement_by_a_non_participant_is_unauthorized() {
    let mut game = single_player_game();
    let result = ops::place_ship(&mut game, "mallory", "patrol", 0, (1, 1), Orientation::Horizontal);
    assert!(matches!(result, Err(Error::Unauthorized)));
}

#[test]
fn multiplayer_placement_is_symmetric_and_starts_with_player1() {
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

    ops::place_ship(&mut game, "alice", "patrol", 0, (1, 1), Orientation::Horizontal).unwrap();
    assert_eq!(game.state, GameState::Player2Placing);

    ops::place_ship(&mut game, "bob", "patrol", 0, (1, 1), Orientation::Horizontal).unwrap();
    assert_eq!(game.state, GameState::InProgress { turn: PlayerSlot::Player1 });
}
