use battleship_core::board::Board;
use battleship_core::fleet::FleetTree;
use battleship_core::ship::{Orientation, ShotResult};
use battleship_core::Error;

use crate::game::data::{Game, GameId, GameState, Mode, PlayerSlot};
use crate::game::ops;
use crate::game::ops_test::{cfg, one_ship_fleet, one_ship_templates, rng};

/// A single-player game where the AI's one ship sits at a known
/// location (A1/A2), so shots against it are deterministic.
fn deterministic_single_player_game() -> Game {
    let mut game = ops::create_game(
        GameId::new_v4(),
        "alice".to_string(),
        &one_ship_fleet(),
        &one_ship_templates(),
        Mode::SinglePlayer,
        &cfg(),
        &mut rng(1),
    )
    .unwrap();

    let mut board = Board::new(5);
    let mut fleet = FleetTree::new();
    let codes = vec![101, 102];
    let ship_index = fleet.add_ship("patrol", "Patrol Boat", 2, 0, &codes);
    board.occupy(&codes, ship_index);
    game.boards.insert(PlayerSlot::Player2, board);
    game.fleets.insert(PlayerSlot::Player2, fleet);

    ops::place_ship(&mut game, "alice", "patrol", 0, (3, 1), Orientation::Horizontal).unwrap();
    game
}

#[test]
fn shooting_every_segment_sinks_the_ship_and_ends_the_game() {
    let mut game = deterministic_single_player_game();

    let first = ops::shoot(&mut game, "alice", "A1", &cfg(), &mut rng(2)).unwrap();
    assert_eq!(first.shot.result, ShotResult::Hit);
    assert!(!first.game_finished);
    assert!(first.ai_shot.is_some());
    assert_eq!(game.state, GameState::InProgress { turn: PlayerSlot::Player1 });

    let second = ops::shoot(&mut game, "alice", "A2", &cfg(), &mut rng(3)).unwrap();
    assert_eq!(second.shot.result, ShotResult::Sunk);
    assert!(second.game_finished);
    assert_eq!(second.winner_id.as_deref(), Some("alice"));
    assert!(second.ai_shot.is_none());
    assert!(game.state.is_finished());
}

#[test]
fn shooting_an_empty_cell_is_water_and_does_not_end_the_game() {
    let mut game = deterministic_single_player_game();

    // The AI's one ship sits at A1/A2 (codes 101/102); B5 is empty water.
    let outcome = ops::shoot(&mut game, "alice", "B5", &cfg(), &mut rng(2)).unwrap();
    assert_eq!(outcome.shot.result, ShotResult::Water);
    assert!(!outcome.game_finished);
    assert!(outcome.ai_shot.is_some());
    assert_eq!(game.state, GameState::InProgress { turn: PlayerSlot::Player1 });
}

#[test]
fn shoot_rejects_malformed_and_out_of_bounds_coordinates() {
    let mut game = deterministic_single_player_game();
    assert!(matches!(
        ops::shoot(&mut game, "alice", "1A", &cfg(), &mut rng(2)),
        Err(Error::MalformedCoordinate(_))
    ));
    assert!(matches!(
        ops::shoot(&mut game, "alice", "Z9", &cfg(), &mut rng(2)),
        Err(Error::OutOfBounds { .. })
    ));
}

#[test]
fn shoot_rejects_a_repeated_coordinate_across_a_full_turn_cycle() {
    let mut game = two_player_in_progress_game();

    ops::shoot(&mut game, "alice", "A1", &cfg(), &mut rng(1)).unwrap();
    ops::shoot(&mut game, "bob", "B1", &cfg(), &mut rng(1)).unwrap();
    let result = ops::shoot(&mut game, "alice", "A1", &cfg(), &mut rng(1));
    assert!(matches!(result, Err(Error::AlreadyShot)));
}

#[test]
fn shoot_out_of_turn_is_rejected() {
    let mut game = two_player_in_progress_game();

    ops::shoot(&mut game, "alice", "A1", &cfg(), &mut rng(1)).unwrap();
    let result = ops::shoot(&mut game, "alice", "A2", &cfg(), &mut rng(1));
    assert!(matches!(result, Err(Error::NotYourTurn)));
}

fn two_player_in_progress_game() -> Game {
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
    ops::place_ship(&mut game, "bob", "patrol", 0, (1, 1), Orientation::Horizontal).unwrap();
    assert_eq!(game.state, GameState::InProgress { turn: PlayerSlot::Player1 });
    game
}
