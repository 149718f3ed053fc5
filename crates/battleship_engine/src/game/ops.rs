//! The engine operations of §4.4.1. Every function here takes an
//! already-locked `&mut Game` (or `&Game` for reads) — acquiring that
//! lock is `GameStore`'s job (§4.4.3), not this module's.

use std::collections::HashMap;

use log::{debug, warn};
use rand::Rng;
use serde::Serialize;

use battleship_core::board::Board;
use battleship_core::coord::{self, Code};
use battleship_core::fleet::FleetTree;
use battleship_core::ship::{BaseFleet, Orientation, PlacedShip, ShipTemplate, ShotResult};
use battleship_core::{Error, Result};

use crate::config::EngineConfig;
use crate::game::ai;
use crate::game::data::{
    segments_for, snapshot_required_ships, AiState, Game, GameId, GameState, Mode, PlayerId,
    PlayerSlot, Shot,
};
use crate::game::view::{self, GameView, ShotInfo, Stats};

#[derive(Debug, Serialize)]
pub struct PlacementResult {
    pub ship: PlacedShip,
    pub ships_remaining: usize,
}

#[derive(Debug, Serialize)]
pub struct ShotOutcome {
    pub shot: ShotInfo,
    pub game_finished: bool,
    pub winner_id: Option<PlayerId>,
    pub ai_shot: Option<ShotInfo>,
}

/// §4.4.1 `createGame`. Snapshots `base_fleet`'s ship list, allocates
/// empty boards/fleets per slot, and — in single-player mode — places
/// the AI's fleet immediately so a single-player game starts directly
/// in `waitingForPlacement` with the AI already set up.
pub fn create_game(
    id: GameId,
    creator_id: PlayerId,
    base_fleet: &BaseFleet,
    templates: &HashMap<String, ShipTemplate>,
    mode: Mode,
    cfg: &EngineConfig,
    rng: &mut impl Rng,
) -> Result<Game> {
    if base_fleet.board_size < cfg.min_board_size || base_fleet.board_size > cfg.max_board_size {
        return Err(Error::InvalidFleet(format!(
            "board size {} is outside the supported {}..={} range",
            base_fleet.board_size, cfg.min_board_size, cfg.max_board_size
        )));
    }

    let required = snapshot_required_ships(base_fleet, templates)?;
    let min_ship_size = required.iter().map(|s| s.size).min().unwrap_or(1);

    let mut required_ships = HashMap::new();
    required_ships.insert(PlayerSlot::Player1, required.clone());

    let mut boards = HashMap::new();
    boards.insert(PlayerSlot::Player1, Board::new(base_fleet.board_size));
    let mut fleets = HashMap::new();
    fleets.insert(PlayerSlot::Player1, FleetTree::new());

    let mut next_unplaced = HashMap::new();
    next_unplaced.insert(PlayerSlot::Player1, 0);

    let (state, player2_id, ai_state) = match mode {
        Mode::Multiplayer => (GameState::WaitingForPlayer2, None, None),
        Mode::SinglePlayer => {
            let (ai_board, ai_fleet) =
                ai::auto_place(&required, base_fleet.board_size, cfg.ai_placement_attempts, rng)?;
            boards.insert(PlayerSlot::Player2, ai_board);
            fleets.insert(PlayerSlot::Player2, ai_fleet);
            required_ships.insert(PlayerSlot::Player2, required.clone());
            next_unplaced.insert(PlayerSlot::Player2, required.len());
            (GameState::WaitingForPlacement, None, Some(AiState::new()))
        }
    };

    debug!("created game {id} in mode {mode:?}, state {state}");

    Ok(Game {
        id,
        board_size: base_fleet.board_size,
        base_fleet_id: base_fleet.id.clone(),
        mode,
        player1_id: creator_id,
        player2_id,
        state,
        turn_passes_on_hit: cfg.turn_passes_on_hit,
        required_ships,
        next_unplaced,
        boards,
        fleets,
        shots_history: Vec::new(),
        next_shot_index: 0,
        winner: None,
        created_at: chrono::Utc::now(),
        started_at: None,
        finished_at: None,
        ai_state,
        min_ship_size,
    })
}

/// §4.4.1 `joinGame`.
pub fn join_game(game: &mut Game, joiner_id: PlayerId) -> Result<()> {
    if !game.state.is_waiting_for_player2() {
        return Err(Error::WrongPhase);
    }
    if joiner_id == game.player1_id {
        return Err(Error::CannotJoinOwn);
    }
    if game.player2_id.is_some() {
        return Err(Error::GameFull);
    }

    let required = game.required_ships[&PlayerSlot::Player1].clone();
    game.required_ships.insert(PlayerSlot::Player2, required);
    game.boards.insert(PlayerSlot::Player2, Board::new(game.board_size));
    game.fleets.insert(PlayerSlot::Player2, FleetTree::new());
    game.next_unplaced.insert(PlayerSlot::Player2, 0);
    game.player2_id = Some(joiner_id);
    game.state = GameState::BothPlayersPlacing;

    debug!("player2 joined game {}", game.id);
    Ok(())
}

/// §4.4.1 `placeShip`. `template_id`/`placement_index` must match the
/// next required ship exactly — the engine, not the caller, owns
/// placement order.
pub fn place_ship(
    game: &mut Game,
    player_id: &str,
    template_id: &str,
    placement_index: u32,
    start: (i32, i32),
    orientation: Orientation,
) -> Result<PlacementResult> {
    let slot = game.player_slot(player_id).ok_or(Error::Unauthorized)?;

    if !game.state.can_place(slot) {
        return Err(Error::WrongPhase);
    }

    let next_idx = *game.next_unplaced.get(&slot).unwrap_or(&0);
    let required = &game.required_ships[&slot];
    let next_required = required.get(next_idx).ok_or(Error::WrongPhase)?;

    if next_required.template_id != template_id || next_required.placement_index != placement_index {
        warn!(
            "placeShip on game {} selected a ship out of order (expected {}:{})",
            game.id, next_required.template_id, next_required.placement_index
        );
        return Err(Error::WrongPhase);
    }

    let size = next_required.size;
    let name = next_required.name.clone();
    let template_id = next_required.template_id.clone();

    let cells = segments_for(start, size, orientation);
    let mut codes = Vec::with_capacity(cells.len());
    for (row, col) in cells {
        codes.push(coord::encode(row, col, game.board_size)?);
    }

    let board = game.boards.get_mut(&slot).expect("board is created at createGame/joinGame time");
    if codes.iter().any(|&code| board.is_occupied(code)) {
        return Err(Error::Overlap);
    }

    let fleet = game.fleets.get_mut(&slot).expect("fleet is created at createGame/joinGame time");
    let ship_index = fleet.add_ship(template_id.clone(), name.clone(), size, placement_index, &codes);
    board.occupy(&codes, ship_index);

    *game.next_unplaced.get_mut(&slot).unwrap() += 1;
    let ships_remaining = game.ships_remaining(slot);

    if ships_remaining == 0 {
        game.state = crate::game::states::after_placement_complete(game.state, slot, game.mode);
        if game.state.is_in_progress() && game.started_at.is_none() {
            game.started_at = Some(chrono::Utc::now());
        }
    }

    Ok(PlacementResult {
        ship: PlacedShip { template_id, name, size, placement_index, segments: codes },
        ships_remaining,
    })
}

/// §4.4.1 `shoot`. In single-player mode, resolves the AI's follow-up
/// shot inline, inside the same call.
pub fn shoot(
    game: &mut Game,
    shooter_id: &str,
    coordinate: &str,
    cfg: &EngineConfig,
    rng: &mut impl Rng,
) -> Result<ShotOutcome> {
    let slot = game.player_slot(shooter_id).ok_or(Error::Unauthorized)?;

    let turn = game.state.current_turn().ok_or(Error::WrongPhase)?;
    if turn != slot {
        return Err(Error::NotYourTurn);
    }

    let (row, col) = coord::parse(coordinate)?;
    let code = coord::encode(row, col, game.board_size)?;

    if game.boards[&slot].has_shot(code) {
        return Err(Error::AlreadyShot);
    }

    let shot = resolve_shot(game, slot, code, coordinate);
    let mut game_finished = maybe_finish_game(game, slot);

    if !game_finished {
        game.state = crate::game::states::after_shot_not_terminal(slot);
    }

    let _ = cfg; // reserved for a future classical turn-on-hit variant (see EngineConfig).

    let ai_shot = if game.mode == Mode::SinglePlayer && !game_finished {
        let ai_shot_record = resolve_ai_shot(game, rng);
        game_finished = maybe_finish_game(game, PlayerSlot::Player2) || game_finished;
        if !game_finished {
            game.state = crate::game::states::after_shot_not_terminal(PlayerSlot::Player2);
        }
        Some(shot_info(game, &ai_shot_record))
    } else {
        None
    };

    Ok(ShotOutcome {
        shot: shot_info(game, &shot),
        game_finished,
        winner_id: game.winner.and_then(|w| game.player_id(w)).map(str::to_string),
        ai_shot,
    })
}

fn resolve_shot(game: &mut Game, shooter: PlayerSlot, code: Code, coordinate: &str) -> Shot {
    let target = shooter.other();

    let ship_index = game.boards[&target].ship_at(code);
    let (result, ship_name_hit, ship_name_sunk) = match ship_index {
        None => (ShotResult::Water, None, None),
        Some(ship_index) => {
            let fleet = game.fleets.get_mut(&target).expect("target fleet exists once placement is done");
            let sunk = fleet
                .mark_hit_ship(ship_index, code)
                .expect("occupied BST and fleet tree must agree on ship contents");
            let name = fleet.ships()[ship_index].name.to_string();
            if sunk {
                (ShotResult::Sunk, Some(name.clone()), Some(name))
            } else {
                (ShotResult::Hit, Some(name), None)
            }
        }
    };

    game.boards.get_mut(&shooter).unwrap().record_shot(code, result);

    let shot = Shot {
        index: game.next_shot_index,
        shooter,
        code,
        coordinate: coordinate.to_string(),
        result,
        ship_name_hit,
        ship_name_sunk,
        timestamp: chrono::Utc::now(),
    };
    game.next_shot_index += 1;
    game.shots_history.push(shot.clone());
    shot
}

fn resolve_ai_shot(game: &mut Game, rng: &mut impl Rng) -> Shot {
    let board_size = game.board_size;
    let min_ship_size = game.min_ship_size;

    let mut ai_state = game.ai_state.take().expect("ai_state exists in single-player games");
    let code = ai::select_shot(&mut ai_state, &game.boards[&PlayerSlot::Player2], board_size, min_ship_size, rng);
    let (row, col) = coord::decode(code);
    let coordinate = coord::format(row, col);

    let shot = resolve_shot(game, PlayerSlot::Player2, code, &coordinate);
    ai::record_ai_result(&mut ai_state, code, shot.result);
    game.ai_state = Some(ai_state);

    shot
}

fn maybe_finish_game(game: &mut Game, shooter: PlayerSlot) -> bool {
    let target = shooter.other();
    if game.fleets[&target].all_sunk() {
        game.winner = Some(shooter);
        game.state = GameState::Finished { winner: shooter };
        game.finished_at = Some(chrono::Utc::now());
        true
    } else {
        false
    }
}

fn shot_info(game: &Game, shot: &Shot) -> ShotInfo {
    let shooter_id = game.player_id(shot.shooter).unwrap_or_default().to_string();
    ShotInfo {
        index: shot.index,
        coordinate: shot.coordinate.clone(),
        result: shot.result,
        shooter_id,
        timestamp: shot.timestamp,
    }
}

/// §4.4.1 `getView`.
pub fn get_view(game: &Game, observer_id: &str) -> Result<GameView> {
    let slot = game.player_slot(observer_id).ok_or(Error::Unauthorized)?;
    Ok(view::build_view(game, slot))
}

/// §4.4.1 `getStats`.
pub fn get_stats(game: &Game, observer_id: &str) -> Result<Stats> {
    let slot = game.player_slot(observer_id).ok_or(Error::Unauthorized)?;
    Ok(view::build_stats(game, slot))
}

/// §4.4.1 `deleteGame`: only the creator may delete a game still in
/// progress; a finished game may be deleted by either participant.
pub fn can_delete(game: &Game, requester_id: &str) -> Result<()> {
    let slot = game.player_slot(requester_id).ok_or(Error::Unauthorized)?;
    if game.state.is_finished() {
        return Ok(());
    }
    if slot != PlayerSlot::Player1 {
        return Err(Error::Unauthorized);
    }
    Ok(())
}
