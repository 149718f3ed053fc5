//! The single-player AI opponent (§4.4.4): auto-placement at game
//! creation, and the hunt/target shot-selection heuristic used every
//! time the human's `shoot` call needs a follow-up AI turn.

use battleship_core::board::Board;
use battleship_core::coord::{self, Code};
use battleship_core::fleet::FleetTree;
use battleship_core::ship::Orientation;
use battleship_core::{Error, Result};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::game::data::{segments_for, AiMode, AiState, RequiredShip};

/// Auto-places every ship in `required` onto a fresh board, retrying a
/// random `(row, col, orientation)` up to `max_attempts` times per ship
/// before giving up with `PlacementImpossible` (§4.4.4). Base fleets are
/// constrained to <= 80% board occupancy precisely so this should not
/// happen for a valid fleet.
pub fn auto_place(
    required: &[RequiredShip],
    board_size: u8,
    max_attempts: u32,
    rng: &mut impl Rng,
) -> Result<(Board, FleetTree)> {
    let mut board = Board::new(board_size);
    let mut fleet = FleetTree::new();

    for ship in required {
        let mut placed = false;
        for _ in 0..max_attempts {
            let row = rng.gen_range(1..=board_size as i32);
            let col = rng.gen_range(1..=board_size as i32);
            let orientation = if rng.gen_bool(0.5) { Orientation::Horizontal } else { Orientation::Vertical };

            let cells = segments_for((row, col), ship.size, orientation);
            let codes: Result<Vec<Code>> = cells
                .iter()
                .map(|&(r, c)| coord::encode(r, c, board_size))
                .collect();
            let codes = match codes {
                Ok(codes) => codes,
                Err(_) => continue,
            };
            if codes.iter().any(|&code| board.is_occupied(code)) {
                continue;
            }

            let ship_index = fleet.add_ship(
                ship.template_id.clone(),
                ship.name.clone(),
                ship.size,
                ship.placement_index,
                &codes,
            );
            board.occupy(&codes, ship_index);
            placed = true;
            break;
        }
        if !placed {
            return Err(Error::PlacementImpossible);
        }
    }

    Ok((board, fleet))
}

/// Picks the AI's next shot against the human player's board.
pub fn select_shot(
    ai: &mut AiState,
    shots_fired: &Board,
    board_size: u8,
    min_ship_size: u8,
    rng: &mut impl Rng,
) -> Code {
    if let AiMode::Target = ai.mode {
        let candidates = target_candidates(&ai.last_hits, shots_fired, board_size);
        if let Some(&code) = candidates.choose(rng) {
            return code;
        }
        ai.mode = AiMode::Hunt;
    }
    hunt_shot(shots_fired, board_size, min_ship_size, rng)
}

/// Called after the AI's shot is resolved, to advance hunt/target state
/// (§4.4.4 transition table).
pub fn record_ai_result(ai: &mut AiState, code: Code, result: battleship_core::ship::ShotResult) {
    use battleship_core::ship::ShotResult::*;
    match result {
        Hit => {
            ai.last_hits.push(code);
            ai.mode = AiMode::Target;
        }
        Sunk => {
            ai.last_hits.clear();
            ai.mode = AiMode::Hunt;
        }
        Water => {}
    }
}

fn hunt_shot(shots_fired: &Board, board_size: u8, min_ship_size: u8, rng: &mut impl Rng) -> Code {
    let mut all = Vec::new();
    let mut parity = Vec::new();
    let min_ship_size = min_ship_size.max(1) as i32;

    for row in 1..=board_size as i32 {
        for col in 1..=board_size as i32 {
            let code = row * 100 + col;
            if shots_fired.has_shot(code) {
                continue;
            }
            all.push(code);
            if (row + col) % min_ship_size == 0 {
                parity.push(code);
            }
        }
    }

    let pool = if !parity.is_empty() { &parity } else { &all };
    *pool
        .choose(rng)
        .expect("hunt_shot is only called while the AI still has unshot cells")
}

fn target_candidates(last_hits: &[Code], shots_fired: &Board, board_size: u8) -> Vec<Code> {
    use std::collections::HashSet;

    let rows: HashSet<i32> = last_hits.iter().map(|&c| coord::decode(c).0).collect();
    let cols: HashSet<i32> = last_hits.iter().map(|&c| coord::decode(c).1).collect();
    let axis_row = (last_hits.len() >= 2 && rows.len() == 1).then(|| *rows.iter().next().unwrap());
    let axis_col = (last_hits.len() >= 2 && cols.len() == 1).then(|| *cols.iter().next().unwrap());

    let mut candidates: HashSet<Code> = HashSet::new();
    for &hit in last_hits {
        let (row, col) = coord::decode(hit);
        for (r, c) in [(row - 1, col), (row + 1, col), (row, col - 1), (row, col + 1)] {
            if r < 1 || c < 1 || r > board_size as i32 || c > board_size as i32 {
                continue;
            }
            if axis_row.is_some_and(|ar| r != ar) || axis_col.is_some_and(|ac| c != ac) {
                continue;
            }
            let code = r * 100 + c;
            if !shots_fired.has_shot(code) {
                candidates.insert(code);
            }
        }
    }
    candidates.into_iter().collect()
}
