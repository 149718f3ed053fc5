//! Pure state-machine transitions (§4.4.2), kept separate from the
//! operations that drive them (`ops.rs`) the way the teacher's
//! `states.rs` keeps `GameState::is_action_valid`/`execute_action`
//! separate from `actions.rs`.

use std::fmt::{Display, Formatter};

use crate::game::data::{GameState, Mode, PlayerSlot};

impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_status())
    }
}

impl GameState {
    pub fn is_waiting_for_player2(&self) -> bool {
        matches!(self, GameState::WaitingForPlayer2)
    }

    /// Whether `slot` may currently call `placeShip`.
    pub fn can_place(&self, slot: PlayerSlot) -> bool {
        match (self, slot) {
            (GameState::WaitingForPlacement, PlayerSlot::Player1) => true,
            (GameState::BothPlayersPlacing, _) => true,
            (GameState::Player1Placing, PlayerSlot::Player1) => true,
            (GameState::Player2Placing, PlayerSlot::Player2) => true,
            _ => false,
        }
    }

    pub fn is_in_progress(&self) -> bool {
        matches!(self, GameState::InProgress { .. })
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, GameState::Finished { .. })
    }

    pub fn current_turn(&self) -> Option<PlayerSlot> {
        match self {
            GameState::InProgress { turn } => Some(*turn),
            _ => None,
        }
    }
}

/// After `slot` finishes placing every required ship, decide the next
/// state. `mode` distinguishes the single-player "only one human
/// places" case from the symmetric multiplayer case.
pub fn after_placement_complete(state: GameState, slot: PlayerSlot, mode: Mode) -> GameState {
    match (mode, state, slot) {
        (Mode::SinglePlayer, GameState::WaitingForPlacement, PlayerSlot::Player1) => {
            GameState::InProgress { turn: PlayerSlot::Player1 }
        }
        (Mode::Multiplayer, GameState::BothPlayersPlacing, PlayerSlot::Player1) => {
            GameState::Player2Placing
        }
        (Mode::Multiplayer, GameState::BothPlayersPlacing, PlayerSlot::Player2) => {
            GameState::Player1Placing
        }
        (Mode::Multiplayer, GameState::Player1Placing, PlayerSlot::Player1) => {
            GameState::InProgress { turn: PlayerSlot::Player1 }
        }
        (Mode::Multiplayer, GameState::Player2Placing, PlayerSlot::Player2) => {
            GameState::InProgress { turn: PlayerSlot::Player1 }
        }
        (_, other, _) => other,
    }
}

/// After a shot that did not finish the game, the turn passes
/// unconditionally (§4.4.1 step 4, §9: the reference rule, not
/// classical "hit grants another turn").
pub fn after_shot_not_terminal(turn: PlayerSlot) -> GameState {
    GameState::InProgress { turn: turn.other() }
}
