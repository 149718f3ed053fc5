//! Value types shared by the placement and shooting operations. These
//! are plain data — validation and mutation live in the engine's game
//! state machine (`battleship_engine::game`), which is the only thing
//! that is allowed to construct them in response to a player action.

use serde::{Deserialize, Serialize};

use crate::coord::Code;

/// A read-only catalog entry, owned by the admin collaborator (out of
/// scope). The engine only ever sees a snapshot of these at
/// `createGame` time (§3 Ownership).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipTemplate {
    pub id: String,
    pub name: String,
    pub size: u8,
}

/// A read-only fleet preset, also owned by the admin collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseFleet {
    pub id: String,
    pub board_size: u8,
    pub ship_template_ids: Vec<String>,
}

impl BaseFleet {
    /// Maximum total ship cells a board of this size may hold (§3):
    /// `floor(board_size^2 * 0.8)`.
    pub fn max_occupancy(&self) -> usize {
        ((self.board_size as usize).pow(2) * 8) / 10
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShotResult {
    Water,
    Hit,
    Sunk,
}

/// The engine's own copy of one ship's identity and placement, snapshot
/// from a [`ShipTemplate`] at placement time so later template edits or
/// deletions never affect a live game (§3 Ownership).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedShip {
    pub template_id: String,
    pub name: String,
    pub size: u8,
    /// Disambiguates multiple placements of the same template.
    pub placement_index: u32,
    pub segments: Vec<Code>,
}
