//! The `Game` aggregate (§3 Data model) and the small value types that
//! hang off it. `Game` itself carries no lock — callers reach it only
//! through `GameStore`, which hands out `Arc<RwLock<Game>>` (§4.4.3).

use std::collections::HashMap;

use battleship_core::board::Board;
use battleship_core::coord::Code;
use battleship_core::fleet::FleetTree;
use battleship_core::ship::{BaseFleet, Orientation, ShipTemplate, ShotResult};

pub type PlayerId = String;
pub type GameId = uuid::Uuid;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PlayerSlot {
    Player1,
    Player2,
}

impl PlayerSlot {
    pub fn other(self) -> Self {
        match self {
            PlayerSlot::Player1 => PlayerSlot::Player2,
            PlayerSlot::Player2 => PlayerSlot::Player1,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mode {
    SinglePlayer,
    Multiplayer,
}

/// One entry of a player's required-ship list, computed once at
/// `createGame` time from the `BaseFleet` snapshot (§4.4.1): the
/// `placement_index` disambiguates repeated templates ahead of time so
/// `placeShip` never has to count duplicates itself.
#[derive(Debug, Clone)]
pub struct RequiredShip {
    pub template_id: String,
    pub name: String,
    pub size: u8,
    pub placement_index: u32,
}

/// Builds the ordered, disambiguated required-ship list for a fleet,
/// resolving template ids against the (externally supplied, read-only)
/// catalog. This is the one place `InvalidFleet` is raised (§4.4.1).
pub fn snapshot_required_ships(
    base_fleet: &BaseFleet,
    templates: &HashMap<String, ShipTemplate>,
) -> battleship_core::Result<Vec<RequiredShip>> {
    let total: usize = base_fleet
        .ship_template_ids
        .iter()
        .map(|id| templates.get(id).map(|t| t.size as usize).unwrap_or(0))
        .sum();

    if base_fleet
        .ship_template_ids
        .iter()
        .any(|id| !templates.contains_key(id))
    {
        return Err(battleship_core::Error::InvalidFleet(
            "fleet references an unknown ship template".to_string(),
        ));
    }
    if total > base_fleet.max_occupancy() {
        return Err(battleship_core::Error::InvalidFleet(format!(
            "fleet occupies {total} cells, more than {} allowed on a {}x{} board",
            base_fleet.max_occupancy(),
            base_fleet.board_size,
            base_fleet.board_size
        )));
    }

    let mut seen_counts: HashMap<&str, u32> = HashMap::new();
    let mut required = Vec::with_capacity(base_fleet.ship_template_ids.len());
    for template_id in &base_fleet.ship_template_ids {
        let template = &templates[template_id];
        let placement_index = *seen_counts
            .entry(template_id.as_str())
            .and_modify(|n| *n += 1)
            .or_insert(0);
        required.push(RequiredShip {
            template_id: template.id.clone(),
            name: template.name.clone(),
            size: template.size,
            placement_index,
        });
    }
    Ok(required)
}

#[derive(Debug, Copy, Clone)]
pub enum AiMode {
    Hunt,
    Target,
}

pub struct AiState {
    pub last_hits: Vec<Code>,
    pub mode: AiMode,
}

impl AiState {
    pub fn new() -> Self {
        Self { last_hits: Vec::new(), mode: AiMode::Hunt }
    }
}

impl Default for AiState {
    fn default() -> Self {
        Self::new()
    }
}

/// State machine states (§4.4.2). Transitions only happen inside
/// `battleship_engine::game::ops`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameState {
    WaitingForPlayer2,
    /// Single-player only: the human has not yet finished placing.
    WaitingForPlacement,
    /// Multiplayer, neither player has finished placing.
    BothPlayersPlacing,
    /// Multiplayer, player2 finished first, player1 still placing.
    Player1Placing,
    /// Multiplayer, player1 finished first, player2 still placing.
    Player2Placing,
    InProgress { turn: PlayerSlot },
    Finished { winner: PlayerSlot },
}

impl GameState {
    /// One canonical wire status string per state (§9's open question:
    /// "placing_ships" and "setup" are aliased in the reference — this
    /// picks a single name per state and never stores the alias).
    pub fn wire_status(&self) -> &'static str {
        match self {
            GameState::WaitingForPlayer2 => "waiting_for_player2",
            GameState::WaitingForPlacement => "placing_ships",
            GameState::BothPlayersPlacing => "placing_ships",
            GameState::Player1Placing => "player1_setup",
            GameState::Player2Placing => "player2_setup",
            GameState::InProgress { .. } => "in_progress",
            GameState::Finished { winner: PlayerSlot::Player1 } => "player1_won",
            GameState::Finished { winner: PlayerSlot::Player2 } => "player2_won",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Shot {
    pub index: u64,
    pub shooter: PlayerSlot,
    pub code: Code,
    pub coordinate: String,
    pub result: ShotResult,
    pub ship_name_hit: Option<String>,
    pub ship_name_sunk: Option<String>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

pub struct Game {
    pub id: GameId,
    pub board_size: u8,
    pub base_fleet_id: String,
    pub mode: Mode,
    pub player1_id: PlayerId,
    pub player2_id: Option<PlayerId>,
    pub state: GameState,
    pub turn_passes_on_hit: bool,

    pub required_ships: HashMap<PlayerSlot, Vec<RequiredShip>>,
    pub next_unplaced: HashMap<PlayerSlot, usize>,
    pub boards: HashMap<PlayerSlot, Board>,
    pub fleets: HashMap<PlayerSlot, FleetTree>,

    pub shots_history: Vec<Shot>,
    pub next_shot_index: u64,

    pub winner: Option<PlayerSlot>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub started_at: Option<chrono::DateTime<chrono::Utc>>,
    pub finished_at: Option<chrono::DateTime<chrono::Utc>>,

    pub ai_state: Option<AiState>,
    /// Smallest ship size in the fleet, used by the AI's hunt-mode
    /// parity filter (§4.4.4): no ship can evade a shot on every cell
    /// where `(row + col) % min_ship_size == 0`.
    pub min_ship_size: u8,
}

impl Game {
    pub fn player_slot(&self, player_id: &str) -> Option<PlayerSlot> {
        if self.player1_id == player_id {
            Some(PlayerSlot::Player1)
        } else if self.player2_id.as_deref() == Some(player_id) {
            Some(PlayerSlot::Player2)
        } else {
            None
        }
    }

    pub fn player_id(&self, slot: PlayerSlot) -> Option<&str> {
        match slot {
            PlayerSlot::Player1 => Some(self.player1_id.as_str()),
            PlayerSlot::Player2 => self.player2_id.as_deref(),
        }
    }

    pub fn ships_remaining(&self, slot: PlayerSlot) -> usize {
        let required = self.required_ships.get(&slot).map(|v| v.len()).unwrap_or(0);
        let placed = *self.next_unplaced.get(&slot).unwrap_or(&0);
        required.saturating_sub(placed)
    }

    pub fn duration_seconds(&self) -> Option<i64> {
        let started = self.started_at?;
        let finished = self.finished_at?;
        Some((finished - started).num_seconds())
    }

    /// Kept only to document the intentionally-unused enum variant;
    /// `AdjacencyViolation` is never returned (§4.4.1: the reference
    /// accepts touching ships).
    pub const ACCEPTS_TOUCHING_SHIPS: bool = true;
}

pub fn segments_for(start: (i32, i32), size: u8, orientation: Orientation) -> Vec<(i32, i32)> {
    let (row, col) = start;
    (0..size as i32)
        .map(|i| match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        })
        .collect()
}
