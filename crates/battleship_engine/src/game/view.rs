//! Output value types for the read-side operations (§4.4.1 `getView`,
//! `getStats`). These carry `serde::Serialize` so an external HTTP
//! layer can hand them straight to a JSON encoder; the engine itself
//! never serializes anything.

use serde::Serialize;

use battleship_core::coord::format;
use battleship_core::ship::ShotResult;

use crate::game::data::{Game, Mode, PlayerId, PlayerSlot, Shot};

#[derive(Debug, Serialize)]
pub struct ShipInfo {
    pub template_id: String,
    pub name: String,
    pub size: u8,
    pub placement_index: u32,
    pub segments: Vec<String>,
    pub hits: Vec<bool>,
    pub sunk: bool,
}

#[derive(Debug, Serialize)]
pub struct ShotInfo {
    pub index: u64,
    pub coordinate: String,
    pub result: ShotResult,
    pub shooter_id: PlayerId,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl ShotInfo {
    fn from_shot(shot: &Shot, shooter_id: PlayerId) -> Self {
        Self {
            index: shot.index,
            coordinate: shot.coordinate.clone(),
            result: shot.result,
            shooter_id,
            timestamp: shot.timestamp,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GameView {
    pub game_id: String,
    pub board_size: u8,
    pub mode: &'static str,
    pub status: String,
    pub current_turn_player_id: Option<PlayerId>,
    pub winner_id: Option<PlayerId>,
    pub your_ships: Vec<ShipInfo>,
    pub your_shots: Vec<ShotInfo>,
    pub opponent_shots_at_you: Vec<ShotInfo>,
    pub opponent_ships: Vec<ShipInfo>,
}

#[derive(Debug, Serialize)]
pub struct Stats {
    pub total_shots: u64,
    pub hits: u64,
    pub misses: u64,
    pub accuracy: f64,
    pub enemy_ships_sunk: usize,
    pub own_ships_sunk: usize,
    pub duration_seconds: Option<i64>,
}

pub(crate) fn build_view(game: &Game, observer: PlayerSlot) -> GameView {
    let opponent = observer.other();

    let your_ships = game
        .fleets
        .get(&observer)
        .map(|fleet| fleet.ships().iter().map(ship_info_full).collect())
        .unwrap_or_default();

    let opponent_ships = game
        .fleets
        .get(&opponent)
        .map(|fleet| {
            fleet
                .ships()
                .iter()
                .filter(|ship| ship.sunk)
                .map(ship_info_full)
                .collect()
        })
        .unwrap_or_default();

    let your_shots = game
        .shots_history
        .iter()
        .filter(|shot| shot.shooter == observer)
        .map(|shot| ShotInfo::from_shot(shot, game.player_id(observer).unwrap_or_default().to_string()))
        .collect();

    let opponent_shots_at_you = game
        .shots_history
        .iter()
        .filter(|shot| shot.shooter == opponent)
        .map(|shot| {
            ShotInfo::from_shot(
                shot,
                game.player_id(opponent).unwrap_or_default().to_string(),
            )
        })
        .collect();

    GameView {
        game_id: game.id.to_string(),
        board_size: game.board_size,
        mode: match game.mode {
            Mode::SinglePlayer => "single_player",
            Mode::Multiplayer => "multiplayer",
        },
        status: game.state.wire_status().to_string(),
        current_turn_player_id: game.state.current_turn().and_then(|slot| game.player_id(slot)).map(str::to_string),
        winner_id: game.winner.and_then(|slot| game.player_id(slot)).map(str::to_string),
        your_ships,
        your_shots,
        opponent_shots_at_you,
        opponent_ships,
    }
}

fn ship_info_full(ship: &battleship_core::fleet::ShipView<'_>) -> ShipInfo {
    let (segments, hits): (Vec<String>, Vec<bool>) = ship
        .segments
        .iter()
        .map(|&(code, hit)| {
            let (row, col) = battleship_core::coord::decode(code);
            (format(row, col), hit)
        })
        .unzip();

    ShipInfo {
        template_id: ship.template_id.to_string(),
        name: ship.name.to_string(),
        size: ship.size,
        placement_index: ship.placement_index,
        segments,
        hits,
        sunk: ship.sunk,
    }
}

pub(crate) fn build_stats(game: &Game, observer: PlayerSlot) -> Stats {
    let opponent = observer.other();

    let total_shots = game.shots_history.iter().filter(|s| s.shooter == observer).count() as u64;
    let hits = game
        .shots_history
        .iter()
        .filter(|s| s.shooter == observer && !matches!(s.result, ShotResult::Water))
        .count() as u64;
    let misses = total_shots - hits;
    let accuracy = if total_shots == 0 { 0.0 } else { hits as f64 / total_shots as f64 };

    let enemy_ships_sunk = game.fleets.get(&opponent).map(|f| f.sunk_ship_count()).unwrap_or(0);
    let own_ships_sunk = game.fleets.get(&observer).map(|f| f.sunk_ship_count()).unwrap_or(0);

    Stats {
        total_shots,
        hits,
        misses,
        accuracy,
        enemy_ships_sunk,
        own_ships_sunk,
        duration_seconds: game.duration_seconds(),
    }
}
