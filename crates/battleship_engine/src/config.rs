//! Engine-wide knobs, supplied by construction rather than parsed from
//! a file — this workspace has no HTTP/admin layer to source them from
//! (§1), so the `ConfigProvider` trait just narrows
//! `battleship_plus_server`'s `ConfigProvider` down to what the game
//! engine itself needs.

use battleship_core::coord::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};

#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    pub min_board_size: u8,
    pub max_board_size: u8,
    /// Auto-placement retry budget per ship before `PlacementImpossible`
    /// (§4.4.4 names 1000 as an example bound).
    pub ai_placement_attempts: u32,
    /// §9: the reference rule passes the turn on every shot; this flag
    /// exists so the classical "hit grants another turn" variant could
    /// be wired in later without restructuring `shoot`. Tests only
    /// exercise the default (`false`).
    pub turn_passes_on_hit: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_board_size: MIN_BOARD_SIZE,
            max_board_size: MAX_BOARD_SIZE,
            ai_placement_attempts: 1000,
            turn_passes_on_hit: false,
        }
    }
}

pub trait ConfigProvider {
    fn get_config(&self) -> EngineConfig;
}

pub struct DefaultEngineConfig;

impl ConfigProvider for DefaultEngineConfig {
    fn get_config(&self) -> EngineConfig {
        EngineConfig::default()
    }
}

pub fn default_config_provider() -> Box<dyn ConfigProvider + Send + Sync> {
    Box::new(DefaultEngineConfig)
}
