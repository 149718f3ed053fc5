//! End-to-end scenario tests for `ops.rs`, one file per action family
//! (mirrors the teacher's `actions_test/` split).

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::SeedableRng;

use battleship_core::ship::{BaseFleet, ShipTemplate};

use crate::config::EngineConfig;

mod lifecycle;
mod place_ship;
mod shoot;

/// A single two-cell ship, so tests can drive a whole game to
/// completion in a handful of calls.
pub(crate) fn one_ship_templates() -> HashMap<String, ShipTemplate> {
    [ShipTemplate { id: "patrol".to_string(), name: "Patrol Boat".to_string(), size: 2 }]
        .into_iter()
        .map(|t| (t.id.clone(), t))
        .collect()
}

pub(crate) fn one_ship_fleet() -> BaseFleet {
    BaseFleet { id: "minimal".to_string(), board_size: 5, ship_template_ids: vec!["patrol".to_string()] }
}

/// A two-ship fleet, for tests that need placement order/mismatch
/// checks to mean something.
pub(crate) fn two_ship_templates() -> HashMap<String, ShipTemplate> {
    [
        ShipTemplate { id: "patrol".to_string(), name: "Patrol Boat".to_string(), size: 2 },
        ShipTemplate { id: "cruiser".to_string(), name: "Cruiser".to_string(), size: 3 },
    ]
    .into_iter()
    .map(|t| (t.id.clone(), t))
    .collect()
}

pub(crate) fn two_ship_fleet() -> BaseFleet {
    BaseFleet {
        id: "pair".to_string(),
        board_size: 5,
        ship_template_ids: vec!["patrol".to_string(), "cruiser".to_string()],
    }
}

pub(crate) fn cfg() -> EngineConfig {
    EngineConfig::default()
}

pub(crate) fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
