//! The game engine: state machine (§4.4.2), operations (§4.4.1), the
//! AI opponent (§4.4.4), read-side views (§4.4.1 `getView`/`getStats`),
//! and the concurrency-gated store (§4.4.3/§5).

pub mod ai;
pub mod data;
pub mod ops;
#[cfg(test)]
mod ops_test;
pub mod states;
pub mod store;
pub mod view;

pub use data::{Game, GameId, GameState, Mode, PlayerId, PlayerSlot};
pub use ops::{PlacementResult, ShotOutcome};
pub use store::GameStore;
pub use view::{GameView, ShipInfo, ShotInfo, Stats};
