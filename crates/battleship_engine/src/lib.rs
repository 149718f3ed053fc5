//! The game engine library: everything a transport layer needs to run
//! multi-tenant Battleship games, with no networking or serialization
//! format of its own (§1/§2 Non-goals — that surface belongs to a
//! separate collaborator).

pub mod config;
pub mod game;

pub use config::{ConfigProvider, EngineConfig};
pub use game::GameStore;
