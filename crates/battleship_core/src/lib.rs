pub mod board;
pub mod bst;
pub mod coord;
pub mod error;
pub mod fleet;
pub mod ship;

pub use error::{Error, Result};
