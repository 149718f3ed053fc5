use thiserror::Error;

/// Transport-independent error kinds shared by every layer of the engine.
///
/// Validation errors are returned to callers unchanged; invariant
/// violations (BST/fleet-tree disagreement, etc.) are not represented
/// here — those are fatal and are logged and panicked on at the call
/// site instead (see `battleship_engine`).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("game {0} not found")]
    NotFound(String),

    #[error("caller is not a participant in this game")]
    Unauthorized,

    #[error("operation not valid in the current game phase")]
    WrongPhase,

    #[error("it is not this player's turn")]
    NotYourTurn,

    #[error("'{0}' is not a valid coordinate")]
    MalformedCoordinate(String),

    #[error("coordinate ({row}, {col}) is outside the {board_size}x{board_size} board")]
    OutOfBounds { row: i32, col: i32, board_size: u8 },

    #[error("coordinate has already been shot at")]
    AlreadyShot,

    #[error("coordinate is already occupied by another ship")]
    Overlap,

    #[error("ship placement is adjacent to another ship")]
    AdjacencyViolation,

    #[error("game already has two players")]
    GameFull,

    #[error("a player cannot join their own game")]
    CannotJoinOwn,

    #[error("player has already joined this game")]
    AlreadyJoined,

    #[error("base fleet is invalid: {0}")]
    InvalidFleet(String),

    #[error("AI auto-placement exhausted its retry budget")]
    PlacementImpossible,
}

pub type Result<T> = std::result::Result<T, Error>;
