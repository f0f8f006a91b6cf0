use crate::{Coord, Marble};

/// The error type for [`Board::calculate()`](crate::Board::calculate), i.e.
/// for a single push against the board geometry.
#[derive(Debug, PartialEq, Eq)]
pub enum IllegalPush {
    OutOfBounds,
    /// The origin cell does not hold the mover's marble.
    NotYourMarble { found: Option<Marble> },
    /// The push would eject the mover's own marble off the far edge.
    WouldCaptureOwnMarble,
    /// The cell behind the origin is occupied, so there is nothing to push
    /// the marble from.
    BlockedFromBehind,
}

impl std::error::Error for IllegalPush {}

impl std::fmt::Display for IllegalPush {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalPush::OutOfBounds => write!(f, "Coordinates are not in range!"),
            IllegalPush::NotYourMarble { found: Some(marble) } => {
                write!(f, "Not your marble! The cell holds {}", marble)
            }
            IllegalPush::NotYourMarble { found: None } => {
                write!(f, "Not your marble! The cell is empty")
            }
            IllegalPush::WouldCaptureOwnMarble => {
                write!(f, "You cannot capture your own marble!")
            }
            IllegalPush::BlockedFromBehind => write!(f, "Cant push from this direction!"),
        }
    }
}

/// The error type for one move attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum IllegalMove {
    UnknownPlayer { name: String },
    GameAlreadyWon { winner: String },
    OutOfBounds { coord: Coord },
    NotYourTurn { current: String },
    IllegalPush { err: IllegalPush },
    /// The move would recreate the board from two moves ago.
    CircularMove,
}

impl std::error::Error for IllegalMove {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IllegalMove::IllegalPush { err } => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::UnknownPlayer { name } => {
                write!(f, "Player doesn't exist: {}", name)
            }
            IllegalMove::GameAlreadyWon { winner } => {
                write!(f, "A player has already won: {}", winner)
            }
            IllegalMove::OutOfBounds { coord } => {
                write!(f, "Coordinates are not in range: {}", coord)
            }
            IllegalMove::NotYourTurn { current } => {
                write!(f, "Not your turn. Current turn: {}", current)
            }
            IllegalMove::IllegalPush { err: _ } => write!(f, "Cant push here"),
            IllegalMove::CircularMove => write!(f, "Cannot make a circular move!"),
        }
    }
}

/// The error type for constructing a game with invalid players.
#[derive(Debug, PartialEq, Eq)]
pub enum SetupError {
    SameName,
    SameColor,
}

impl std::error::Error for SetupError {}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::SameName => write!(f, "Both players have the same name"),
            SetupError::SameColor => write!(f, "Both players have the same marble color"),
        }
    }
}
