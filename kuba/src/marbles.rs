use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A marble on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Marble {
    #[serde(rename = "W")]
    White,
    #[serde(rename = "B")]
    Black,
    #[serde(rename = "R")]
    Red,
}

impl Marble {
    /// Render this marble as its one-letter code.
    pub fn letter(&self) -> char {
        match self {
            Marble::White => 'W',
            Marble::Black => 'B',
            Marble::Red => 'R',
        }
    }
}

impl std::fmt::Display for Marble {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The error type for the [`FromStr`] instance of [`Marble`].
#[derive(Clone, Copy, Debug)]
pub struct InvalidMarble;

impl FromStr for Marble {
    type Err = InvalidMarble;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "W" | "w" => Ok(Marble::White),
            "B" | "b" => Ok(Marble::Black),
            "R" | "r" => Ok(Marble::Red),
            _ => Err(InvalidMarble),
        }
    }
}

/// One of the two marble colors a player can own.
///
/// The red marbles are neutral, so a player holding them is unrepresentable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn marble(self) -> Marble {
        match self {
            Color::White => Marble::White,
            Color::Black => Marble::Black,
        }
    }

    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Marble counts broken down by color.
///
/// Used both for the totals on a board and for a player's captures.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarbleCounts {
    pub white: usize,
    pub black: usize,
    pub red: usize,
}

impl MarbleCounts {
    pub fn count(&self, marble: Marble) -> usize {
        match marble {
            Marble::White => self.white,
            Marble::Black => self.black,
            Marble::Red => self.red,
        }
    }

    pub(crate) fn add(&mut self, marble: Marble) {
        match marble {
            Marble::White => self.white += 1,
            Marble::Black => self.black += 1,
            Marble::Red => self.red += 1,
        }
    }
}
