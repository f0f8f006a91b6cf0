mod line;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Color, IllegalPush, Marble, MarbleCounts};

pub(crate) use line::Line;

/// The board is always exactly this many cells in each dimension.
pub const BOARD_SIZE: usize = 7;

/// A cell position on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(&self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The error type for the [`FromStr`] instance of [`Coord`].
#[derive(Clone, Copy, Debug)]
pub enum CoordFromStrErr {
    MissingComma,
    InvalidNumber,
}

impl FromStr for Coord {
    type Err = CoordFromStrErr;

    /// Parses the `"row,col"` syntax used by the console driver.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s.split_once(',').ok_or(CoordFromStrErr::MissingComma)?;
        let row = row.trim().parse().map_err(|_| CoordFromStrErr::InvalidNumber)?;
        let col = col.trim().parse().map_err(|_| CoordFromStrErr::InvalidNumber)?;
        Ok(Coord { row, col })
    }
}

/// A push direction, relative to the printed board: `Forward` is toward row
/// 0 and `Backward` toward row 6.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "R")]
    Right,
    #[serde(rename = "F")]
    Forward,
    #[serde(rename = "B")]
    Backward,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
            Direction::Forward => 'F',
            Direction::Backward => 'B',
        };
        write!(f, "{}", letter)
    }
}

/// The error type for the [`FromStr`] instance of [`Direction`].
#[derive(Clone, Copy, Debug)]
pub struct InvalidDirection;

impl FromStr for Direction {
    type Err = InvalidDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "L" | "l" => Ok(Direction::Left),
            "R" | "r" => Ok(Direction::Right),
            "F" | "f" => Ok(Direction::Forward),
            "B" | "b" => Ok(Direction::Backward),
            _ => Err(InvalidDirection),
        }
    }
}

/// Specifies which marble to push, and where to.
#[derive(Copy, Clone, Debug)]
pub struct PushToPlay {
    /// The color of the player making the push.
    pub mover: Color,
    pub coord: Coord,
    pub direction: Direction,
}

/// A 7×7 grid of marbles. `None` is an empty cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) cells: [[Option<Marble>; BOARD_SIZE]; BOARD_SIZE],
}

/// The planned outcome of a single push.
///
/// Ties together the board it was computed against and the resulting line,
/// so a plan cannot be applied to a different board.
#[derive(Debug, PartialEq)]
pub struct PushCalculation<'a> {
    board: &'a Board,
    coord: Coord,
    direction: Direction,
    line: Line,
    /// The marble pushed off the board edge by this push, if any.
    pub ejected: Option<Marble>,
}

impl Board {
    /// The standard starting layout: a white and a black block of 8 marbles
    /// each in opposite corners, 13 red marbles in the center cross.
    pub fn initial() -> Self {
        const LAYOUT: [&str; BOARD_SIZE] = [
            "WW...BB",
            "WW.R.BB",
            "..RRR..",
            ".RRRRR.",
            "..RRR..",
            "BB.R.WW",
            "BB...WW",
        ];
        let mut cells = [[None; BOARD_SIZE]; BOARD_SIZE];
        for (row, layout_row) in LAYOUT.iter().enumerate() {
            for (col, ch) in layout_row.chars().enumerate() {
                cells[row][col] = match ch {
                    'W' => Some(Marble::White),
                    'B' => Some(Marble::Black),
                    'R' => Some(Marble::Red),
                    _ => None,
                };
            }
        }
        Self { cells }
    }

    /// Returns the marble at the given coordinate, or `None` if the cell is
    /// empty or the coordinate is out of bounds.
    pub fn get(&self, coord: Coord) -> Option<Marble> {
        if !coord.in_bounds() {
            return None;
        }
        self.cells[coord.row as usize][coord.col as usize]
    }

    pub fn row(&self, row: usize) -> Line {
        self.cells[row]
    }

    pub fn column(&self, col: usize) -> Line {
        std::array::from_fn(|row| self.cells[row][col])
    }

    pub(crate) fn set_row(&mut self, row: usize, line: Line) {
        self.cells[row] = line;
    }

    pub(crate) fn set_column(&mut self, col: usize, line: Line) {
        for (row, cell) in line.into_iter().enumerate() {
            self.cells[row][col] = cell;
        }
    }

    /// Totals by color of the marbles still on the board.
    pub fn marble_counts(&self) -> MarbleCounts {
        let mut counts = MarbleCounts::default();
        for row in &self.cells {
            for marble in row.iter().flatten() {
                counts.add(*marble);
            }
        }
        counts
    }

    /// Calculate a push and return the effects that it would have.
    ///
    /// This is the core function of this type. It checks whether the push is
    /// legal given the marbles on the board, which marble (if any) it would
    /// eject, and plans out the changes that would be made.
    ///
    /// The returned struct has a method to actually apply these changes and
    /// get a new board; this board is never mutated.
    ///
    /// This function does not validate whose turn it is or whether the game
    /// is already decided.
    pub fn calculate(&self, push: PushToPlay) -> Result<PushCalculation<'_>, IllegalPush> {
        let PushToPlay {
            mover,
            coord,
            direction,
        } = push;

        if !coord.in_bounds() {
            return Err(IllegalPush::OutOfBounds);
        }

        let own = mover.marble();
        let found = self.get(coord);
        if found != Some(own) {
            return Err(IllegalPush::NotYourMarble { found });
        }

        let (mut line, from) = self.oriented_line(coord, direction);
        if line::would_eject_own(&line, from, own) {
            return Err(IllegalPush::WouldCaptureOwnMarble);
        }
        if line::blocked_from_behind(&line, from) {
            return Err(IllegalPush::BlockedFromBehind);
        }

        let ejected = line::push_toward_end(&mut line, from);
        Ok(PushCalculation {
            board: self,
            coord,
            direction,
            line,
            ejected,
        })
    }

    // Extract the row or column through `coord`, oriented so that the push
    // goes toward increasing indices, together with the origin's index in
    // that orientation. Left and Forward pushes read the line in reverse,
    // which reduces all four directions to one push primitive.
    fn oriented_line(&self, coord: Coord, direction: Direction) -> (Line, usize) {
        let (row, col) = (coord.row as usize, coord.col as usize);
        match direction {
            Direction::Right => (self.row(row), col),
            Direction::Left => {
                let mut line = self.row(row);
                line.reverse();
                (line, BOARD_SIZE - 1 - col)
            }
            Direction::Backward => (self.column(col), row),
            Direction::Forward => {
                let mut line = self.column(col);
                line.reverse();
                (line, BOARD_SIZE - 1 - row)
            }
        }
    }
}

impl<'a> PushCalculation<'a> {
    /// Apply the computed changes from the push to a copy of the board.
    pub fn execute(self) -> Board {
        let mut board = self.board.clone();
        let mut line = self.line;
        match self.direction {
            Direction::Right => board.set_row(self.coord.row as usize, line),
            Direction::Left => {
                line.reverse();
                board.set_row(self.coord.row as usize, line);
            }
            Direction::Backward => board.set_column(self.coord.col as usize, line),
            Direction::Forward => {
                line.reverse();
                board.set_column(self.coord.col as usize, line);
            }
        }
        board
    }
}
