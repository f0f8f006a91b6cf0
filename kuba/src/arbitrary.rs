use crate::board::Line;
use crate::{Board, Color, Coord, Direction, Marble, PushToPlay, BOARD_SIZE};

impl quickcheck::Arbitrary for Marble {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&[Marble::White, Marble::Black, Marble::Red]).unwrap()
    }
}

impl quickcheck::Arbitrary for Color {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&[Color::White, Color::Black]).unwrap()
    }
}

impl quickcheck::Arbitrary for Direction {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&[
            Direction::Left,
            Direction::Right,
            Direction::Forward,
            Direction::Backward,
        ])
        .unwrap()
    }
}

/// A line of cells plus a push origin within it.
#[derive(Clone, Debug)]
pub struct LineInput {
    pub line: Line,
    pub from: usize,
}

impl quickcheck::Arbitrary for LineInput {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let mut line: Line = [None; BOARD_SIZE];
        for cell in line.iter_mut() {
            *cell = Option::<Marble>::arbitrary(g);
        }
        let from = usize::arbitrary(g) % BOARD_SIZE;
        LineInput { line, from }
    }
}

/// A random board position plus a push to attempt against it.
///
/// The board contents are unconstrained, so most generated pushes are
/// illegal; properties over this input must tolerate rejections.
#[derive(Clone, Debug)]
pub struct PushInput {
    pub board: Board,
    pub push: PushToPlay,
}

impl quickcheck::Arbitrary for PushInput {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let mut cells = [[None; BOARD_SIZE]; BOARD_SIZE];
        for row in cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = Option::<Marble>::arbitrary(g);
            }
        }
        let mover = Color::arbitrary(g);
        let coord = Coord::new(
            u8::arbitrary(g) % BOARD_SIZE as u8,
            u8::arbitrary(g) % BOARD_SIZE as u8,
        );
        // Usually place the mover's marble at the origin so that the push
        // gets past the ownership check.
        if u8::arbitrary(g) % 4 != 0 {
            cells[coord.row as usize][coord.col as usize] = Some(mover.marble());
        }
        PushInput {
            board: Board { cells },
            push: PushToPlay {
                mover,
                coord,
                direction: Direction::arbitrary(g),
            },
        }
    }
}
