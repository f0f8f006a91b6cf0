use crate::{
    Board, Color, Coord, Direction, IllegalMove, Marble, MarbleCounts, Player, PushToPlay,
    SetupError,
};

/// Number of captured red (neutral) marbles that wins the game.
const RED_MARBLES_TO_WIN: usize = 7;
/// Number of captured marbles of one player color that wins the game.
const PLAYER_MARBLES_TO_WIN: usize = 8;

/// A full game of Kuba between two players.
///
/// All rule checking goes through [`Self::make_move()`]; everything else is
/// read access. The engine is synchronous and single-threaded; callers that
/// share a game between threads must serialize access themselves.
#[derive(Clone, Debug)]
pub struct KubaGame {
    board: Board,
    /// One snapshot per committed move. The starting board is not recorded,
    /// so the repetition check only activates from the third move on.
    history: Vec<Board>,
    players: [Player; 2],
    current_turn: Option<usize>,
    winner: Option<usize>,
}

impl KubaGame {
    /// Creates a game on the standard starting board.
    ///
    /// The players must have distinct names and distinct colors. Either
    /// player may make the first move.
    pub fn new(player_a: (&str, Color), player_b: (&str, Color)) -> Result<Self, SetupError> {
        if player_a.0 == player_b.0 {
            return Err(SetupError::SameName);
        }
        if player_a.1 == player_b.1 {
            return Err(SetupError::SameColor);
        }
        Ok(Self {
            board: Board::initial(),
            history: Vec::new(),
            players: [
                Player::new(player_a.0, player_a.1),
                Player::new(player_b.0, player_b.1),
            ],
            current_turn: None,
            winner: None,
        })
    }

    /// Attempts a push for the named player and commits it if legal.
    ///
    /// On success, returns the marble captured by the push, if any. On
    /// failure, returns the rejection reason and leaves the game untouched.
    ///
    /// Win conditions are evaluated from the capture counts at the start of
    /// the call, so a win earned by the previous move is recorded here and
    /// rejects the attempt.
    pub fn make_move(
        &mut self,
        name: &str,
        coord: Coord,
        direction: Direction,
    ) -> Result<Option<Marble>, IllegalMove> {
        self.check_win_conditions();

        let mover = self
            .player_index(name)
            .ok_or_else(|| IllegalMove::UnknownPlayer {
                name: String::from(name),
            })?;
        if let Some(winner) = self.winner {
            return Err(IllegalMove::GameAlreadyWon {
                winner: String::from(self.players[winner].name()),
            });
        }
        if !coord.in_bounds() {
            return Err(IllegalMove::OutOfBounds { coord });
        }
        // The first move may be made by either player.
        if let Some(current) = self.current_turn {
            if current != mover {
                return Err(IllegalMove::NotYourTurn {
                    current: String::from(self.players[current].name()),
                });
            }
        }

        let calculation = self
            .board
            .calculate(PushToPlay {
                mover: self.players[mover].color(),
                coord,
                direction,
            })
            .map_err(|err| IllegalMove::IllegalPush { err })?;
        let ejected = calculation.ejected;
        let candidate = calculation.execute();

        // A move may not recreate the board from two moves ago, which would
        // undo the opponent's last push.
        if self.history.len() >= 2 && candidate == self.history[self.history.len() - 2] {
            return Err(IllegalMove::CircularMove);
        }

        if let Some(marble) = ejected {
            self.players[mover].capture(marble);
        }
        self.board = candidate.clone();
        self.history.push(candidate);
        self.current_turn = Some(1 - mover);
        Ok(ejected)
    }

    /// Does the named player have at least one legal push right now?
    ///
    /// Applies the same checks as [`Self::make_move()`] except the
    /// repetition rule, so it is false when it is not the player's turn or
    /// the game is decided.
    pub fn moves_available(&self, name: &str) -> bool {
        let Some(player_idx) = self.player_index(name) else {
            return false;
        };
        if self.winner.is_some() {
            return false;
        }
        if let Some(current) = self.current_turn {
            if current != player_idx {
                return false;
            }
        }
        let mover = self.players[player_idx].color();
        for row in 0..crate::BOARD_SIZE as u8 {
            for col in 0..crate::BOARD_SIZE as u8 {
                let coord = Coord::new(row, col);
                if self.board.get(coord) != Some(mover.marble()) {
                    continue;
                }
                for direction in [
                    Direction::Left,
                    Direction::Right,
                    Direction::Forward,
                    Direction::Backward,
                ] {
                    let push = PushToPlay {
                        mover,
                        coord,
                        direction,
                    };
                    if self.board.calculate(push).is_ok() {
                        return true;
                    }
                }
            }
        }
        false
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Snapshots of the board after each committed move, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// The name of the player to move, or `None` before the first move.
    pub fn current_turn(&self) -> Option<&str> {
        self.current_turn.map(|idx| self.players[idx].name())
    }

    /// The winner's name, if the game is decided.
    ///
    /// A win earned by the latest move only becomes visible after the next
    /// [`Self::make_move()`] call has evaluated the win conditions.
    pub fn winner(&self) -> Option<&str> {
        self.winner.map(|idx| self.players[idx].name())
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.player_index(name).map(|idx| &self.players[idx])
    }

    /// The number of red marbles the named player has captured.
    pub fn captured(&self, name: &str) -> Option<usize> {
        self.player(name)
            .map(|player| player.captured_count(Marble::Red))
    }

    /// The marble at the given coordinate, or `None` if the cell is empty.
    pub fn marble(&self, coord: Coord) -> Option<Marble> {
        self.board.get(coord)
    }

    /// Totals by color of the marbles still on the board.
    pub fn marble_counts(&self) -> MarbleCounts {
        self.board.marble_counts()
    }

    fn player_index(&self, name: &str) -> Option<usize> {
        self.players.iter().position(|player| player.name() == name)
    }

    fn check_win_conditions(&mut self) {
        if self.winner.is_some() {
            return;
        }
        for (idx, player) in self.players.iter().enumerate() {
            let counts = player.captured_counts();
            if counts.red >= RED_MARBLES_TO_WIN
                || counts.white >= PLAYER_MARBLES_TO_WIN
                || counts.black >= PLAYER_MARBLES_TO_WIN
            {
                self.winner = Some(idx);
                return;
            }
        }
    }
}
