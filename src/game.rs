//! The authoritative state of one game and its turn sequencing

use thiserror::Error;

use crate::board::{Board, GameOutcome, Player};
use crate::strategy::Strategy;
use crate::COLS;

/// Where the game stands after a move
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Status {
    InProgress { next: Player },
    Won(Player),
    Draw,
}

impl Status {
    pub fn is_over(&self) -> bool {
        !matches!(self, Status::InProgress { .. })
    }
}

/// A move that was refused. The board is left untouched.
///
/// Columns are reported 1-indexed, as players see them.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Error)]
pub enum IllegalMove {
    #[error("Invalid move, column {} out of range. Columns must be between 1 and {}", .column.wrapping_add(1), COLS)]
    OutOfRange { column: usize },
    #[error("Invalid move, column {} full", .column + 1)]
    ColumnFull { column: usize },
    #[error("Invalid move, the game is already over")]
    GameOver,
}

/// One game of Connect 4
///
/// Every move runs through the same sequence: apply the move, check whether the
/// mover won, check for a draw, then hand the turn to the other player.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: Status,
    /// 1-indexed columns played so far, readable by `Board::from_moves`
    history: String,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::One,
            status: Status::InProgress { next: Player::One },
            history: String::new(),
        }
    }

    /// Starts over from an empty board with Player One to move
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn history(&self) -> &str {
        &self.history
    }

    /// Plays `column` (0-indexed) for the player to move
    pub fn submit_human_move(&mut self, column: usize) -> Result<Status, IllegalMove> {
        self.play(column)
    }

    /// Asks `strategy` for a move for the player to move and plays it
    ///
    /// Returns the column played alongside the new status. A finished game is
    /// refused before the strategy is consulted, so it never searches a board
    /// without legal moves.
    pub fn request_automated_move<S: Strategy + ?Sized>(
        &mut self,
        strategy: &mut S,
    ) -> Result<(usize, Status), IllegalMove> {
        if self.status.is_over() {
            return Err(IllegalMove::GameOver);
        }
        let column = strategy.choose_move(&self.board, self.to_move);
        let status = self.play(column)?;
        Ok((column, status))
    }

    fn play(&mut self, column: usize) -> Result<Status, IllegalMove> {
        if self.status.is_over() {
            return Err(IllegalMove::GameOver);
        }
        if column >= COLS {
            return Err(IllegalMove::OutOfRange { column });
        }
        if !self.board.apply_move(column, self.to_move) {
            return Err(IllegalMove::ColumnFull { column });
        }
        self.history.push_str(&(column + 1).to_string());

        self.status = match self.board.outcome(self.to_move) {
            GameOutcome::Win(player) => Status::Won(player),
            GameOutcome::Draw => Status::Draw,
            GameOutcome::InProgress => {
                self.to_move = self.to_move.opponent();
                Status::InProgress {
                    next: self.to_move,
                }
            }
        };
        Ok(self.status)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::MinimaxStrategy;

    #[test]
    fn turns_alternate() {
        let mut game = Game::new();
        assert_eq!(
            game.submit_human_move(3),
            Ok(Status::InProgress { next: Player::Two })
        );
        assert_eq!(
            game.submit_human_move(3),
            Ok(Status::InProgress { next: Player::One })
        );
        assert_eq!(game.history(), "44");
    }

    #[test]
    fn illegal_moves_keep_the_turn() {
        let mut game = Game::new();
        assert_eq!(
            game.submit_human_move(COLS),
            Err(IllegalMove::OutOfRange { column: COLS })
        );
        for _ in 0..6 {
            game.submit_human_move(0).unwrap();
        }
        let before = *game.board();
        assert_eq!(
            game.submit_human_move(0),
            Err(IllegalMove::ColumnFull { column: 0 })
        );
        assert_eq!(*game.board(), before);
        assert_eq!(game.to_move(), Player::One);
    }

    #[test]
    fn error_messages_are_one_indexed() {
        assert_eq!(
            IllegalMove::ColumnFull { column: 0 }.to_string(),
            "Invalid move, column 1 full"
        );
        assert_eq!(
            IllegalMove::OutOfRange { column: 7 }.to_string(),
            "Invalid move, column 8 out of range. Columns must be between 1 and 7"
        );
    }

    #[test]
    fn column_zero_is_out_of_range() {
        let mut game = Game::new();
        let column = 0usize.wrapping_sub(1);
        let err = game.submit_human_move(column).unwrap_err();
        assert_eq!(err, IllegalMove::OutOfRange { column });
        assert_eq!(
            err.to_string(),
            "Invalid move, column 0 out of range. Columns must be between 1 and 7"
        );
        assert_eq!(game.board().num_moves(), 0);
    }

    #[test]
    fn win_ends_the_game() {
        let mut game = Game::new();
        for column in [0, 1, 0, 1, 0, 1].iter() {
            game.submit_human_move(*column).unwrap();
        }
        assert_eq!(game.submit_human_move(0), Ok(Status::Won(Player::One)));
        // the winner keeps the turn, nobody can move any more
        assert_eq!(game.to_move(), Player::One);
        assert_eq!(game.submit_human_move(2), Err(IllegalMove::GameOver));

        let mut strategy = MinimaxStrategy::new(2);
        assert_eq!(
            game.request_automated_move(&mut strategy),
            Err(IllegalMove::GameOver)
        );
        assert!(strategy.last_report().is_none());
    }

    #[test]
    fn automated_move_is_applied() {
        let mut game = Game::new();
        game.submit_human_move(3).unwrap();
        let mut strategy = MinimaxStrategy::new(2);
        let (column, status) = game.request_automated_move(&mut strategy).unwrap();

        assert!(column < COLS);
        assert_eq!(status, Status::InProgress { next: Player::One });
        assert_eq!(game.board().num_moves(), 2);
    }

    #[test]
    fn reset_clears_the_board() {
        let mut game = Game::new();
        game.submit_human_move(3).unwrap();
        game.reset();
        assert_eq!(*game.board(), Board::new());
        assert_eq!(game.status(), Status::InProgress { next: Player::One });
        assert!(game.history().is_empty());
    }
}
