use anyhow::{anyhow, Result};

use std::fmt;

use crate::{COLS, CONNECT, ROWS};

/// The two sides of a game. Player One always moves first.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// 1 or 2, for display
    pub fn number(self) -> usize {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameOutcome {
    InProgress,
    Win(Player),
    Draw,
}

// (row delta, column delta) for horizontal, vertical and both diagonals
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// A 6x7 Connect 4 grid
///
/// Row 0 is the top of the board and row `ROWS - 1` the bottom, tiles fall
/// towards the highest row index. The board is `Copy` so that search can
/// explore hypothetical positions on its own copies.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    num_moves: usize,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; COLS]; ROWS],
            num_moves: 0,
        }
    }

    /// Builds a board from a string of 1-indexed column digits, e.g. "4453".
    ///
    /// Moves alternate starting with Player One. Fails on characters that are not
    /// columns, on full columns, and on moves played after the game was won.
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();
        let mut player = Player::One;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=COLS) => {
                    if board.has_won(player.opponent()) {
                        return Err(anyhow!("Invalid position, game is over"));
                    }
                    if !board.apply_move(column - 1, player) {
                        return Err(anyhow!("Invalid move, column {} full", column));
                    }
                    player = player.opponent();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    /// The contents of a single cell
    ///
    /// # Panics
    ///
    /// Panics if `row >= ROWS` or `column >= COLS`.
    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    /// The number of tiles on the board
    pub fn num_moves(&self) -> usize {
        self.num_moves
    }

    /// The player whose turn it is, assuming strict alternation from Player One
    pub fn next_player(&self) -> Player {
        if self.num_moves % 2 == 0 {
            Player::One
        } else {
            Player::Two
        }
    }

    /// The row a tile dropped into `column` would land on, if there is room
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        if column >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][column].is_empty())
    }

    pub fn playable(&self, column: usize) -> bool {
        column < COLS && self.cells[0][column].is_empty()
    }

    /// Drops a tile for `player` into `column`.
    ///
    /// Returns `false` and leaves the board untouched if the column is full or
    /// out of range.
    pub fn apply_move(&mut self, column: usize, player: Player) -> bool {
        match self.landing_row(column) {
            Some(row) => {
                self.cells[row][column] = Cell::Occupied(player);
                self.num_moves += 1;
                true
            }
            None => false,
        }
    }

    /// All playable columns in ascending order
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..COLS).filter(|&column| self.playable(column)).collect()
    }

    /// Whether `player` has `CONNECT` tiles in a line anywhere on the board
    pub fn has_won(&self, player: Player) -> bool {
        let tile = Cell::Occupied(player);

        for row in 0..ROWS {
            for column in 0..COLS {
                if self.cells[row][column] != tile {
                    continue;
                }
                // only extend forwards, a run is always found from its first tile
                for &(dr, dc) in DIRECTIONS.iter() {
                    if (1..CONNECT).all(|i| self.is(row, column, dr * i as isize, dc * i as isize, tile)) {
                        return true;
                    }
                }
            }
        }
        false
    }

    fn is(&self, row: usize, column: usize, dr: isize, dc: isize, tile: Cell) -> bool {
        let r = row as isize + dr;
        let c = column as isize + dc;
        if r < 0 || r >= ROWS as isize || c < 0 || c >= COLS as isize {
            return false;
        }
        self.cells[r as usize][c as usize] == tile
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Whether every cell is taken. Only meaningful once a win has been ruled out.
    pub fn is_draw(&self) -> bool {
        self.is_full()
    }

    /// The state of the game right after `last_mover` played
    pub fn outcome(&self, last_mover: Player) -> GameOutcome {
        if self.has_won(last_mover) {
            GameOutcome::Win(last_mover)
        } else if self.is_draw() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }

    /// The number of `player`'s tiles in `column`, zero for an out-of-range column
    pub fn count_in_column(&self, column: usize, player: Player) -> usize {
        if column >= COLS {
            return 0;
        }
        self.cells
            .iter()
            .filter(|row| row[column] == Cell::Occupied(player))
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.iter() {
            for cell in row.iter() {
                let symbol = match cell {
                    Cell::Empty => '.',
                    Cell::Occupied(Player::One) => 'X',
                    Cell::Occupied(Player::Two) => 'O',
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        let columns: String = (1..=COLS).map(|x| x.to_string()).collect();
        write!(f, "{}", columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_fall_to_the_bottom() {
        let mut board = Board::new();
        assert!(board.apply_move(2, Player::One));
        assert!(board.apply_move(2, Player::Two));

        assert_eq!(board.cell(ROWS - 1, 2), Cell::Occupied(Player::One));
        assert_eq!(board.cell(ROWS - 2, 2), Cell::Occupied(Player::Two));
        assert_eq!(board.cell(ROWS - 3, 2), Cell::Empty);
        assert_eq!(board.num_moves(), 2);
    }

    #[test]
    fn full_column_is_rejected() {
        let mut board = Board::new();
        for i in 0..ROWS {
            let player = if i % 2 == 0 { Player::One } else { Player::Two };
            assert!(board.apply_move(0, player));
        }
        let before = board;
        assert!(!board.apply_move(0, Player::One));
        assert_eq!(board, before);
        assert!(!board.playable(0));
    }

    #[test]
    fn out_of_range_column_is_rejected() {
        let mut board = Board::new();
        assert!(!board.apply_move(COLS, Player::One));
        assert_eq!(board, Board::new());
        assert_eq!(board.landing_row(COLS), None);
    }

    #[test]
    fn legal_moves_skip_full_columns() {
        let board = Board::from_moves("111111").unwrap();
        assert_eq!(board.legal_moves(), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(Board::new().legal_moves(), (0..COLS).collect::<Vec<_>>());
    }

    #[test]
    fn horizontal_win() {
        // X X X X along the bottom from column 2
        let board = Board::from_moves("3344556").unwrap();
        assert!(board.has_won(Player::One));
        assert!(!board.has_won(Player::Two));
    }

    #[test]
    fn diagonal_wins() {
        // rising to the right from the bottom left
        let board = Board::from_moves("12234334544").unwrap();
        assert!(board.has_won(Player::One));

        // rising to the left from the bottom right
        let board = Board::from_moves("76654554344").unwrap();
        assert!(board.has_won(Player::One));
    }

    #[test]
    fn three_in_a_row_is_not_a_win() {
        let board = Board::from_moves("334455").unwrap();
        assert!(!board.has_won(Player::One));
        assert!(!board.has_won(Player::Two));
        assert_eq!(board.outcome(Player::Two), GameOutcome::InProgress);
    }

    #[test]
    fn win_does_not_wrap_around_edges() {
        let mut board = Board::new();
        // bottom row columns 5 and 6, then row above columns 0 and 1
        board.apply_move(5, Player::One);
        board.apply_move(6, Player::One);
        board.apply_move(0, Player::Two);
        board.apply_move(1, Player::Two);
        board.apply_move(0, Player::One);
        board.apply_move(1, Player::One);
        assert!(!board.has_won(Player::One));
    }

    #[test]
    fn parse_errors() {
        assert!(Board::from_moves("8").is_err());
        assert!(Board::from_moves("0").is_err());
        assert!(Board::from_moves("4a").is_err());
        assert!(Board::from_moves("1111111").is_err());
        // Player One has already won vertically
        assert!(Board::from_moves("12121215").is_err());
    }

    #[test]
    fn column_queries_outside_the_board() {
        let board = Board::from_moves("4444").unwrap();
        assert_eq!(board.count_in_column(3, Player::One), 2);
        assert_eq!(board.count_in_column(COLS, Player::One), 0);
        assert_eq!(board.landing_row(COLS), None);
        assert!(!board.playable(COLS));
    }

    #[test]
    #[should_panic]
    fn cell_outside_the_board_panics() {
        Board::new().cell(0, COLS);
    }

    #[test]
    fn next_player_alternates() {
        assert_eq!(Board::new().next_player(), Player::One);
        assert_eq!(Board::from_moves("4").unwrap().next_player(), Player::Two);
    }

    #[test]
    fn display() {
        let board = Board::from_moves("44").unwrap();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), ROWS + 1);
        assert_eq!(lines[ROWS - 1], "...X...");
        assert_eq!(lines[ROWS - 2], "...O...");
        assert_eq!(lines[ROWS], "1234567");
    }
}
