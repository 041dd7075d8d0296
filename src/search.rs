//! Depth-limited minimax search with alpha-beta pruning

use static_assertions::*;

use crate::board::{Board, Player};
use crate::{COLS, ROWS};

/// The magnitude of a decided game's score, before the remaining-depth bonus
pub const WIN_SCORE: i32 = 1000;

/// The value of each of the searching player's tiles in the center column
pub const CENTER_WEIGHT: i32 = 3;

// a won or lost position must always outrank any static evaluation
const_assert!(CENTER_WEIGHT * (ROWS as i32) < WIN_SCORE);

/// Static evaluation of a position from one player's point of view
pub trait Evaluator {
    fn evaluate(&self, board: &Board, player: Player) -> i32;
}

/// Rewards occupying the center column, which lies on the most possible lines
#[derive(Copy, Clone, Default, Debug)]
pub struct CenterControl;

impl Evaluator for CenterControl {
    fn evaluate(&self, board: &Board, player: Player) -> i32 {
        board.count_in_column(COLS / 2, player) as i32 * CENTER_WEIGHT
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchResult {
    /// Score from the searching player's point of view
    pub score: i32,
    /// `None` at leaves, and at the root if it was already decided or the depth was 0
    pub best_move: Option<usize>,
}

/// A minimax searcher playing for a fixed player at a fixed depth
///
/// # Scoring
/// Positions at the search horizon are scored by the `Evaluator`. A position
/// where the side that just moved has four in a row scores `WIN_SCORE` plus the
/// remaining depth, negated if the searching player lost, so quicker wins and
/// slower losses are preferred.
pub struct Searcher<E: Evaluator = CenterControl> {
    evaluator: E,
    depth: u32,
    player: Player,

    /// The number of nodes searched by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl Searcher<CenterControl> {
    /// Creates a new `Searcher` with the center control evaluator
    pub fn new(depth: u32, player: Player) -> Self {
        Self::with_evaluator(depth, player, CenterControl)
    }
}

impl<E: Evaluator> Searcher<E> {
    pub fn with_evaluator(depth: u32, player: Player, evaluator: E) -> Self {
        Self {
            evaluator,
            depth,
            player,
            node_count: 0,
        }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn player(&self) -> Player {
        self.player
    }

    /// Searches `board` with the searching player to move
    pub fn search(&mut self, board: &Board) -> SearchResult {
        self._search(board, true)
    }

    /// Same as `search`, printing the score of every root move to stdout
    pub fn search_verbose(&mut self, board: &Board) -> SearchResult {
        self._search(board, false)
    }

    fn _search(&mut self, board: &Board, silent: bool) -> SearchResult {
        debug_assert!(
            !board.legal_moves().is_empty(),
            "search called on a board without legal moves"
        );

        if silent {
            return self.minimax(board, self.depth, i32::MIN, i32::MAX, true);
        }

        if board.has_won(self.player.opponent()) || self.depth == 0 || board.is_full() {
            return self.minimax(board, self.depth, i32::MIN, i32::MAX, true);
        }

        // root of the tree, unrolled so every child can be reported
        self.node_count += 1;

        let mut alpha = i32::MIN;
        let mut best = SearchResult {
            score: i32::MIN,
            best_move: None,
        };
        for column in board.legal_moves() {
            let mut next = *board;
            next.apply_move(column, self.player);
            let score = self.minimax(&next, self.depth - 1, alpha, i32::MAX, false).score;

            // a fail-low child only reports an upper bound
            if best.best_move.is_some() && score <= alpha {
                println!("Column {}: <= {}", column + 1, score);
            } else {
                println!("Column {}: {}", column + 1, score);
            }

            if score > best.score {
                best = SearchResult {
                    score,
                    best_move: Some(column),
                };
            }
            alpha = alpha.max(best.score);
        }
        println!(
            "Search depth: {}, positions searched: {}",
            self.depth, self.node_count
        );
        best
    }

    /// Fail-soft minimax with alpha-beta pruning
    ///
    /// `maximizing` is true when the searching player is to move.
    fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> SearchResult {
        self.node_count += 1;

        let to_move = if maximizing {
            self.player
        } else {
            self.player.opponent()
        };

        // the previous move may have ended the game, regardless of remaining depth
        if board.has_won(to_move.opponent()) {
            let score = WIN_SCORE + depth as i32;
            return SearchResult {
                score: if maximizing { -score } else { score },
                best_move: None,
            };
        }

        if depth == 0 || board.is_full() {
            return SearchResult {
                score: self.evaluator.evaluate(board, self.player),
                best_move: None,
            };
        }

        let mut best = SearchResult {
            score: if maximizing { i32::MIN } else { i32::MAX },
            best_move: None,
        };

        for column in board.legal_moves() {
            // every branch works on its own copy of the board
            let mut next = *board;
            let played = next.apply_move(column, to_move);
            debug_assert!(played);

            let score = self.minimax(&next, depth - 1, alpha, beta, !maximizing).score;

            // strict comparisons keep the lowest column among equal scores
            if maximizing {
                if score > best.score {
                    best = SearchResult {
                        score,
                        best_move: Some(column),
                    };
                }
                alpha = alpha.max(best.score);
            } else {
                if score < best.score {
                    best = SearchResult {
                        score,
                        best_move: Some(column),
                    };
                }
                beta = beta.min(best.score);
            }

            // neither player will allow this line, prune the remaining siblings
            if beta <= alpha {
                break;
            }
        }

        best
    }
}

/// Picks a column for `automated_player` with a depth-limited alpha-beta search.
///
/// The board must have at least one legal move. If the position is already
/// decided or `search_depth` is 0 the first legal column is returned, and `COLS`
/// (never a valid column) when there is none.
pub fn choose_move(board: &Board, search_depth: u32, automated_player: Player) -> usize {
    let mut searcher = Searcher::new(search_depth, automated_player);
    searcher
        .search(board)
        .best_move
        .or_else(|| board.legal_moves().first().copied())
        .unwrap_or(COLS)
}
