//! Interchangeable ways of picking a move for an automated player

use rand::seq::SliceRandom;
use rand::Rng;

use std::time::{Duration, Instant};

use crate::board::{Board, Player};
use crate::search::{CenterControl, Evaluator, Searcher};
use crate::COLS;

/// Anything that can pick a column for `player` on `board`.
///
/// Callers must only ask when `board` has at least one legal move.
pub trait Strategy {
    fn choose_move(&mut self, board: &Board, player: Player) -> usize;
}

/// Diagnostics of the most recent minimax search
#[derive(Copy, Clone, Debug)]
pub struct SearchReport {
    pub column: usize,
    pub score: i32,
    pub node_count: usize,
    pub elapsed: Duration,
}

/// Alpha-beta minimax at a fixed depth
pub struct MinimaxStrategy<E: Evaluator + Clone = CenterControl> {
    depth: u32,
    evaluator: E,
    verbose: bool,
    last_report: Option<SearchReport>,
}

impl MinimaxStrategy<CenterControl> {
    pub fn new(depth: u32) -> Self {
        Self::with_evaluator(depth, CenterControl)
    }
}

impl<E: Evaluator + Clone> MinimaxStrategy<E> {
    pub fn with_evaluator(depth: u32, evaluator: E) -> Self {
        Self {
            depth,
            evaluator,
            verbose: false,
            last_report: None,
        }
    }

    /// Print the score of every root move while searching
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn last_report(&self) -> Option<SearchReport> {
        self.last_report
    }
}

impl<E: Evaluator + Clone> Strategy for MinimaxStrategy<E> {
    fn choose_move(&mut self, board: &Board, player: Player) -> usize {
        let mut searcher = Searcher::with_evaluator(self.depth, player, self.evaluator.clone());

        let start = Instant::now();
        let result = if self.verbose {
            searcher.search_verbose(board)
        } else {
            searcher.search(board)
        };
        let elapsed = start.elapsed();

        let column = result
            .best_move
            .or_else(|| board.legal_moves().first().copied())
            .unwrap_or(COLS);

        self.last_report = Some(SearchReport {
            column,
            score: result.score,
            node_count: searcher.node_count,
            elapsed,
        });
        column
    }
}

/// Picks uniformly among the legal columns
pub struct RandomStrategy<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomStrategy<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Strategy for RandomStrategy<R> {
    fn choose_move(&mut self, board: &Board, _player: Player) -> usize {
        board
            .legal_moves()
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(COLS)
    }
}
