//! A game engine and computer opponent for the board game 'Connect 4'
//!
//! The computer opponent uses a depth-limited minimax search with
//! alpha-beta pruning to pick its moves.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{board::{Board, Player}, search::choose_move};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // Player One has three stacked in the center column
//! let board = Board::from_moves("454545")?;
//! let best_move = choose_move(&board, 4, Player::One);
//!
//! assert_eq!(best_move, 3);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod search;

pub mod strategy;

pub mod game;

pub mod config;

pub mod arena;


/// The number of rows on the game board
pub const ROWS: usize = 6;

/// The number of columns on the game board
pub const COLS: usize = 7;

/// The number of tiles in a row needed to win
pub const CONNECT: usize = 4;

/// The search depth used by the computer opponent unless configured otherwise
pub const DEFAULT_SEARCH_DEPTH: u32 = 6;

/// The deepest search the configuration accepts
pub const MAX_SEARCH_DEPTH: u32 = 12;

// a win must be possible in every direction
const_assert!(ROWS >= CONNECT && COLS >= CONNECT);
const_assert!(MAX_SEARCH_DEPTH as usize <= ROWS * COLS);
