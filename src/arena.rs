//! Automated matches between the minimax player and the random player

use anyhow::Result;
use indicatif::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::board::Player;
use crate::game::{Game, Status};
use crate::strategy::{MinimaxStrategy, RandomStrategy, Strategy};

/// Tally of a batch of arena games
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct ArenaReport {
    pub games: usize,
    pub searcher_wins: usize,
    pub random_wins: usize,
    pub draws: usize,
    /// Total moves played over all games
    pub plies: usize,
}

impl ArenaReport {
    fn merge(self, other: Self) -> Self {
        Self {
            games: self.games + other.games,
            searcher_wins: self.searcher_wins + other.searcher_wins,
            random_wins: self.random_wins + other.random_wins,
            draws: self.draws + other.draws,
            plies: self.plies + other.plies,
        }
    }
}

/// Plays a full game between two strategies, returning the final status and the game
pub fn play_game<'a>(one: &'a mut dyn Strategy, two: &'a mut dyn Strategy) -> Result<(Status, Game)> {
    let mut game = Game::new();
    loop {
        let strategy = match game.to_move() {
            Player::One => &mut *one,
            Player::Two => &mut *two,
        };
        let (_, status) = game.request_automated_move(strategy)?;
        if status.is_over() {
            return Ok((status, game));
        }
    }
}

/// Plays `games` games of minimax at `depth` against random play, in parallel
///
/// The searcher takes player one in even-numbered games and player two in odd
/// ones. Each game's random player is seeded from the game's index so a run
/// can be repeated exactly.
pub fn run(games: usize, depth: u32, show_progress: bool) -> Result<ArenaReport> {
    let progress = if show_progress {
        ProgressBar::new(games as u64)
    } else {
        ProgressBar::hidden()
    };
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Arena games: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    let report = (0..games)
        .into_par_iter()
        .map(|index| -> Result<ArenaReport> {
            let mut searcher = MinimaxStrategy::new(depth);
            let mut random = RandomStrategy::new(StdRng::seed_from_u64(index as u64));

            let searcher_seat = if index % 2 == 0 {
                Player::One
            } else {
                Player::Two
            };
            let (status, game) = match searcher_seat {
                Player::One => play_game(&mut searcher, &mut random)?,
                Player::Two => play_game(&mut random, &mut searcher)?,
            };
            progress.inc(1);

            let mut report = ArenaReport {
                games: 1,
                plies: game.board().num_moves(),
                ..ArenaReport::default()
            };
            match status {
                Status::Won(player) if player == searcher_seat => report.searcher_wins += 1,
                Status::Won(_) => report.random_wins += 1,
                _ => report.draws += 1,
            }
            Ok(report)
        })
        .try_reduce(ArenaReport::default, |a, b| Ok(a.merge(b)))?;

    progress.finish();
    Ok(report)
}
