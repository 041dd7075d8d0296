use anyhow::{anyhow, Result};

use std::time::Duration;

use crate::board::Player;
use crate::{DEFAULT_SEARCH_DEPTH, MAX_SEARCH_DEPTH};

/// Pause before each automated move so play is easy to follow
pub const DEFAULT_THINK_DELAY: Duration = Duration::from_millis(500);

/// Settings for a session of games
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Plies searched by the computer opponent
    pub search_depth: u32,
    /// Delay before each automated move, pacing only
    pub think_delay: Duration,
    /// Whether player one and player two are automated
    pub ai_players: (bool, bool),
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.search_depth < 1 || self.search_depth > MAX_SEARCH_DEPTH {
            return Err(anyhow!(
                "Invalid search depth {}. Depth must be between 1 and {}",
                self.search_depth,
                MAX_SEARCH_DEPTH
            ));
        }
        Ok(())
    }

    pub fn is_automated(&self, player: Player) -> bool {
        match player {
            Player::One => self.ai_players.0,
            Player::Two => self.ai_players.1,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
            think_delay: DEFAULT_THINK_DELAY,
            ai_players: (false, true),
        }
    }
}
