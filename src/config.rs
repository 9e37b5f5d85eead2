//! Game configuration.
//!
//! A [`GameConfig`] holds everything needed to start (and restart) a game:
//! time budget, opponent strength, timer periods and the starting setup.

use std::fmt;
use std::time::Duration;

use crate::agent::ai::Difficulty;
use crate::game_repr::Color;

/// Who is playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Two humans on the same device
    #[default]
    TwoPlayer,
    /// One human against the built-in engine
    VsAi,
}

impl Mode {
    /// Maps the presentation layer's pair of toggles onto a mode. Enabling
    /// the AI wins; everything else is a two-player game.
    pub fn from_flags(ai_enabled: bool, _two_player_enabled: bool) -> Self {
        if ai_enabled {
            Mode::VsAi
        } else {
            Mode::TwoPlayer
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::TwoPlayer => f.write_str("two player"),
            Mode::VsAi => f.write_str("vs AI"),
        }
    }
}

pub const DEFAULT_CLOCK_SECS: u32 = 300;
pub const DEFAULT_AI_DELAY: Duration = Duration::from_millis(500);
pub const DEFAULT_TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Initial seconds on each clock
    pub clock_secs: u32,
    /// Plies searched by the engine
    pub search_depth: u8,
    /// Pause before the engine starts thinking
    pub ai_delay: Duration,
    /// Clock period; one second is taken off per tick
    pub tick: Duration,
    /// Side the engine plays in [`Mode::VsAi`]
    pub ai_side: Color,
    pub mode: Mode,
    /// Setup to start from instead of the standard position
    pub starting_fen: Option<String>,
    /// End the game when a clock runs out
    pub time_forfeit: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            clock_secs: DEFAULT_CLOCK_SECS,
            search_depth: Difficulty::default().max_depth(),
            ai_delay: DEFAULT_AI_DELAY,
            tick: DEFAULT_TICK,
            ai_side: Color::Black,
            mode: Mode::TwoPlayer,
            starting_fen: None,
            time_forfeit: false,
        }
    }
}

impl GameConfig {
    /// Create a configuration against the engine.
    ///
    /// # Arguments
    /// * `ai_side` - The color the engine plays
    /// * `difficulty` - Strength preset for the engine
    pub fn vs_ai(ai_side: Color, difficulty: Difficulty) -> Self {
        Self::default()
            .with_mode(Mode::VsAi)
            .with_ai_side(ai_side)
            .with_difficulty(difficulty)
    }

    pub fn with_clock_secs(mut self, secs: u32) -> Self {
        self.clock_secs = secs;
        self
    }

    pub fn with_search_depth(mut self, depth: u8) -> Self {
        self.search_depth = depth;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.search_depth = difficulty.max_depth();
        self
    }

    pub fn with_ai_delay(mut self, delay: Duration) -> Self {
        self.ai_delay = delay;
        self
    }

    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    pub fn with_ai_side(mut self, side: Color) -> Self {
        self.ai_side = side;
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_starting_fen(mut self, fen: impl Into<String>) -> Self {
        self.starting_fen = Some(fen.into());
        self
    }

    pub fn with_time_forfeit(mut self, enabled: bool) -> Self {
        self.time_forfeit = enabled;
        self
    }

    /// The human's color in a game against the engine.
    /// Returns None for two-player games.
    pub fn human_color(&self) -> Option<Color> {
        match self.mode {
            Mode::VsAi => Some(self.ai_side.opposite()),
            Mode::TwoPlayer => None,
        }
    }
}
