//! Per-side countdown clocks.
//!
//! The clocks themselves know nothing about time passing. Whoever owns the
//! tick (the orchestrator's interval task) calls [`Clocks::tick`] with the
//! side to move at that instant, so a turn change between two ticks simply
//! re-targets the next decrement.

use crate::game_repr::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clocks {
    white: u32,
    black: u32,
}

impl Clocks {
    /// Both sides start with `secs` seconds.
    pub fn new(secs: u32) -> Self {
        Self { white: secs, black: secs }
    }

    pub fn white(&self) -> u32 {
        self.white
    }

    pub fn black(&self) -> u32 {
        self.black
    }

    pub fn remaining(&self, color: Color) -> u32 {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    /// Takes one second off `color`'s clock, never going below zero.
    /// Returns the time left.
    pub fn tick(&mut self, color: Color) -> u32 {
        let clock = match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        };
        *clock = clock.saturating_sub(1);
        *clock
    }

    pub fn is_flagged(&self, color: Color) -> bool {
        self.remaining(color) == 0
    }

    pub fn reset(&mut self, secs: u32) {
        *self = Self::new(secs);
    }
}

/// Formats seconds as `m:ss`.
pub fn format_clock(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
