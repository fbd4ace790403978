//! Match clock resource
//!
//! Optional per-side countdown. Exactly one side's remaining time decreases
//! per tick, selected by the turn owner; the tick system additionally skips
//! whole frames while the engine is thinking (symmetric pause, both sides).

use bevy::prelude::*;
use shakmaty::Color;

/// Remaining time per side, in seconds. `None` means an untimed game.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct MatchClock {
    pub white_secs: Option<f32>,
    pub black_secs: Option<f32>,
    pub running: bool,
}

impl Default for MatchClock {
    fn default() -> Self {
        Self::start(None)
    }
}

impl MatchClock {
    /// Fresh clock for a match; `None` control starts a stopped, untimed
    /// clock that `tick` never touches.
    pub fn start(control: Option<f32>) -> Self {
        Self {
            white_secs: control,
            black_secs: control,
            running: control.is_some(),
        }
    }

    pub fn remaining(&self, side: Color) -> Option<f32> {
        match side {
            Color::White => self.white_secs,
            Color::Black => self.black_secs,
        }
    }

    /// Count `delta_secs` against the turn owner's clock.
    ///
    /// Returns the winner when the flag falls; the clock stops itself so a
    /// timeout is reported exactly once.
    pub fn tick(&mut self, turn_owner: Color, delta_secs: f32) -> Option<Color> {
        if !self.running {
            return None;
        }

        let slot = match turn_owner {
            Color::White => &mut self.white_secs,
            Color::Black => &mut self.black_secs,
        };
        let Some(remaining) = slot.as_mut() else {
            return None;
        };

        *remaining -= delta_secs;
        if *remaining <= 0.0 {
            *remaining = 0.0;
            self.running = false;
            return Some(turn_owner.other());
        }
        None
    }

    /// `mm:ss` display, `--:--` when untimed
    pub fn format(remaining: Option<f32>) -> String {
        match remaining {
            None => "--:--".to_string(),
            Some(secs) => {
                let secs = secs.max(0.0) as u32;
                format!("{:02}:{:02}", secs / 60, secs % 60)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_turn_owner_clock_decreases() {
        let mut clock = MatchClock::start(Some(60.0));
        clock.tick(Color::White, 1.5);

        assert_eq!(clock.white_secs, Some(58.5));
        assert_eq!(clock.black_secs, Some(60.0));
    }

    #[test]
    fn test_timeout_declares_opponent_winner_once() {
        let mut clock = MatchClock::start(Some(60.0));

        // 61 seconds of White's time elapse without a move.
        let mut winner = None;
        for _ in 0..122 {
            if let Some(w) = clock.tick(Color::White, 0.5) {
                winner = Some(w);
            }
        }

        assert_eq!(winner, Some(Color::Black));
        assert_eq!(clock.white_secs, Some(0.0));
        assert!(!clock.running);
        // A stopped clock never reports again.
        assert_eq!(clock.tick(Color::White, 10.0), None);
    }

    #[test]
    fn test_untimed_clock_never_ticks() {
        let mut clock = MatchClock::start(None);
        assert_eq!(clock.tick(Color::White, 1000.0), None);
        assert_eq!(clock.remaining(Color::White), None);
        assert!(!clock.running);
    }

    #[test]
    fn test_format() {
        assert_eq!(MatchClock::format(None), "--:--");
        assert_eq!(MatchClock::format(Some(65.7)), "01:05");
        assert_eq!(MatchClock::format(Some(0.0)), "00:00");
        assert_eq!(MatchClock::format(Some(-3.0)), "00:00");
    }
}
