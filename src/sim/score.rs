//! Score, level and speed progression
//!
//! Pure bookkeeping: knows nothing about collisions. The tick calls
//! [`ScoreKeeper::increment`] once per newly visited platform and
//! [`ScoreKeeper::tick`] once per frame.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Speed multiplier growth per level
pub const SPEED_GROWTH: f32 = 1.2;

/// Round to one decimal place
#[inline]
pub fn round1(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

/// What a single score increment changed
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IncrementOutcome {
    /// Points added
    pub points: u64,
    /// New level, if this increment levelled up
    pub level_up: Option<u32>,
    /// Booster (re)activated by this increment
    pub booster_activated: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreKeeper {
    score: u64,
    high_score: u64,
    base_increment: u64,
    multiplier: u64,
    speed_multiplier: f32,
    level: u32,
    paused: bool,

    // Booster / combo
    booster_on: bool,
    booster_since: f32,
    booster_threshold: f32,
    booster_lifetime: f32,

    /// Simulation clock (ms)
    clock: f32,
    last_increment_at: f32,
    visited_since_level_up: u32,
    platforms_per_level: u32,
}

impl ScoreKeeper {
    /// Fresh progression with a previously persisted high score
    pub fn new(config: &GameConfig, high_score: u64) -> Self {
        Self {
            score: 0,
            high_score,
            base_increment: config.score_increment,
            multiplier: 1,
            speed_multiplier: 1.0,
            level: 1,
            paused: false,
            booster_on: false,
            booster_since: 0.0,
            booster_threshold: config.booster_threshold,
            booster_lifetime: config.booster_lifetime,
            clock: 0.0,
            last_increment_at: 0.0,
            visited_since_level_up: 0,
            platforms_per_level: config.level_number_of_platforms,
        }
    }

    /// Award points for one newly visited platform
    pub fn increment(&mut self) -> IncrementOutcome {
        let points = self.base_increment.saturating_mul(self.multiplier);
        self.score = self.score.saturating_add(points);

        let booster_activated = self.clock - self.last_increment_at <= self.booster_threshold;
        if booster_activated {
            self.booster_on = true;
            self.booster_since = self.clock;
        }
        self.last_increment_at = self.clock;

        self.visited_since_level_up += 1;
        let level_up = if self.visited_since_level_up >= self.platforms_per_level {
            self.visited_since_level_up = 0;
            self.speed_multiplier = round1(self.speed_multiplier * SPEED_GROWTH);
            self.level += 1;
            log::info!(
                "Level {} reached, speed x{}",
                self.level,
                self.speed_multiplier
            );
            Some(self.level)
        } else {
            None
        };

        IncrementOutcome {
            points,
            level_up,
            booster_activated,
        }
    }

    /// Double the points per platform.
    ///
    /// Nothing in the frame loop calls this; it is a hook for future bonuses.
    pub fn double_multiplier(&mut self) {
        self.multiplier = self.multiplier.saturating_mul(2);
    }

    /// Advance the clock. Returns true if the booster expired this tick.
    pub fn tick(&mut self, delta: f32) -> bool {
        self.clock += delta;
        if self.booster_on && self.clock - self.booster_since > self.booster_lifetime {
            self.booster_on = false;
            return true;
        }
        false
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Returns the new high score if the current score beats the stored one
    pub fn record_high_score(&mut self) -> Option<u64> {
        if self.score > self.high_score {
            self.high_score = self.score;
            Some(self.score)
        } else {
            None
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn multiplier(&self) -> u64 {
        self.multiplier
    }

    /// Speed multiplier as applied to the field: zero while paused
    pub fn speed_multiplier(&self) -> f32 {
        if self.paused {
            0.0
        } else {
            self.speed_multiplier
        }
    }

    /// Speed multiplier regardless of pause
    pub fn base_speed_multiplier(&self) -> f32 {
        self.speed_multiplier
    }

    pub fn booster_on(&self) -> bool {
        self.booster_on
    }

    pub fn clock(&self) -> f32 {
        self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn keeper() -> ScoreKeeper {
        ScoreKeeper::new(&GameConfig::default(), 0)
    }

    #[test]
    fn test_five_visits_level_up() {
        let mut s = keeper();
        // Space increments out so the booster stays off
        for i in 0..5 {
            s.tick(1000.0);
            let out = s.increment();
            if i < 4 {
                assert_eq!(out.level_up, None);
            } else {
                assert_eq!(out.level_up, Some(2));
            }
        }
        assert_eq!(s.score(), 50);
        assert_eq!(s.level(), 2);
        assert!((s.speed_multiplier() - 1.2).abs() < 1e-6);
    }

    #[test]
    fn test_speed_rounding() {
        let mut s = keeper();
        for _ in 0..15 {
            s.increment();
        }
        // 1.0 -> 1.2 -> 1.4 (1.44) -> 1.7 (1.68)
        assert_eq!(s.level(), 4);
        assert!((s.speed_multiplier() - 1.7).abs() < 1e-6);
    }

    #[test]
    fn test_booster_activation_and_expiry() {
        let mut s = keeper();
        s.tick(1000.0);
        s.increment();
        assert!(!s.booster_on());

        s.tick(200.0);
        let out = s.increment();
        assert!(out.booster_activated);
        assert!(s.booster_on());

        assert!(!s.tick(5000.0));
        assert!(s.tick(1.0));
        assert!(!s.booster_on());

        let out = s.increment();
        assert!(!out.booster_activated);
        assert!(!s.booster_on());
    }

    #[test]
    fn test_booster_extends_on_each_combo() {
        let mut s = keeper();
        s.tick(1000.0);
        s.increment();
        s.tick(400.0);
        s.increment();
        s.tick(400.0);
        s.increment();
        // Last activation was at 1800; 4900ms later it is still alive
        s.tick(4900.0);
        assert!(s.booster_on());
    }

    #[test]
    fn test_double_multiplier() {
        let mut s = keeper();
        s.double_multiplier();
        s.increment();
        assert_eq!(s.score(), 20);
        assert_eq!(s.multiplier(), 2);
    }

    #[test]
    fn test_repeated_doubling_saturates() {
        let mut s = keeper();
        for _ in 0..70 {
            s.double_multiplier();
        }
        assert_eq!(s.multiplier(), u64::MAX);
        s.increment();
        s.increment();
        assert_eq!(s.score(), u64::MAX);
    }

    #[test]
    fn test_pause_zeroes_effective_speed() {
        let mut s = keeper();
        for _ in 0..5 {
            s.increment();
        }
        s.pause();
        assert_eq!(s.speed_multiplier(), 0.0);
        assert!((s.base_speed_multiplier() - 1.2).abs() < 1e-6);
        s.pause();
        s.resume();
        assert!((s.speed_multiplier() - 1.2).abs() < 1e-6);
    }

    #[test]
    fn test_record_high_score() {
        let mut s = ScoreKeeper::new(&GameConfig::default(), 30);
        s.increment();
        s.increment();
        assert_eq!(s.record_high_score(), None);
        assert_eq!(s.high_score(), 30);

        s.increment();
        s.increment();
        assert_eq!(s.record_high_score(), Some(40));
        assert_eq!(s.high_score(), 40);
        // Equal is not a new record
        assert_eq!(s.record_high_score(), None);
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(1.44), 1.4);
        assert_eq!(round1(1.68), 1.7);
        assert_eq!(round1(2.04), 2.0);
    }

    proptest! {
        #[test]
        fn prop_speed_monotonic(gaps in prop::collection::vec(0.0f32..3000.0, 1..80)) {
            let mut s = keeper();
            let mut last = s.speed_multiplier();
            let mut last_score = s.score();
            for gap in gaps {
                s.tick(gap);
                s.increment();
                prop_assert!(s.speed_multiplier() >= last);
                prop_assert!(s.score() > last_score);
                last = s.speed_multiplier();
                last_score = s.score();
            }
        }

        #[test]
        fn prop_pause_resume_restores(visits in 0usize..40, pauses in 1usize..4) {
            let mut s = keeper();
            for _ in 0..visits {
                s.increment();
            }
            let before = s.speed_multiplier();
            for _ in 0..pauses {
                s.pause();
            }
            s.resume();
            prop_assert_eq!(s.speed_multiplier(), before);
        }

        #[test]
        fn prop_high_score_law(stored in 0u64..200, visits in 0usize..30) {
            let mut s = ScoreKeeper::new(&GameConfig::default(), stored);
            for _ in 0..visits {
                s.increment();
            }
            s.record_high_score();
            prop_assert_eq!(s.high_score(), stored.max(visits as u64 * 10));
        }
    }
}
