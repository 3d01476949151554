//! Staggered fade-in for result cards.
//!
//! Every time the visible list changes the reveal clock restarts. Card `i`
//! stays hidden until `i * stagger`, is drawn dimmed for `fade` after that and
//! is fully shown afterwards.
use std::time::{Duration, Instant};

/// Default delay between consecutive cards.
pub const DEFAULT_STAGGER: Duration = Duration::from_millis(70);
/// How long a single card spends fading in.
pub const FADE_DURATION: Duration = Duration::from_millis(560);

/// Visual phase of one card at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPhase {
    Hidden,
    Fading,
    Shown,
}

/// Reveal clock for the result list.
#[derive(Debug, Clone)]
pub struct FadeIn {
    enabled: bool,
    stagger: Duration,
    started: Instant,
}

impl FadeIn {
    pub fn new(enabled: bool, stagger: Duration) -> Self {
        Self {
            enabled,
            stagger,
            started: Instant::now(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Restart the reveal, e.g. after the query or category changed.
    pub fn restart(&mut self) {
        self.started = Instant::now();
    }

    /// Phase of card `index` right now.
    pub fn phase(&self, index: usize) -> CardPhase {
        self.phase_at(index, self.started.elapsed())
    }

    /// Phase of card `index` after `elapsed` since the restart.
    pub fn phase_at(&self, index: usize, elapsed: Duration) -> CardPhase {
        if !self.enabled {
            return CardPhase::Shown;
        }
        let delay = self.stagger.saturating_mul(index.min(u32::MAX as usize) as u32);
        if elapsed < delay {
            CardPhase::Hidden
        } else if elapsed < delay.saturating_add(FADE_DURATION) {
            CardPhase::Fading
        } else {
            CardPhase::Shown
        }
    }

    /// Whether any of the first `count` cards is still animating.
    pub fn is_animating(&self, count: usize) -> bool {
        self.is_animating_at(count, self.started.elapsed())
    }

    pub fn is_animating_at(&self, count: usize, elapsed: Duration) -> bool {
        count > 0 && self.phase_at(count - 1, elapsed) != CardPhase::Shown
    }
}
