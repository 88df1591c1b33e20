//! Fixed-rate simulation tick and the throttled frame clock
//!
//! The host calls [`FrameClock::on_frame`] from its display-refresh
//! callback. Logical updates are throttled to the fixed tick period by
//! timestamp comparison: a callback that arrives early is absorbed without
//! advancing simulation state, and the render for that callback is skipped
//! rather than repeated.

use super::round::{Outcome, Round};
use crate::consts::{GRACE_MS, TICK_MS};

/// Advance every living vehicle by one logical tick.
///
/// Vehicles move strictly in registration order, and the obstacle list is
/// rebuilt before each test, so the second vehicle sees the first one's
/// committed movement from this same tick. Dead vehicles neither move nor
/// collide; their trails remain on the grid.
pub fn tick(round: &mut Round) {
    for index in 0..round.vehicles.len() {
        if !round.vehicles[index].alive {
            continue;
        }
        round.move_vehicle(index);
    }
}

/// What a single host callback produced
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameStatus {
    /// Round is not running; nothing to do
    Idle,
    /// Callback arrived early; no logical update, skip the render
    Skipped,
    /// One logical tick was processed; render the new state
    Ticked,
    /// The grace window elapsed and the round has been scored
    RoundOver(Outcome),
}

/// Throttles display-refresh callbacks down to the logical tick rate and
/// scores the round once the post-death grace window has elapsed.
#[derive(Debug, Default)]
pub struct FrameClock {
    last_tick: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drive `round` from a host callback stamped `now` (milliseconds).
    ///
    /// At most one logical tick is processed per callback. The first
    /// callback after a start only arms the clock. Once any vehicle has
    /// died, ticking continues until the grace window has elapsed since the
    /// first death, then the round is scored — so a near-simultaneous
    /// second death still counts as a tie.
    pub fn on_frame(&mut self, round: &mut Round, now: f64) -> FrameStatus {
        if !round.running {
            return FrameStatus::Idle;
        }
        let last = *self.last_tick.get_or_insert(now);

        let mut status = FrameStatus::Skipped;
        if now - TICK_MS > last {
            self.last_tick = Some(now);
            tick(round);
            // First death arms the grace window; later deaths never move it
            if round.death_timestamp.is_none() && round.vehicles.iter().any(|v| !v.alive) {
                round.death_timestamp = Some(now);
            }
            status = FrameStatus::Ticked;
        }

        if let Some(death) = round.death_timestamp {
            if now - GRACE_MS > death {
                let outcome = round.finish();
                self.last_tick = None;
                return FrameStatus::RoundOver(outcome);
            }
        }
        status
    }

    /// Stop the round between ticks. Idempotent; clears both timestamps so
    /// the next start begins with a fresh clock.
    pub fn stop(&mut self, round: &mut Round) {
        round.running = false;
        round.death_timestamp = None;
        self.last_tick = None;
        log::debug!("frame clock stopped");
    }
}
