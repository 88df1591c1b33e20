//! Neon Cycles - a two-player light-cycle arena game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (vehicles, trails, collisions, round lifecycle)
//! - `settings`: Speed preset and audio preferences
//!
//! Menus, rendering and audio output are host concerns. The core consumes
//! discrete intents (register player, set direction, start round) and emits
//! per-tick state plus cue events; see [`sim::Round`] and [`sim::FrameClock`].

pub mod settings;
pub mod sim;

pub use settings::{Settings, SpeedPreset};

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (logical units, not pixels)
    pub const ARENA_WIDTH: f32 = 1200.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Vehicle body extent. The length runs along the direction of travel
    /// and sets the leading edge; the width only orients the sprite.
    pub const VEHICLE_WIDTH: f32 = 40.0;
    pub const VEHICLE_LENGTH: f32 = 75.0;

    /// Movement per logical tick
    pub const NORMAL_SPEED: f32 = 3.0;
    pub const LUDICROUS_SPEED: f32 = 8.0;

    /// Logical tick period (60 ticks per second)
    pub const TICK_MS: f64 = 1000.0 / 60.0;
    /// Delay after the first death before the round is scored, so a
    /// near-simultaneous second death still registers as a tie.
    pub const GRACE_MS: f64 = 100.0;
}
