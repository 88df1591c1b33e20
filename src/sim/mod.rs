//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed logical tick rate; timestamps are passed in by the host
//! - Stable vehicle order (registration order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod round;
pub mod segment;
pub mod state;
pub mod tick;

pub use collision::collides;
pub use round::{GameEvent, Outcome, Round, VehicleId};
pub use segment::Segment;
pub use state::{Arena, Axis, BikeColor, Direction, Spawn, Vehicle};
pub use tick::{FrameClock, FrameStatus, tick};
