//! Vehicle state and core simulation types
//!
//! A vehicle owns its position, heading and trail history. The trail is a
//! polyline: `trail_points` records every spot where the vehicle spawned or
//! turned, and each accepted turn commits the stretch since the previous
//! point into one of the two per-axis wall lists. The stretch from the last
//! point to the live position (the in-flight segment) is never stored; it is
//! rebuilt on demand.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::segment::Segment;
use crate::consts::{VEHICLE_LENGTH, VEHICLE_WIDTH};

/// A coordinate axis of the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Component of `p` on this axis
    #[inline]
    pub fn of(self, p: Vec2) -> f32 {
        match self {
            Axis::X => p.x,
            Axis::Y => p.y,
        }
    }

    #[inline]
    pub fn other(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// Heading of a vehicle. Exactly one is active at any instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Axis of travel
    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Y,
            Direction::Left | Direction::Right => Axis::X,
        }
    }

    /// Sign of travel along the axis. Screen convention: y grows downward,
    /// so Up is negative.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Up | Direction::Left => -1.0,
            Direction::Down | Direction::Right => 1.0,
        }
    }

    pub fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Unit step vector for one tick of travel
    pub fn step(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Right => Vec2::new(1.0, 0.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
        }
    }
}

/// The fixed bike palette offered in the lobby
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BikeColor {
    #[default]
    Red,
    Blue,
    Green,
}

impl BikeColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            BikeColor::Red => "red",
            BikeColor::Blue => "blue",
            BikeColor::Green => "green",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" => Some(BikeColor::Red),
            "blue" => Some(BikeColor::Blue),
            "green" => Some(BikeColor::Green),
            _ => None,
        }
    }
}

/// Rectangular arena bounds; immutable for the session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: crate::consts::ARENA_WIDTH,
            height: crate::consts::ARENA_HEIGHT,
        }
    }
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Upper bound along the given axis (the lower bound is always 0)
    #[inline]
    pub fn extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }
}

/// Immutable spawn snapshot, used to put a vehicle back for a replay
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spawn {
    pub position: Vec2,
    pub direction: Direction,
}

/// A player's vehicle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub name: String,
    pub color: BikeColor,
    /// Body extent perpendicular to travel; presentation data only
    pub width: f32,
    /// Body extent along travel; sets the leading edge for collision
    pub length: f32,
    pub position: Vec2,
    pub direction: Direction,
    pub alive: bool,
    /// Every point where the vehicle spawned or changed direction
    pub trail_points: Vec<Vec2>,
    /// Committed walls running along the y axis
    pub vertical_lines: Vec<Segment>,
    /// Committed walls running along the x axis
    pub horizontal_lines: Vec<Segment>,
    pub spawn: Spawn,
}

impl Vehicle {
    pub fn new(name: &str, color: BikeColor, spawn: Spawn) -> Self {
        Self {
            name: name.to_string(),
            color,
            width: VEHICLE_WIDTH,
            length: VEHICLE_LENGTH,
            position: spawn.position,
            direction: spawn.direction,
            alive: true,
            // A point is recorded at spawn so the trail is never empty
            trail_points: vec![spawn.position],
            vertical_lines: Vec::new(),
            horizontal_lines: Vec::new(),
            spawn,
        }
    }

    /// Request a heading change.
    ///
    /// Silent no-op when the vehicle is dead, when the request repeats the
    /// current heading, or when it reverses it — a vehicle may never back
    /// into its own in-flight trail. On acceptance the current position is
    /// committed as a trail point, closing the in-flight segment.
    pub fn set_direction(&mut self, new_direction: Direction) {
        if !self.alive
            || new_direction == self.direction
            || new_direction == self.direction.reverse()
        {
            return;
        }
        self.save_trail_point();
        self.direction = new_direction;
    }

    /// Position after one tick of travel. Pure; the caller commits it only
    /// once the collision resolver clears the move.
    #[inline]
    pub fn candidate_position(&self, speed: f32) -> Vec2 {
        self.position + self.direction.step() * speed
    }

    /// The uncommitted stretch from the last trail point to the live
    /// position, rebuilt on every query.
    pub fn in_flight_segment(&self) -> Option<Segment> {
        self.trail_points
            .last()
            .and_then(|&last| Segment::between(last, self.position))
    }

    /// Kill the vehicle. Idempotent; returns whether this call was the one
    /// that killed it, so the round controller fires the death cue once.
    pub fn mark_dead(&mut self) -> bool {
        if !self.alive {
            return false;
        }
        self.alive = false;
        true
    }

    /// Put the vehicle back at its spawn for a replay
    pub fn reset(&mut self) {
        self.position = self.spawn.position;
        self.direction = self.spawn.direction;
        self.alive = true;
        self.trail_points.clear();
        self.vertical_lines.clear();
        self.horizontal_lines.clear();
        self.trail_points.push(self.spawn.position);
    }

    /// Commit the in-flight segment and record the current position as a
    /// trail point. Exactly one of the two wall lists grows, chosen by which
    /// coordinate the previous point shares with the current one.
    fn save_trail_point(&mut self) {
        if let Some(&last) = self.trail_points.last() {
            if let Some(segment) = Segment::between(last, self.position) {
                match segment.axis {
                    Axis::Y => self.vertical_lines.push(segment),
                    Axis::X => self.horizontal_lines.push(segment),
                }
            }
        }
        self.trail_points.push(self.position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_vehicle() -> Vehicle {
        let spawn = Spawn {
            position: Vec2::new(600.0, 300.0),
            direction: Direction::Right,
        };
        Vehicle::new("tester", BikeColor::Blue, spawn)
    }

    fn drive(v: &mut Vehicle, ticks: u32) {
        for _ in 0..ticks {
            v.position = v.candidate_position(3.0);
        }
    }

    #[test]
    fn test_reverse_turn_rejected() {
        let mut v = test_vehicle();
        drive(&mut v, 10);
        v.set_direction(Direction::Left);
        assert_eq!(v.direction, Direction::Right);
        assert_eq!(v.trail_points.len(), 1);
        assert!(v.horizontal_lines.is_empty());
    }

    #[test]
    fn test_same_direction_is_idempotent() {
        let mut v = test_vehicle();
        drive(&mut v, 10);
        v.set_direction(Direction::Right);
        assert_eq!(v.trail_points.len(), 1);
        assert!(v.horizontal_lines.is_empty() && v.vertical_lines.is_empty());
    }

    #[test]
    fn test_dead_vehicle_ignores_input() {
        let mut v = test_vehicle();
        assert!(v.mark_dead());
        assert!(!v.mark_dead());
        v.set_direction(Direction::Up);
        assert_eq!(v.direction, Direction::Right);
    }

    #[test]
    fn test_accepted_turn_commits_one_wall() {
        let mut v = test_vehicle();
        drive(&mut v, 10); // moving right: shared y with the spawn point
        v.set_direction(Direction::Up);
        assert_eq!(v.direction, Direction::Up);
        assert_eq!(v.trail_points.len(), 2);
        assert_eq!(v.horizontal_lines.len(), 1);
        assert!(v.vertical_lines.is_empty());

        let wall = v.horizontal_lines[0];
        assert_eq!(wall.fixed, 300.0);
        assert_eq!(wall.span(), (600.0, 630.0));
    }

    #[test]
    fn test_in_flight_segment_tracks_live_position() {
        let mut v = test_vehicle();
        drive(&mut v, 5);
        let seg = v.in_flight_segment().expect("trail never empty");
        assert_eq!(seg.axis, Axis::X);
        assert_eq!(seg.fixed, 300.0);
        assert_eq!(seg.span(), (600.0, 615.0));
    }

    #[test]
    fn test_reset_reseeds_trail() {
        let mut v = test_vehicle();
        drive(&mut v, 10);
        v.set_direction(Direction::Up);
        drive(&mut v, 10);
        v.mark_dead();
        v.reset();
        assert!(v.alive);
        assert_eq!(v.position, v.spawn.position);
        assert_eq!(v.direction, v.spawn.direction);
        assert_eq!(v.trail_points, vec![v.spawn.position]);
        assert!(v.vertical_lines.is_empty() && v.horizontal_lines.is_empty());
    }

    fn any_direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Up),
            Just(Direction::Right),
            Just(Direction::Down),
            Just(Direction::Left),
        ]
    }

    proptest! {
        // P1/P2: reversals and repeats never mutate; every accepted turn
        // appends exactly one point and exactly one wall.
        #[test]
        fn turn_bookkeeping_holds(dirs in prop::collection::vec(any_direction(), 0..40)) {
            let mut v = test_vehicle();
            for dir in dirs {
                drive(&mut v, 3);
                let before = v.direction;
                let points = v.trail_points.len();
                let walls = v.vertical_lines.len() + v.horizontal_lines.len();
                v.set_direction(dir);
                if dir == before || dir == before.reverse() {
                    prop_assert_eq!(v.direction, before);
                    prop_assert_eq!(v.trail_points.len(), points);
                    prop_assert_eq!(v.vertical_lines.len() + v.horizontal_lines.len(), walls);
                } else {
                    prop_assert_eq!(v.direction, dir);
                    prop_assert_eq!(v.trail_points.len(), points + 1);
                    prop_assert_eq!(v.vertical_lines.len() + v.horizontal_lines.len(), walls + 1);
                    // The committed wall runs along the axis just travelled
                    let committed = match before.axis() {
                        Axis::X => v.horizontal_lines.last(),
                        Axis::Y => v.vertical_lines.last(),
                    };
                    prop_assert!(committed.is_some());
                }
            }
        }
    }
}
