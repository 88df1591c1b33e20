//! Round lifecycle: registration, outcome, replay and reset
//!
//! The round owns the two vehicles and all per-round bookkeeping. It is an
//! explicit context object passed to the frame clock, so independent rounds
//! can coexist and be driven in isolation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::collides;
use super::segment::Segment;
use super::state::{Arena, BikeColor, Direction, Spawn, Vehicle};
use crate::consts::{NORMAL_SPEED, VEHICLE_LENGTH};

/// Handle to a registered vehicle, in registration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleId(pub usize);

/// How a round stands once the frame clock has scored it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Winner(VehicleId),
    Tie,
}

/// Discrete cues for the host layer (audio and visual feedback)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A vehicle crashed. Hosts play the crash cue and duck the game track.
    VehicleDied(VehicleId),
    RoundEnded(Outcome),
}

/// One session of play: the two vehicles plus round bookkeeping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    pub arena: Arena,
    pub vehicles: Vec<Vehicle>,
    pub running: bool,
    pub outcome: Outcome,
    /// Timestamp of the first death this round, written once per round by
    /// the frame clock to arm the tie grace window
    pub death_timestamp: Option<f64>,
    /// Movement per tick, fixed at round start
    pub speed: f32,
    /// Pending cues; hosts drain these every frame
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Round {
    pub fn new(arena: Arena) -> Self {
        Self {
            arena,
            vehicles: Vec::new(),
            running: false,
            outcome: Outcome::InProgress,
            death_timestamp: None,
            speed: NORMAL_SPEED,
            events: Vec::new(),
        }
    }

    /// Spawn layout: player 1 on the left edge heading right, player 2 on
    /// the right edge heading left, both at mid-height.
    pub fn default_spawn(arena: &Arena, index: usize) -> Spawn {
        let y = arena.height / 2.0 - VEHICLE_LENGTH;
        if index == 0 {
            Spawn {
                position: Vec2::new(0.0, y),
                direction: Direction::Right,
            }
        } else {
            Spawn {
                position: Vec2::new(arena.width, y),
                direction: Direction::Left,
            }
        }
    }

    /// Register a player's vehicle before the round starts. The lobby layer
    /// guarantees unique colors and at most two registrations; a third is a
    /// contract violation.
    pub fn register_vehicle(&mut self, name: &str, color: BikeColor, spawn: Spawn) -> VehicleId {
        assert!(
            self.vehicles.len() < 2,
            "a round holds exactly two vehicles"
        );
        log::info!(
            "registered {} on the {} bike at ({}, {})",
            name,
            color.as_str(),
            spawn.position.x,
            spawn.position.y
        );
        self.vehicles.push(Vehicle::new(name, color, spawn));
        VehicleId(self.vehicles.len() - 1)
    }

    /// Start the round at the given movement speed
    pub fn start(&mut self, speed: f32) {
        assert_eq!(
            self.vehicles.len(),
            2,
            "a round cannot start with fewer than two vehicles"
        );
        self.speed = speed;
        self.outcome = Outcome::InProgress;
        self.running = true;
        log::info!("round started at speed {speed}");
    }

    /// Heading change from a discrete input event. Ignored while the round
    /// is stopped; the vehicle itself rejects repeats and reversals.
    pub fn set_vehicle_direction(&mut self, id: VehicleId, direction: Direction) {
        if !self.running {
            return;
        }
        if let Some(vehicle) = self.vehicles.get_mut(id.0) {
            vehicle.set_direction(direction);
        }
    }

    /// The unified obstacle list for collision testing: every committed wall
    /// from both vehicles plus both in-flight segments. Pure; rebuilt each
    /// query since trails only grow. Dead vehicles' trails stay on the grid.
    pub fn obstacle_lines(&self) -> Vec<Segment> {
        let mut lines = Vec::new();
        for vehicle in &self.vehicles {
            lines.extend_from_slice(&vehicle.vertical_lines);
            lines.extend_from_slice(&vehicle.horizontal_lines);
            if let Some(segment) = vehicle.in_flight_segment() {
                lines.push(segment);
            }
        }
        lines
    }

    /// Advance one vehicle by one tick: test the candidate position against
    /// the boundary and the full obstacle list, then either commit the move
    /// or kill the vehicle where it stands.
    pub(super) fn move_vehicle(&mut self, index: usize) {
        let candidate = self.vehicles[index].candidate_position(self.speed);
        let obstacles = self.obstacle_lines();
        if collides(&self.arena, &self.vehicles[index], candidate, &obstacles) {
            self.kill_vehicle(index);
        } else {
            self.vehicles[index].position = candidate;
        }
    }

    fn kill_vehicle(&mut self, index: usize) {
        if self.vehicles[index].mark_dead() {
            log::info!("{} crashed", self.vehicles[index].name);
            self.events.push(GameEvent::VehicleDied(VehicleId(index)));
        }
    }

    /// Score the round once the grace window has elapsed: exactly one
    /// survivor wins, otherwise it is a tie.
    pub(super) fn finish(&mut self) -> Outcome {
        let alive = [self.vehicles[0].alive, self.vehicles[1].alive];
        self.outcome = match alive {
            [true, false] => Outcome::Winner(VehicleId(0)),
            [false, true] => Outcome::Winner(VehicleId(1)),
            _ => Outcome::Tie,
        };
        self.running = false;
        self.death_timestamp = None;
        self.events.push(GameEvent::RoundEnded(self.outcome));
        log::info!("round over: {:?}", self.outcome);
        self.outcome
    }

    /// Hand pending cues to the host
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Same players, fresh round: vehicles back at their spawns with empty
    /// trails, round running again.
    pub fn replay(&mut self) {
        for vehicle in &mut self.vehicles {
            vehicle.reset();
        }
        self.outcome = Outcome::InProgress;
        self.death_timestamp = None;
        self.events.clear();
        self.running = true;
        log::info!("replaying round");
    }

    /// Full session wipe, back to the lobby: registered players are removed
    pub fn reset(&mut self) {
        self.vehicles.clear();
        self.running = false;
        self.outcome = Outcome::InProgress;
        self.death_timestamp = None;
        self.events.clear();
        self.speed = NORMAL_SPEED;
        log::info!("session reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_player_round() -> Round {
        let mut round = Round::new(Arena::default());
        round.register_vehicle("p1", BikeColor::Blue, Round::default_spawn(&round.arena, 0));
        round.register_vehicle("p2", BikeColor::Red, Round::default_spawn(&round.arena, 1));
        round
    }

    #[test]
    fn test_default_spawns_face_off() {
        let round = two_player_round();
        assert_eq!(round.vehicles[0].position, Vec2::new(0.0, 225.0));
        assert_eq!(round.vehicles[0].direction, Direction::Right);
        assert_eq!(round.vehicles[1].position, Vec2::new(1200.0, 225.0));
        assert_eq!(round.vehicles[1].direction, Direction::Left);
    }

    #[test]
    #[should_panic(expected = "exactly two vehicles")]
    fn test_third_registration_panics() {
        let mut round = two_player_round();
        round.register_vehicle("p3", BikeColor::Green, Round::default_spawn(&round.arena, 0));
    }

    #[test]
    #[should_panic(expected = "fewer than two vehicles")]
    fn test_start_requires_two_vehicles() {
        let mut round = Round::new(Arena::default());
        round.register_vehicle("solo", BikeColor::Red, Round::default_spawn(&round.arena, 0));
        round.start(3.0);
    }

    #[test]
    fn test_direction_input_ignored_while_stopped() {
        let mut round = two_player_round();
        round.set_vehicle_direction(VehicleId(0), Direction::Up);
        assert_eq!(round.vehicles[0].direction, Direction::Right);

        round.start(3.0);
        round.set_vehicle_direction(VehicleId(0), Direction::Up);
        assert_eq!(round.vehicles[0].direction, Direction::Up);
    }

    #[test]
    fn test_death_cue_fires_once() {
        let mut round = two_player_round();
        round.kill_vehicle(0);
        round.kill_vehicle(0);
        assert_eq!(round.drain_events(), vec![GameEvent::VehicleDied(VehicleId(0))]);
        assert!(round.drain_events().is_empty());
    }

    #[test]
    fn test_finish_scores_survivor_and_tie() {
        let mut round = two_player_round();
        round.start(3.0);
        round.kill_vehicle(0);
        assert_eq!(round.finish(), Outcome::Winner(VehicleId(1)));
        assert!(!round.running);

        round.replay();
        round.kill_vehicle(0);
        round.kill_vehicle(1);
        assert_eq!(round.finish(), Outcome::Tie);
    }

    #[test]
    fn test_replay_keeps_players_reset_removes_them() {
        let mut round = two_player_round();
        round.start(3.0);
        round.move_vehicle(0);
        round.kill_vehicle(1);
        round.finish();

        round.replay();
        assert_eq!(round.vehicles.len(), 2);
        assert!(round.running);
        assert!(round.vehicles.iter().all(|v| v.alive));
        assert_eq!(round.vehicles[0].position, round.vehicles[0].spawn.position);
        assert_eq!(round.outcome, Outcome::InProgress);

        round.reset();
        assert!(round.vehicles.is_empty());
        assert!(!round.running);
    }

    #[test]
    fn test_obstacle_lines_include_both_in_flight() {
        let mut round = two_player_round();
        round.start(3.0);
        round.move_vehicle(0);
        round.move_vehicle(1);
        // No committed walls yet, but both live stretches are present
        assert_eq!(round.obstacle_lines().len(), 2);

        round.set_vehicle_direction(VehicleId(0), Direction::Up);
        assert_eq!(round.obstacle_lines().len(), 3);
    }
}
