//! Headless demo round
//!
//! Drives a scripted two-player round through the frame clock at a
//! display-refresh cadence and reports the outcome. Hosts embedding the
//! crate replace the script with real input events and the log lines with
//! audio/visual feedback.

use neon_cycles::sim::{
    Arena, BikeColor, Direction, FrameClock, FrameStatus, GameEvent, Outcome, Round,
};
use neon_cycles::Settings;

fn main() {
    env_logger::init();

    let settings = Settings::default();
    let mut round = Round::new(Arena::default());
    let sam = round.register_vehicle("Sam", BikeColor::Blue, Round::default_spawn(&round.arena, 0));
    let alex = round.register_vehicle("Alex", BikeColor::Red, Round::default_spawn(&round.arena, 1));
    round.start(settings.speed.movement_speed());

    // (frame, player, new heading) input script for the demo
    let script = [
        (40u64, sam, Direction::Up),
        (70, sam, Direction::Right),
        (90, alex, Direction::Down),
    ];

    let mut clock = FrameClock::new();

    // 17 ms between callbacks, just past the tick period, so every frame
    // after the first advances the simulation by one tick
    for frame in 0..100_000u64 {
        let now = frame as f64 * 17.0;
        for &(at, id, direction) in &script {
            if at == frame {
                round.set_vehicle_direction(id, direction);
            }
        }
        let status = clock.on_frame(&mut round, now);

        for event in round.drain_events() {
            match event {
                GameEvent::VehicleDied(id) => {
                    log::info!("{} is out at frame {frame}", round.vehicles[id.0].name);
                    if settings.music_enabled {
                        log::debug!("music ducked to {}", settings.ducked_music_volume);
                    }
                }
                GameEvent::RoundEnded(outcome) => {
                    log::info!("round ended: {outcome:?}");
                }
            }
        }

        if let FrameStatus::RoundOver(outcome) = status {
            match outcome {
                Outcome::Winner(id) => println!("{} wins!", round.vehicles[id.0].name),
                Outcome::Tie => println!("Tie game!"),
                Outcome::InProgress => unreachable!("a scored round is never in progress"),
            }
            return;
        }
    }

    log::error!("demo round never ended");
}
