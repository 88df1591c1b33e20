//! Boundary and trail collision tests
//!
//! One function covers all four headings, parameterized over the travel
//! axis and its sign. Two independent layers run for every heading:
//! segments perpendicular to travel are interval-crossing tests, segments
//! parallel to travel are exact-lane tests. The parallel layer exists so
//! two vehicles converging along the same row or column cannot slide
//! through each other's trail without ever crossing it at an angle.

use glam::Vec2;

use super::segment::Segment;
use super::state::{Arena, Axis, Vehicle};

/// Would moving `vehicle` to `candidate` be fatal?
///
/// The body is treated as a static rectangle at the candidate position:
/// trailing edge at `candidate`, leading edge one vehicle length ahead
/// along the heading. Every interval test is strict; the lane test on the
/// parallel layer is an exact coordinate match. Collision is binary and
/// terminal — the first match wins.
pub fn collides(arena: &Arena, vehicle: &Vehicle, candidate: Vec2, obstacles: &[Segment]) -> bool {
    let axis = vehicle.direction.axis();
    let sign = vehicle.direction.sign();

    let back = axis.of(candidate);
    let front = back + sign * vehicle.length;
    // Coordinate on the non-travel axis; the trail attaches here
    let lane = axis.other().of(candidate);

    if out_of_bounds(arena, axis, sign, front) {
        return true;
    }

    obstacles.iter().any(|segment| {
        if segment.axis == axis {
            // Parallel to travel: fatal only in the exact same lane, once
            // the leading edge is strictly inside the wall's extent
            segment.fixed == lane && segment.contains_strict(front)
        } else {
            // Perpendicular to travel: the wall's coordinate must fall
            // strictly between trailing and leading edge, and the lane
            // strictly within the wall's extent
            (segment.fixed - back) * sign > 0.0
                && (front - segment.fixed) * sign > 0.0
                && segment.contains_strict(lane)
        }
    })
}

/// Leading-edge test against the arena bounds on the travel axis
fn out_of_bounds(arena: &Arena, axis: Axis, sign: f32, front: f32) -> bool {
    if sign > 0.0 {
        front > arena.extent(axis)
    } else {
        front < 0.0
    }
}
