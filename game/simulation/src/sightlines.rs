//! Visualisation-only geometry: the line between two agents and rays fanning out to the walls.
//! None of this affects motion.

use std::f64::consts::TAU;

use common::*;

use crate::steer::seek;
use crate::Arena;

/// Points used to draw a trackback line
pub const TRACKBACK_SAMPLES: usize = 10;

/// Segment from an agent to the nearest wall along some direction
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vector2,
    pub end: Vector2,
}

/// Sight lines from the quarry to the chaser
#[derive(Debug, Clone, PartialEq)]
pub struct Scan {
    pub trackback: Vec<Vector2>,
    pub rays: Vec<Ray>,
}

/// `samples` evenly spaced points from `from` to `to` inclusive
pub fn trackback(from: Vector2, to: Vector2, samples: usize) -> impl Iterator<Item = Vector2> {
    let divisor = samples.saturating_sub(1).max(1) as F;
    (0..samples).map(move |i| from.lerp(to, i as F / divisor))
}

/// `n` rays spaced `2π/(n+1)` apart, starting one step round from the direction towards `target`,
/// each clipped to the nearest wall. Empty if `origin` and `target` coincide
pub fn isotropic_rays(origin: Vector2, target: Vector2, n: usize, arena: &Arena) -> Vec<Ray> {
    let mut direction = match seek(origin, target) {
        Some(dir) => dir,
        None => return Vec::new(),
    };

    let rotate = DMat2::from_angle(TAU / (n + 1) as F);
    (0..n)
        .map(|_| {
            direction = rotate * direction;
            let length = arena.distance_to_wall(origin, direction);
            Ray {
                origin,
                end: origin + direction * length,
            }
        })
        .collect()
}

impl Ray {
    pub fn length(&self) -> F {
        self.origin.distance(self.end)
    }
}
