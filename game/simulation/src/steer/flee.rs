//! Negative gradient of a repulsion potential made of wall and chaser terms, per axis:
//!
//! - wall: `p / (h - p²)⁴`, where `p` is the evader's coordinate and `h` the arena's half extent
//! - chaser: `1 / (c - p)⁵`, where `c` is the chaser's coordinate
//!
//! Both denominators blow up near their singularities, so their bases are pushed at least
//! `epsilon` away from zero first.

use common::vector::clamp_away_from_zero;
use common::*;

use crate::Arena;

/// Smallest magnitude a flee denominator base may take
pub const DEFAULT_FLEE_EPSILON: F = 1e-3;

/// Unit vector away from the chaser and walls, or `None` if the repulsion cancels out
pub fn flee(evader: Vector2, chaser: Vector2, arena: &Arena, epsilon: F) -> Option<Vector2> {
    let slope = slope(evader, chaser, arena.half_extents(), epsilon);
    common::vector::try_normalize(-slope)
}

fn slope(evader: Vector2, chaser: Vector2, half_extents: Vector2, epsilon: F) -> Vector2 {
    let axis = |p: F, c: F, h: F| wall_term(p, h, epsilon) + chaser_term(p, c, epsilon);
    dvec2(
        axis(evader.x, chaser.x, half_extents.x),
        axis(evader.y, chaser.y, half_extents.y),
    )
}

fn wall_term(p: F, half_extent: F, epsilon: F) -> F {
    let base = clamp_away_from_zero(half_extent - p * p, epsilon);
    p / base.powi(4)
}

fn chaser_term(p: F, c: F, epsilon: F) -> F {
    // odd power keeps the sign of the separation
    let base = clamp_away_from_zero(c - p, epsilon);
    1.0 / base.powi(5)
}
