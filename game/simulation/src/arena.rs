use common::*;

use crate::WorldError;

/// Axis-aligned rectangle centred on the origin
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Arena {
    half_extents: Vector2,
}

impl Arena {
    /// Full width and height
    pub fn new(width: F, height: F) -> Result<Self, WorldError> {
        let valid = |f: F| f.is_finite() && f > 0.0;
        if !(valid(width) && valid(height)) {
            return Err(WorldError::InvalidArena(width, height));
        }

        Ok(Self {
            half_extents: dvec2(width, height) / 2.0,
        })
    }

    pub const fn half_extents(&self) -> Vector2 {
        self.half_extents
    }

    pub const fn half_width(&self) -> F {
        self.half_extents.x
    }

    pub const fn half_height(&self) -> F {
        self.half_extents.y
    }

    /// Points exactly on a wall are still inside
    pub fn contains(&self, point: Vector2) -> bool {
        point.x.abs() <= self.half_extents.x && point.y.abs() <= self.half_extents.y
    }

    /// Distance along the unit `direction` from `origin` to the first wall ahead. Capped at the
    /// arena diagonal, which is also returned if no wall is ahead
    pub fn distance_to_wall(&self, origin: Vector2, direction: Vector2) -> F {
        let Vector2 { x: hw, y: hh } = self.half_extents;

        // dividing by a zero component gives an infinity or NaN, both filtered out
        let candidates = [
            (hh - origin.y) / direction.y,
            (-hh - origin.y) / direction.y,
            (hw - origin.x) / direction.x,
            (-hw - origin.x) / direction.x,
        ];

        let diagonal = self.half_extents.length() * 2.0;
        candidates
            .into_iter()
            .filter(|mu| mu.is_finite() && *mu > 0.0)
            .fold(diagonal, F::min)
    }
}
