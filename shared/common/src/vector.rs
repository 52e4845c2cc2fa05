use crate::{Vector2, F};

/// Unit vector in the same direction, or `None` if the length is zero or not finite
pub fn try_normalize(v: Vector2) -> Option<Vector2> {
    let length = v.length();
    if length > 0.0 && length.is_finite() {
        Some(v / length)
    } else {
        None
    }
}

/// Pushes `f` away from zero so its magnitude is at least `min`, keeping its sign.
/// Exactly zero is treated as positive.
pub fn clamp_away_from_zero(f: F, min: F) -> F {
    debug_assert!(min >= 0.0, "negative clamp {}", min);
    if f.abs() >= min {
        f
    } else if f.is_sign_negative() {
        -min
    } else {
        min
    }
}

pub fn is_finite(v: Vector2) -> bool {
    v.x.is_finite() && v.y.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dvec2, ApproxEq};

    #[test]
    fn normalize() {
        let unit = try_normalize(dvec2(3.0, -4.0)).unwrap();
        assert!(unit.x.approx_eq(0.6, (F::EPSILON, 2)));
        assert!(unit.y.approx_eq(-0.8, (F::EPSILON, 2)));

        assert!(try_normalize(Vector2::ZERO).is_none());
        assert!(try_normalize(dvec2(F::INFINITY, 1.0)).is_none());
        assert!(try_normalize(dvec2(F::NAN, 1.0)).is_none());
    }

    #[test]
    fn clamping() {
        assert_eq!(clamp_away_from_zero(0.5, 0.1), 0.5);
        assert_eq!(clamp_away_from_zero(-0.5, 0.1), -0.5);
        assert_eq!(clamp_away_from_zero(0.01, 0.1), 0.1);
        assert_eq!(clamp_away_from_zero(-0.01, 0.1), -0.1);
        assert_eq!(clamp_away_from_zero(0.0, 0.1), 0.1);
        assert_eq!(clamp_away_from_zero(-0.0, 0.1), -0.1);
    }
}
