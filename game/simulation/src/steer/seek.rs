use common::*;

/// Unit vector from `current` towards `target`, or `None` if they coincide
pub fn seek(current: Vector2, target: Vector2) -> Option<Vector2> {
    common::vector::try_normalize(target - current)
}
