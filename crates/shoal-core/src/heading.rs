//! Orientation helpers.
//!
//! Agents face along their local `+Z` axis with `+Y` up.  Turning is a
//! per-tick spherical interpolation by a clamped fraction, not an
//! exponential approach, so the result depends on the tick size.

use glam::{Mat3, Quat, Vec3};

/// World-space forward direction of `orientation`.
#[inline]
pub fn forward(orientation: Quat) -> Vec3 {
    orientation * Vec3::Z
}

/// Rotation whose forward axis points along `direction`, keeping `+Y` as up.
///
/// Returns `None` for a zero (or non-finite) direction.  When `direction` is
/// parallel to `+Y` the shortest arc from `+Z` is used instead.
pub fn look_rotation(direction: Vec3) -> Option<Quat> {
    let fwd = direction.try_normalize()?;
    match Vec3::Y.cross(fwd).try_normalize() {
        Some(right) => {
            let up = fwd.cross(right);
            Some(Quat::from_mat3(&Mat3::from_cols(right, up, fwd)).normalize())
        }
        None => Some(Quat::from_rotation_arc(Vec3::Z, fwd)),
    }
}

/// Rotate `current` toward `target` by `fraction` of the arc between them.
///
/// `fraction` is clamped to `[0, 1]`; NaN turns nothing.
#[inline]
pub fn turn_towards(current: Quat, target: Quat, fraction: f32) -> Quat {
    let t = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
    if t == 0.0 {
        return current;
    }
    current.slerp(target, t).normalize()
}
