//! The bounding volume agents swim in.
//!
//! `Area` is an axis-aligned box described the way a scene describes it: a
//! centre and a full size per axis.  Agents that step outside are clamped
//! back onto the face they crossed and have that component of their heading
//! negated, which reads as a bounce.

use glam::{BVec3, Vec3};

use crate::{ShoalError, ShoalResult};

/// Axis-aligned box with full extent `size` centred on `center`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Area {
    pub center: Vec3,
    pub size:   Vec3,
}

impl Area {
    #[inline]
    pub fn new(center: Vec3, size: Vec3) -> Self {
        Self { center, size }
    }

    /// Half of `size` on every axis.  A negative size is read as its
    /// magnitude so the box never inverts.
    #[inline]
    pub fn half_extents(&self) -> Vec3 {
        self.size.abs() * 0.5
    }

    #[inline]
    pub fn min(&self) -> Vec3 {
        self.center - self.half_extents()
    }

    #[inline]
    pub fn max(&self) -> Vec3 {
        self.center + self.half_extents()
    }

    /// `true` if `point` lies inside the box or on its surface.
    #[inline]
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min()).all() && point.cmple(self.max()).all()
    }

    /// Reject boxes that cannot be clamped against (NaN or infinite values).
    pub fn validate(&self) -> ShoalResult<()> {
        if self.center.is_finite() && self.size.is_finite() {
            Ok(())
        } else {
            Err(ShoalError::Config(format!(
                "area must be finite (center {}, size {})",
                self.center, self.size
            )))
        }
    }

    /// Clamp `position` into the box, negating `direction` on every axis
    /// where a clamp happened.
    ///
    /// Returns the axes that bounced.
    pub fn reflect(&self, position: &mut Vec3, direction: &mut Vec3) -> BVec3 {
        let lo = self.min();
        let hi = self.max();
        let mut bounced = [false; 3];

        for axis in 0..3 {
            if position[axis] < lo[axis] || position[axis] > hi[axis] {
                position[axis] = position[axis].clamp(lo[axis], hi[axis]);
                direction[axis] = -direction[axis];
                bounced[axis] = true;
            }
        }

        BVec3::from(bounced)
    }
}

impl Default for Area {
    /// A 20 m cube centred on the origin.
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::splat(20.0))
    }
}
