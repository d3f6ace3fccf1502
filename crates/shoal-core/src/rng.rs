//! Deterministic simulation-level RNG.
//!
//! The tick itself is fully deterministic; randomness only enters when a
//! scene is set up (scattering agents and interest points).  `SimRng` wraps a
//! seeded `SmallRng` so the same `SimConfig::seed` always yields the same
//! starting scene.

use glam::{Quat, Vec3};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Area;

/// Simulation-level RNG for scene setup.
///
/// Used only in single-threaded contexts.  Derive a [`child`](Self::child)
/// per independent consumer so adding draws in one place does not shift the
/// sequence seen by another.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng`: one draw from `self`, xor-mixed with
    /// `offset` scaled by the 64-bit golden ratio so offsets 0, 1, 2 land
    /// far apart.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(0x9e37_79b9_7f4a_7c15);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Uniform point inside `area` (surface included).
    pub fn point_in(&mut self, area: &Area) -> Vec3 {
        let lo = area.min();
        let hi = area.max();
        Vec3::new(
            self.axis(lo.x, hi.x),
            self.axis(lo.y, hi.y),
            self.axis(lo.z, hi.z),
        )
    }

    /// Random heading: a yaw in `[0, 2π)` with a pitch of at most ±30°.
    pub fn heading(&mut self) -> Quat {
        let yaw   = self.0.gen_range(0.0..std::f32::consts::TAU);
        let pitch = self.0.gen_range(-std::f32::consts::FRAC_PI_6..=std::f32::consts::FRAC_PI_6);
        Quat::from_rotation_y(yaw) * Quat::from_rotation_x(pitch)
    }

    fn axis(&mut self, lo: f32, hi: f32) -> f32 {
        // A flat axis (zero size) has an empty half-open range.
        if lo < hi { self.0.gen_range(lo..=hi) } else { lo }
    }
}
