use shoal_core::{TargetId, Vec3};

/// A pursuable point of interest.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Target {
    pub id:        TargetId,
    pub position:  Vec3,
    /// `false` while an agent holds the claim.
    pub available: bool,
}

impl Target {
    /// A new, unclaimed target.
    #[inline]
    pub fn new(id: TargetId, position: Vec3) -> Self {
        Self { id, position, available: true }
    }
}
