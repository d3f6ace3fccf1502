//! The `TargetPool`: every interest point plus its availability flag.

use log::debug;
use rustc_hash::FxHashMap;
use shoal_core::{ShoalError, ShoalResult, TargetId, Vec3};

use crate::Target;

/// Single-owner map from `TargetId` to [`Target`].
///
/// Targets are kept in construction order, which is also the iteration order
/// of [`available_targets`](Self::available_targets) and therefore the
/// tie-break order of [`closest_available`](Self::closest_available).  The
/// set of targets is fixed for the pool's lifetime; only the flags change.
///
/// Mutation goes through `&mut self`, so claims and releases are serialized
/// by whoever owns the pool (the simulation's sequential apply phase).
#[derive(Clone, Debug, Default)]
pub struct TargetPool {
    targets: Vec<Target>,
    index:   FxHashMap<TargetId, usize>,
}

impl TargetPool {
    /// Build a pool from explicit targets.
    ///
    /// # Errors
    ///
    /// Returns [`ShoalError::DuplicateTarget`] if two targets share an id.
    pub fn new(targets: Vec<Target>) -> ShoalResult<Self> {
        let mut index = FxHashMap::with_capacity_and_hasher(targets.len(), Default::default());
        for (i, t) in targets.iter().enumerate() {
            if index.insert(t.id, i).is_some() {
                return Err(ShoalError::DuplicateTarget(t.id));
            }
        }
        Ok(Self { targets, index })
    }

    /// Build a pool of available targets with ids `0, 1, 2, …` in order.
    pub fn from_positions<I: IntoIterator<Item = Vec3>>(positions: I) -> Self {
        let targets: Vec<Target> = positions
            .into_iter()
            .enumerate()
            .map(|(i, p)| Target::new(TargetId(i as u32), p))
            .collect();
        let index = targets.iter().enumerate().map(|(i, t)| (t.id, i)).collect();
        Self { targets, index }
    }

    /// An empty pool.  Agents sharing it never acquire a target.
    pub fn empty() -> Self {
        Self::default()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// All targets whose `available` flag is set, in construction order.
    pub fn available_targets(&self) -> impl Iterator<Item = &Target> + '_ {
        self.targets.iter().filter(|t| t.available)
    }

    /// The available target nearest to `position`.
    ///
    /// Linear scan; on an exact distance tie the target seen first wins.
    /// `None` when nothing is available.
    pub fn closest_available(&self, position: Vec3) -> Option<&Target> {
        let mut best: Option<(&Target, f32)> = None;
        for t in self.available_targets() {
            let d = position.distance(t.position);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((t, d)),
            }
        }
        best.map(|(t, _)| t)
    }

    pub fn get(&self, id: TargetId) -> Option<&Target> {
        self.index.get(&id).map(|&i| &self.targets[i])
    }

    /// Availability of `id`, or `None` for an unknown id.
    pub fn is_available(&self, id: TargetId) -> Option<bool> {
        self.get(id).map(|t| t.available)
    }

    /// Every target, available or not, in construction order.
    pub fn iter(&self) -> impl Iterator<Item = &Target> + '_ {
        self.targets.iter()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn available_count(&self) -> usize {
        self.available_targets().count()
    }

    // ── Claim / release ───────────────────────────────────────────────────

    /// Claim `id`: mark it unavailable.
    ///
    /// Idempotent, and a no-op for unknown ids.  Returns `true` only if the
    /// flag actually flipped.
    pub fn deactivate(&mut self, id: TargetId) -> bool {
        self.set_available(id, false)
    }

    /// Release `id` back into the pool.
    ///
    /// Idempotent, and a no-op for unknown ids.  Returns `true` only if the
    /// flag actually flipped.
    pub fn activate(&mut self, id: TargetId) -> bool {
        self.set_available(id, true)
    }

    fn set_available(&mut self, id: TargetId, available: bool) -> bool {
        let Some(&i) = self.index.get(&id) else {
            debug!("ignoring availability change for unknown {id}");
            return false;
        };
        let target = &mut self.targets[i];
        if target.available == available {
            return false;
        }
        target.available = available;
        true
    }
}
