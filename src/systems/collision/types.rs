use std::cmp::Ordering;

use crate::domain::entity::{Axis, EntityId};

/// Shrink applied to the other-axis span before rounding to cells, so an AABB
/// whose face lies on a cell boundary does not count as overlapping that cell.
pub const SPAN_EPSILON: f32 = 1e-4;

/// Earliest terrain contact found for the current sub-step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerrainCollision {
    /// Time from the start of the sub-step, in ticks.
    pub t: f32,
    pub entity: EntityId,
    pub axis: Axis,
    /// Sign of the entity's velocity along `axis` (+1 or -1).
    pub direction: i8,
    /// Grid line the leading edge touches.
    pub boundary: f32,
    /// First solid cell found behind the boundary.
    pub cell: (i32, i32),
}

impl TerrainCollision {
    /// Landing on a floor (as opposed to bumping a ceiling).
    #[inline]
    pub fn is_landing(&self) -> bool {
        self.axis == Axis::Y && self.direction < 0
    }

    /// Total order used by every reduction: time, then entity id, then axis.
    #[inline]
    pub fn order(&self, other: &Self) -> Ordering {
        self.t
            .total_cmp(&other.t)
            .then(self.entity.cmp(&other.entity))
            .then(self.axis.cmp(&other.axis))
    }
}

/// Earliest contact between two moving entities. Detected, never resolved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThingCollision {
    pub t: f32,
    /// Lower id of the pair.
    pub a: EntityId,
    pub b: EntityId,
    pub axis: Axis,
}

impl ThingCollision {
    #[inline]
    pub fn order(&self, other: &Self) -> Ordering {
        self.t
            .total_cmp(&other.t)
            .then(self.a.cmp(&other.a))
            .then(self.b.cmp(&other.b))
            .then(self.axis.cmp(&other.axis))
    }
}

/// Pick the earlier of two candidates under `order`.
#[inline]
pub(crate) fn earliest<T, F>(a: Option<T>, b: Option<T>, order: F) -> Option<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    match (a, b) {
        (Some(a), Some(b)) => Some(if order(&b, &a) == Ordering::Less { b } else { a }),
        (a, None) => a,
        (None, b) => b,
    }
}

/// Collapse `-0.0` so the total order treats touching-now as plain zero.
#[inline]
pub(crate) fn clean_time(t: f32) -> f32 {
    if t <= 0.0 { 0.0 } else { t }
}
