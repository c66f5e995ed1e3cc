//! Equality policies deciding when two corners are "the same vertex".
//!
//! Every welding strategy merges corners under one of these policies.
//! Tangents and bitangents never participate in the comparison; only the
//! eight scalars of position, uv, and normal do.

use crate::stream::Corner;

/// Absolute tolerance matching the classic VBO-indexing comparison.
pub const DEFAULT_TOLERANCE: f32 = 0.01;

/// Default quantization step; one grid cell spans 1/100 of a unit.
pub const DEFAULT_GRID_STEP: f32 = 0.01;

/// How corner attributes are compared when deciding whether to merge.
///
/// `Tolerance` is the approximate reference policy: it is not transitive
/// (a chain of corners each within tolerance of the next can span far more
/// than the tolerance), which is accepted rather than "fixed". `Quantized`
/// snaps each scalar to a grid first, making equality exact and usable as a
/// lookup key, so the linear-scan and packed-key strategies agree under it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MergePolicy {
    /// Each scalar differs by strictly less than the given absolute tolerance.
    Tolerance(f32),
    /// All scalars are bit-identical.
    BitExact,
    /// Each scalar snapped to the nearest multiple of the step must land in
    /// the same grid cell.
    Quantized(f32),
}

impl MergePolicy {
    /// Returns true if the two corners should be merged under this policy.
    pub fn matches(&self, a: &Corner, b: &Corner) -> bool {
        match *self {
            MergePolicy::Tolerance(tolerance) => {
                is_near(a.position.x, b.position.x, tolerance)
                    && is_near(a.position.y, b.position.y, tolerance)
                    && is_near(a.position.z, b.position.z, tolerance)
                    && is_near(a.uv.x, b.uv.x, tolerance)
                    && is_near(a.uv.y, b.uv.y, tolerance)
                    && is_near(a.normal.x, b.normal.x, tolerance)
                    && is_near(a.normal.y, b.normal.y, tolerance)
                    && is_near(a.normal.z, b.normal.z, tolerance)
            }
            MergePolicy::BitExact => a
                .scalars()
                .iter()
                .zip(b.scalars())
                .all(|(x, y)| x.to_bits() == y.to_bits()),
            MergePolicy::Quantized(step) => a
                .scalars()
                .iter()
                .zip(b.scalars())
                .all(|(x, y)| quantize(*x, step) == quantize(y, step)),
        }
    }
}

/// Returns true if `a` can be considered equal to `b` within `tolerance`.
///
/// The comparison is strict (`<`), so a difference of exactly the tolerance
/// does not match.
#[inline]
pub fn is_near(a: f32, b: f32, tolerance: f32) -> bool {
    (a - b).abs() < tolerance
}

/// Snaps a scalar to its cell index on a grid of the given step.
#[inline]
pub fn quantize(value: f32, step: f32) -> i32 {
    (value / step).round() as i32
}
