//! Vertex deduplication strategies.
//!
//! This module provides multiple welding implementations that can be
//! swapped for testing and benchmarking purposes.
//!
//! Available strategies:
//! - [`LinearScanWelder`]: exhaustive scan of the output set, the semantic
//!   reference. Supports every [`MergePolicy`](crate::policy::MergePolicy).
//! - [`PackedKeyWelder`]: associative lookup through a fixed-width byte key,
//!   sub-linear per corner. Exact or quantized keys only.
//! - [`TangentWelder`]: linear scan that accumulates tangent/bitangent
//!   contributions into matched slots instead of discarding them.

mod linear;
mod packed;
mod tangent;

pub use linear::LinearScanWelder;
pub use packed::PackedKeyWelder;
pub use tangent::TangentWelder;

use crate::error::WeldError;
use crate::indexed::{IndexedMesh, WeldIndex};
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::policy::MergePolicy;
use crate::stream::{Corner, VertexStream};

/// Trait for vertex welding strategies.
///
/// Implementors define how a flat corner stream is deduplicated into an
/// indexed mesh. Every strategy is a deterministic pure function of its
/// input: unique vertices are emitted in first-seen order and the index
/// sequence has exactly one entry per input corner.
pub trait Welder {
    /// Weld the stream into an indexed mesh using index type `I`.
    ///
    /// Fails with [`WeldError::IndexOverflow`] the moment a unique vertex
    /// would not fit `I`; an empty stream yields empty outputs.
    fn weld<I: WeldIndex>(&self, stream: &VertexStream) -> Result<IndexedMesh<I>, WeldError>;
}

/// Scans the already-emitted output vertices for one that matches `corner`
/// under `policy`, from slot 0 upward. First match wins, so the result is
/// deterministic for a fixed output order.
pub(crate) fn similar_vertex_index(
    corner: &Corner,
    positions: &[Vec3],
    uvs: &[Vec2],
    normals: &[Vec3],
    policy: &MergePolicy,
) -> Option<usize> {
    (0..positions.len()).find(|&slot| {
        let candidate = Corner {
            position: positions[slot],
            uv: uvs[slot],
            normal: normals[slot],
        };
        policy.matches(corner, &candidate)
    })
}
