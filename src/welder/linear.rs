//! Exhaustive linear-scan welding, the semantic reference implementation.

use log::debug;

use super::{similar_vertex_index, Welder};
use crate::error::WeldError;
use crate::indexed::{IndexedMesh, WeldIndex};
use crate::policy::{MergePolicy, DEFAULT_TOLERANCE};
use crate::stream::VertexStream;

/// Welds by scanning every previously emitted output vertex.
///
/// For each input corner the current output set is searched from slot 0
/// upward; the first slot matching the merge policy is reused, otherwise a
/// new slot is appended. O(N·M) worst case, but exact under any policy,
/// including the approximate [`MergePolicy::Tolerance`] that an associative
/// lookup cannot express.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScanWelder {
    policy: MergePolicy,
}

impl LinearScanWelder {
    /// Welder with the reference policy: absolute tolerance of 0.01.
    pub fn new() -> Self {
        Self {
            policy: MergePolicy::Tolerance(DEFAULT_TOLERANCE),
        }
    }

    /// Welder comparing each scalar within the given absolute tolerance.
    pub fn with_tolerance(tolerance: f32) -> Self {
        Self {
            policy: MergePolicy::Tolerance(tolerance),
        }
    }

    /// Welder comparing scalars snapped to a grid of the given step.
    ///
    /// Under the same step this produces identical output to
    /// [`PackedKeyWelder::quantized`](super::PackedKeyWelder::quantized).
    pub fn quantized(step: f32) -> Self {
        Self {
            policy: MergePolicy::Quantized(step),
        }
    }

    /// Welder with an explicit merge policy.
    pub fn with_policy(policy: MergePolicy) -> Self {
        Self { policy }
    }

    /// The merge policy in effect.
    pub fn policy(&self) -> MergePolicy {
        self.policy
    }
}

impl Default for LinearScanWelder {
    fn default() -> Self {
        Self::new()
    }
}

impl Welder for LinearScanWelder {
    fn weld<I: WeldIndex>(&self, stream: &VertexStream) -> Result<IndexedMesh<I>, WeldError> {
        let mut mesh = IndexedMesh {
            indices: Vec::with_capacity(stream.len()),
            ..IndexedMesh::default()
        };

        for i in 0..stream.len() {
            let corner = stream.corner(i);
            let found = similar_vertex_index(
                &corner,
                &mesh.positions,
                &mesh.uvs,
                &mesh.normals,
                &self.policy,
            );

            match found {
                Some(slot) => mesh.indices.push(I::from_usize(slot)),
                None => {
                    if mesh.positions.len() >= I::MAX_VERTICES {
                        return Err(WeldError::IndexOverflow {
                            unique_vertices: mesh.positions.len() + 1,
                            max_vertices: I::MAX_VERTICES,
                        });
                    }
                    mesh.positions.push(corner.position);
                    mesh.uvs.push(corner.uv);
                    mesh.normals.push(corner.normal);
                    mesh.indices.push(I::from_usize(mesh.positions.len() - 1));
                }
            }
        }

        debug!(
            "linear weld: {} corners -> {} unique vertices",
            stream.len(),
            mesh.vertex_count()
        );
        Ok(mesh)
    }
}
