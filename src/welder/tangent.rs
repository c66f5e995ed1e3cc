//! Linear-scan welding with tangent/bitangent accumulation.

use log::debug;

use super::similar_vertex_index;
use crate::error::WeldError;
use crate::indexed::{IndexedTangentMesh, WeldIndex};
use crate::policy::{MergePolicy, DEFAULT_TOLERANCE};
use crate::stream::VertexStream;

/// Welds like [`LinearScanWelder`](super::LinearScanWelder) but keeps the
/// tangent-space contributions of merged corners.
///
/// Matching still considers position/uv/normal only. When a corner merges
/// into an existing slot, its tangent and bitangent are added to that slot's
/// running sums so shared vertices end up with the combined basis of every
/// face touching them; smooth normal-mapped shading needs exactly that.
/// The sums are not renormalized here, that is the caller's choice once
/// welding completes. A corner that opens a new slot seeds the sums with its
/// own tangent and bitangent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TangentWelder {
    tolerance: f32,
}

impl TangentWelder {
    /// Welder with the reference tolerance of 0.01.
    pub fn new() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Welder comparing each scalar within the given absolute tolerance.
    pub fn with_tolerance(tolerance: f32) -> Self {
        Self { tolerance }
    }

    /// Weld a stream that carries tangent/bitangent data.
    ///
    /// Fails with [`WeldError::MissingTangents`] when the stream has none.
    pub fn weld<I: WeldIndex>(
        &self,
        stream: &VertexStream,
    ) -> Result<IndexedTangentMesh<I>, WeldError> {
        if !stream.has_tangents() {
            return Err(WeldError::MissingTangents);
        }

        let policy = MergePolicy::Tolerance(self.tolerance);
        let mut mesh = IndexedTangentMesh {
            indices: Vec::with_capacity(stream.len()),
            ..IndexedTangentMesh::default()
        };

        for i in 0..stream.len() {
            let corner = stream.corner(i);
            let found = similar_vertex_index(
                &corner,
                &mesh.positions,
                &mesh.uvs,
                &mesh.normals,
                &policy,
            );

            match found {
                Some(slot) => {
                    mesh.indices.push(I::from_usize(slot));
                    mesh.tangents[slot] += stream.tangent(i);
                    mesh.bitangents[slot] += stream.bitangent(i);
                }
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
                    mesh.tangents.push(stream.tangent(i));
                    mesh.bitangents.push(stream.bitangent(i));
                    mesh.indices.push(I::from_usize(mesh.positions.len() - 1));
                }
            }
        }

        debug!(
            "tangent weld: {} corners -> {} unique vertices",
            stream.len(),
            mesh.vertex_count()
        );
        Ok(mesh)
    }
}

impl Default for TangentWelder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2::Vec2;
    use crate::math::vec3::Vec3;
    use approx::assert_relative_eq;

    #[test]
    fn matched_corners_sum_their_tangents() {
        let positions = [Vec3::new(1.0, 2.0, 3.0); 2];
        let uvs = [Vec2::new(0.5, 0.5); 2];
        let normals = [Vec3::new(0.0, 1.0, 0.0); 2];
        let tangents = [Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0)];
        let bitangents = [Vec3::new(0.0, 0.0, 2.0), Vec3::new(0.0, 0.5, 0.0)];

        let stream = VertexStream::new(&positions, &uvs, &normals)
            .unwrap()
            .with_tangents(&tangents, &bitangents)
            .unwrap();
        let mesh: IndexedTangentMesh<u16> = TangentWelder::new().weld(&stream).unwrap();

        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.indices, vec![0, 0]);

        // The slot holds the sum of both contributions, not an average and
        // not just the first corner's value.
        assert_relative_eq!(mesh.tangents[0].x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(mesh.tangents[0].z, 1.0, epsilon = 1e-6);
        assert_relative_eq!(mesh.bitangents[0].y, 0.5, epsilon = 1e-6);
        assert_relative_eq!(mesh.bitangents[0].z, 2.0, epsilon = 1e-6);
    }

    #[test]
    fn fresh_slot_copies_the_corners_own_tangent() {
        // Two dissimilar corners: the second opens a new slot and must seed
        // it from its own tangent data, not from any output-side value.
        let positions = [Vec3::new(0.0, 0.0, 0.0), Vec3::new(5.0, 0.0, 0.0)];
        let uvs = [Vec2::ZERO; 2];
        let normals = [Vec3::new(0.0, 0.0, 1.0); 2];
        let tangents = [Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 7.0, 0.0)];
        let bitangents = [Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 9.0)];

        let stream = VertexStream::new(&positions, &uvs, &normals)
            .unwrap()
            .with_tangents(&tangents, &bitangents)
            .unwrap();
        let mesh: IndexedTangentMesh<u16> = TangentWelder::new().weld(&stream).unwrap();

        assert_eq!(mesh.vertex_count(), 2);
        assert_eq!(mesh.tangents[1], Vec3::new(0.0, 7.0, 0.0));
        assert_eq!(mesh.bitangents[1], Vec3::new(0.0, 0.0, 9.0));
    }

    #[test]
    fn stream_without_tangents_is_rejected() {
        let positions = [Vec3::ZERO];
        let uvs = [Vec2::ZERO];
        let normals = [Vec3::new(0.0, 0.0, 1.0)];
        let stream = VertexStream::new(&positions, &uvs, &normals).unwrap();

        let err = TangentWelder::new().weld::<u16>(&stream).unwrap_err();
        assert_eq!(err, WeldError::MissingTangents);
    }

    #[test]
    fn indices_reconstruct_the_input_order() {
        let positions = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
        ];
        let uvs = [Vec2::ZERO; 3];
        let normals = [Vec3::new(0.0, 0.0, 1.0); 3];
        let tangents = [Vec3::new(1.0, 0.0, 0.0); 3];
        let bitangents = [Vec3::new(0.0, 1.0, 0.0); 3];

        let stream = VertexStream::new(&positions, &uvs, &normals)
            .unwrap()
            .with_tangents(&tangents, &bitangents)
            .unwrap();
        let mesh: IndexedTangentMesh<u16> = TangentWelder::new().weld(&stream).unwrap();

        assert_eq!(mesh.indices, vec![0, 1, 0]);
        for (i, &index) in mesh.indices.iter().enumerate() {
            let slot = index as usize;
            assert_eq!(mesh.vertex(slot).position, stream.corner(i).position);
        }
    }
}
