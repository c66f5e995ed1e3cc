//! Input contract: a flat, non-indexed triangle stream.
//!
//! A [`VertexStream`] borrows parallel attribute slices produced by an
//! external mesh loader, one entry per triangle corner (every 3 consecutive
//! corners form one triangle). The stream is validated once on construction
//! so the welding strategies can assume equal lengths throughout.

use crate::error::WeldError;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;

/// One corner of one triangle: the attributes that participate in merging.
///
/// A corner has no identity beyond its attribute values; the same geometric
/// vertex typically appears as many corners in the input stream.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Corner {
    pub position: Vec3,
    pub uv: Vec2,
    pub normal: Vec3,
}

impl Corner {
    /// The eight scalars compared by every merge policy, in a fixed order:
    /// position xyz, uv xy, normal xyz.
    pub fn scalars(&self) -> [f32; 8] {
        [
            self.position.x,
            self.position.y,
            self.position.z,
            self.uv.x,
            self.uv.y,
            self.normal.x,
            self.normal.y,
            self.normal.z,
        ]
    }
}

/// Borrowed view over the flat input arrays of a triangle stream.
///
/// The welding engine reads these slices but never retains them beyond a
/// single weld call. Tangent/bitangent data is optional and only required
/// by [`TangentWelder`](crate::welder::TangentWelder).
#[derive(Clone, Copy, Debug)]
pub struct VertexStream<'a> {
    positions: &'a [Vec3],
    uvs: &'a [Vec2],
    normals: &'a [Vec3],
    tangents: Option<&'a [Vec3]>,
    bitangents: Option<&'a [Vec3]>,
}

impl<'a> VertexStream<'a> {
    /// Create a stream over position/uv/normal arrays of equal length.
    pub fn new(
        positions: &'a [Vec3],
        uvs: &'a [Vec2],
        normals: &'a [Vec3],
    ) -> Result<Self, WeldError> {
        if positions.len() != uvs.len() || positions.len() != normals.len() {
            return Err(WeldError::MismatchedLengths {
                positions: positions.len(),
                uvs: uvs.len(),
                normals: normals.len(),
            });
        }

        Ok(Self {
            positions,
            uvs,
            normals,
            tangents: None,
            bitangents: None,
        })
    }

    /// Attach per-corner tangent and bitangent arrays.
    ///
    /// Both must match the stream's corner count.
    pub fn with_tangents(
        self,
        tangents: &'a [Vec3],
        bitangents: &'a [Vec3],
    ) -> Result<Self, WeldError> {
        if tangents.len() != self.positions.len() || bitangents.len() != self.positions.len() {
            return Err(WeldError::MismatchedTangentLengths {
                vertices: self.positions.len(),
                tangents: tangents.len(),
                bitangents: bitangents.len(),
            });
        }

        Ok(Self {
            tangents: Some(tangents),
            bitangents: Some(bitangents),
            ..self
        })
    }

    /// Number of corners in the stream.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the stream has no corners at all.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Whether tangent/bitangent data is attached.
    pub fn has_tangents(&self) -> bool {
        self.tangents.is_some()
    }

    /// The attributes of corner `i` that participate in merging.
    pub fn corner(&self, i: usize) -> Corner {
        Corner {
            position: self.positions[i],
            uv: self.uvs[i],
            normal: self.normals[i],
        }
    }

    /// Tangent of corner `i`; only valid when tangent data is attached.
    pub(crate) fn tangent(&self, i: usize) -> Vec3 {
        self.tangents.map_or(Vec3::ZERO, |t| t[i])
    }

    /// Bitangent of corner `i`; only valid when tangent data is attached.
    pub(crate) fn bitangent(&self, i: usize) -> Vec3 {
        self.bitangents.map_or(Vec3::ZERO, |b| b[i])
    }
}
