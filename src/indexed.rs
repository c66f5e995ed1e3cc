//! Output contract: indexed meshes and the configurable index width.

use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::stream::Corner;

/// An unsigned integer type usable as a GPU index-buffer element.
///
/// The index width bounds how many unique vertices a weld may produce.
/// `u16` matches the classic 16-bit index buffer (65 536 vertices); `u32`
/// widens the ceiling for large meshes. Exceeding the ceiling is a hard
/// [`IndexOverflow`](crate::WeldError::IndexOverflow) error, never a
/// silent wraparound.
pub trait WeldIndex: Copy + std::fmt::Debug {
    /// Maximum number of unique vertices this index type can address.
    const MAX_VERTICES: usize;

    /// Convert an output slot number to an index value.
    /// Callers guarantee `value < MAX_VERTICES`.
    fn from_usize(value: usize) -> Self;

    /// Widen an index value back to a slot number.
    fn to_usize(self) -> usize;
}

impl WeldIndex for u16 {
    const MAX_VERTICES: usize = (u16::MAX as usize) + 1;

    #[inline]
    fn from_usize(value: usize) -> Self {
        value as u16
    }

    #[inline]
    fn to_usize(self) -> usize {
        self as usize
    }
}

impl WeldIndex for u32 {
    const MAX_VERTICES: usize = (u32::MAX as usize).saturating_add(1);

    #[inline]
    fn from_usize(value: usize) -> Self {
        value as u32
    }

    #[inline]
    fn to_usize(self) -> usize {
        self as usize
    }
}

/// A deduplicated, indexed mesh: unique vertices in first-seen order plus
/// one index per input corner.
///
/// `indices.len()` equals the input corner count; the attribute arrays all
/// share the unique-vertex length, which never exceeds the input length.
#[derive(Clone, Debug, PartialEq)]
pub struct IndexedMesh<I = u16> {
    pub indices: Vec<I>,
    pub positions: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub normals: Vec<Vec3>,
}

impl<I> Default for IndexedMesh<I> {
    fn default() -> Self {
        Self {
            indices: Vec::new(),
            positions: Vec::new(),
            uvs: Vec::new(),
            normals: Vec::new(),
        }
    }
}

impl<I: WeldIndex> IndexedMesh<I> {
    /// Number of unique vertices retained after welding.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of indices (one per input corner).
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// The unique vertex stored in output slot `slot`.
    pub fn vertex(&self, slot: usize) -> Corner {
        Corner {
            position: self.positions[slot],
            uv: self.uvs[slot],
            normal: self.normals[slot],
        }
    }

    /// The vertex referenced by input corner `i`, i.e. `vertex(indices[i])`.
    pub fn gather(&self, i: usize) -> Corner {
        self.vertex(self.indices[i].to_usize())
    }
}

/// An indexed mesh whose slots also carry accumulated tangent/bitangent sums.
///
/// Tangents are running sums of every merged corner's contribution; they are
/// deliberately not renormalized here, that is the caller's choice after
/// welding completes.
#[derive(Clone, Debug, PartialEq)]
pub struct IndexedTangentMesh<I = u16> {
    pub indices: Vec<I>,
    pub positions: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub normals: Vec<Vec3>,
    pub tangents: Vec<Vec3>,
    pub bitangents: Vec<Vec3>,
}

impl<I> Default for IndexedTangentMesh<I> {
    fn default() -> Self {
        Self {
            indices: Vec::new(),
            positions: Vec::new(),
            uvs: Vec::new(),
            normals: Vec::new(),
            tangents: Vec::new(),
            bitangents: Vec::new(),
        }
    }
}

impl<I: WeldIndex> IndexedTangentMesh<I> {
    /// Number of unique vertices retained after welding.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of indices (one per input corner).
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// The merge-relevant attributes stored in output slot `slot`.
    pub fn vertex(&self, slot: usize) -> Corner {
        Corner {
            position: self.positions[slot],
            uv: self.uvs[slot],
            normal: self.normals[slot],
        }
    }
}
