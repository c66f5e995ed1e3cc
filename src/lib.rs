//! Vertex welding and index-buffer generation for triangle meshes.
//!
//! This crate turns a flat, non-indexed triangle stream (one duplicated
//! position/uv/normal per triangle corner, as produced by a mesh loader)
//! into a compact indexed mesh: unique vertices in first-seen order plus one
//! index per corner, ready for upload as GPU vertex and index buffers. No
//! graphics API is touched here; rendering is the caller's business.
//!
//! # Quick Start
//!
//! ```ignore
//! use meshweld::prelude::*;
//!
//! let stream = VertexStream::new(&positions, &uvs, &normals)?;
//! let mesh: IndexedMesh<u16> = LinearScanWelder::new().weld(&stream)?;
//! ```

// Public API - exposed to library consumers
pub mod error;
pub mod indexed;
pub mod math;
pub mod policy;
pub mod stream;
pub mod tangent_basis;
pub mod welder;

// Re-export commonly needed types at crate root for convenience
pub use error::WeldError;
pub use indexed::{IndexedMesh, IndexedTangentMesh, WeldIndex};
pub use policy::MergePolicy;
pub use stream::{Corner, VertexStream};
pub use welder::{LinearScanWelder, PackedKeyWelder, TangentWelder, Welder};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use meshweld::prelude::*;
/// ```
pub mod prelude {
    // Input/output contracts
    pub use crate::indexed::{IndexedMesh, IndexedTangentMesh, WeldIndex};
    pub use crate::stream::{Corner, VertexStream};

    // Welding strategies
    pub use crate::welder::{LinearScanWelder, PackedKeyWelder, TangentWelder, Welder};

    // Policies & errors
    pub use crate::error::WeldError;
    pub use crate::policy::MergePolicy;

    // Math
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;

    // Tangent-space helpers
    pub use crate::tangent_basis::{compute_tangent_basis, orthonormalize_basis};
}
