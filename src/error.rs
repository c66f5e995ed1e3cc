//! Error types for vertex welding.

use std::fmt;

/// Errors that can occur while welding a vertex stream.
///
/// All failures are reported synchronously before or during a single weld
/// call; no partial output is ever returned. An empty input stream is not
/// an error and yields empty outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeldError {
    /// The position/uv/normal arrays have different lengths.
    MismatchedLengths {
        positions: usize,
        uvs: usize,
        normals: usize,
    },
    /// Tangent/bitangent arrays were supplied but do not match the vertex count.
    MismatchedTangentLengths {
        vertices: usize,
        tangents: usize,
        bitangents: usize,
    },
    /// A tangent-accumulating weld was requested on a stream without tangent data.
    MissingTangents,
    /// The number of unique output vertices would exceed the chosen index width.
    /// Surfaced as soon as the first unrepresentable vertex would be created.
    IndexOverflow {
        unique_vertices: usize,
        max_vertices: usize,
    },
}

impl fmt::Display for WeldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MismatchedLengths {
                positions,
                uvs,
                normals,
            } => write!(
                f,
                "mismatched attribute lengths: {} positions, {} uvs, {} normals",
                positions, uvs, normals
            ),
            Self::MismatchedTangentLengths {
                vertices,
                tangents,
                bitangents,
            } => write!(
                f,
                "mismatched tangent lengths: {} vertices, {} tangents, {} bitangents",
                vertices, tangents, bitangents
            ),
            Self::MissingTangents => {
                write!(f, "stream has no tangent data to accumulate")
            }
            Self::IndexOverflow {
                unique_vertices,
                max_vertices,
            } => write!(
                f,
                "index overflow: vertex {} exceeds the {}-vertex limit of the index type",
                unique_vertices, max_vertices
            ),
        }
    }
}

impl std::error::Error for WeldError {}
