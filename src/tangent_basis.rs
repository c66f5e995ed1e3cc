//! Per-triangle tangent-space basis computation.
//!
//! Produces the per-corner tangent/bitangent arrays that
//! [`TangentWelder`](crate::welder::TangentWelder) accumulates. Each
//! triangle gets one tangent and one bitangent derived from how its uv
//! coordinates stretch across its surface, replicated to all three corners.

use crate::math::vec3::Vec3;
use crate::stream::VertexStream;

/// Compute per-corner tangents and bitangents for a flat triangle stream.
///
/// Every 3 consecutive corners are treated as one triangle. The tangent
/// follows the direction of increasing `u`, the bitangent the direction of
/// increasing `v`, solved from the triangle's position and uv deltas.
/// Triangles whose uv area is degenerate (all three corners on one uv line)
/// have no well-defined basis and get zero vectors instead of NaN. Trailing
/// corners that do not form a full triangle also get zero vectors, so the
/// output lengths always equal the stream length.
pub fn compute_tangent_basis(stream: &VertexStream) -> (Vec<Vec3>, Vec<Vec3>) {
    let mut tangents = vec![Vec3::ZERO; stream.len()];
    let mut bitangents = vec![Vec3::ZERO; stream.len()];

    for tri in 0..stream.len() / 3 {
        let i = tri * 3;
        let (c0, c1, c2) = (stream.corner(i), stream.corner(i + 1), stream.corner(i + 2));

        let delta_pos1 = c1.position - c0.position;
        let delta_pos2 = c2.position - c0.position;
        let delta_uv1 = c1.uv - c0.uv;
        let delta_uv2 = c2.uv - c0.uv;

        let det = delta_uv1.x * delta_uv2.y - delta_uv1.y * delta_uv2.x;
        if det.abs() <= f32::EPSILON {
            continue;
        }

        let r = 1.0 / det;
        let tangent = (delta_pos1 * delta_uv2.y - delta_pos2 * delta_uv1.y) * r;
        let bitangent = (delta_pos2 * delta_uv1.x - delta_pos1 * delta_uv2.x) * r;

        for corner in i..i + 3 {
            tangents[corner] = tangent;
            bitangents[corner] = bitangent;
        }
    }

    (tangents, bitangents)
}

/// Orthonormalize an accumulated tangent against its vertex normal.
///
/// Welded tangent sums are generally neither unit length nor perpendicular
/// to the normal. Gram-Schmidt projects the tangent onto the plane
/// perpendicular to the normal and renormalizes it; when the uv layout
/// produced a left-handed basis the tangent is flipped so the shader can
/// rebuild the bitangent as `cross(normal, tangent)`. Call this per output
/// slot of an [`IndexedTangentMesh`](crate::indexed::IndexedTangentMesh)
/// once welding completes.
pub fn orthonormalize_basis(normal: Vec3, tangent: Vec3, bitangent: Vec3) -> Vec3 {
    let t = (tangent - normal * normal.dot(tangent)).normalize();
    if normal.cross(t).dot(bitangent) < 0.0 {
        -t
    } else {
        t
    }
}
