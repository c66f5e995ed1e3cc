//! End-to-end welding of a mesh loaded through `tobj`.
//!
//! Mirrors the intended pipeline: an OBJ loader hands over indexed attribute
//! data, the renderer-facing code flattens it into a per-corner stream, and
//! the welder rebuilds a compact indexed mesh from that stream.

use meshweld::math::vec2::Vec2;
use meshweld::math::vec3::Vec3;
use meshweld::{
    IndexedMesh, IndexedTangentMesh, LinearScanWelder, PackedKeyWelder, TangentWelder,
    VertexStream, Welder,
};

/// Unit cube with per-face normals and a shared 4-corner uv patch.
const CUBE_OBJ: &str = "\
v -1.0 -1.0 -1.0
v  1.0 -1.0 -1.0
v  1.0  1.0 -1.0
v -1.0  1.0 -1.0
v -1.0 -1.0  1.0
v  1.0 -1.0  1.0
v  1.0  1.0  1.0
v -1.0  1.0  1.0
vt 0.0 0.0
vt 1.0 0.0
vt 1.0 1.0
vt 0.0 1.0
vn  0.0  0.0 -1.0
vn  0.0  0.0  1.0
vn -1.0  0.0  0.0
vn  1.0  0.0  0.0
vn  0.0 -1.0  0.0
vn  0.0  1.0  0.0
f 1/1/1 3/3/1 2/2/1
f 1/1/1 4/4/1 3/3/1
f 5/1/2 6/2/2 7/3/2
f 5/1/2 7/3/2 8/4/2
f 1/1/3 5/2/3 8/3/3
f 1/1/3 8/3/3 4/4/3
f 2/1/4 3/2/4 7/3/4
f 2/1/4 7/3/4 6/4/4
f 1/1/5 2/2/5 6/3/5
f 1/1/5 6/3/5 5/4/5
f 4/1/6 8/2/6 7/3/6
f 4/1/6 7/3/6 3/4/6
";

/// Load the cube and flatten it into one attribute entry per triangle corner.
fn flat_cube_corners() -> (Vec<Vec3>, Vec<Vec2>, Vec<Vec3>) {
    let options = tobj::LoadOptions {
        triangulate: true,
        single_index: true,
        ..Default::default()
    };
    let (models, _) = tobj::load_obj_buf(
        &mut CUBE_OBJ.as_bytes(),
        &options,
        |_| Err(tobj::LoadError::OpenFileFailed),
    )
    .expect("cube OBJ should parse");

    let mesh = &models[0].mesh;
    let mut positions = Vec::new();
    let mut uvs = Vec::new();
    let mut normals = Vec::new();

    for &index in &mesh.indices {
        let i = index as usize;
        positions.push(Vec3::new(
            mesh.positions[3 * i],
            mesh.positions[3 * i + 1],
            mesh.positions[3 * i + 2],
        ));
        uvs.push(Vec2::new(mesh.texcoords[2 * i], mesh.texcoords[2 * i + 1]));
        normals.push(Vec3::new(
            mesh.normals[3 * i],
            mesh.normals[3 * i + 1],
            mesh.normals[3 * i + 2],
        ));
    }

    (positions, uvs, normals)
}

#[test]
fn cube_welds_to_24_unique_vertices() {
    let (positions, uvs, normals) = flat_cube_corners();
    assert_eq!(positions.len(), 36); // 12 triangles, 3 corners each

    let stream = VertexStream::new(&positions, &uvs, &normals).unwrap();

    // 6 faces x 4 distinct position/uv/normal combinations. Every corner of
    // the cube sits on 3 faces with different normals, so nothing merges
    // across faces.
    let scanned: IndexedMesh<u16> = LinearScanWelder::new().weld(&stream).unwrap();
    let packed: IndexedMesh<u16> = PackedKeyWelder::bit_exact().weld(&stream).unwrap();

    assert_eq!(scanned.vertex_count(), 24);
    assert_eq!(packed.vertex_count(), 24);
    assert_eq!(scanned.index_count(), 36);
    assert_eq!(packed.index_count(), 36);
}

#[test]
fn welded_cube_reconstructs_every_corner() {
    let (positions, uvs, normals) = flat_cube_corners();
    let stream = VertexStream::new(&positions, &uvs, &normals).unwrap();
    let mesh: IndexedMesh<u16> = PackedKeyWelder::bit_exact().weld(&stream).unwrap();

    // Attribute values are exact in the OBJ, so gathering through the index
    // buffer must reproduce the flat stream bit for bit.
    for i in 0..stream.len() {
        assert_eq!(mesh.gather(i), stream.corner(i));
    }
}

#[test]
fn rewelding_the_welded_cube_changes_nothing() {
    let (positions, uvs, normals) = flat_cube_corners();
    let stream = VertexStream::new(&positions, &uvs, &normals).unwrap();
    let welder = PackedKeyWelder::bit_exact();
    let first: IndexedMesh<u16> = welder.weld(&stream).unwrap();

    let stream2 = VertexStream::new(&first.positions, &first.uvs, &first.normals).unwrap();
    let second: IndexedMesh<u16> = welder.weld(&stream2).unwrap();

    assert_eq!(second.vertex_count(), first.vertex_count());
    let expected: Vec<u16> = (0..first.vertex_count() as u16).collect();
    assert_eq!(second.indices, expected);
}

#[test]
fn cube_with_computed_tangents_welds_cleanly() {
    let (positions, uvs, normals) = flat_cube_corners();
    let stream = VertexStream::new(&positions, &uvs, &normals).unwrap();
    let (tangents, bitangents) = meshweld::tangent_basis::compute_tangent_basis(&stream);

    let stream = stream.with_tangents(&tangents, &bitangents).unwrap();
    let mesh: IndexedTangentMesh<u16> = TangentWelder::new().weld(&stream).unwrap();

    assert_eq!(mesh.vertex_count(), 24);
    assert_eq!(mesh.tangents.len(), 24);
    assert_eq!(mesh.bitangents.len(), 24);

    // Each welded cube vertex absorbed at least one corner's basis; every
    // face has a valid uv patch, so no slot should be left at zero.
    for tangent in &mesh.tangents {
        assert!(tangent.magnitude() > 0.0);
    }

    // After the caller-side orthonormalization pass, every slot carries a
    // unit tangent perpendicular to its normal.
    for slot in 0..mesh.vertex_count() {
        let t = meshweld::tangent_basis::orthonormalize_basis(
            mesh.normals[slot],
            mesh.tangents[slot],
            mesh.bitangents[slot],
        );
        assert!((t.magnitude() - 1.0).abs() < 1e-5);
        assert!(t.dot(mesh.normals[slot]).abs() < 1e-5);
    }
}
