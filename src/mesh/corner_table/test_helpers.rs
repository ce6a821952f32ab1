use super::*;
use crate::helpers::aliases::Vec3f;

pub fn create_unit_square_mesh() -> CornerTableF {
    let vertices = vec![
        Vec3f::new(0.0, 1.0, 0.0),
        Vec3f::new(0.0, 0.0, 0.0),
        Vec3f::new(1.0, 0.0, 0.0),
        Vec3f::new(1.0, 1.0, 0.0),
    ];

    let indices = vec![0, 1, 2, 2, 3, 0];

    CornerTableF::from_vertex_and_face_slices(&vertices, &indices)
}

pub fn create_unit_cross_square_mesh() -> CornerTableF {
    let vertices = vec![
        Vec3f::new(0.0, 1.0, 0.0),
        Vec3f::new(0.0, 0.0, 0.0),
        Vec3f::new(1.0, 0.0, 0.0),
        Vec3f::new(1.0, 1.0, 0.0),
        Vec3f::new(0.5, 0.5, 0.0),
    ];

    let indices = vec![0, 1, 4, 1, 2, 4, 2, 3, 4, 3, 0, 4];

    CornerTableF::from_vertex_and_face_slices(&vertices, &indices)
}

pub fn create_single_face_mesh() -> CornerTableF {
    let vertices = vec![
        Vec3f::new(0.0, 1.0, 0.0),
        Vec3f::new(0.0, 0.0, 0.0),
        Vec3f::new(1.0, 0.0, 0.0),
    ];

    let indices = vec![0, 1, 2];

    CornerTableF::from_vertex_and_face_slices(&vertices, &indices)
}

/// Mesh with vertices around both endpoints of the edge being tested.
pub fn create_collapse_edge_sample_mesh1() -> CornerTableF {
    let vertices = vec![
        Vec3f::new(0.0, 1.0, 0.0),
        Vec3f::new(0.0, 0.5, 0.0),
        Vec3f::new(0.0, 0.0, 0.0),
        Vec3f::new(0.5, 0.0, 0.0),
        Vec3f::new(1.0, 0.0, 0.0),
        Vec3f::new(1.0, 0.5, 0.0),
        Vec3f::new(1.0, 1.0, 0.0),
        Vec3f::new(0.5, 1.0, 0.0),
        Vec3f::new(0.25, 0.5, 0.0),
        Vec3f::new(0.75, 0.5, 0.0),
    ];

    let indices = vec![
        0, 1, 8, 1, 2, 8, 2, 3, 8, 3, 9, 8, 3, 4, 9, 4, 5, 9, 5, 6, 9, 6, 7, 9, 7, 8, 9, 7, 0, 8,
    ];

    CornerTableF::from_vertex_and_face_slices(&vertices, &indices)
}

/// Mesh with vertices around only one endpoint of the edge being tested.
pub fn create_collapse_edge_sample_mesh2() -> CornerTableF {
    let vertices = vec![
        Vec3f::new(0.5, 0.0, 0.0),
        Vec3f::new(1.0, 0.0, 0.0),
        Vec3f::new(1.0, 0.5, 0.0),
        Vec3f::new(1.0, 1.0, 0.0),
        Vec3f::new(0.5, 1.0, 0.0),
        Vec3f::new(0.25, 0.5, 0.0),
        Vec3f::new(0.75, 0.5, 0.0),
    ];

    let indices = vec![0, 1, 6, 1, 2, 6, 2, 3, 6, 3, 4, 6, 4, 5, 6, 5, 0, 6];

    CornerTableF::from_vertex_and_face_slices(&vertices, &indices)
}

/// Half star, used to exercise boundary-edge collapse.
pub fn create_collapse_edge_sample_mesh3() -> CornerTableF {
    let vertices = vec![
        Vec3f::new(0.0, 1.0, 0.0),
        Vec3f::new(1.0, 0.0, 0.0),
        Vec3f::new(3.0, 0.0, 0.0),
        Vec3f::new(4.0, 1.0, 0.0),
        Vec3f::new(2.0, 1.0, 0.0),
    ];

    let indices = vec![0, 1, 4, 1, 2, 4, 2, 3, 4];

    CornerTableF::from_vertex_and_face_slices(&vertices, &indices)
}

pub fn create_flip_edge_sample_mesh() -> CornerTableF {
    let vertices = vec![
        Vec3f::new(0.5, 1.0, 0.0),
        Vec3f::new(0.0, 0.5, 0.0),
        Vec3f::new(0.5, 0.0, 0.0),
        Vec3f::new(1.0, 0.5, 0.0),
        Vec3f::new(1.0, 1.0, 0.0),
        Vec3f::new(0.0, 1.0, 0.0),
        Vec3f::new(0.0, 0.0, 0.0),
        Vec3f::new(1.0, 0.0, 0.0),
    ];

    let indices = vec![
        0, 1, 2, 2, 3, 0, 1, 6, 2, 2, 7, 3, 3, 4, 0, 0, 5, 1,
    ];

    CornerTableF::from_vertex_and_face_slices(&vertices, &indices)
}

/// Asserts two meshes have the same connectivity and vertex positions,
/// comparing through the public API rather than internal storage.
pub fn assert_mesh_eq(mesh: &CornerTableF, expected: &CornerTableF) {
    let actual_vertices: Vec<_> = mesh.vertices().map(|v| *mesh[v].position()).collect();
    let expected_vertices: Vec<_> = expected
        .vertices()
        .map(|v| *expected[v].position())
        .collect();
    assert_eq!(actual_vertices, expected_vertices);

    let actual_faces: Vec<_> = mesh.faces().map(|f| mesh.face_vertices(f)).collect();
    let expected_faces: Vec<_> = expected.faces().map(|f| expected.face_vertices(f)).collect();
    assert_eq!(actual_faces, expected_faces);
}
