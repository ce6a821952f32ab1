use crate::mesh::corner_table::{CornerTable, EdgeId};
use crate::geometry::traits::RealNumber;
use num_traits::cast;

/// Dihedral cosines below this are near-degenerate folds, not creases; see §4.1.
fn min_crease_cos<S: RealNumber>() -> S {
    cast(-0.98).unwrap()
}

/// Tags every edge of `mesh` as a crease (`CornerFlags::IS_CREASE`, on both
/// corners of the edge) iff its dihedral angle exceeds `crease_angle_cos` or it
/// lies on the boundary. If `user_selected_creases`, the caller's tags are
/// trusted and this is a no-op — this is the only component that *creates*
/// feature bits, every later pass only preserves them.
pub fn tag_creases<S: RealNumber>(mesh: &CornerTable<S>, crease_angle_cos: S, user_selected_creases: bool) {
    if user_selected_creases {
        return;
    }

    for edge in mesh.edges() {
        let crease = is_crease_edge(mesh, edge, crease_angle_cos);
        set_edge_crease(mesh, edge, crease);
    }
}

fn is_crease_edge<S: RealNumber>(mesh: &CornerTable<S>, edge: EdgeId, crease_angle_cos: S) -> bool {
    let (face1, face2) = mesh.edge_faces(edge);

    let Some(face2) = face2 else {
        return true; // Boundary edge
    };

    let (Some(n1), Some(n2)) = (mesh.face_normal(face1), mesh.face_normal(face2)) else {
        return true; // Degenerate face, treat the edge defensively as a feature
    };

    let cos = n1.dot(&n2).clamp(-S::one(), S::one());
    cos <= crease_angle_cos && cos >= min_crease_cos()
}

fn set_edge_crease<S: RealNumber>(mesh: &CornerTable<S>, edge: EdgeId, crease: bool) {
    mesh[edge.corner()].set_crease(crease);
    if let Some(opposite) = mesh.opposite_edge(edge) {
        mesh[opposite.corner()].set_crease(crease);
    }
}

/// Refreshes `VertexFlags::IS_BORDER` on every vertex: a vertex is a border
/// iff it touches a boundary edge or a crease edge (invariant 3). Must run
/// after [`tag_creases`].
pub fn mark_border_vertices<S: RealNumber>(mesh: &CornerTable<S>) {
    for vertex in mesh.vertices() {
        mesh[vertex].set_border(false);
    }

    for edge in mesh.edges() {
        if mesh.is_edge_on_boundary(edge) || mesh[edge.corner()].is_crease() {
            let (v1, v2) = mesh.edge_vertices(edge);
            mesh[v1].set_border(true);
            mesh[v2].set_border(true);
        }
    }
}
