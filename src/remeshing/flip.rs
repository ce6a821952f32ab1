use crate::{
    geometry::{primitives::triangle3::Triangle3, traits::RealNumber},
    mesh::corner_table::{CornerTable, EdgeId, FaceId, VertexId},
    remeshing::{driver::surface_distance_ok, params::Params},
    spatial_partitioning::grid::Grid,
};
use num_traits::cast;

const QUALITY_DROP_LIMIT: f64 = 0.5;
const QUALITY_GAIN_BONUS: f64 = 1.5;
const NORMAL_DEVIATION_DEG: f64 = 5.0;

/// Swaps edges to improve vertex valence, mirroring the existing
/// `IncrementalRemesher::flip_edges` generalized with crease/border exclusion,
/// a `testSwap` defect-and-quality gate, and the normal-flip guard (§4.5).
pub fn improve_valence<S: RealNumber>(
    mesh: &mut CornerTable<S>,
    reference: &Grid<Triangle3<S>>,
    params: &mut Params<S>,
) {
    let edges: Vec<EdgeId> = mesh.edges().collect();

    for edge in edges {
        if !mesh.edge_exists(edge) {
            continue;
        }

        if mesh.is_edge_on_boundary(edge) || mesh[edge.corner()].is_crease() {
            continue;
        }

        let (v0, v2) = mesh.edge_vertices(edge);
        if params.selected_only() && !(mesh[v0].is_selected() && mesh[v2].is_selected()) {
            continue;
        }

        let (f1, f2) = mesh.edge_faces(edge);
        let Some(f2) = f2 else { continue };

        let v1 = third_vertex(mesh, f1, v0, v2);
        let v3 = third_vertex(mesh, f2, v0, v2);

        if !is_flip_topologically_safe(mesh, v0, v1, v2, v3) {
            continue;
        }

        if !test_swap(mesh, v0, v1, v2, v3) {
            continue;
        }

        if !normals_survive_flip(mesh, v0, v1, v2, v3) {
            continue;
        }

        if params.surf_dist_check() {
            let midpoint = (*mesh[v1].position() + *mesh[v3].position()) * cast(0.5).unwrap();
            if !surface_distance_ok(reference, params.max_surf_dist(), &[midpoint]) {
                continue;
            }
        }

        flip_with_crease_transfer(mesh, edge, v0, v1, v2, v3);
        params.stat.flip_num += 1;
    }
}

fn third_vertex<S: RealNumber>(mesh: &CornerTable<S>, face: FaceId, a: VertexId, b: VertexId) -> VertexId {
    let (v1, v2, v3) = mesh.face_vertices(face);
    if v1 != a && v1 != b {
        v1
    } else if v2 != a && v2 != b {
        v2
    } else {
        v3
    }
}

fn is_flip_topologically_safe<S: RealNumber>(
    mesh: &CornerTable<S>,
    v0: VertexId,
    v1: VertexId,
    v2: VertexId,
    v3: VertexId,
) -> bool {
    if v1 == v3 {
        return false;
    }

    let mut already_connected = false;
    mesh.vertices_around_vertex(v1, |v| {
        if v == v3 {
            already_connected = true;
        }
    });
    if already_connected {
        return false;
    }

    let p0 = mesh[v0].position();
    let p1 = mesh[v1].position();
    let p2 = mesh[v2].position();
    let p3 = mesh[v3].position();

    !Triangle3::is_degenerate(p0, p1, p3) && !Triangle3::is_degenerate(p1, p2, p3)
}

fn test_swap<S: RealNumber>(mesh: &CornerTable<S>, v0: VertexId, v1: VertexId, v2: VertexId, v3: VertexId) -> bool {
    let old_defect = valence_defect(mesh, v0, 0) + valence_defect(mesh, v1, 0) + valence_defect(mesh, v2, 0) + valence_defect(mesh, v3, 0);
    let new_defect = valence_defect(mesh, v0, -1) + valence_defect(mesh, v1, 1) + valence_defect(mesh, v2, -1) + valence_defect(mesh, v3, 1);

    let (p0, p1, p2, p3) = (mesh[v0].position(), mesh[v1].position(), mesh[v2].position(), mesh[v3].position());

    let quality_old = Triangle3::quality(p0, p2, p3).min(Triangle3::quality(p0, p1, p2));
    let quality_new = Triangle3::quality(p0, p1, p3).min(Triangle3::quality(p2, p3, p1));

    let drop_limit: S = cast(QUALITY_DROP_LIMIT).unwrap();
    let gain_bonus: S = cast(QUALITY_GAIN_BONUS).unwrap();

    (new_defect < old_defect && quality_new >= quality_old * drop_limit)
        || (new_defect == old_defect && quality_new > quality_old)
        || quality_new > quality_old * gain_bonus
}

fn valence_defect<S: RealNumber>(mesh: &CornerTable<S>, vertex: VertexId, delta: isize) -> isize {
    let ideal = if mesh[vertex].is_border() { 4 } else { 6 };
    let actual = vertex_valence(mesh, vertex) as isize + delta;
    (ideal - actual).abs()
}

fn vertex_valence<S: RealNumber>(mesh: &CornerTable<S>, vertex: VertexId) -> usize {
    let mut valence = 0;
    mesh.vertices_around_vertex(vertex, |_| valence += 1);
    valence
}

fn normals_survive_flip<S: RealNumber>(mesh: &CornerTable<S>, v0: VertexId, v1: VertexId, v2: VertexId, v3: VertexId) -> bool {
    let (p0, p1, p2, p3) = (mesh[v0].position(), mesh[v1].position(), mesh[v2].position(), mesh[v3].position());

    let Some(old1) = Triangle3::normal(p0, p1, p2) else { return false };
    let Some(old2) = Triangle3::normal(p0, p2, p3) else { return false };
    let Some(new1) = Triangle3::normal(p0, p1, p3) else { return false };
    let Some(new2) = Triangle3::normal(p1, p2, p3) else { return false };

    let threshold_cos: S = cast::<f64, S>(NORMAL_DEVIATION_DEG).unwrap().to_radians().cos();

    [
        old1.dot(&new1),
        old1.dot(&new2),
        old2.dot(&new1),
        old2.dot(&new2),
    ]
    .into_iter()
    .all(|cos| cos >= threshold_cos)
}

fn flip_with_crease_transfer<S: RealNumber>(
    mesh: &mut CornerTable<S>,
    edge: EdgeId,
    v0: VertexId,
    v1: VertexId,
    v2: VertexId,
    v3: VertexId,
) {
    let rim = [(v0, v1), (v1, v2), (v2, v3), (v3, v0)];
    let snapshots: Vec<(VertexId, VertexId, bool)> = rim
        .into_iter()
        .filter_map(|(a, b)| find_edge_between(mesh, a, b).map(|e| (a, b, mesh[e.corner()].is_crease())))
        .collect();

    mesh.flip_edge(edge);

    for (a, b, was_crease) in snapshots {
        if !was_crease {
            continue;
        }
        if let Some(e) = find_edge_between(mesh, a, b) {
            mesh[e.corner()].set_crease(true);
            if let Some(opposite) = mesh.opposite_edge(e) {
                mesh[opposite.corner()].set_crease(true);
            }
        }
    }
}

fn find_edge_between<S: RealNumber>(mesh: &CornerTable<S>, a: VertexId, b: VertexId) -> Option<EdgeId> {
    let mut found = None;
    mesh.edges_around_vertex(a, |edge| {
        if found.is_some() {
            return;
        }
        let (x, y) = mesh.edge_vertices(edge);
        if (x == a && y == b) || (x == b && y == a) {
            found = Some(edge);
        }
    });
    found
}
