use crate::{
    algo::{utils::tangential_relaxation, vertex_shift::is_vertex_shift_safe},
    geometry::{primitives::triangle3::Triangle3, traits::RealNumber},
    helpers::aliases::Vec3,
    mesh::{
        corner_table::{CornerTable, FaceId, VertexId},
        selection::SelectionStack,
    },
    remeshing::{driver::surface_distance_ok, params::Params},
    spatial_partitioning::grid::Grid,
};
use num_traits::cast;
use std::collections::HashMap;

const FOLD_RELAX_ITERATIONS: usize = 3;
const ANGULAR_FLIP_CAP_DEG: f64 = 1.0;

/// Tangential Laplacian smoothing, §4.6 stage one. Every non-border vertex is
/// relaxed towards the barycenter of its one-ring projected back onto the
/// local tangent plane, exactly as `algo::utils::tangential_relaxation` + the
/// existing `is_vertex_shift_safe` predicate already express elsewhere in
/// this codebase.
pub fn laplacian_smooth<S: RealNumber>(
    mesh: &mut CornerTable<S>,
    reference: &Grid<Triangle3<S>>,
    params: &Params<S>,
) {
    let target_length_squared = params.target_length() * params.target_length();
    let vertices: Vec<VertexId> = mesh.vertices().collect();

    for vertex in vertices {
        if mesh[vertex].is_deleted() || mesh[vertex].is_border() {
            continue;
        }

        if params.selected_only() && !mesh[vertex].is_selected() {
            continue;
        }

        attempt_relax(mesh, reference, params, vertex, target_length_squared);
    }
}

/// Fold-relax stage, §4.6 stage two. Runs a handful of sub-iterations that
/// re-select the vertices bordering a poor-quality or near-folded triangle
/// each round. The `IS_SELECTED` bit is reused as scratch space to track that
/// transient bad-face candidacy, so the caller's original selection (what
/// `selected_only` must actually gate against, per §8 scenario 6) is kept
/// separately in `prior_selection`, queried by vertex id rather than read
/// back off the mesh. [`SelectionStack`] handles the save/restore of the bit
/// around the scratch use; `prior_selection` additionally indexes that same
/// snapshot by `VertexId` so the `selected_only` gate below can query it
/// without popping early. Only commits a relaxed position if it clears the
/// Hausdorff guard.
pub fn relax_folds<S: RealNumber>(
    mesh: &mut CornerTable<S>,
    reference: &Grid<Triangle3<S>>,
    params: &Params<S>,
) {
    let target_length_squared = params.target_length() * params.target_length();
    let prior_selection: HashMap<VertexId, bool> =
        mesh.vertices().map(|v| (v, mesh[v].is_selected())).collect();

    let mut selection_stack = SelectionStack::new();
    selection_stack.push(mesh);

    for _ in 0..FOLD_RELAX_ITERATIONS {
        for vertex in mesh.vertices() {
            mesh[vertex].set_selected(false);
        }

        let mut any_candidate = false;
        for face in mesh.faces() {
            if !is_bad_face(mesh, face, params) {
                continue;
            }
            let (v1, v2, v3) = mesh.face_vertices(face);
            for v in [v1, v2, v3] {
                mesh[v].set_selected(true);
            }
            any_candidate = true;
        }

        if !any_candidate {
            break;
        }

        let candidates: Vec<VertexId> = mesh
            .vertices()
            .filter(|&v| mesh[v].is_selected() && !mesh[v].is_border() && !mesh[v].is_deleted())
            .collect();

        for vertex in candidates {
            if params.selected_only() && !prior_selection.get(&vertex).copied().unwrap_or(false) {
                continue;
            }
            attempt_relax(mesh, reference, params, vertex, target_length_squared);
        }
    }

    selection_stack.pop(mesh);
}

fn attempt_relax<S: RealNumber>(
    mesh: &mut CornerTable<S>,
    reference: &Grid<Triangle3<S>>,
    params: &Params<S>,
    vertex: VertexId,
    target_length_squared: S,
) {
    let Some(normal) = vertex_normal(mesh, vertex) else {
        return;
    };

    let old_position = *mesh[vertex].position();
    let neighbors: Vec<Vec3<S>> = {
        let mut positions = Vec::new();
        mesh.vertices_around_vertex(vertex, |v| positions.push(*mesh[v].position()));
        positions
    };

    if neighbors.is_empty() {
        return;
    }

    let new_position = tangential_relaxation(neighbors.iter(), &old_position, &normal);

    if !is_vertex_shift_safe(vertex, &old_position, &new_position, target_length_squared, mesh) {
        return;
    }

    if !preserves_incident_normals(mesh, vertex, &old_position, &new_position) {
        return;
    }

    if params.surf_dist_check() && !surface_distance_ok(reference, params.max_surf_dist(), &[new_position]) {
        return;
    }

    mesh.shift_vertex(vertex, &new_position);
}

fn is_bad_face<S: RealNumber>(mesh: &CornerTable<S>, face: FaceId, params: &Params<S>) -> bool {
    let (v1, v2, v3) = mesh.face_vertices(face);
    let (p1, p2, p3) = (mesh[v1].position(), mesh[v2].position(), mesh[v3].position());

    if Triangle3::quality(p1, p2, p3) < params.aspect_ratio_thr() {
        return true;
    }

    let Some(normal) = Triangle3::normal(p1, p2, p3) else {
        return true;
    };

    let mut folded = false;
    for (a, b) in [(v1, v2), (v2, v3), (v3, v1)] {
        let Some(edge) = edge_between(mesh, a, b) else { continue };
        let (f1, f2) = mesh.edge_faces(edge);
        let neighbor = if f1 == face { f2 } else { Some(f1) };
        let Some(neighbor) = neighbor else { continue };
        let (n1, n2, n3) = mesh.face_vertices(neighbor);
        let Some(neighbor_normal) = Triangle3::normal(mesh[n1].position(), mesh[n2].position(), mesh[n3].position()) else {
            continue;
        };
        if normal.dot(&neighbor_normal) <= params.fold_angle_cos_thr() {
            folded = true;
        }
    }

    folded
}

/// §4.6a's 1° angular-flip cap: rejects a relaxation move that would rotate
/// any incident face's normal by more than `ANGULAR_FLIP_CAP_DEG`, on top of
/// the distance/quality gates `is_vertex_shift_safe` already performs.
fn preserves_incident_normals<S: RealNumber>(
    mesh: &CornerTable<S>,
    vertex: VertexId,
    old_position: &Vec3<S>,
    new_position: &Vec3<S>,
) -> bool {
    let cos_thr: S = cast::<f64, S>(ANGULAR_FLIP_CAP_DEG).unwrap().to_radians().cos();
    let mut ok = true;

    mesh.faces_around_vertex(vertex, |face| {
        if !ok {
            return;
        }

        let (v1, v2, v3) = mesh.face_vertices(face);
        let at = |v: VertexId, moved: &Vec3<S>| -> Vec3<S> {
            if v == vertex {
                *moved
            } else {
                *mesh[v].position()
            }
        };

        let (o1, o2, o3) = (at(v1, old_position), at(v2, old_position), at(v3, old_position));
        let (n1, n2, n3) = (at(v1, new_position), at(v2, new_position), at(v3, new_position));

        let (Some(old_normal), Some(new_normal)) = (Triangle3::normal(&o1, &o2, &o3), Triangle3::normal(&n1, &n2, &n3)) else {
            return;
        };

        if old_normal.dot(&new_normal) < cos_thr {
            ok = false;
        }
    });

    ok
}

fn vertex_normal<S: RealNumber>(mesh: &CornerTable<S>, vertex: VertexId) -> Option<Vec3<S>> {
    let mut sum = Vec3::zeros();
    let mut count = 0usize;
    mesh.faces_around_vertex(vertex, |face| {
        if let Some(normal) = mesh.face_normal(face) {
            sum += normal;
            count += 1;
        }
    });
    if count == 0 {
        return None;
    }
    let normalized = sum / cast(count).unwrap();
    (normalized.norm_squared() > S::epsilon()).then(|| normalized.normalize())
}

fn edge_between<S: RealNumber>(
    mesh: &CornerTable<S>,
    a: VertexId,
    b: VertexId,
) -> Option<crate::mesh::corner_table::EdgeId> {
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
