use crate::{
    algo::edge_collapse,
    geometry::{primitives::triangle3::Triangle3, traits::RealNumber},
    helpers::aliases::Vec3,
    mesh::corner_table::{CornerTable, EdgeId, FaceId, VertexId},
    remeshing::{driver::surface_distance_ok, params::{adaptive_mult, Params}},
    spatial_partitioning::grid::Grid,
};
use num_traits::cast;

const MIN_QUALITY_RATIO: f64 = 0.5;

/// Collapses edges shorter than the (possibly adaptive) threshold, or whose
/// incident face area has collapsed to near zero. Grounded in the existing
/// `IncrementalRemesher::collapse_edges`, generalized with crease-aware
/// target selection (§4.4) and the optional Hausdorff guard.
pub fn collapse_short_edges<S: RealNumber>(
    mesh: &mut CornerTable<S>,
    reference: &Grid<Triangle3<S>>,
    params: &mut Params<S>,
) {
    let minimal_admitted_area = params.minimal_admitted_area();

    let edges: Vec<EdgeId> = mesh.edges().collect();

    for edge in edges {
        if !mesh.edge_exists(edge) {
            continue;
        }

        let (v1, v2) = mesh.edge_vertices(edge);
        if params.selected_only() && !(mesh[v1].is_selected() && mesh[v2].is_selected()) {
            continue;
        }

        let threshold = if params.adaptive() {
            adaptive_mult(mesh, v1, v2) * params.min_length()
        } else {
            params.min_length()
        };

        let is_short = mesh.edge_length_squared(edge) < threshold * threshold;
        let touches_sliver = face_area_below(mesh, edge, minimal_admitted_area);

        if !is_short && !touches_sliver {
            continue;
        }

        try_collapse(mesh, reference, params, edge, false);
    }
}

/// Removes cross vertices (interior valence 3 or 4) adjacent to no crease, by
/// collapsing one of their incident edges with the edge-length cap waived.
pub fn collapse_crosses<S: RealNumber>(
    mesh: &mut CornerTable<S>,
    reference: &Grid<Triangle3<S>>,
    params: &mut Params<S>,
) {
    let vertices: Vec<VertexId> = mesh.vertices().collect();

    for vertex in vertices {
        if mesh[vertex].is_deleted() || mesh[vertex].is_border() {
            continue;
        }

        let valence = vertex_valence(mesh, vertex);
        if valence != 3 && valence != 4 {
            continue;
        }

        if has_incident_crease(mesh, vertex) {
            continue;
        }

        if params.selected_only() && !mesh[vertex].is_selected() {
            continue;
        }

        let Some(edge) = best_collapse_direction(mesh, vertex) else {
            continue;
        };

        try_collapse(mesh, reference, params, edge, true);
    }
}

fn try_collapse<S: RealNumber>(
    mesh: &mut CornerTable<S>,
    reference: &Grid<Triangle3<S>>,
    params: &mut Params<S>,
    edge: EdgeId,
    relaxed: bool,
) {
    if !edge_collapse::is_topologically_safe(mesh, edge) {
        return;
    }

    let Some(target) = choose_collapse_target(mesh, edge) else {
        return;
    };

    if !relaxed && !within_max_length_after_collapse(mesh, edge, &target, params.max_length()) {
        return;
    }

    let min_quality: S = cast(MIN_QUALITY_RATIO).unwrap();
    if !edge_collapse::is_geometrically_safe(mesh, edge, &target, min_quality) {
        return;
    }

    if params.surf_dist_check() {
        let (v1, v2) = mesh.edge_vertices(edge);
        let midpoints = [
            (target + *mesh[v1].position()) * cast(0.5).unwrap(),
            (target + *mesh[v2].position()) * cast(0.5).unwrap(),
        ];
        let points = [target, midpoints[0], midpoints[1]];
        if !surface_distance_ok(reference, params.max_surf_dist(), &points) {
            return;
        }
    }

    mesh.collapse_edge(edge, &target);
    params.stat.collapse_num += 1;
}

/// `mp = (v1 * movable(v2) + v2 * movable(v1)) / (movable(v1) + movable(v2))`,
/// `None` when neither endpoint may move (both anchored on non-collinear creases).
fn choose_collapse_target<S: RealNumber>(mesh: &CornerTable<S>, edge: EdgeId) -> Option<Vec3<S>> {
    let (v1, v2) = mesh.edge_vertices(edge);
    let p1 = *mesh[v1].position();
    let p2 = *mesh[v2].position();

    let direction = p2 - p1;
    if direction.norm_squared() <= S::epsilon() {
        return Some(p1);
    }
    let direction = direction.normalize();

    let movable1 = is_movable(mesh, v1, &direction);
    let movable2 = is_movable(mesh, v2, &direction);

    if !movable1 && !movable2 {
        return None;
    }

    let w1: S = if movable2 { S::one() } else { S::zero() };
    let w2: S = if movable1 { S::one() } else { S::zero() };

    Some((p1 * w1 + p2 * w2) / (w1 + w2))
}

/// A vertex is movable iff every crease edge touching it is collinear with
/// `direction` — moving it off a crease is forbidden unless the motion runs
/// along the crease.
fn is_movable<S: RealNumber>(mesh: &CornerTable<S>, vertex: VertexId, direction: &Vec3<S>) -> bool {
    let position = *mesh[vertex].position();
    let mut movable = true;

    mesh.edges_around_vertex(vertex, |edge| {
        if !movable || !mesh[edge.corner()].is_crease() {
            return;
        }

        let (a, b) = mesh.edge_vertices(edge);
        let other = if a == vertex { b } else { a };
        let along = *mesh[other].position() - position;

        if along.norm_squared() <= S::epsilon() {
            return;
        }

        let cos = along.normalize().dot(direction).abs();
        if (cos - S::one()).abs() > cast(1e-3).unwrap() {
            movable = false;
        }
    });

    movable
}

fn within_max_length_after_collapse<S: RealNumber>(
    mesh: &CornerTable<S>,
    edge: EdgeId,
    target: &Vec3<S>,
    max_length: S,
) -> bool {
    let max_length_squared = max_length * max_length;
    let (v1, v2) = mesh.edge_vertices(edge);
    let mut ok = true;

    for vertex in [v1, v2] {
        mesh.vertices_around_vertex(vertex, |neighbor| {
            if neighbor == v1 || neighbor == v2 {
                return;
            }
            if (target - mesh[neighbor].position()).norm_squared() > max_length_squared {
                ok = false;
            }
        });
    }

    ok
}

fn face_area_below<S: RealNumber>(mesh: &CornerTable<S>, edge: EdgeId, threshold: S) -> bool {
    let (f1, f2) = mesh.edge_faces(edge);
    face_area(mesh, f1) < threshold || f2.is_some_and(|f| face_area(mesh, f) < threshold)
}

fn face_area<S: RealNumber>(mesh: &CornerTable<S>, face: FaceId) -> S {
    let (v1, v2, v3) = mesh.face_vertices(face);
    Triangle3::area(mesh[v1].position(), mesh[v2].position(), mesh[v3].position())
}

fn vertex_valence<S: RealNumber>(mesh: &CornerTable<S>, vertex: VertexId) -> usize {
    let mut valence = 0;
    mesh.vertices_around_vertex(vertex, |_| valence += 1);
    valence
}

fn has_incident_crease<S: RealNumber>(mesh: &CornerTable<S>, vertex: VertexId) -> bool {
    let mut found = false;
    mesh.edges_around_vertex(vertex, |edge| {
        if mesh[edge.corner()].is_crease() {
            found = true;
        }
    });
    found
}

/// Picks the edge to collapse `vertex` along for a cross-collapse, per §4.4's
/// "choose the collapse direction whose two cross-neighbors give the better
/// combined (valence-defect, quality) score": for each incident edge, scores
/// the direction by the valence-defect change to `vertex`'s *other* neighbors
/// (the ones not absorbed by the collapse, losing their shared edge with
/// `vertex`) and the worst quality among the faces that survive the collapse,
/// then keeps the edge with the lowest defect, breaking ties on quality —
/// the same (defect, quality) comparison shape `flip::test_swap` uses.
fn best_collapse_direction<S: RealNumber>(mesh: &CornerTable<S>, vertex: VertexId) -> Option<EdgeId> {
    let mut candidates: Vec<EdgeId> = Vec::new();
    mesh.edges_around_vertex(vertex, |edge| candidates.push(edge));

    candidates.into_iter().min_by(|&a, &b| {
        let (defect_a, quality_a) = collapse_direction_score(mesh, vertex, a);
        let (defect_b, quality_b) = collapse_direction_score(mesh, vertex, b);
        defect_a
            .cmp(&defect_b)
            .then_with(|| quality_b.partial_cmp(&quality_a).unwrap_or(std::cmp::Ordering::Equal))
    })
}

fn collapse_direction_score<S: RealNumber>(mesh: &CornerTable<S>, vertex: VertexId, edge: EdgeId) -> (isize, S) {
    let (a, b) = mesh.edge_vertices(edge);
    let target = if a == vertex { b } else { a };

    let mut cross_neighbors = Vec::new();
    mesh.vertices_around_vertex(vertex, |n| {
        if n != target {
            cross_neighbors.push(n);
        }
    });
    let defect: isize = cross_neighbors
        .iter()
        .map(|&n| vertex_valence_defect(mesh, n, -1))
        .sum();

    let target_position = *mesh[target].position();
    let mut worst_quality = S::one();
    mesh.faces_around_vertex(vertex, |face| {
        let (v1, v2, v3) = mesh.face_vertices(face);
        if v1 == target || v2 == target || v3 == target {
            return; // destroyed by the collapse
        }
        let at = |v: VertexId| if v == vertex { target_position } else { *mesh[v].position() };
        let quality = Triangle3::quality(&at(v1), &at(v2), &at(v3));
        if quality < worst_quality {
            worst_quality = quality;
        }
    });

    (defect, worst_quality)
}

fn vertex_valence_defect<S: RealNumber>(mesh: &CornerTable<S>, vertex: VertexId, delta: isize) -> isize {
    let ideal = if mesh[vertex].is_border() { 4 } else { 6 };
    let actual = vertex_valence(mesh, vertex) as isize + delta;
    (ideal - actual).abs()
}
