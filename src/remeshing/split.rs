use crate::{
    geometry::traits::RealNumber,
    mesh::corner_table::{CornerTable, EdgeId, VertexId},
    remeshing::params::{adaptive_mult, Params},
};
use num_traits::cast;

/// Bisects every edge longer than the target threshold, propagating the
/// crease bit of the parent edge onto the newly created half-edge that
/// continues its direction. Mirrors the existing `IncrementalRemesher`'s
/// split pass, generalized with crease awareness and the selection filter.
pub fn split_long_edges<S: RealNumber>(mesh: &mut CornerTable<S>, params: &mut Params<S>) {
    let max_length_squared = params.max_length() * params.max_length();
    let length_thr = params.length_thr();

    // Cache edges up front: splitting an edge invalidates the iterator.
    let edges: Vec<EdgeId> = mesh.edges().collect();

    for edge in edges {
        if !mesh.edge_exists(edge) {
            continue;
        }

        let (v1, v2) = mesh.edge_vertices(edge);
        if params.selected_only() && !(mesh[v1].is_selected() && mesh[v2].is_selected()) {
            continue;
        }

        let should_split = if params.adaptive() {
            let mult = adaptive_mult(mesh, v1, v2);
            let floor = cast::<f64, S>(2.0).unwrap() * length_thr;
            mesh.edge_length(edge) > (mult * params.max_length()).max(floor)
        } else {
            mesh.edge_length_squared(edge) > max_length_squared
        };

        if !should_split {
            continue;
        }

        let was_crease = mesh[edge.corner()].is_crease();
        let (p1, p2) = mesh.edge_positions(edge);
        let midpoint = (p1 + p2) * cast(0.5).unwrap();

        mesh.split_edge(edge, &midpoint);
        params.stat.split_num += 1;

        if was_crease {
            propagate_crease_to_new_vertex(mesh, v1);
        }
    }
}

/// After a split, the vertex that kept its original id (`shifted_endpoint`,
/// now sitting at the split point) is connected to the freshly created
/// vertex by exactly one new edge — the continuation of the original one.
/// The other half of the original edge is untouched and keeps its crease bit
/// automatically.
fn propagate_crease_to_new_vertex<S: RealNumber>(mesh: &CornerTable<S>, shifted_endpoint: VertexId) {
    let Some(new_vertex) = mesh.vertices().last() else {
        return;
    };

    let mut target = None;
    mesh.edges_around_vertex(new_vertex, |edge| {
        let (a, b) = mesh.edge_vertices(edge);
        if a == shifted_endpoint || b == shifted_endpoint {
            target = Some(edge);
        }
    });

    if let Some(edge) = target {
        mesh[edge.corner()].set_crease(true);
        if let Some(opposite) = mesh.opposite_edge(edge) {
            mesh[opposite.corner()].set_crease(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::split_long_edges;
    use crate::{mesh::corner_table::test_helpers::create_unit_square_mesh, remeshing::params::Params};

    #[test]
    fn splits_edges_longer_than_max_length() {
        let mut mesh = create_unit_square_mesh();
        let mut params = Params::new(0.3f32); // max_length = 0.4, shorter than the unit square's edges

        split_long_edges(&mut mesh, &mut params);

        assert!(params.stat.split_num > 0);
        assert!(mesh.edges().all(|e| mesh.edge_length(e) <= params.max_length() + 1e-3));
    }

    #[test]
    fn leaves_short_mesh_untouched() {
        let mut mesh = create_unit_square_mesh();
        let mut params = Params::new(10.0f32); // max_length way bigger than any edge

        split_long_edges(&mut mesh, &mut params);

        assert_eq!(params.stat.split_num, 0);
    }

    #[test]
    fn propagates_crease_bit_to_new_edge() {
        let mut mesh = create_unit_square_mesh();
        let edge = mesh.edges().next().unwrap();
        mesh[edge.corner()].set_crease(true);

        let mut params = Params::new(0.1f32);
        split_long_edges(&mut mesh, &mut params);

        let crease_edges = mesh.edges().filter(|&e| mesh[e.corner()].is_crease()).count();
        assert!(crease_edges >= 1);
    }

    #[test]
    fn adaptive_mode_applies_the_two_times_length_thr_floor() {
        // target_length 0.9 => max_length = 1.2; the unit square's diagonal (~1.414) is
        // above max_length (so uniform mode splits it) but below 2*max_length = 2.4
        // (so adaptive mode, which floors at 2*lengthThr, must leave it alone).
        let mut uniform_mesh = create_unit_square_mesh();
        let mut uniform_params = Params::new(0.9f32);
        split_long_edges(&mut uniform_mesh, &mut uniform_params);
        assert_eq!(uniform_params.stat.split_num, 1);

        let mut adaptive_mesh = create_unit_square_mesh();
        let mut adaptive_params = Params::new(0.9f32).with_adaptive(true);
        split_long_edges(&mut adaptive_mesh, &mut adaptive_params);
        assert_eq!(adaptive_params.stat.split_num, 0);
    }
}
