use super::flags::clear_visited;
use super::*;

impl<S: RealNumber> CornerTable<S> {
    /// Iterates over all non-deleted vertices of the mesh.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len())
            .map(VertexId::new)
            .filter(move |&v| !self[v].is_deleted())
    }

    /// Iterates over all non-deleted faces of the mesh. A face is identified
    /// by its first corner.
    pub fn faces(&self) -> impl Iterator<Item = FaceId> + '_ {
        (0..self.corners.len() / 3)
            .map(FaceId::new)
            .filter(move |&f| !self[f.corner()].is_deleted())
    }

    /// Iterates over all non-deleted edges of the mesh, once each, regardless
    /// of how many corners reference them.
    pub fn edges(&self) -> IncidentEdge<'_, S> {
        IncidentEdge::new(self)
    }

    /// Visits every corner incident to `vertex`, starting at `vertex`'s own
    /// corner, swinging left around the fan until it closes up or a boundary
    /// is hit; if a boundary is hit the remainder of the fan is covered by
    /// swinging right from the start.
    pub fn corners_around_vertex(&self, vertex: VertexId, mut visit: impl FnMut(CornerId)) {
        let start = self[vertex].corner();
        visit(start);

        let mut walker = self.walker_from_corner(start);
        loop {
            if !walker.swing_left_or_stay() {
                break;
            }
            if walker.corner_id() == start {
                return;
            }
            visit(walker.corner_id());
        }

        let mut walker = self.walker_from_corner(start);
        while walker.swing_right_or_stay() {
            visit(walker.corner_id());
        }
    }

    /// Visits every face incident to `vertex`.
    pub fn faces_around_vertex(&self, vertex: VertexId, mut visit: impl FnMut(FaceId)) {
        self.corners_around_vertex(vertex, |corner| visit(corner.face()));
    }

    /// Visits every vertex directly connected to `vertex` by an edge.
    pub fn vertices_around_vertex(&self, vertex: VertexId, mut visit: impl FnMut(VertexId)) {
        self.corners_around_vertex(vertex, |corner| {
            visit(self[corner.next()].vertex());
        });
    }

    /// Visits every edge incident to `vertex`.
    pub fn edges_around_vertex(&self, vertex: VertexId, mut visit: impl FnMut(EdgeId)) {
        self.corners_around_vertex(vertex, |corner| {
            visit(EdgeId::new(corner.next()));
        });
    }
}

/// Iterator over the edges of a corner table, yielded as the corner opposite
/// to each edge. Uses the `IS_VISITED` corner flag to avoid visiting an edge
/// twice (once per corner that references it).
pub struct IncidentEdge<'a, S: RealNumber> {
    table: &'a CornerTable<S>,
    next_corner: usize,
}

impl<'a, S: RealNumber> IncidentEdge<'a, S> {
    fn new(table: &'a CornerTable<S>) -> Self {
        clear_visited(table.corners.iter());
        Self {
            table,
            next_corner: 0,
        }
    }
}

impl<'a, S: RealNumber> Iterator for IncidentEdge<'a, S> {
    type Item = EdgeId;

    fn next(&mut self) -> Option<EdgeId> {
        while self.next_corner < self.table.corners.len() {
            let id = CornerId::new(self.next_corner);
            self.next_corner += 1;

            let corner = &self.table[id];
            if corner.is_deleted() || corner.is_visited() {
                continue;
            }

            corner.set_visited(true);
            if let Some(opposite) = corner.opposite_corner() {
                self.table[opposite].set_visited(true);
            }

            return Some(EdgeId::new(id));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use crate::mesh::corner_table::test_helpers::{
        create_unit_cross_square_mesh, create_unit_square_mesh,
    };

    #[test]
    fn edges_iterator() {
        let mesh = create_unit_square_mesh();
        assert_eq!(mesh.edges().count(), 5);
    }

    #[test]
    fn corners_around_internal_vertex() {
        let mesh = create_unit_cross_square_mesh();
        let vertex = mesh.vertices().nth(4).unwrap();

        let mut corners = Vec::new();
        mesh.corners_around_vertex(vertex, |c| corners.push(c.index()));

        assert_eq!(corners.len(), 4);
    }

    #[test]
    fn corners_around_boundary_vertex() {
        let mesh = create_unit_cross_square_mesh();
        let vertex = mesh.vertices().next().unwrap();

        let mut corners = Vec::new();
        mesh.corners_around_vertex(vertex, |c| corners.push(c.index()));

        assert_eq!(corners.len(), 2);
    }
}
