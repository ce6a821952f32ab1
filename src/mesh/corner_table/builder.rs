use super::*;
use crate::{
    algo::merge_points::merge_points, helpers::aliases::Vec3,
    mesh::traits::stats::IDEAL_INTERIOR_VERTEX_VALENCE,
};
use std::collections::{BTreeSet, HashMap};

impl<TScalar: RealNumber> Default for CornerTable<TScalar> {
    #[inline]
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            corners: Vec::new(),
        }
    }
}

#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy)]
struct Edge {
    start_vertex: VertexId,
    end_vertex: VertexId,
}

impl Edge {
    #[inline]
    fn new(start: VertexId, end: VertexId) -> Self {
        Self {
            start_vertex: start,
            end_vertex: end,
        }
    }

    #[inline]
    fn flipped(&self) -> Self {
        Self {
            start_vertex: self.end_vertex,
            end_vertex: self.start_vertex,
        }
    }
}

impl<TScalar: RealNumber> CornerTable<TScalar> {
    #[inline]
    pub fn new() -> Self {
        Default::default()
    }

    #[inline]
    pub fn with_capacity(num_vertices: usize, num_faces: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(num_vertices),
            corners: Vec::with_capacity(num_faces * 3),
        }
    }

    #[inline]
    pub(super) fn create_vertex(
        &mut self,
        corner: Option<CornerId>,
        position: Vec3<TScalar>,
    ) -> VertexId {
        let idx = self.vertices.len();
        self.vertices
            .push(Vertex::new(CornerId::from_option(corner), position));
        VertexId::new(idx)
    }

    #[inline]
    pub(super) fn create_corner(&mut self, vertex: VertexId) -> (CornerId, &mut Corner) {
        let idx = self.corners.len();
        self.corners.push(Corner::new(None, vertex));
        (CornerId::new(idx), &mut self.corners[idx])
    }

    fn corner_from(
        &mut self,
        edge_opposite_corner_map: &mut HashMap<Edge, CornerId>,
        edge: Edge,
        vertex_id: VertexId,
    ) -> CornerId {
        let (corner_id, corner) = self.create_corner(vertex_id);

        // Find opposite corner
        if let Some(&opposite_corner_id) = edge_opposite_corner_map.get(&edge.flipped()) {
            corner.set_opposite_corner(Some(opposite_corner_id));
            self[opposite_corner_id].set_opposite_corner(Some(corner_id));
            edge_opposite_corner_map.insert(edge, corner_id);
        } else {
            // Save directed edge and its opposite corner
            edge_opposite_corner_map.insert(edge, corner_id);
        }

        self[vertex_id].set_corner(corner_id);
        corner_id
    }

    /// Adds a face if doing so would not introduce a non-manifold edge. Faces
    /// that share an already-used directed edge are silently skipped.
    fn add_indexed_face(
        &mut self,
        edge_opposite_corner_map: &mut HashMap<Edge, CornerId>,
        vertex_corners: &mut HashMap<VertexId, BTreeSet<CornerId>>,
        v1: VertexId,
        v2: VertexId,
        v3: VertexId,
    ) {
        let edge1 = Edge::new(v2, v3);
        let edge2 = Edge::new(v3, v1);
        let edge3 = Edge::new(v1, v2);

        if edge_opposite_corner_map.contains_key(&edge1)
            || edge_opposite_corner_map.contains_key(&edge2)
            || edge_opposite_corner_map.contains_key(&edge3)
        {
            return;
        }

        let c1 = self.corner_from(edge_opposite_corner_map, edge1, v1);
        let c2 = self.corner_from(edge_opposite_corner_map, edge2, v2);
        let c3 = self.corner_from(edge_opposite_corner_map, edge3, v3);

        vertex_corners.entry(v1).or_default().insert(c1);
        vertex_corners.entry(v2).or_default().insert(c2);
        vertex_corners.entry(v3).or_default().insert(c3);
    }

    /// Builds a mesh from a flat vertex buffer and a flat triangle-index buffer
    /// (three indices per face). Faces that introduce a non-manifold edge are
    /// skipped; vertices shared by more than one fan of faces are duplicated.
    pub fn from_vertex_and_face_slices(vertices: &[Vec3<TScalar>], faces: &[usize]) -> Self {
        Self::from_vertex_and_face_iters(vertices.iter().cloned(), faces.iter().cloned())
    }

    pub fn from_vertex_and_face_iters(
        vertices: impl Iterator<Item = Vec3<TScalar>>,
        mut faces: impl Iterator<Item = usize>,
    ) -> Self {
        let mut table = Self::new();
        let mut edge_opposite_corner_map = HashMap::new();
        let mut vertex_corners: HashMap<VertexId, BTreeSet<CornerId>> = HashMap::new();

        for position in vertices {
            table.create_vertex(None, position);
        }

        loop {
            let Some(i1) = faces.next() else { break };
            let Some(i2) = faces.next() else { break };
            let Some(i3) = faces.next() else { break };

            if i1 >= table.vertices.len() || i2 >= table.vertices.len() || i3 >= table.vertices.len()
            {
                continue;
            }

            table.add_indexed_face(
                &mut edge_opposite_corner_map,
                &mut vertex_corners,
                VertexId::new(i1),
                VertexId::new(i2),
                VertexId::new(i3),
            );
        }

        table.fixup_non_manifold_vertices(&mut vertex_corners);
        table
    }

    /// Builds a mesh from an unindexed triangle soup (three consecutive points
    /// per triangle), deduplicating coincident vertices first.
    pub fn from_triangles_soup(triangles: impl Iterator<Item = Vec3<TScalar>>) -> Self {
        let num_points = triangles.size_hint().1.unwrap_or(0);
        let indexed = merge_points(triangles);

        let mut table =
            Self::with_capacity(num_points / IDEAL_INTERIOR_VERTEX_VALENCE, num_points / 3);
        let mut edge_opposite_corner_map = HashMap::new();
        let mut vertex_corners: HashMap<VertexId, BTreeSet<CornerId>> = HashMap::new();

        for position in indexed.points {
            table.create_vertex(None, position);
        }

        for face in indexed.indices.chunks_exact(3) {
            table.add_indexed_face(
                &mut edge_opposite_corner_map,
                &mut vertex_corners,
                VertexId::new(face[0]),
                VertexId::new(face[1]),
                VertexId::new(face[2]),
            );
        }

        table.fixup_non_manifold_vertices(&mut vertex_corners);
        table
    }

    /// Deletes isolated vertices (no incident corner) and duplicates vertices
    /// referenced by more than one disjoint fan of faces.
    fn fixup_non_manifold_vertices(
        &mut self,
        vertex_corners: &mut HashMap<VertexId, BTreeSet<CornerId>>,
    ) {
        for vertex in &mut self.vertices {
            if !vertex.corner().is_valid() {
                vertex.set_deleted(true);
            }
        }

        for (&vertex_id, corners) in vertex_corners.iter_mut() {
            if self[vertex_id].is_deleted() {
                continue;
            }

            self.corners_around_vertex(vertex_id, |corner_id| {
                corners.remove(&corner_id);
            });

            let position = *self[vertex_id].position();

            // Duplicate the vertex for each remaining disjoint fan.
            while let Some(corner_id) = corners.pop_first() {
                let duplicate = self.create_vertex(Some(corner_id), position);

                let mut fan = Vec::new();
                self.corners_around_vertex(duplicate, |c| fan.push(c));
                for corner in fan {
                    self[corner].set_vertex(duplicate);
                    corners.remove(&corner);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{helpers::aliases::Vec3f, mesh::corner_table::CornerTableF};

    #[test]
    fn should_remove_face_that_introduces_non_manifold_edge() {
        let mesh = CornerTableF::from_vertex_and_face_slices(
            &[
                Vec3f::new(0.0, 1.0, 0.0),
                Vec3f::new(0.0, 0.0, 0.0),
                Vec3f::new(1.0, 0.0, 0.0),
                Vec3f::new(-1.0, 0.0, 0.0),
                Vec3f::new(0.0, 0.0, -1.0),
                Vec3f::new(0.0, 0.0, -1.0),
            ],
            &[0, 1, 2, 0, 1, 4, 0, 3, 1, 3, 5, 1, 1, 5, 2],
        );

        assert_eq!(mesh.faces().count(), 4);
    }

    #[test]
    fn dedups_soup_vertices() {
        let mesh = CornerTableF::from_triangles_soup(
            vec![
                Vec3f::new(0.0, 0.0, 0.0),
                Vec3f::new(1.0, 0.0, 0.0),
                Vec3f::new(0.0, 1.0, 0.0),
                Vec3f::new(1.0, 0.0, 0.0),
                Vec3f::new(1.0, 1.0, 0.0),
                Vec3f::new(0.0, 1.0, 0.0),
            ]
            .into_iter(),
        );

        assert_eq!(mesh.vertices().count(), 4);
        assert_eq!(mesh.faces().count(), 2);
    }

    #[test]
    fn duplicates_non_manifold_vertex() {
        // Two triangle fans sharing only a point at the origin must be pulled
        // apart into two distinct vertices.
        let mesh = CornerTableF::from_vertex_and_face_slices(
            &[
                Vec3f::new(0.0, 0.0, 0.0),
                Vec3f::new(1.0, 0.0, 0.0),
                Vec3f::new(0.0, 1.0, 0.0),
                Vec3f::new(-1.0, 0.0, 0.0),
                Vec3f::new(0.0, -1.0, 0.0),
            ],
            &[0, 1, 2, 0, 3, 4],
        );

        assert_eq!(mesh.vertices().count(), 6);
        assert_eq!(mesh.faces().count(), 2);
    }
}
