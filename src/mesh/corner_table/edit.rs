use super::*;
use crate::{geometry::traits::RealNumber, helpers::aliases::Vec3};

impl<TScalar: RealNumber> CornerTable<TScalar> {
    /// Creates three new corners for a face `(v0, v1, v2)`, leaving their
    /// opposite-corner links unset. Returns the first of the three corners;
    /// the other two are `.next()`/`.next().next()` of it.
    fn create_face_from_vertices(&mut self, v0: VertexId, v1: VertexId, v2: VertexId) -> CornerId {
        let (c0, _) = self.create_corner(v0);
        let (c1, _) = self.create_corner(v1);
        let (c2, _) = self.create_corner(v2);
        debug_assert_eq!(c1, c0.next());
        debug_assert_eq!(c2, c1.next());
        c0
    }

    #[inline]
    fn set_opposite_pair(&mut self, c1: CornerId, c2: CornerId) {
        self[c1].set_opposite_corner(Some(c2));
        self[c2].set_opposite_corner(Some(c1));
    }

    #[inline]
    fn make_corners_opposite(&mut self, c1: Option<CornerId>, c2: Option<CornerId>) {
        if let Some(c1) = c1 {
            self[c1].set_opposite_corner(c2);
        }
        if let Some(c2) = c2 {
            self[c2].set_opposite_corner(c1);
        }
    }

    /// Makes sure `vertex` does not reference one of the corners about to be
    /// deleted, picking a surviving corner on either side of the collapsed edge.
    fn set_corner_for_wing_vertex(
        &mut self,
        vertex: VertexId,
        opposite_left: Option<CornerId>,
        opposite_right: Option<CornerId>,
    ) {
        if let Some(corner) = opposite_left {
            self[vertex].set_corner(corner.previous());
        } else if let Some(corner) = opposite_right {
            self[vertex].set_corner(corner.next());
        }
    }

    /// Moves `vertex` to a new position.
    #[inline]
    pub fn shift_vertex(&mut self, vertex: VertexId, to: &Vec3<TScalar>) {
        self[vertex].set_position(*to);
    }

    /// Splits the edge opposite to `corner`, which is known to have an
    /// opposite corner (i.e. is not a boundary edge), inserting a new vertex
    /// at `at`.
    fn split_inner_edge(&mut self, corner: CornerId, at: &Vec3<TScalar>) {
        let mut walker = self.walker_from_corner(corner);
        let c0 = walker.previous_corner_id();
        let v1 = walker.corner().vertex();

        walker.move_to_next();
        let c2 = walker.corner_id();
        let v2 = walker.corner().vertex();

        walker.swing_right();
        let c3 = walker.corner_id();

        walker.move_to_next();
        let v3 = walker.corner().vertex();

        walker.move_to_next();
        let c5 = walker.corner_id();

        let old_vertex_position = *self[v2].position();
        self.shift_vertex(v2, at);
        self[v2].set_corner(c2);

        let c6 = CornerId::new(self.corners.len());
        let c7 = c6.next();
        let c8 = c7.next();
        let c9 = CornerId::new(self.corners.len() + 3);
        let c10 = c9.next();
        let c11 = c10.next();

        let new_vertex_id = self.create_vertex(Some(c7), old_vertex_position);

        let mut to_update = Vec::new();
        self.corners_around_vertex(v2, |c| to_update.push(c));
        for c in to_update {
            if c != c3 && c != c2 {
                self[c].set_vertex(new_vertex_id);
            }
        }

        self.create_face_from_vertices(v1, new_vertex_id, v2);
        self.create_face_from_vertices(new_vertex_id, v3, v2);

        if let Some(c0_opp) = self[c0].opposite_corner() {
            self.set_opposite_pair(c0_opp, c8);
        }
        if let Some(c5_opp) = self[c5].opposite_corner() {
            self.set_opposite_pair(c5_opp, c11);
        }

        self.set_opposite_pair(c0, c7);
        self.set_opposite_pair(c5, c9);
        self.set_opposite_pair(c6, c10);
    }

    /// Splits the boundary edge opposite to `corner`, inserting a new vertex
    /// at `at`.
    fn split_boundary_edge(&mut self, corner: CornerId, at: &Vec3<TScalar>) {
        let mut walker = self.walker_from_corner(corner);
        let c0 = walker.previous_corner_id();
        let v1 = walker.corner().vertex();

        walker.move_to_next();
        let c2 = walker.corner_id();
        let v2 = walker.corner().vertex();

        let old_vertex_position = *self[v2].position();
        self.shift_vertex(v2, at);
        self[v2].set_corner(c2);

        let c3 = CornerId::new(self.corners.len());
        let c4 = c3.next();
        let c5 = c4.next();

        let new_vertex_id = self.create_vertex(Some(c4), old_vertex_position);

        let mut to_update = Vec::new();
        self.corners_around_vertex(v2, |c| to_update.push(c));
        for c in to_update {
            if c != c2 {
                self[c].set_vertex(new_vertex_id);
            }
        }

        self.create_face_from_vertices(v1, new_vertex_id, v2);

        if let Some(c0_opp) = self[c0].opposite_corner() {
            self.set_opposite_pair(c0_opp, c5);
        }

        self.set_opposite_pair(c0, c4);
    }

    /// Splits `edge`, inserting a new vertex at `at`. Works for both inner
    /// and boundary edges.
    pub fn split_edge(&mut self, edge: EdgeId, at: &Vec3<TScalar>) {
        let corner = edge.corner();

        match self[corner].opposite_corner() {
            Some(_) => self.split_inner_edge(corner, at),
            None => self.split_boundary_edge(corner, at),
        }
    }

    /// Collapses `edge`, merging its two endpoints into a single vertex
    /// positioned at `at`. The two faces incident to the edge (one, if the
    /// edge is on the boundary) are removed.
    pub fn collapse_edge(&mut self, edge: EdgeId, at: &Vec3<TScalar>) {
        let mut walker = self.walker_from_corner(edge.corner());

        let c24 = walker.corner_id();
        let v7 = walker.corner().vertex();

        walker.move_to_next();
        let c25 = walker.corner_id();
        let v8 = walker.corner().vertex();
        let c21 = walker.corner().opposite_corner();

        walker.move_to_next();
        let c26 = walker.corner_id();
        let c28 = walker.corner().opposite_corner();
        let v9 = walker.corner().vertex();

        walker.move_to_next();

        let mut c6 = None;
        let mut c13 = None;

        let is_boundary_edge = walker.corner().opposite_corner().is_none();

        if !is_boundary_edge {
            walker.move_to_opposite();
            let c9 = walker.corner_id();
            let v3 = walker.corner().vertex();

            walker.move_to_next();
            let c10 = walker.corner_id();
            c6 = walker.corner().opposite_corner();

            walker.move_to_next();
            let c11 = walker.corner_id();
            c13 = walker.corner().opposite_corner();

            let mut to_update = Vec::new();
            self.corners_around_vertex(v9, |c| to_update.push(c));
            for c in to_update {
                self[c].set_vertex(v8);
            }

            self.set_corner_for_wing_vertex(v3, c13, c6);

            self[c9].set_deleted(true);
            self[c10].set_deleted(true);
            self[c11].set_deleted(true);
        } else {
            let mut to_update = Vec::new();
            self.corners_around_vertex(v9, |c| to_update.push(c));
            for c in to_update {
                self[c].set_vertex(v8);
            }
        }

        self.set_corner_for_wing_vertex(v7, c28, c21);

        self[c24].set_deleted(true);
        self[c25].set_deleted(true);
        self[c26].set_deleted(true);

        self[v9].set_deleted(true);

        self[v8].set_position(*at);
        self.set_corner_for_wing_vertex(v8, c6.or(c21), c28.or(c13));

        self.make_corners_opposite(c28, c21);
        self.make_corners_opposite(c6, c13);
    }

    /// Flips `edge`: the two faces sharing it are retriangulated so the edge
    /// connects the two opposite vertices instead.
    pub fn flip_edge(&mut self, edge: EdgeId) {
        let mut walker = self.walker_from_corner(edge.corner());

        let c1 = walker.corner_id();
        let v1 = walker.corner().vertex();

        walker.move_to_next();
        let c2 = walker.corner_id();
        let v2 = walker.corner().vertex();
        let c2_opp = walker.corner().opposite_corner();

        walker.move_to_next();
        let c0 = walker.corner_id();
        let v0 = walker.corner().vertex();
        let c0_opp = walker.corner().opposite_corner();

        walker.move_to_next();
        walker.move_to_opposite();
        let c4 = walker.corner_id();
        let v3 = walker.corner().vertex();

        walker.move_to_next();
        let c5 = walker.corner_id();
        let c5_opp = walker.corner().opposite_corner();

        walker.move_to_next();
        let c3 = walker.corner_id();
        let c3_opp = walker.corner().opposite_corner();

        self[c0].set_vertex(v1);
        self.make_corners_opposite(Some(c0), c5_opp);
        self[c1].set_vertex(v2);
        self.make_corners_opposite(Some(c1), Some(c4));
        self[c2].set_vertex(v3);
        self.make_corners_opposite(Some(c2), c0_opp);

        self[c3].set_vertex(v3);
        self.make_corners_opposite(Some(c3), c2_opp);
        self[c4].set_vertex(v0);
        self[c5].set_vertex(v1);
        self.make_corners_opposite(Some(c5), c3_opp);

        self[v0].set_corner(c4);
        self[v1].set_corner(c0);
        self[v2].set_corner(c1);
        self[v3].set_corner(c2);
    }

    /// Splits `face` into three by inserting a new vertex at `point`.
    pub fn split_face(&mut self, face: FaceId, point: Vec3<TScalar>) {
        let mut walker = self.walker_from_corner(face.corner());

        let c0 = walker.corner_id();
        let v0 = walker.corner().vertex();
        let c0_opp = walker.corner().opposite_corner();

        walker.move_to_next();
        let c1 = walker.corner_id();
        let v1 = walker.corner().vertex();
        let c1_opp = walker.corner().opposite_corner();

        walker.move_to_next();
        let c2 = walker.corner_id();
        let v2 = walker.corner().vertex();

        let new_vertex_id = self.create_vertex(Some(c2), point);

        let c3 = self.create_face_from_vertices(v1, v2, new_vertex_id);
        let c4 = c3.next();
        let c5 = c4.next();

        let c6 = self.create_face_from_vertices(v2, v0, new_vertex_id);
        let c7 = c6.next();
        let c8 = c7.next();

        self.set_opposite_pair(c0, c4);
        self.set_opposite_pair(c3, c7);
        self.set_opposite_pair(c6, c1);

        self.make_corners_opposite(Some(c8), c1_opp);
        self.make_corners_opposite(Some(c5), c0_opp);

        self[c2].set_vertex(new_vertex_id);
        self[v2].set_corner(c4);
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        helpers::aliases::Vec3f,
        mesh::corner_table::{
            corner::{Corner, CornerId},
            edge::EdgeId,
            face::FaceId,
            test_helpers::{
                create_collapse_edge_sample_mesh1, create_collapse_edge_sample_mesh2,
                create_collapse_edge_sample_mesh3, create_flip_edge_sample_mesh,
                create_single_face_mesh, create_unit_cross_square_mesh, create_unit_square_mesh,
            },
            vertex::{VertexF, VertexId},
        },
    };

    #[test]
    fn split_inner_edge1() {
        let mut mesh = create_unit_square_mesh();

        let expected_vertices = vec![
            VertexF::new(CornerId::new(5), Vec3f::new(0.0, 1.0, 0.0)),
            VertexF::new(CornerId::new(1), Vec3f::new(0.0, 0.0, 0.0)),
            VertexF::new(CornerId::new(2), Vec3f::new(0.5, 0.5, 0.0)),
            VertexF::new(CornerId::new(4), Vec3f::new(1.0, 1.0, 0.0)),
            VertexF::new(CornerId::new(7), Vec3f::new(1.0, 0.0, 0.0)),
        ];

        let expected_corners = vec![
            Corner::new(Some(CornerId::new(7)), VertexId::new(0)),
            Corner::new(Some(CornerId::new(4)), VertexId::new(1)),
            Corner::new(None, VertexId::new(2)),
            Corner::new(None, VertexId::new(2)),
            Corner::new(Some(CornerId::new(1)), VertexId::new(3)),
            Corner::new(Some(CornerId::new(9)), VertexId::new(0)),
            Corner::new(Some(CornerId::new(10)), VertexId::new(1)),
            Corner::new(Some(CornerId::new(0)), VertexId::new(4)),
            Corner::new(None, VertexId::new(2)),
            Corner::new(Some(CornerId::new(5)), VertexId::new(4)),
            Corner::new(Some(CornerId::new(6)), VertexId::new(3)),
            Corner::new(None, VertexId::new(2)),
        ];

        mesh.split_edge(EdgeId::new(CornerId::new(1)), &Vec3f::new(0.5, 0.5, 0.0));

        assert_eq!(expected_vertices, mesh.vertices);
        assert_eq!(expected_corners, mesh.corners);
    }

    #[test]
    fn split_inner_edge2() {
        let mut mesh = create_unit_cross_square_mesh();

        let expected_vertices = vec![
            VertexF::new(CornerId::new(10), Vec3f::new(0.0, 1.0, 0.0)),
            VertexF::new(CornerId::new(3), Vec3f::new(0.0, 0.0, 0.0)),
            VertexF::new(CornerId::new(6), Vec3f::new(1.0, 0.0, 0.0)),
            VertexF::new(CornerId::new(7), Vec3f::new(0.75, 0.75, 0.0)),
            VertexF::new(CornerId::new(11), Vec3f::new(0.5, 0.5, 0.0)),
            VertexF::new(CornerId::new(13), Vec3f::new(1.0, 1.0, 0.0)),
        ];

        let expected_corners = vec![
            Corner::new(Some(CornerId::new(4)), VertexId::new(0)),
            Corner::new(Some(CornerId::new(9)), VertexId::new(1)),
            Corner::new(None, VertexId::new(4)),
            Corner::new(Some(CornerId::new(7)), VertexId::new(1)),
            Corner::new(Some(CornerId::new(0)), VertexId::new(2)),
            Corner::new(None, VertexId::new(4)),
            Corner::new(Some(CornerId::new(10)), VertexId::new(2)),
            Corner::new(Some(CornerId::new(3)), VertexId::new(3)),
            Corner::new(Some(CornerId::new(13)), VertexId::new(4)),
            Corner::new(Some(CornerId::new(1)), VertexId::new(3)),
            Corner::new(Some(CornerId::new(6)), VertexId::new(0)),
            Corner::new(Some(CornerId::new(15)), VertexId::new(4)),
            Corner::new(Some(CornerId::new(16)), VertexId::new(2)),
            Corner::new(Some(CornerId::new(8)), VertexId::new(5)),
            Corner::new(None, VertexId::new(3)),
            Corner::new(Some(CornerId::new(11)), VertexId::new(5)),
            Corner::new(Some(CornerId::new(12)), VertexId::new(0)),
            Corner::new(None, VertexId::new(3)),
        ];

        mesh.split_edge(EdgeId::new(CornerId::new(6)), &Vec3f::new(0.75, 0.75, 0.0));

        assert_eq!(expected_vertices, mesh.vertices);
        assert_eq!(expected_corners, mesh.corners);
    }

    #[test]
    fn split_boundary_edge() {
        let mut mesh = create_single_face_mesh();

        let expected_vertices = vec![
            VertexF::new(CornerId::new(0), Vec3f::new(0.0, 1.0, 0.0)),
            VertexF::new(CornerId::new(1), Vec3f::new(0.0, 0.0, 0.0)),
            VertexF::new(CornerId::new(2), Vec3f::new(0.5, 0.5, 0.0)),
            VertexF::new(CornerId::new(4), Vec3f::new(1.0, 0.0, 0.0)),
        ];

        let expected_corners = vec![
            Corner::new(Some(CornerId::new(4)), VertexId::new(0)),
            Corner::new(None, VertexId::new(1)),
            Corner::new(None, VertexId::new(2)),
            Corner::new(None, VertexId::new(1)),
            Corner::new(Some(CornerId::new(0)), VertexId::new(3)),
            Corner::new(None, VertexId::new(2)),
        ];

        mesh.split_edge(EdgeId::new(CornerId::new(1)), &Vec3f::new(0.5, 0.5, 0.0));

        assert_eq!(expected_vertices, mesh.vertices);
        assert_eq!(expected_corners, mesh.corners);
    }

    #[test]
    fn collapse_edge() {
        let mut mesh = create_collapse_edge_sample_mesh1();

        mesh.collapse_edge(EdgeId::new(CornerId::new(9)), &Vec3f::new(0.5, 0.5, 0.0));

        assert_eq!(mesh.vertices[9].position(), &Vec3f::new(0.5, 0.5, 0.0));
        assert!(mesh.vertices[9].is_deleted());
        assert!(mesh.corners[24].is_deleted());
        assert!(mesh.corners[25].is_deleted());
        assert!(mesh.corners[26].is_deleted());
    }

    #[test]
    fn collapse_edge_with_one_vertex_on_boundary() {
        let mut mesh = create_collapse_edge_sample_mesh2();

        mesh.collapse_edge(EdgeId::new(CornerId::new(12)), &Vec3f::new(0.5, 0.5, 0.0));

        assert_eq!(mesh.vertices[5].position(), &Vec3f::new(0.5, 0.5, 0.0));
        assert!(mesh.vertices[5].is_deleted());
    }

    #[test]
    fn collapse_boundary_edge() {
        let mut mesh = create_collapse_edge_sample_mesh3();

        mesh.collapse_edge(EdgeId::new(CornerId::new(5)), &Vec3f::new(2.0, 0.0, 0.0));

        assert_eq!(mesh.vertices[1].position(), &Vec3f::new(2.0, 0.0, 0.0));
        assert!(mesh.vertices[1].is_deleted());
    }

    #[test]
    fn flip_edge() {
        let mut mesh = create_flip_edge_sample_mesh();

        let expected_vertices = vec![
            VertexF::new(CornerId::new(4), Vec3f::new(0.5, 1.0, 0.0)),
            VertexF::new(CornerId::new(0), Vec3f::new(0.0, 0.5, 0.0)),
            VertexF::new(CornerId::new(1), Vec3f::new(0.5, 0.0, 0.0)),
            VertexF::new(CornerId::new(2), Vec3f::new(1.0, 0.5, 0.0)),
            VertexF::new(CornerId::new(13), Vec3f::new(1.0, 1.0, 0.0)),
            VertexF::new(CornerId::new(16), Vec3f::new(0.0, 1.0, 0.0)),
            VertexF::new(CornerId::new(7), Vec3f::new(0.0, 0.0, 0.0)),
            VertexF::new(CornerId::new(10), Vec3f::new(1.0, 0.0, 0.0)),
        ];

        let expected_corners = vec![
            Corner::new(Some(CornerId::new(10)), VertexId::new(1)),
            Corner::new(Some(CornerId::new(4)), VertexId::new(2)),
            Corner::new(Some(CornerId::new(7)), VertexId::new(3)),
            Corner::new(Some(CornerId::new(16)), VertexId::new(3)),
            Corner::new(Some(CornerId::new(1)), VertexId::new(0)),
            Corner::new(Some(CornerId::new(13)), VertexId::new(1)),
            Corner::new(None, VertexId::new(1)),
            Corner::new(Some(CornerId::new(2)), VertexId::new(6)),
            Corner::new(None, VertexId::new(2)),
            Corner::new(None, VertexId::new(2)),
            Corner::new(Some(CornerId::new(0)), VertexId::new(7)),
            Corner::new(None, VertexId::new(3)),
            Corner::new(None, VertexId::new(3)),
            Corner::new(Some(CornerId::new(5)), VertexId::new(4)),
            Corner::new(None, VertexId::new(0)),
            Corner::new(None, VertexId::new(0)),
            Corner::new(Some(CornerId::new(3)), VertexId::new(5)),
            Corner::new(None, VertexId::new(1)),
        ];

        mesh.flip_edge(EdgeId::new(CornerId::new(1)));

        assert_eq!(expected_vertices, mesh.vertices);
        assert_eq!(expected_corners, mesh.corners);
    }

    #[test]
    fn split_face() {
        let mut mesh = create_unit_square_mesh();

        let expected_vertices = vec![
            VertexF::new(CornerId::new(5), Vec3f::new(0.0, 1.0, 0.0)),
            VertexF::new(CornerId::new(1), Vec3f::new(0.0, 0.0, 0.0)),
            VertexF::new(CornerId::new(7), Vec3f::new(1.0, 0.0, 0.0)),
            VertexF::new(CornerId::new(4), Vec3f::new(1.0, 1.0, 0.0)),
            VertexF::new(CornerId::new(2), Vec3f::new(0.5, 0.5, 0.0)),
        ];

        let expected_corners = vec![
            Corner::new(Some(CornerId::new(7)), VertexId::new(0)),
            Corner::new(Some(CornerId::new(9)), VertexId::new(1)),
            Corner::new(None, VertexId::new(4)),
            Corner::new(None, VertexId::new(2)),
            Corner::new(Some(CornerId::new(11)), VertexId::new(3)),
            Corner::new(None, VertexId::new(0)),
            Corner::new(Some(CornerId::new(10)), VertexId::new(1)),
            Corner::new(Some(CornerId::new(0)), VertexId::new(2)),
            Corner::new(None, VertexId::new(4)),
            Corner::new(Some(CornerId::new(1)), VertexId::new(2)),
            Corner::new(Some(CornerId::new(6)), VertexId::new(0)),
            Corner::new(Some(CornerId::new(4)), VertexId::new(4)),
        ];

        mesh.split_face(FaceId::new(0), Vec3f::new(0.5, 0.5, 0.0));

        assert_eq!(expected_vertices, mesh.vertices);
        assert_eq!(expected_corners, mesh.corners);
    }
}
