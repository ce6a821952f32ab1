use crate::geometry::{primitives::triangle3::Triangle3, traits::RealNumber};

/// Constants describing a "well shaped" mesh, used to size scratch buffers
/// and as defaults for remeshing parameters.
pub mod stats {
    /// Valence of an interior vertex in a mesh made of equilateral triangles.
    pub const IDEAL_INTERIOR_VERTEX_VALENCE: usize = 6;
}

/// A mesh that can be iterated as a flat stream of triangles, regardless of
/// its internal connectivity representation.
pub trait Triangles {
    type Scalar: RealNumber;

    fn triangles(&self) -> impl Iterator<Item = Triangle3<Self::Scalar>>;
}

/// A mesh with addressable vertices and triangular faces referencing them.
pub trait TriangleMesh {
    type Scalar: RealNumber;
    type VertexId: Copy;

    fn position(&self, vertex: Self::VertexId) -> [Self::Scalar; 3];
    fn vertices(&self) -> impl Iterator<Item = Self::VertexId>;
    fn faces(&self) -> impl Iterator<Item = [Self::VertexId; 3]>;
}
