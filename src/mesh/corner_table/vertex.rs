use super::flags::VertexFlags;
use super::*;
use crate::{geometry::traits::RealNumber, helpers::aliases::Vec3};
use std::cell::Cell;
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(usize);

impl VertexId {
    #[inline]
    pub(super) fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    pub fn new_invalid() -> Self {
        Self(usize::MAX)
    }

    #[inline]
    pub(super) fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct Vertex<TScalarType: RealNumber> {
    corner: CornerId,
    position: Vec3<TScalarType>,
    flags: Cell<VertexFlags>,
}

impl<TScalarType: RealNumber> Vertex<TScalarType> {
    #[inline]
    pub fn new(corner: CornerId, position: Vec3<TScalarType>) -> Self {
        Self {
            corner,
            position,
            flags: Cell::new(VertexFlags::default()),
        }
    }

    #[inline]
    pub fn position(&self) -> &Vec3<TScalarType> {
        &self.position
    }

    #[inline]
    pub fn position_mut(&mut self) -> &mut Vec3<TScalarType> {
        &mut self.position
    }

    #[inline]
    pub fn set_position(&mut self, point: Vec3<TScalarType>) -> &mut Self {
        self.position = point;
        self
    }

    #[inline]
    pub fn corner(&self) -> CornerId {
        self.corner
    }

    #[inline]
    pub fn set_corner(&mut self, corner: CornerId) -> &mut Self {
        self.corner = corner;
        self
    }

    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.flags.get().contains(VertexFlags::IS_DELETED)
    }

    #[inline]
    pub fn set_deleted(&self, deleted: bool) {
        let mut flags = self.flags.get();
        flags.set(VertexFlags::IS_DELETED, deleted);
        self.flags.set(flags);
    }

    #[inline]
    pub fn is_selected(&self) -> bool {
        self.flags.get().contains(VertexFlags::IS_SELECTED)
    }

    #[inline]
    pub fn set_selected(&self, selected: bool) {
        let mut flags = self.flags.get();
        flags.set(VertexFlags::IS_SELECTED, selected);
        self.flags.set(flags);
    }

    /// A vertex is a border if it lies on a mesh boundary edge or a crease.
    /// Unlike the other flags, this one is persistent: passes that relocate
    /// or remove vertices must preserve it, not reset it.
    #[inline]
    pub fn is_border(&self) -> bool {
        self.flags.get().contains(VertexFlags::IS_BORDER)
    }

    #[inline]
    pub fn set_border(&self, border: bool) {
        let mut flags = self.flags.get();
        flags.set(VertexFlags::IS_BORDER, border);
        self.flags.set(flags);
    }
}

impl<TScalarType: RealNumber> PartialEq for Vertex<TScalarType> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.corner == other.corner && self.position == other.position
    }
}
impl<TScalarType: RealNumber> Eq for Vertex<TScalarType> {}

impl<TScalar: RealNumber> Index<VertexId> for CornerTable<TScalar> {
    type Output = Vertex<TScalar>;

    #[inline]
    fn index(&self, index: VertexId) -> &Self::Output {
        &self.vertices[index.0]
    }
}

impl<TScalar: RealNumber> IndexMut<VertexId> for CornerTable<TScalar> {
    #[inline]
    fn index_mut(&mut self, index: VertexId) -> &mut Self::Output {
        &mut self.vertices[index.0]
    }
}

/// Aliases
pub type VertexF = Vertex<f32>;
