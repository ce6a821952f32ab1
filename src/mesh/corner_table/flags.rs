use std::fmt::Display;
use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy)]
    pub struct VertexFlags: u8 {
        const IS_DELETED  = 1;
        const IS_SELECTED = 1 << 1;
        const IS_BORDER   = 1 << 2;
    }
}

impl Default for VertexFlags {
    #[inline]
    fn default() -> Self {
        Self(Default::default())
    }
}

impl Display for VertexFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#010b}", self.bits())
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy)]
    pub struct CornerFlags: u8 {
        const IS_DELETED = 1;
        const IS_VISITED = 1 << 1;
        const IS_CREASE  = 1 << 2;
    }
}

impl Default for CornerFlags {
    #[inline]
    fn default() -> Self {
        Self(Default::default())
    }
}

impl Display for CornerFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#010b}", self.bits())
    }
}

/// Clears the visited flag of every corner. Called before a traversal that
/// uses `IS_VISITED` to avoid revisiting the same edge twice.
pub(super) fn clear_visited<'a>(corners: impl Iterator<Item = &'a super::corner::Corner>) {
    for corner in corners {
        corner.set_visited(false);
    }
}
