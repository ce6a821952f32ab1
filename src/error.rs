use std::fmt;

/// Fatal precondition violations of the remeshing entry points.
///
/// Predicate rejections inside a pass (bad quality, bad valence, non-manifold
/// local neighborhood, Hausdorff violation, normal flip) are not errors: they are
/// silent per-operation skips, observable only through [`crate::RemeshStatistics`].
///
/// Non-manifold input is not a variant here: every public way to build a
/// [`crate::CornerTable`] (`mesh::corner_table::builder`) already rejects a
/// face that would introduce a non-manifold edge and duplicates any vertex
/// whose incident-face star isn't a single fan, so a live `CornerTable` is
/// 2-manifold by construction, not by a check re-run at `remesh`/`remesh_against`.
#[derive(Debug, PartialEq, Eq)]
pub enum RemeshError {
    /// `remesh_against` was called with `mesh` and `reference` pointing at the same allocation.
    AliasedReferenceMesh,
}

impl fmt::Display for RemeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemeshError::AliasedReferenceMesh => {
                write!(f, "mesh and reference must be distinct allocations")
            }
        }
    }
}

impl std::error::Error for RemeshError {}
