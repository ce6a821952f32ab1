pub mod algo;
pub mod error;
pub mod geometry;
pub mod mesh;
pub mod remeshing;
pub mod spatial_partitioning;

mod helpers;

pub use error::RemeshError;
pub use mesh::corner_table::CornerTable;
pub use remeshing::params::{Params, RemeshStatistics};

/// Remeshes `mesh` in place, using an internal deep copy of it as the reference surface.
pub fn remesh<S: geometry::traits::RealNumber>(mesh: &mut CornerTable<S>, params: &mut Params<S>) {
    let reference = mesh.clone();
    remeshing::driver::run(mesh, &reference, params);
}

/// Remeshes `mesh` in place against a distinct, caller-owned reference mesh `reference`.
///
/// Returns [`RemeshError::AliasedReferenceMesh`] if `mesh` and `reference` are the same allocation.
pub fn remesh_against<S: geometry::traits::RealNumber>(
    mesh: &mut CornerTable<S>,
    reference: &CornerTable<S>,
    params: &mut Params<S>,
) -> Result<(), RemeshError> {
    if std::ptr::eq(mesh, reference) {
        return Err(RemeshError::AliasedReferenceMesh);
    }

    remeshing::driver::run(mesh, reference, params);
    Ok(())
}
