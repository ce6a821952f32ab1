use crate::{geometry::traits::RealNumber, mesh::corner_table::CornerTable};

/// Scoped save/restore of the vertex-selection bit. A pass that needs the
/// selection flag for its own bookkeeping pushes the current state, does its
/// work, then pops to restore what was there before — regardless of whether
/// the work succeeded.
///
/// Selection flags live in a `Cell`, so snapshots can be taken and restored
/// through a shared reference to the mesh. The mesh is passed per call rather
/// than stored, so a `SelectionStack` never holds a borrow that would conflict
/// with a caller that also needs `&mut CornerTable<S>` between push and pop
/// (e.g. `remeshing::smooth::relax_folds`, which calls `shift_vertex`).
#[derive(Default)]
pub struct SelectionStack {
    stack: Vec<Vec<bool>>,
}

impl SelectionStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves the current selection state. Does not modify it.
    pub fn push<S: RealNumber>(&mut self, mesh: &CornerTable<S>) {
        let snapshot = mesh.vertices().map(|v| mesh[v].is_selected()).collect();
        self.stack.push(snapshot);
    }

    /// Restores the most recently pushed selection state.
    pub fn pop<S: RealNumber>(&mut self, mesh: &CornerTable<S>) {
        if let Some(snapshot) = self.stack.pop() {
            Self::apply(mesh, &snapshot, |was_selected, _now| was_selected);
        }
    }

    /// Restores the intersection of the current selection and the most
    /// recently pushed one.
    pub fn pop_and<S: RealNumber>(&mut self, mesh: &CornerTable<S>) {
        if let Some(snapshot) = self.stack.pop() {
            Self::apply(mesh, &snapshot, |was_selected, now| was_selected && now);
        }
    }

    fn apply<S: RealNumber>(mesh: &CornerTable<S>, snapshot: &[bool], combine: impl Fn(bool, bool) -> bool) {
        for (vertex, &was_selected) in mesh.vertices().zip(snapshot) {
            let now = mesh[vertex].is_selected();
            mesh[vertex].set_selected(combine(was_selected, now));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SelectionStack;
    use crate::mesh::corner_table::test_helpers::create_unit_cross_square_mesh;

    #[test]
    fn pop_restores_prior_selection() {
        let mesh = create_unit_cross_square_mesh();
        let vertices: Vec<_> = mesh.vertices().collect();

        mesh[vertices[0]].set_selected(true);

        let mut stack = SelectionStack::new();
        stack.push(&mesh);

        mesh[vertices[0]].set_selected(false);
        mesh[vertices[1]].set_selected(true);

        stack.pop(&mesh);

        assert!(mesh[vertices[0]].is_selected());
        assert!(!mesh[vertices[1]].is_selected());
    }

    #[test]
    fn pop_and_intersects_with_current_selection() {
        let mesh = create_unit_cross_square_mesh();
        let vertices: Vec<_> = mesh.vertices().collect();

        mesh[vertices[0]].set_selected(true);
        mesh[vertices[1]].set_selected(true);

        let mut stack = SelectionStack::new();
        stack.push(&mesh);

        mesh[vertices[0]].set_selected(false);

        stack.pop_and(&mesh);

        assert!(!mesh[vertices[0]].is_selected());
        assert!(mesh[vertices[1]].is_selected());
    }
}
