use super::MeshHost;
use crate::error::{PreconditionError, Result};
use crate::math::{Matrix4, Point3};

/// An in-memory mesh implementing [`MeshHost`].
///
/// Vertex positions are stored in model space and exposed in world space
/// through a model-to-world transform, the way an editor object would.
/// Writes are applied immediately; [`MeshHost::commit`] only counts flushes.
#[derive(Debug, Clone)]
pub struct EditMesh {
    local: Vec<Point3>,
    selection: Vec<bool>,
    model_to_world: Matrix4,
    world_to_model: Matrix4,
    commits: usize,
}

impl EditMesh {
    /// Creates a mesh with an identity transform and nothing selected.
    #[must_use]
    pub fn new(positions: Vec<Point3>) -> Self {
        let selection = vec![false; positions.len()];
        Self {
            local: positions,
            selection,
            model_to_world: Matrix4::identity(),
            world_to_model: Matrix4::identity(),
            commits: 0,
        }
    }

    /// Sets the model-to-world transform.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionError::SingularTransform`] if the matrix has no
    /// inverse.
    pub fn with_transform(mut self, model_to_world: Matrix4) -> Result<Self> {
        let world_to_model = model_to_world
            .try_inverse()
            .ok_or(PreconditionError::SingularTransform)?;
        self.model_to_world = model_to_world;
        self.world_to_model = world_to_model;
        Ok(self)
    }

    /// Replaces the selection flags.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionError::SelectionLengthMismatch`] if the flag
    /// count differs from the vertex count.
    pub fn with_selection(mut self, selection: Vec<bool>) -> Result<Self> {
        if selection.len() != self.local.len() {
            return Err(PreconditionError::SelectionLengthMismatch {
                positions: self.local.len(),
                selection: selection.len(),
            }
            .into());
        }
        self.selection = selection;
        Ok(self)
    }

    /// Model-space position of a vertex.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionError::VertexOutOfRange`] for an unknown index.
    pub fn local_position(&self, index: usize) -> Result<Point3> {
        self.local
            .get(index)
            .copied()
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Indices of the selected vertices, ascending.
    #[must_use]
    pub fn selected_indices(&self) -> Vec<usize> {
        self.selection
            .iter()
            .enumerate()
            .filter_map(|(i, &selected)| selected.then_some(i))
            .collect()
    }

    /// Number of times edits have been committed.
    #[must_use]
    pub fn commit_count(&self) -> usize {
        self.commits
    }

    fn out_of_range(&self, index: usize) -> crate::error::MirrorError {
        PreconditionError::VertexOutOfRange {
            index,
            count: self.local.len(),
        }
        .into()
    }
}

impl MeshHost for EditMesh {
    fn vertex_count(&self) -> usize {
        self.local.len()
    }

    fn world_position(&self, index: usize) -> Result<Point3> {
        let local = self.local_position(index)?;
        Ok(self.model_to_world.transform_point(&local))
    }

    fn is_selected(&self, index: usize) -> Result<bool> {
        self.selection
            .get(index)
            .copied()
            .ok_or_else(|| self.out_of_range(index))
    }

    fn set_selected(&mut self, index: usize, selected: bool) -> Result<()> {
        let err = self.out_of_range(index);
        let flag = self.selection.get_mut(index).ok_or(err)?;
        *flag = selected;
        Ok(())
    }

    fn set_world_position(&mut self, index: usize, position: Point3) -> Result<()> {
        let local = self.world_to_model.transform_point(&position);
        let err = self.out_of_range(index);
        let slot = self.local.get_mut(index).ok_or(err)?;
        *slot = local;
        Ok(())
    }

    fn commit(&mut self) {
        self.commits += 1;
    }
}
