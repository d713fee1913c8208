use super::MeshHost;
use crate::error::{PreconditionError, Result};
use crate::math::Point3;

/// World-space vertex positions and their selection flags, indexed by
/// vertex index.
///
/// A point set is a snapshot: it is rebuilt from the host at the start of
/// every operation and never outlives it.
#[derive(Debug, Clone, Default)]
pub struct PointSet {
    positions: Vec<Point3>,
    selection: Vec<bool>,
}

impl PointSet {
    /// Creates a point set from parallel position and selection arrays.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionError::SelectionLengthMismatch`] if the arrays
    /// differ in length.
    pub fn new(positions: Vec<Point3>, selection: Vec<bool>) -> Result<Self> {
        if positions.len() != selection.len() {
            return Err(PreconditionError::SelectionLengthMismatch {
                positions: positions.len(),
                selection: selection.len(),
            }
            .into());
        }
        Ok(Self {
            positions,
            selection,
        })
    }

    /// Creates a point set with nothing selected.
    #[must_use]
    pub fn unselected(positions: Vec<Point3>) -> Self {
        let selection = vec![false; positions.len()];
        Self {
            positions,
            selection,
        }
    }

    /// Snapshots the host's current world positions and selection.
    ///
    /// # Errors
    ///
    /// Propagates any error the host reports while reading a vertex.
    pub fn from_host<H: MeshHost + ?Sized>(host: &H) -> Result<Self> {
        let count = host.vertex_count();
        let mut positions = Vec::with_capacity(count);
        let mut selection = Vec::with_capacity(count);
        for index in 0..count {
            positions.push(host.world_position(index)?);
            selection.push(host.is_selected(index)?);
        }
        Ok(Self {
            positions,
            selection,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[must_use]
    pub fn positions(&self) -> &[Point3] {
        &self.positions
    }

    #[must_use]
    pub fn selection(&self) -> &[bool] {
        &self.selection
    }

    /// Position of vertex `index`.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionError::VertexOutOfRange`] for an unknown index.
    pub fn position(&self, index: usize) -> Result<Point3> {
        self.positions
            .get(index)
            .copied()
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Selection flag of vertex `index`; unknown indices read as unselected.
    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.get(index).copied().unwrap_or(false)
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

    fn out_of_range(&self, index: usize) -> crate::error::MirrorError {
        PreconditionError::VertexOutOfRange {
            index,
            count: self.len(),
        }
        .into()
    }
}
