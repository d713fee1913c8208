mod edit_mesh;
mod edits;
mod point_set;

pub use edit_mesh::EditMesh;
pub use edits::MeshEdits;
pub use point_set::PointSet;

use crate::error::Result;
use crate::math::Point3;

/// The host application's editable mesh, seen from the symmetry engine.
///
/// Positions cross this boundary in world space: the host applies its own
/// model-to-world transform on reads and the inverse on writes. Indices are
/// stable for the duration of one operation and run from `0` to
/// `vertex_count() - 1`.
pub trait MeshHost {
    /// Number of vertices in the mesh.
    fn vertex_count(&self) -> usize;

    /// World-space position of a vertex.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    fn world_position(&self, index: usize) -> Result<Point3>;

    /// Whether a vertex is currently selected.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    fn is_selected(&self, index: usize) -> Result<bool>;

    /// Stages a selection change.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    fn set_selected(&mut self, index: usize, selected: bool) -> Result<()>;

    /// Stages a position change, given in world space.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    fn set_world_position(&mut self, index: usize, position: Point3) -> Result<()>;

    /// Flushes staged edits to the mesh.
    fn commit(&mut self);
}
