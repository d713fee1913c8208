use crate::error::{ConfigError, Result};
use crate::math::Axis;
use crate::mesh::{MeshEdits, MeshHost, PointSet};
use crate::operations::Operation;
use crate::report::{Counts, Outcome};
use crate::symmetry::project_to_plane;

/// Flattens the selected vertices onto the center plane of an axis.
pub struct SnapToMiddle {
    axis: Axis,
}

impl SnapToMiddle {
    /// Creates a new `SnapToMiddle` operation.
    #[must_use]
    pub fn new(axis: Axis) -> Self {
        Self { axis }
    }
}

impl Operation for SnapToMiddle {
    fn name(&self) -> &'static str {
        "snap_to_middle"
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::NoSelection`] if nothing is selected.
    fn execute<H: MeshHost + ?Sized>(&self, host: &mut H) -> Result<Outcome> {
        let points = PointSet::from_host(host)?;
        let selected = points.selected_indices();
        if selected.is_empty() {
            return Err(ConfigError::NoSelection.into());
        }

        let mut edits = MeshEdits::new();
        for &vertex in &selected {
            let position = points.position(vertex)?;
            edits.move_vertex(vertex, project_to_plane(&position, self.axis));
        }
        let snapped = edits.moved_count();
        edits.apply(host)?;

        Ok(Outcome::new(
            format!("Snapped {snapped} vertices to middle (axis {}).", self.axis),
            Counts::Affected { vertices: snapped },
        ))
    }
}
