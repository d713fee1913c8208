use crate::config::validate_threshold;
use crate::error::{ConfigError, Result};
use crate::mesh::{MeshEdits, MeshHost, PointSet};
use crate::operations::Operation;
use crate::report::{Counts, Outcome};
use crate::symmetry::{CenterAxes, CenterBand};

/// Replaces the selection with the vertices near the center planes of the
/// enabled axes.
pub struct SelectCenter {
    axes: CenterAxes,
    threshold: f64,
}

impl SelectCenter {
    /// Creates a new `SelectCenter` operation.
    #[must_use]
    pub fn new(axes: CenterAxes, threshold: f64) -> Self {
        Self { axes, threshold }
    }
}

impl Operation for SelectCenter {
    fn name(&self) -> &'static str {
        "select_center"
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::NoCenterAxisSelected`] if no axis is enabled,
    /// or [`ConfigError::InvalidThreshold`] for an unusable threshold.
    fn execute<H: MeshHost + ?Sized>(&self, host: &mut H) -> Result<Outcome> {
        if self.axes.is_empty() {
            return Err(ConfigError::NoCenterAxisSelected.into());
        }
        let threshold = validate_threshold("center_threshold", self.threshold)?;
        let band = CenterBand::new(self.axes, threshold);

        let points = PointSet::from_host(host)?;
        let selection: Vec<bool> = points.positions().iter().map(|p| band.contains(p)).collect();
        let selected = selection.iter().filter(|&&s| s).count();

        let mut edits = MeshEdits::new();
        edits.replace_selection(selection);
        edits.apply(host)?;

        Ok(Outcome::new(
            format!("Selected {selected} center vertices."),
            Counts::Affected { vertices: selected },
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::MirrorError;
    use crate::math::{Axis, Point3};
    use crate::mesh::EditMesh;
    use crate::operations::select::fixtures::octahedron_with_center;

    #[test]
    fn all_axes_selects_only_the_origin() {
        let mut mesh = octahedron_with_center();
        let outcome = SelectCenter::new(CenterAxes::default(), 0.01)
            .execute(&mut mesh)
            .unwrap();
        assert_eq!(mesh.selected_indices(), vec![6]);
        assert_eq!(outcome.message, "Selected 1 center vertices.");
    }

    #[test]
    fn single_axis_selects_the_plane() {
        let mut mesh = octahedron_with_center();
        SelectCenter::new(CenterAxes::only(Axis::X), 0.01)
            .execute(&mut mesh)
            .unwrap();
        assert_eq!(mesh.selected_indices(), vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut mesh = EditMesh::new(vec![
            Point3::new(0.25, 0.0, 0.0),
            Point3::new(-0.25, 0.0, 0.0),
            Point3::new(0.2501, 0.0, 0.0),
        ]);
        SelectCenter::new(CenterAxes::only(Axis::X), 0.25)
            .execute(&mut mesh)
            .unwrap();
        assert_eq!(mesh.selected_indices(), vec![0, 1]);
    }

    #[test]
    fn no_axes_or_bad_threshold_is_rejected() {
        let mut mesh = octahedron_with_center();
        let none = CenterAxes {
            x: false,
            y: false,
            z: false,
        };
        assert!(matches!(
            SelectCenter::new(none, 0.01).execute(&mut mesh).unwrap_err(),
            MirrorError::Config(ConfigError::NoCenterAxisSelected)
        ));
        assert!(matches!(
            SelectCenter::new(CenterAxes::default(), -0.5)
                .execute(&mut mesh)
                .unwrap_err(),
            MirrorError::Config(ConfigError::InvalidThreshold { .. })
        ));
        assert_eq!(mesh.commit_count(), 0);
    }
}
