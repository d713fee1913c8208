use crate::config::validate_threshold;
use crate::error::Result;
use crate::math::Axis;
use crate::mesh::{MeshEdits, MeshHost, PointSet};
use crate::operations::Operation;
use crate::report::{Counts, Outcome};
use crate::symmetry::SymmetryScanner;

/// Selects exactly the vertices that have no mirror partner.
///
/// The previous selection is ignored and overwritten.
pub struct CheckSymmetry {
    axis: Axis,
    threshold: f64,
}

impl CheckSymmetry {
    /// Creates a new `CheckSymmetry` operation.
    #[must_use]
    pub fn new(axis: Axis, threshold: f64) -> Self {
        Self { axis, threshold }
    }
}

impl Operation for CheckSymmetry {
    fn name(&self) -> &'static str {
        "check_symmetry"
    }

    /// # Errors
    ///
    /// Returns [`crate::error::ConfigError::InvalidThreshold`] for an
    /// unusable threshold.
    fn execute<H: MeshHost + ?Sized>(&self, host: &mut H) -> Result<Outcome> {
        let threshold = validate_threshold("mirror_threshold", self.threshold)?;
        let points = PointSet::from_host(host)?;

        let scanner = SymmetryScanner::new(points.positions(), self.axis, threshold);
        let mut selection = vec![false; points.len()];
        let asymmetric = scanner.asymmetric_vertices();
        for &vertex in &asymmetric {
            selection[vertex] = true;
        }

        let mut edits = MeshEdits::new();
        edits.replace_selection(selection);
        edits.apply(host)?;

        let count = asymmetric.len();
        let message = if count == 0 {
            format!("Mesh is symmetric along {} axis.", self.axis)
        } else {
            format!("Found {count} asymmetric vertices along {} axis.", self.axis)
        };
        Ok(Outcome::new(message, Counts::Asymmetric { asymmetric: count }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::mesh::EditMesh;

    #[test]
    fn unpaired_vertices_become_the_selection() {
        let mut mesh = EditMesh::new(vec![Point3::new(1.0, 0.0, 0.0), Point3::new(-0.5, 0.0, 0.0)]);
        let outcome = CheckSymmetry::new(Axis::X, 0.05).execute(&mut mesh).unwrap();
        assert_eq!(mesh.selected_indices(), vec![0, 1]);
        assert_eq!(outcome.counts, Counts::Asymmetric { asymmetric: 2 });
        assert_eq!(outcome.message, "Found 2 asymmetric vertices along X axis.");
    }

    #[test]
    fn symmetric_mesh_clears_prior_selection() {
        let mut mesh = EditMesh::new(vec![
            Point3::new(0.0, 1.0, 0.5),
            Point3::new(0.0, -1.0, 0.5),
            Point3::new(0.3, 0.0, 0.0),
        ])
        .with_selection(vec![true, true, true])
        .unwrap();
        let outcome = CheckSymmetry::new(Axis::Y, 0.01).execute(&mut mesh).unwrap();
        assert!(mesh.selected_indices().is_empty());
        assert_eq!(outcome.counts, Counts::Asymmetric { asymmetric: 0 });
        assert_eq!(outcome.message, "Mesh is symmetric along Y axis.");
        assert_eq!(mesh.commit_count(), 1);
    }

    #[test]
    fn empty_mesh_is_symmetric() {
        let mut mesh = EditMesh::new(vec![]);
        let outcome = CheckSymmetry::new(Axis::Z, 0.05).execute(&mut mesh).unwrap();
        assert_eq!(outcome.counts, Counts::Asymmetric { asymmetric: 0 });
    }

    #[test]
    fn rejects_negative_threshold() {
        let mut mesh = EditMesh::new(vec![Point3::origin()]);
        assert!(CheckSymmetry::new(Axis::X, -0.01).execute(&mut mesh).is_err());
        assert_eq!(mesh.commit_count(), 0);
    }
}
