use tracing::debug;

use crate::config::validate_threshold;
use crate::error::{ConfigError, Result};
use crate::math::Axis;
use crate::mesh::{MeshEdits, MeshHost, PointSet};
use crate::operations::Operation;
use crate::report::{Counts, Outcome};
use crate::symmetry::MirrorMatcher;

/// Moves each selected vertex onto the exact mirror of its closest
/// unselected partner across the center plane.
pub struct SnapToSymmetry {
    axis: Axis,
    threshold: f64,
}

impl SnapToSymmetry {
    /// Creates a new `SnapToSymmetry` operation.
    #[must_use]
    pub fn new(axis: Axis, threshold: f64) -> Self {
        Self { axis, threshold }
    }
}

impl Operation for SnapToSymmetry {
    fn name(&self) -> &'static str {
        "snap_to_symmetry"
    }

    /// Selected vertices without a partner are left in place and counted as
    /// unmatched; that is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoSelection`] if nothing is selected, or
    /// [`ConfigError::InvalidThreshold`] for an unusable threshold.
    fn execute<H: MeshHost + ?Sized>(&self, host: &mut H) -> Result<Outcome> {
        let threshold = validate_threshold("mirror_threshold", self.threshold)?;
        let points = PointSet::from_host(host)?;
        let selected = points.selected_indices();
        if selected.is_empty() {
            return Err(ConfigError::NoSelection.into());
        }

        // Partners are always unselected and never move, so every match can
        // be computed against the snapshot.
        let matcher = MirrorMatcher::new(&points, self.axis, threshold);
        let mut edits = MeshEdits::new();
        let mut unmatched = 0;
        for &vertex in &selected {
            match matcher.find_match(vertex)? {
                Some(found) => edits.move_vertex(vertex, found.target),
                None => unmatched += 1,
            }
        }
        let matched = edits.moved_count();
        debug!(axis = %self.axis, matched, unmatched, "snap to symmetry");

        edits.apply(host)?;

        Ok(Outcome::new(
            format!(
                "Snapped {matched} vertices. {unmatched} vertices had no match within threshold."
            ),
            Counts::Matched { matched, unmatched },
        ))
    }
}
