use crate::error::{ConfigError, Result};
use crate::mesh::{MeshEdits, MeshHost, PointSet};
use crate::operations::Operation;
use crate::report::{Counts, Outcome};
use crate::symmetry::AxisFilter;

/// Removes the vertices passing an axis-sign filter from the current
/// selection, leaving every other flag as it was.
pub struct DeselectByAxis {
    filter: AxisFilter,
}

impl DeselectByAxis {
    /// Creates a new `DeselectByAxis` operation.
    #[must_use]
    pub fn new(filter: AxisFilter) -> Self {
        Self { filter }
    }
}

impl Operation for DeselectByAxis {
    fn name(&self) -> &'static str {
        "deselect_by_axis"
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::NoAxisSelected`] if no filter flag is enabled.
    fn execute<H: MeshHost + ?Sized>(&self, host: &mut H) -> Result<Outcome> {
        if self.filter.is_empty() {
            return Err(ConfigError::NoAxisSelected.into());
        }

        let points = PointSet::from_host(host)?;
        let mut deselected = 0;
        let selection: Vec<bool> = points
            .positions()
            .iter()
            .zip(points.selection())
            .map(|(p, &selected)| {
                if selected && self.filter.accepts(p) {
                    deselected += 1;
                    false
                } else {
                    selected
                }
            })
            .collect();

        let mut edits = MeshEdits::new();
        edits.replace_selection(selection);
        edits.apply(host)?;

        Ok(Outcome::new(
            format!("Deselected {deselected} vertices."),
            Counts::Affected {
                vertices: deselected,
            },
        ))
    }
}
