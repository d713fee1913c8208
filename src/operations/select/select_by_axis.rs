use crate::error::{ConfigError, Result};
use crate::mesh::{MeshEdits, MeshHost, PointSet};
use crate::operations::Operation;
use crate::report::{Counts, Outcome};
use crate::symmetry::AxisFilter;

/// Replaces the selection with the vertices passing an axis-sign filter.
pub struct SelectByAxis {
    filter: AxisFilter,
}

impl SelectByAxis {
    /// Creates a new `SelectByAxis` operation.
    #[must_use]
    pub fn new(filter: AxisFilter) -> Self {
        Self { filter }
    }
}

impl Operation for SelectByAxis {
    fn name(&self) -> &'static str {
        "select_by_axis"
    }

    /// Selects every vertex the filter accepts and deselects the rest.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoAxisSelected`] if no filter flag is enabled.
    fn execute<H: MeshHost + ?Sized>(&self, host: &mut H) -> Result<Outcome> {
        if self.filter.is_empty() {
            return Err(ConfigError::NoAxisSelected.into());
        }

        let points = PointSet::from_host(host)?;
        let selection: Vec<bool> = points
            .positions()
            .iter()
            .map(|p| self.filter.accepts(p))
            .collect();
        let selected = selection.iter().filter(|&&s| s).count();

        let mut edits = MeshEdits::new();
        edits.replace_selection(selection);
        edits.apply(host)?;

        Ok(Outcome::new(
            format!("Selected {selected} vertices."),
            Counts::Affected { vertices: selected },
        ))
    }
}
