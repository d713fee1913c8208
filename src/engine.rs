use tracing::{debug_span, error, info, warn};

use crate::config::SymmetryConfig;
use crate::error::{PreconditionError, Result};
use crate::mesh::MeshHost;
use crate::operations::{
    CheckSymmetry, DeselectByAxis, Operation, SelectByAxis, SelectCenter, SnapToMiddle,
    SnapToSymmetry,
};
use crate::report::{OperationReport, Severity};

/// Entry point for host UI actions.
///
/// Every method takes the host's active edit target, which is `None` when
/// nothing is being edited, and always returns a report: failures become
/// cancelled reports and never reach the mesh.
#[derive(Debug, Clone, Default)]
pub struct SymmetryEngine {
    config: SymmetryConfig,
}

impl SymmetryEngine {
    #[must_use]
    pub fn new(config: SymmetryConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &SymmetryConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SymmetryConfig {
        &mut self.config
    }

    /// Selects vertices passing the configured axis-sign filter.
    pub fn select_by_axis<H: MeshHost + ?Sized>(&self, target: Option<&mut H>) -> OperationReport {
        Self::run(&SelectByAxis::new(self.config.axis_filter), target)
    }

    /// Deselects vertices passing the configured axis-sign filter.
    pub fn deselect_by_axis<H: MeshHost + ?Sized>(
        &self,
        target: Option<&mut H>,
    ) -> OperationReport {
        Self::run(&DeselectByAxis::new(self.config.axis_filter), target)
    }

    /// Selects vertices inside the configured center band.
    pub fn select_center<H: MeshHost + ?Sized>(&self, target: Option<&mut H>) -> OperationReport {
        let op = SelectCenter::new(self.config.center_axes, self.config.center_threshold);
        Self::run(&op, target)
    }

    /// Snaps selected vertices onto their mirror partners.
    pub fn snap_to_symmetry<H: MeshHost + ?Sized>(
        &self,
        target: Option<&mut H>,
    ) -> OperationReport {
        let op = SnapToSymmetry::new(self.config.mirror_axis, self.config.mirror_threshold);
        Self::run(&op, target)
    }

    /// Flattens selected vertices onto the mirror plane.
    pub fn snap_to_middle<H: MeshHost + ?Sized>(&self, target: Option<&mut H>) -> OperationReport {
        Self::run(&SnapToMiddle::new(self.config.mirror_axis), target)
    }

    /// Selects the vertices that have no mirror partner.
    pub fn check_symmetry<H: MeshHost + ?Sized>(&self, target: Option<&mut H>) -> OperationReport {
        let op = CheckSymmetry::new(self.config.mirror_axis, self.config.mirror_threshold);
        Self::run(&op, target)
    }

    /// Runs any operation against an optional edit target and reports the
    /// result.
    pub fn run<O, H>(op: &O, target: Option<&mut H>) -> OperationReport
    where
        O: Operation,
        H: MeshHost + ?Sized,
    {
        let span = debug_span!("operation", name = op.name());
        let _enter = span.enter();

        let result: Result<_> = match target {
            Some(host) => op.execute(host),
            None => Err(PreconditionError::NoEditTarget.into()),
        };

        match result {
            Ok(outcome) => {
                info!(counts = ?outcome.counts, "{}", outcome.message);
                OperationReport::finished(outcome)
            }
            Err(err) => {
                let report = OperationReport::cancelled(&err);
                match report.severity {
                    Severity::Warning => warn!("{err}"),
                    _ => error!("{err}"),
                }
                report
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Axis, Point3};
    use crate::mesh::EditMesh;
    use crate::report::{Counts, Status};
    use crate::symmetry::AxisFilter;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn missing_edit_target_is_an_error_report() {
        init_tracing();
        let engine = SymmetryEngine::default();
        let report = engine.check_symmetry::<EditMesh>(None);
        assert_eq!(report.status, Status::Cancelled);
        assert_eq!(report.severity, Severity::Error);
        assert_eq!(report.message, "no object in edit mode");
        assert!(report.counts.is_none());
    }

    #[test]
    fn vacuous_requests_are_warnings() {
        init_tracing();
        let engine = SymmetryEngine::default();
        let mut mesh = EditMesh::new(vec![Point3::new(1.0, 0.0, 0.0)]);

        let report = engine.select_by_axis(Some(&mut mesh));
        assert_eq!(report.status, Status::Cancelled);
        assert_eq!(report.severity, Severity::Warning);
        assert_eq!(report.message, "no axis selected");

        let report = engine.snap_to_middle(Some(&mut mesh));
        assert_eq!(report.severity, Severity::Warning);
        assert_eq!(report.message, "no vertices selected");
        assert_eq!(mesh.commit_count(), 0);
    }

    #[test]
    fn snap_to_symmetry_end_to_end() {
        init_tracing();
        let engine = SymmetryEngine::new(SymmetryConfig {
            mirror_axis: Axis::X,
            mirror_threshold: 0.1,
            ..SymmetryConfig::default()
        });
        let mut mesh = EditMesh::new(vec![Point3::new(1.0, 0.0, 0.0), Point3::new(-1.0, 0.0, 0.0)])
            .with_selection(vec![true, false])
            .unwrap();

        let report = engine.snap_to_symmetry(Some(&mut mesh));
        assert!(report.is_finished());
        assert_eq!(report.severity, Severity::Info);
        assert_eq!(
            report.message,
            "Snapped 1 vertices. 0 vertices had no match within threshold."
        );
        assert_eq!(report.counts, Some(Counts::Matched { matched: 1, unmatched: 0 }));
        assert_eq!(mesh.world_position(0).unwrap(), Point3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn check_symmetry_end_to_end() {
        init_tracing();
        let engine = SymmetryEngine::new(SymmetryConfig {
            mirror_threshold: 0.05,
            ..SymmetryConfig::default()
        });
        let mut mesh = EditMesh::new(vec![Point3::new(1.0, 0.0, 0.0), Point3::new(-0.5, 0.0, 0.0)]);

        let report = engine.check_symmetry(Some(&mut mesh));
        assert!(report.is_finished());
        assert_eq!(report.counts, Some(Counts::Asymmetric { asymmetric: 2 }));
        assert_eq!(mesh.selected_indices(), vec![0, 1]);
    }

    #[test]
    fn select_then_fix_then_verify() {
        init_tracing();
        let mut engine = SymmetryEngine::default();
        let mut mesh = EditMesh::new(vec![
            Point3::new(0.51, 0.2, 0.0),
            Point3::new(-0.5, 0.2, 0.0),
            Point3::new(0.004, 1.0, 0.0),
        ]);

        let report = engine.check_symmetry(Some(&mut mesh));
        assert_eq!(report.counts, Some(Counts::Asymmetric { asymmetric: 0 }));

        engine.config_mut().mirror_threshold = 0.001;
        let report = engine.check_symmetry(Some(&mut mesh));
        assert_eq!(report.counts, Some(Counts::Asymmetric { asymmetric: 3 }));

        engine.config_mut().axis_filter = AxisFilter::positive(Axis::X);
        engine.select_by_axis(Some(&mut mesh));
        assert_eq!(mesh.selected_indices(), vec![0, 2]);
        engine.deselect_by_axis(Some(&mut mesh));
        assert!(mesh.selected_indices().is_empty());

        engine.config_mut().center_axes = crate::symmetry::CenterAxes::only(Axis::X);
        engine.select_center(Some(&mut mesh));
        assert_eq!(mesh.selected_indices(), vec![2]);
        engine.snap_to_middle(Some(&mut mesh));
        assert_eq!(mesh.world_position(2).unwrap(), Point3::new(0.0, 1.0, 0.0));

        engine.config_mut().axis_filter = AxisFilter::positive(Axis::X);
        engine.select_by_axis(Some(&mut mesh));
        engine.config_mut().mirror_threshold = 0.05;
        let report = engine.snap_to_symmetry(Some(&mut mesh));
        assert_eq!(report.counts, Some(Counts::Matched { matched: 1, unmatched: 0 }));
        assert_eq!(mesh.world_position(0).unwrap(), Point3::new(0.5, 0.2, 0.0));

        let report = engine.check_symmetry(Some(&mut mesh));
        assert_eq!(report.counts, Some(Counts::Asymmetric { asymmetric: 0 }));
    }
}
