use tracing::debug;

use super::transform::mirror_point;
use crate::math::{Axis, Point3};
use crate::spatial::KdTree;

/// Classifies every vertex of a mesh as symmetric or asymmetric about the
/// center plane of one axis.
///
/// Vertices within `threshold` of the plane are symmetric by definition.
/// Any other vertex is symmetric when some other vertex lies within
/// `threshold` (Euclidean) of its mirrored position. Lookups go through a
/// k-d tree built once at construction.
#[derive(Debug, Clone)]
pub struct SymmetryScanner<'a> {
    points: &'a [Point3],
    axis: Axis,
    threshold: f64,
    index: KdTree,
}

impl<'a> SymmetryScanner<'a> {
    #[must_use]
    pub fn new(points: &'a [Point3], axis: Axis, threshold: f64) -> Self {
        Self {
            points,
            axis,
            threshold,
            index: KdTree::build(points),
        }
    }

    /// Whether vertex `vertex` has a mirror partner. Unknown indices are
    /// reported as asymmetric.
    #[must_use]
    pub fn is_symmetric(&self, vertex: usize) -> bool {
        let Some(position) = self.points.get(vertex) else {
            return false;
        };
        if self.axis.coordinate(position).abs() <= self.threshold {
            return true;
        }
        let mirrored = mirror_point(position, self.axis);
        // A vertex off the plane is more than 2 * threshold away from its own
        // mirror, so excluding it never changes the outcome.
        self.index
            .nearest_excluding(&mirrored, vertex)
            .is_some_and(|hit| hit.distance <= self.threshold)
    }

    /// Indices of all vertices without a mirror partner, ascending.
    #[must_use]
    pub fn asymmetric_vertices(&self) -> Vec<usize> {
        let asymmetric: Vec<usize> = (0..self.points.len())
            .filter(|&i| !self.is_symmetric(i))
            .collect();
        debug!(
            axis = %self.axis,
            threshold = self.threshold,
            vertices = self.points.len(),
            asymmetric = asymmetric.len(),
            "symmetry scan"
        );
        asymmetric
    }
}
