use tracing::trace;

use super::transform::mirror_point;
use crate::error::Result;
use crate::math::{Axis, Point3};
use crate::mesh::PointSet;

/// A mirror partner found for a selected vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MirrorMatch {
    /// Index of the partner vertex.
    pub partner: usize,
    /// Euclidean distance between the partner and the ideal mirrored point.
    pub distance: f64,
    /// Where the selected vertex should go: the exact mirror of the partner.
    pub target: Point3,
}

/// Brute-force search for mirror partners among unselected vertices.
///
/// A candidate must sit strictly on the other side of the center plane and
/// lie within `threshold` of the mirrored point on each of the three axes
/// separately; among those, the closest in Euclidean distance wins, with
/// ties going to the lowest index.
///
/// Cost is one pass over the point set per query, which is fine for the
/// small selections this is used with.
#[derive(Debug, Clone, Copy)]
pub struct MirrorMatcher<'a> {
    points: &'a PointSet,
    axis: Axis,
    threshold: f64,
}

impl<'a> MirrorMatcher<'a> {
    #[must_use]
    pub fn new(points: &'a PointSet, axis: Axis, threshold: f64) -> Self {
        Self {
            points,
            axis,
            threshold,
        }
    }

    /// Finds the partner for vertex `vertex`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if `vertex` is not in the point set.
    pub fn find_match(&self, vertex: usize) -> Result<Option<MirrorMatch>> {
        let position = self.points.position(vertex)?;
        let side = self.axis.coordinate(&position);
        let mirrored = mirror_point(&position, self.axis);

        let mut best: Option<(usize, f64)> = None;
        for (index, other) in self.points.positions().iter().enumerate() {
            if index == vertex || self.points.is_selected(index) {
                continue;
            }
            let opposite = side * self.axis.coordinate(other) < 0.0;
            if !opposite {
                continue;
            }
            let Some(distance) = self.gated_distance(&mirrored, other) else {
                continue;
            };
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((index, distance));
            }
        }

        let found = best.map(|(partner, distance)| MirrorMatch {
            partner,
            distance,
            target: mirror_point(&self.points.positions()[partner], self.axis),
        });
        trace!(vertex, partner = ?found.map(|m| m.partner), "mirror search");
        Ok(found)
    }

    /// Euclidean distance, or `None` when any single axis is off by more
    /// than the threshold.
    fn gated_distance(&self, mirrored: &Point3, other: &Point3) -> Option<f64> {
        let mut sum = 0.0;
        for k in 0..3 {
            let diff = (mirrored[k] - other[k]).abs();
            let within = diff <= self.threshold;
            if !within {
                return None;
            }
            sum += diff * diff;
        }
        Some(f64::sqrt(sum))
    }
}
