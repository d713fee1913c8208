use crate::math::{Axis, Point3};

/// Sign filters per axis. A point passes when it lies strictly on the
/// enabled side of every enabled flag; a coordinate of exactly zero never
/// passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct AxisFilter {
    pub x_pos: bool,
    pub x_neg: bool,
    pub y_pos: bool,
    pub y_neg: bool,
    pub z_pos: bool,
    pub z_neg: bool,
}

impl AxisFilter {
    /// A filter with only the positive flag of `axis` enabled.
    #[must_use]
    pub fn positive(axis: Axis) -> Self {
        let mut filter = Self::default();
        *filter.flag_mut(axis, true) = true;
        filter
    }

    /// A filter with only the negative flag of `axis` enabled.
    #[must_use]
    pub fn negative(axis: Axis) -> Self {
        let mut filter = Self::default();
        *filter.flag_mut(axis, false) = true;
        filter
    }

    /// Returns `true` if no flag is enabled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.x_pos || self.x_neg || self.y_pos || self.y_neg || self.z_pos || self.z_neg)
    }

    /// Whether `point` passes every enabled flag.
    #[must_use]
    pub fn accepts(&self, point: &Point3) -> bool {
        Axis::ALL.into_iter().all(|axis| {
            let c = axis.coordinate(point);
            let (pos, neg) = self.flags(axis);
            (!pos || c > 0.0) && (!neg || c < 0.0)
        })
    }

    fn flags(&self, axis: Axis) -> (bool, bool) {
        match axis {
            Axis::X => (self.x_pos, self.x_neg),
            Axis::Y => (self.y_pos, self.y_neg),
            Axis::Z => (self.z_pos, self.z_neg),
        }
    }

    fn flag_mut(&mut self, axis: Axis, positive: bool) -> &mut bool {
        match (axis, positive) {
            (Axis::X, true) => &mut self.x_pos,
            (Axis::X, false) => &mut self.x_neg,
            (Axis::Y, true) => &mut self.y_pos,
            (Axis::Y, false) => &mut self.y_neg,
            (Axis::Z, true) => &mut self.z_pos,
            (Axis::Z, false) => &mut self.z_neg,
        }
    }
}

/// Which axes take part in center-band selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct CenterAxes {
    pub x: bool,
    pub y: bool,
    pub z: bool,
}

impl Default for CenterAxes {
    fn default() -> Self {
        Self {
            x: true,
            y: true,
            z: true,
        }
    }
}

impl CenterAxes {
    /// Only `axis` enabled.
    #[must_use]
    pub fn only(axis: Axis) -> Self {
        Self {
            x: axis == Axis::X,
            y: axis == Axis::Y,
            z: axis == Axis::Z,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.x || self.y || self.z)
    }

    #[must_use]
    pub fn contains(&self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

/// Slab around the origin: a point is inside when every enabled coordinate
/// has magnitude at most `threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterBand {
    pub axes: CenterAxes,
    pub threshold: f64,
}

impl CenterBand {
    #[must_use]
    pub fn new(axes: CenterAxes, threshold: f64) -> Self {
        Self { axes, threshold }
    }

    #[must_use]
    pub fn contains(&self, point: &Point3) -> bool {
        Axis::ALL
            .into_iter()
            .filter(|&axis| self.axes.contains(axis))
            .all(|axis| axis.coordinate(point).abs() <= self.threshold)
    }
}
