use crate::math::{Axis, Point3};

/// Reflects `point` through the center plane perpendicular to `axis`.
#[must_use]
pub fn mirror_point(point: &Point3, axis: Axis) -> Point3 {
    let mut mirrored = *point;
    mirrored[axis.index()] = -mirrored[axis.index()];
    mirrored
}

/// Moves `point` onto the center plane perpendicular to `axis`.
#[must_use]
pub fn project_to_plane(point: &Point3, axis: Axis) -> Point3 {
    let mut projected = *point;
    projected[axis.index()] = 0.0;
    projected
}
