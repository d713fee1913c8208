mod snap_to_middle;
mod snap_to_symmetry;

pub use snap_to_middle::SnapToMiddle;
pub use snap_to_symmetry::SnapToSymmetry;
