mod deselect_by_axis;
mod select_by_axis;
mod select_center;

pub use deselect_by_axis::DeselectByAxis;
pub use select_by_axis::SelectByAxis;
pub use select_center::SelectCenter;
