mod filter;
mod matcher;
mod scanner;
mod transform;

pub use filter::{AxisFilter, CenterAxes, CenterBand};
pub use matcher::{MirrorMatch, MirrorMatcher};
pub use scanner::SymmetryScanner;
pub use transform::{mirror_point, project_to_plane};
