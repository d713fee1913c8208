pub mod query;
pub mod select;
pub mod snap;

pub use query::CheckSymmetry;
pub use select::{DeselectByAxis, SelectByAxis, SelectCenter};
pub use snap::{SnapToMiddle, SnapToSymmetry};

use crate::error::Result;
use crate::mesh::MeshHost;
use crate::report::Outcome;

/// A host action run against an editable mesh.
///
/// Implementations snapshot the mesh, compute every edit, and only then
/// write back and commit, so an error leaves the mesh untouched.
pub trait Operation {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Runs the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is vacuous or invalid, or if the host
    /// rejects an access.
    fn execute<H: MeshHost + ?Sized>(&self, host: &mut H) -> Result<Outcome>;
}
