use super::MeshHost;
use crate::error::Result;
use crate::math::Point3;

/// Position and selection changes computed by an operation, written back to
/// the host in one batch followed by a single commit.
#[derive(Debug, Clone, Default)]
pub struct MeshEdits {
    moves: Vec<(usize, Point3)>,
    selection: Option<Vec<bool>>,
}

impl MeshEdits {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves vertex `index` to a world-space position.
    pub fn move_vertex(&mut self, index: usize, position: Point3) {
        self.moves.push((index, position));
    }

    /// Replaces the whole selection with `selection`.
    pub fn replace_selection(&mut self, selection: Vec<bool>) {
        self.selection = Some(selection);
    }

    #[must_use]
    pub fn moved_count(&self) -> usize {
        self.moves.len()
    }

    /// Writes every staged edit to the host and commits.
    ///
    /// # Errors
    ///
    /// Propagates the first error the host reports; nothing is committed in
    /// that case.
    pub fn apply<H: MeshHost + ?Sized>(self, host: &mut H) -> Result<()> {
        for (index, position) in self.moves {
            host.set_world_position(index, position)?;
        }
        if let Some(selection) = self.selection {
            for (index, selected) in selection.into_iter().enumerate() {
                host.set_selected(index, selected)?;
            }
        }
        host.commit();
        Ok(())
    }
}
