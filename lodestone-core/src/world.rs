//! The world-query seam between the service and its host.

use lodestone_registry::Block;
use lodestone_utils::BlockPos;

/// Read access to the blocks of a loaded world.
///
/// Implemented by the host server. Block queries are not presumed
/// thread-safe: callers stay on the thread that owns the world state, which
/// is also where the tick and command callbacks run.
pub trait WorldView {
    /// Returns the block at the given position.
    fn get_block(&self, pos: &BlockPos) -> &'static Block;

    /// Returns whether the position holds no block at all.
    fn is_air(&self, pos: &BlockPos) -> bool {
        self.get_block(pos).config.is_air
    }
}
