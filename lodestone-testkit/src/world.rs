//! A map-backed in-memory world.

use lodestone_core::world::WorldView;
use lodestone_registry::{Block, vanilla_blocks};
use lodestone_utils::BlockPos;
use rustc_hash::FxHashMap;

/// An in-memory world holding explicitly placed blocks over endless air.
///
/// Positions that were never written read back as air, so a fresh world is
/// one unbroken void.
#[derive(Debug, Default)]
pub struct TestWorld {
    blocks: FxHashMap<BlockPos, &'static Block>,
}

impl TestWorld {
    /// Creates an all-air world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a block, replacing whatever was there.
    pub fn set_block(&mut self, pos: BlockPos, block: &'static Block) {
        self.blocks.insert(pos, block);
    }
}

impl WorldView for TestWorld {
    fn get_block(&self, pos: &BlockPos) -> &'static Block {
        self.blocks.get(pos).copied().unwrap_or(vanilla_blocks::AIR)
    }
}
