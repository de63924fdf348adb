//! The block description types.

use lodestone_utils::ResourceLocation;

/// A block type.
///
/// Instances live as statics in [`crate::vanilla_blocks`]; code holding a
/// `&'static Block` may compare block types with `ptr::eq`.
#[derive(Debug)]
pub struct Block {
    /// The namespaced key of the block, e.g. `minecraft:lava`.
    pub key: ResourceLocation,
    /// The behavioural properties of the block.
    pub config: BlockConfig,
}

/// Properties of a block that matter for occupancy and standing checks.
#[derive(Debug, Clone, Copy)]
pub struct BlockConfig {
    /// Whether the block occupies no space at all.
    pub is_air: bool,
    /// Whether an entity can stand on top of the block.
    pub solid: bool,
}

#[cfg(test)]
mod tests {
    use std::ptr;

    use crate::vanilla_blocks;

    #[test]
    fn statics_have_distinct_identity() {
        assert!(!ptr::eq(vanilla_blocks::LAVA, vanilla_blocks::BEDROCK));
        assert!(ptr::eq(vanilla_blocks::LAVA, vanilla_blocks::LAVA));
    }

    #[test]
    fn air_is_the_only_empty_block() {
        assert!(vanilla_blocks::AIR.config.is_air);
        assert!(!vanilla_blocks::STONE.config.is_air);
        assert!(!vanilla_blocks::LAVA.config.is_air);
    }

    #[test]
    fn fluids_are_not_solid() {
        assert!(!vanilla_blocks::WATER.config.solid);
        assert!(!vanilla_blocks::LAVA.config.solid);
        assert!(vanilla_blocks::BEDROCK.config.solid);
    }
}
