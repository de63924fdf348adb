//! Statics for the vanilla blocks this workspace distinguishes.
//!
//! Only the blocks the standing-safety predicate and its tests care about
//! are declared; hosts mapping a full block palette should collapse
//! anything else onto the closest entry here.

use lodestone_utils::ResourceLocation;

use crate::blocks::{Block, BlockConfig};

/// Air, the empty block.
pub static AIR: &Block = &Block {
    key: ResourceLocation::vanilla_static("air"),
    config: BlockConfig {
        is_air: true,
        solid: false,
    },
};

/// Stone.
pub static STONE: &Block = &Block {
    key: ResourceLocation::vanilla_static("stone"),
    config: BlockConfig {
        is_air: false,
        solid: true,
    },
};

/// Dirt.
pub static DIRT: &Block = &Block {
    key: ResourceLocation::vanilla_static("dirt"),
    config: BlockConfig {
        is_air: false,
        solid: true,
    },
};

/// Grass block.
pub static GRASS_BLOCK: &Block = &Block {
    key: ResourceLocation::vanilla_static("grass_block"),
    config: BlockConfig {
        is_air: false,
        solid: true,
    },
};

/// Sand.
pub static SAND: &Block = &Block {
    key: ResourceLocation::vanilla_static("sand"),
    config: BlockConfig {
        is_air: false,
        solid: true,
    },
};

/// Obsidian.
pub static OBSIDIAN: &Block = &Block {
    key: ResourceLocation::vanilla_static("obsidian"),
    config: BlockConfig {
        is_air: false,
        solid: true,
    },
};

/// Water source block.
pub static WATER: &Block = &Block {
    key: ResourceLocation::vanilla_static("water"),
    config: BlockConfig {
        is_air: false,
        solid: false,
    },
};

/// Lava source block. Standing on it is never safe.
pub static LAVA: &Block = &Block {
    key: ResourceLocation::vanilla_static("lava"),
    config: BlockConfig {
        is_air: false,
        solid: false,
    },
};

/// Bedrock, the unbreakable world boundary.
pub static BEDROCK: &Block = &Block {
    key: ResourceLocation::vanilla_static("bedrock"),
    config: BlockConfig {
        is_air: false,
        solid: true,
    },
};
