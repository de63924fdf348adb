//! Block descriptions for the Lodestone workspace.
//!
//! Blocks are `static` values compared by pointer identity: two positions
//! hold the same block type exactly when their `&'static Block` references
//! are equal under [`std::ptr::eq`].

pub mod blocks;
pub mod vanilla_blocks;

pub use blocks::{Block, BlockConfig};
