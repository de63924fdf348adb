//! Shared math and identifier primitives for the Lodestone workspace.

pub mod math;
pub mod types;

pub use types::{BlockPos, ResourceLocation};
