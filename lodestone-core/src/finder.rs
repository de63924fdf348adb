//! The expanding-cube search for a standable position.

use std::ptr;

use lodestone_registry::vanilla_blocks;
use lodestone_utils::BlockPos;
use lodestone_utils::math::Vector3;
use rustc_hash::FxHashSet;

use crate::world::WorldView;

/// Searches outward from `target` for the first standable position.
///
/// The target is truncated toward zero to an integer origin, then cubes of
/// radius 1 through `max_radius` (inclusive) are enumerated around it, x
/// outermost, then y, then z, each axis ascending. Every radius re-walks
/// the full cube rather than only its shell; a visited set shared across
/// radii reduces the re-walk to hash probes. The first candidate passing
/// the standing check wins, so the result is deterministic for a given
/// world state but not guaranteed to be the nearest standable position.
///
/// Returns `None` once `max_radius` is exhausted.
pub fn find_safe_position<W: WorldView + ?Sized>(
    world: &W,
    target: Vector3<f64>,
    max_radius: i32,
) -> Option<BlockPos> {
    let origin = BlockPos::new(target.x as i32, target.y as i32, target.z as i32);

    let mut visited: FxHashSet<BlockPos> = FxHashSet::default();
    for radius in 1..=max_radius {
        for dx in -radius..=radius {
            for dy in -radius..=radius {
                for dz in -radius..=radius {
                    let candidate = origin.offset(dx, dy, dz);
                    if visited.insert(candidate) && is_standable(world, &candidate) {
                        return Some(candidate);
                    }
                }
            }
        }
    }

    log::warn!("No standable position within radius {max_radius} of {origin}");
    None
}

/// Whether a player can stand at `pos`: the position and the one above it
/// are air, and the block below holds weight without being lava or bedrock.
fn is_standable<W: WorldView + ?Sized>(world: &W, pos: &BlockPos) -> bool {
    let below = world.get_block(&pos.down());

    world.is_air(pos)
        && world.is_air(&pos.up())
        && !below.config.is_air
        && below.config.solid
        && !ptr::eq(below, vanilla_blocks::LAVA)
        && !ptr::eq(below, vanilla_blocks::BEDROCK)
}
