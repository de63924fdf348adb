//! A recording host.

use std::sync::Arc;

use lodestone_core::service::BackHost;
use lodestone_utils::{BlockPos, ResourceLocation};
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use uuid::Uuid;

use crate::world::TestWorld;

/// One recorded teleport side effect.
#[derive(Debug, Clone, PartialEq)]
pub struct TeleportCall {
    /// The teleported player.
    pub player: Uuid,
    /// The destination dimension.
    pub dimension: ResourceLocation,
    /// The destination block position.
    pub position: BlockPos,
    /// The requested yaw; `None` keeps the player's current yaw.
    pub yaw: Option<f32>,
    /// The requested pitch; `None` keeps the player's current pitch.
    pub pitch: Option<f32>,
}

/// A host with explicitly registered worlds that records every teleport
/// instead of performing it.
#[derive(Debug, Default)]
pub struct TestHost {
    worlds: FxHashMap<ResourceLocation, Arc<TestWorld>>,
    teleports: Mutex<Vec<TeleportCall>>,
}

impl TestHost {
    /// Creates a host with no worlds loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a world under the given dimension key.
    pub fn insert_world(&mut self, dimension: ResourceLocation, world: TestWorld) {
        self.worlds.insert(dimension, Arc::new(world));
    }

    /// The teleports recorded so far, oldest first.
    #[must_use]
    pub fn teleports(&self) -> Vec<TeleportCall> {
        self.teleports.lock().clone()
    }
}

impl BackHost for TestHost {
    type World = TestWorld;

    fn world(&self, dimension: &ResourceLocation) -> Option<Arc<TestWorld>> {
        self.worlds.get(dimension).cloned()
    }

    fn teleport_player(
        &self,
        player: Uuid,
        dimension: &ResourceLocation,
        position: BlockPos,
        yaw: Option<f32>,
        pitch: Option<f32>,
    ) {
        self.teleports.lock().push(TeleportCall {
            player,
            dimension: dimension.clone(),
            position,
            yaw,
            pitch,
        });
    }
}
