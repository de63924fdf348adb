//! The back service: owns the tracker and drives the finder.

use std::sync::Arc;

use lodestone_utils::{BlockPos, ResourceLocation};
use uuid::Uuid;

use crate::config::BackConfig;
use crate::error::BackError;
use crate::finder;
use crate::tracker::{LocationTracker, PlayerSnapshot};
use crate::world::WorldView;

/// The host surface needed to execute a back request.
pub trait BackHost {
    /// The host's world handle.
    type World: WorldView;

    /// Resolves a dimension key to a loaded world.
    fn world(&self, dimension: &ResourceLocation) -> Option<Arc<Self::World>>;

    /// Relocates a player. `None` yaw or pitch keeps the player's current
    /// orientation.
    fn teleport_player(
        &self,
        player: Uuid,
        dimension: &ResourceLocation,
        position: BlockPos,
        yaw: Option<f32>,
        pitch: Option<f32>,
    );
}

/// Watches player movement and returns players to their pre-teleport
/// location on request.
///
/// One instance per server, constructed at server start and handed to both
/// the tick hook and the command handler. All state lives in the contained
/// tracker; the service itself never mutates anything on a failed request.
pub struct BackService {
    tracker: LocationTracker,
    config: BackConfig,
}

impl BackService {
    /// Creates the service from its configuration.
    #[must_use]
    pub fn new(config: BackConfig) -> Self {
        Self {
            tracker: LocationTracker::new(config.teleport_threshold),
            config,
        }
    }

    /// Read access to the movement tracker.
    #[must_use]
    pub fn tracker(&self) -> &LocationTracker {
        &self.tracker
    }

    /// Runs the movement tracker over one tick's player snapshots.
    ///
    /// Called once per server tick from the host's tick loop, on the thread
    /// that owns world state. Player order does not matter.
    pub fn on_tick<I>(&self, players: I)
    where
        I: IntoIterator<Item = PlayerSnapshot>,
    {
        for snapshot in players {
            self.tracker.record(&snapshot);
        }
    }

    /// Executes a back request for `player`.
    ///
    /// Reads the saved pre-teleport location (leaving it saved), searches it
    /// for a standable position and teleports the player there with their
    /// current orientation. Nothing is mutated on any failure path.
    pub fn on_back_command<H: BackHost>(&self, host: &H, player: Uuid) -> Result<BlockPos, BackError> {
        let back = self
            .tracker
            .back_location(&player)
            .ok_or(BackError::NoPreviousLocation)?;

        let Some(world) = host.world(&back.world) else {
            log::warn!(
                "Back target of player {player} is in unloaded dimension {}",
                back.world
            );
            return Err(BackError::WorldNotFound(back.world));
        };

        let position =
            finder::find_safe_position(world.as_ref(), back.position, self.config.max_search_radius)
                .ok_or(BackError::NoSafeLocation)?;

        host.teleport_player(player, &back.world, position, None, None);
        log::info!("Teleported player {player} back to {position} in {}", back.world);

        Ok(position)
    }
}

impl Default for BackService {
    fn default() -> Self {
        Self::new(BackConfig::default())
    }
}
