//! Per-tick position tracking and teleport detection.

use lodestone_utils::ResourceLocation;
use lodestone_utils::math::Vector3;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use uuid::Uuid;

/// An immutable snapshot of where a player was at some tick.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerLocation {
    /// The dimension the player was in.
    pub world: ResourceLocation,
    /// The player's position within that dimension.
    pub position: Vector3<f64>,
}

/// The per-player state the host hands over on every tick.
#[derive(Debug, Clone)]
pub struct PlayerSnapshot {
    /// The player's stable identity.
    pub id: Uuid,
    /// The dimension the player is currently in.
    pub world: ResourceLocation,
    /// The player's current position.
    pub position: Vector3<f64>,
}

/// Tracks each online player's most recent location and the location to
/// return them to after a teleport-like movement.
///
/// Entries are never evicted; a player who disconnects keeps their last
/// state until they are observed again, which only ever affects that
/// player's own back target.
pub struct LocationTracker {
    /// Last observed location per player, overwritten every tick.
    last_locations: Mutex<FxHashMap<Uuid, PlayerLocation>>,
    /// Pre-discontinuity location per player, consumed by the back command.
    back_locations: Mutex<FxHashMap<Uuid, PlayerLocation>>,
    /// Squared movement threshold separating walking from teleporting.
    teleport_threshold_squared: f64,
}

impl LocationTracker {
    /// Creates a tracker flagging single-tick movement of at least
    /// `teleport_threshold` blocks.
    #[must_use]
    pub fn new(teleport_threshold: f64) -> Self {
        Self {
            last_locations: Mutex::new(FxHashMap::default()),
            back_locations: Mutex::new(FxHashMap::default()),
            teleport_threshold_squared: teleport_threshold * teleport_threshold,
        }
    }

    /// Records one player's state for the current tick.
    ///
    /// A dimension change, or movement covering at least the threshold
    /// distance since the previous tick, snapshots the previous location as
    /// the player's back target. The first observation of a player only
    /// initializes the last-seen entry.
    pub fn record(&self, snapshot: &PlayerSnapshot) {
        let current = PlayerLocation {
            world: snapshot.world.clone(),
            position: snapshot.position,
        };

        let previous = self.last_locations.lock().insert(snapshot.id, current);
        let Some(previous) = previous else {
            return;
        };

        let discontinuous = previous.world != snapshot.world
            || previous.position.distance_squared_to(&snapshot.position)
                >= self.teleport_threshold_squared;

        if discontinuous {
            log::debug!(
                "Player {} jumped from {} {} to {} {}",
                snapshot.id,
                previous.world,
                previous.position,
                snapshot.world,
                snapshot.position
            );
            self.back_locations.lock().insert(snapshot.id, previous);
        }
    }

    /// The location saved before the player's most recent teleport-like
    /// movement. Reading it does not clear it.
    #[must_use]
    pub fn back_location(&self, player: &Uuid) -> Option<PlayerLocation> {
        self.back_locations.lock().get(player).cloned()
    }

    /// The location the player was last observed at.
    #[must_use]
    pub fn last_location(&self, player: &Uuid) -> Option<PlayerLocation> {
        self.last_locations.lock().get(player).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OVERWORLD: ResourceLocation = ResourceLocation::vanilla_static("overworld");
    const NETHER: ResourceLocation = ResourceLocation::vanilla_static("the_nether");

    fn snapshot(id: Uuid, world: ResourceLocation, x: f64, y: f64, z: f64) -> PlayerSnapshot {
        PlayerSnapshot {
            id,
            world,
            position: Vector3::new(x, y, z),
        }
    }

    #[test]
    fn first_observation_records_without_flagging() {
        let tracker = LocationTracker::new(10.0);
        let id = Uuid::new_v4();

        tracker.record(&snapshot(id, OVERWORLD, 0.0, 64.0, 0.0));

        assert_eq!(
            tracker.last_location(&id),
            Some(PlayerLocation {
                world: OVERWORLD,
                position: Vector3::new(0.0, 64.0, 0.0),
            })
        );
        assert_eq!(tracker.back_location(&id), None);
    }

    #[test]
    fn walking_does_not_save_a_back_target() {
        let tracker = LocationTracker::new(10.0);
        let id = Uuid::new_v4();

        tracker.record(&snapshot(id, OVERWORLD, 0.0, 64.0, 0.0));
        tracker.record(&snapshot(id, OVERWORLD, 4.0, 64.0, 3.0));
        tracker.record(&snapshot(id, OVERWORLD, 8.0, 64.0, 6.0));

        assert_eq!(tracker.back_location(&id), None);
        assert_eq!(
            tracker.last_location(&id).map(|l| l.position),
            Some(Vector3::new(8.0, 64.0, 6.0))
        );
    }

    #[test]
    fn jump_at_threshold_saves_previous_location() {
        let tracker = LocationTracker::new(10.0);
        let id = Uuid::new_v4();

        tracker.record(&snapshot(id, OVERWORLD, 0.0, 64.0, 0.0));
        // Exactly 10 blocks: squared distance 100.0, boundary inclusive.
        tracker.record(&snapshot(id, OVERWORLD, 6.0, 64.0, 8.0));

        assert_eq!(
            tracker.back_location(&id),
            Some(PlayerLocation {
                world: OVERWORLD,
                position: Vector3::new(0.0, 64.0, 0.0),
            })
        );
    }

    #[test]
    fn jump_below_threshold_is_ignored() {
        let tracker = LocationTracker::new(10.0);
        let id = Uuid::new_v4();

        tracker.record(&snapshot(id, OVERWORLD, 0.0, 64.0, 0.0));
        tracker.record(&snapshot(id, OVERWORLD, 9.9, 64.0, 0.0));

        assert_eq!(tracker.back_location(&id), None);
    }

    #[test]
    fn dimension_change_saves_previous_location_regardless_of_distance() {
        let tracker = LocationTracker::new(10.0);
        let id = Uuid::new_v4();

        tracker.record(&snapshot(id, OVERWORLD, 0.0, 64.0, 0.0));
        tracker.record(&snapshot(id, NETHER, 0.0, 64.0, 0.0));

        assert_eq!(
            tracker.back_location(&id),
            Some(PlayerLocation {
                world: OVERWORLD,
                position: Vector3::new(0.0, 64.0, 0.0),
            })
        );
        assert_eq!(tracker.last_location(&id).map(|l| l.world), Some(NETHER));
    }

    #[test]
    fn later_jump_overwrites_the_back_target() {
        let tracker = LocationTracker::new(10.0);
        let id = Uuid::new_v4();

        tracker.record(&snapshot(id, OVERWORLD, 0.0, 64.0, 0.0));
        tracker.record(&snapshot(id, OVERWORLD, 100.0, 64.0, 0.0));
        tracker.record(&snapshot(id, OVERWORLD, 500.0, 70.0, 500.0));

        assert_eq!(
            tracker.back_location(&id),
            Some(PlayerLocation {
                world: OVERWORLD,
                position: Vector3::new(100.0, 64.0, 0.0),
            })
        );
    }

    #[test]
    fn players_are_tracked_independently() {
        let tracker = LocationTracker::new(10.0);
        let mover = Uuid::new_v4();
        let idler = Uuid::new_v4();

        tracker.record(&snapshot(mover, OVERWORLD, 0.0, 64.0, 0.0));
        tracker.record(&snapshot(idler, OVERWORLD, 1.0, 64.0, 1.0));
        tracker.record(&snapshot(mover, OVERWORLD, 200.0, 64.0, 0.0));
        tracker.record(&snapshot(idler, OVERWORLD, 1.5, 64.0, 1.0));

        assert!(tracker.back_location(&mover).is_some());
        assert_eq!(tracker.back_location(&idler), None);
    }
}
