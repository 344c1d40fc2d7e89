use crate::{ActorId, SimTimestamp, Transform, VehicleControl};

/// Interface to the simulation engine's world and actor-state cache.
///
/// Methods take `&self`: the engine side owns whatever interior mutability
/// its caches need, so one handle can be shared between the driving loop and
/// the engine's own callback thread. Passed into the manager explicitly,
/// which keeps test doubles trivial.
pub trait WorldProvider: Send + Sync {
    /// Latest per-step timestamp observed from the engine.
    fn latest_timestamp(&self) -> SimTimestamp;

    /// Refresh the cached world/actor snapshot for the given step.
    fn refresh(&self, timestamp: &SimTimestamp);

    /// Register actors with the world-state cache.
    fn register_actors(&self, actors: &[ActorId]);

    /// Ask the engine to advance one simulation step. Fire-and-forget from
    /// the runner's perspective.
    fn request_tick(&self);

    fn actor_transform(&self, actor: ActorId) -> Option<Transform>;

    fn apply_control(&self, actor: ActorId, control: &VehicleControl);

    /// Reposition the observation camera.
    fn set_spectator_transform(&self, transform: Transform);

    /// Release the cache at the end of a scenario.
    fn cleanup(&self);
}
