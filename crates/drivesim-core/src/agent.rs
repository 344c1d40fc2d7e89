use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{ActorId, VehicleControl};

/// Sensor track an agent declares for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Track {
    Sensors,
    Map,
}

#[derive(Debug, Error)]
pub enum AgentError {
    /// Malformed sensor setup. Fatal at load time, never retried.
    #[error("invalid sensor configuration: {0}")]
    SensorConfiguration(String),

    /// Failure inside the per-tick decision function. Propagates to the
    /// caller and aborts the run.
    #[error("agent step failed: {0}")]
    Step(String),
}

/// Autonomous-agent capability: given the current (already refreshed) world
/// state, produce one control command per tick.
pub trait Agent: Send {
    fn setup_sensors(
        &mut self,
        primary_actor: ActorId,
        debug: bool,
        track: Option<Track>,
    ) -> Result<(), AgentError>;

    fn run_step(&mut self) -> Result<VehicleControl, AgentError>;

    fn cleanup(&mut self) {}
}
