use drivesim_core::{ActorId, Agent, AgentError, Track, VehicleControl};

/// Wraps the caller-supplied agent with the run-mode policy around it.
pub struct AgentWrapper {
    agent: Box<dyn Agent>,
    challenge_mode: bool,
}

impl AgentWrapper {
    pub fn new(agent: Box<dyn Agent>, challenge_mode: bool) -> Self {
        Self {
            agent,
            challenge_mode,
        }
    }

    /// Run the agent's sensor setup against the primary ego actor.
    ///
    /// Challenge mode refuses to start without a declared sensor track; the
    /// error is fatal at load time.
    pub fn setup_sensors(
        &mut self,
        primary_actor: ActorId,
        debug: bool,
        track: Option<Track>,
    ) -> Result<(), AgentError> {
        if self.challenge_mode && track.is_none() {
            return Err(AgentError::SensorConfiguration(
                "challenge mode requires a declared sensor track".to_string(),
            ));
        }
        self.agent.setup_sensors(primary_actor, debug, track)
    }

    /// One control command for the current step.
    pub fn run_step(&mut self) -> Result<VehicleControl, AgentError> {
        self.agent.run_step()
    }

    pub fn cleanup(&mut self) {
        self.agent.cleanup();
    }
}
