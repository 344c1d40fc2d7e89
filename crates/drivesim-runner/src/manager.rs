use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use chrono::{DateTime, Utc};
use drivesim_bt::Status;
use drivesim_core::{
    ActorId, Agent, GameClock, Location, Rotation, SimTimestamp, Track, Transform,
    VehicleControl, WorldProvider,
};
use parking_lot::Mutex;
use tracing::debug;

use crate::agent::AgentWrapper;
use crate::cancel::CancelToken;
use crate::error::ScenarioError;
use crate::record::RouteRecord;
use crate::scenario::Scenario;
use crate::score::{update_record, ScoreReporter, StdoutReporter};

const SPECTATOR_HEIGHT: f64 = 50.0;
const SPECTATOR_PITCH: f64 = -90.0;

#[derive(Debug, Clone, Default)]
pub struct ManagerConfig {
    pub debug: bool,
    /// Challenge mode follows the ego actor with the spectator camera and
    /// requires agents to declare a sensor track up front.
    pub challenge_mode: bool,
    pub track: Option<Track>,
}

/// Everything a scenario run needs besides the agent.
pub struct ScenarioSetup {
    pub scenario: Scenario,
    pub ego_actors: Vec<ActorId>,
    pub other_actors: Vec<ActorId>,
}

/// Wall-clock and game-clock bookends of one run.
#[derive(Debug, Clone, Default)]
pub struct RunTimings {
    pub start_system: Option<DateTime<Utc>>,
    pub end_system: Option<DateTime<Utc>>,
    pub duration_system: f64,
    pub duration_game: f64,
}

struct RunState {
    scenario: Option<Scenario>,
    ego_actors: Vec<ActorId>,
    other_actors: Vec<ActorId>,
    agent: Option<AgentWrapper>,
    clock: GameClock,
    timestamp_last_run: f64,
    route_record: RouteRecord,
    timings: RunTimings,
    reporter: Box<dyn ScoreReporter>,
}

impl RunState {
    fn new() -> Self {
        Self {
            scenario: None,
            ego_actors: Vec::new(),
            other_actors: Vec::new(),
            agent: None,
            clock: GameClock::new(),
            timestamp_last_run: 0.0,
            route_record: RouteRecord::default(),
            timings: RunTimings::default(),
            reporter: Box::new(StdoutReporter),
        }
    }
}

/// Drives a loaded [`Scenario`] in lock-step with the simulation engine.
///
/// All run state lives behind one mutex so the manager itself can be shared
/// (`Arc<ScenarioManager<_>>`) between the driving loop, a signal task and
/// observers. A whole tick executes under the lock; concurrent callers
/// serialize and the duplicate-timestamp filter drops the losers' stale
/// timestamps.
pub struct ScenarioManager<W: WorldProvider> {
    world: Arc<W>,
    config: ManagerConfig,
    running: Arc<AtomicBool>,
    state: Mutex<RunState>,
}

impl<W: WorldProvider> ScenarioManager<W> {
    pub fn new(world: Arc<W>, config: ManagerConfig) -> Self {
        Self {
            world,
            config,
            running: Arc::new(AtomicBool::new(false)),
            state: Mutex::new(RunState::new()),
        }
    }

    pub fn set_reporter(&self, reporter: Box<dyn ScoreReporter>) {
        self.state.lock().reporter = reporter;
    }

    /// Handle for cooperative cancellation, cheap to clone across threads.
    pub fn cancel_token(&self) -> CancelToken {
        CancelToken::new(Arc::clone(&self.running))
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub fn timings(&self) -> RunTimings {
        self.state.lock().timings.clone()
    }

    pub fn route_record(&self) -> RouteRecord {
        self.state.lock().route_record.clone()
    }

    /// Inspect the loaded scenario under the run lock.
    pub fn with_scenario<R>(&self, f: impl FnOnce(&Scenario) -> R) -> Option<R> {
        self.state.lock().scenario.as_ref().map(f)
    }

    /// Load a scenario and attach the agent, resetting all per-run state.
    pub fn load_scenario(
        &self,
        setup: ScenarioSetup,
        agent: Option<Box<dyn Agent>>,
    ) -> anyhow::Result<()> {
        let mut guard = self.state.lock();
        let state = &mut *guard;

        state.clock.restart();
        state.timestamp_last_run = 0.0;
        state.route_record = RouteRecord::default();
        state.timings = RunTimings::default();

        state.agent = agent
            .map(|agent| AgentWrapper::new(agent, self.config.challenge_mode))
            .map(|mut wrapper| -> anyhow::Result<AgentWrapper> {
                let primary = *setup
                    .ego_actors
                    .first()
                    .ok_or(ScenarioError::NoEgoActor)?;
                wrapper
                    .setup_sensors(primary, self.config.debug, self.config.track)
                    .context("agent sensor setup failed")?;
                Ok(wrapper)
            })
            .transpose()?;

        self.world.register_actors(&setup.ego_actors);
        self.world.register_actors(&setup.other_actors);

        state.ego_actors = setup.ego_actors;
        state.other_actors = setup.other_actors;
        state.scenario = Some(setup.scenario);
        Ok(())
    }

    /// Drive the scenario until its tree leaves RUNNING or the run is
    /// cancelled. Returns the final tree status.
    pub fn run_scenario(&self) -> anyhow::Result<Status> {
        let name = self
            .with_scenario(|scenario| scenario.name().to_string())
            .ok_or(ScenarioError::NotLoaded)?;
        println!("ScenarioManager: Running scenario {name}");

        let start = Instant::now();
        let start_game = {
            let mut state = self.state.lock();
            state.timings.start_system = Some(Utc::now());
            state.clock.time()
        };
        self.running.store(true, Ordering::SeqCst);

        while self.running.load(Ordering::SeqCst) {
            let timestamp = self.world.latest_timestamp();
            self.tick_scenario(timestamp)?;
        }

        let status = {
            let mut guard = self.state.lock();
            let state = &mut *guard;
            state.timings.end_system = Some(Utc::now());
            state.timings.duration_system = start.elapsed().as_secs_f64();
            state.timings.duration_game = state.clock.time() - start_game;
            state
                .scenario
                .as_ref()
                .map(|scenario| scenario.status())
                .unwrap_or(Status::Invalid)
        };

        if status == Status::Failure {
            println!("ScenarioManager: Terminated due to failure");
        }
        Ok(status)
    }

    /// Advance the run by one engine step.
    ///
    /// Timestamps at or before the last processed one are dropped, so replays
    /// from the engine's callback thread and the poll loop cannot double-tick
    /// the tree. A dropped timestamp still requests an engine step: in
    /// synchronous mode the engine only advances on request, and the next
    /// snapshot never arrives without one.
    pub fn tick_scenario(&self, timestamp: SimTimestamp) -> anyhow::Result<()> {
        let agent_attached;
        {
            let mut guard = self.state.lock();
            let state = &mut *guard;
            let scenario = state.scenario.as_mut().ok_or(ScenarioError::NotLoaded)?;
            agent_attached = state.agent.is_some();

            if timestamp.elapsed_seconds > state.timestamp_last_run {
                state.timestamp_last_run = timestamp.elapsed_seconds;
                debug!(
                    frame = timestamp.frame,
                    elapsed = timestamp.elapsed_seconds,
                    "ticking scenario"
                );

                state.clock.on_tick(&timestamp);
                self.world.refresh(&timestamp);

                let control = state
                    .agent
                    .as_mut()
                    .map(|agent| agent.run_step())
                    .transpose()
                    .context("agent step failed")?;

                let ctx = state.clock.context();
                let status = scenario.tick_once(&ctx);
                if status != Status::Running {
                    self.running.store(false, Ordering::SeqCst);
                }

                if self.config.challenge_mode {
                    if let Some(ego) = state.ego_actors.first() {
                        if let Some(transform) = self.world.actor_transform(*ego) {
                            self.world.set_spectator_transform(Transform {
                                location: transform.location
                                    + Location::new(0.0, 0.0, SPECTATOR_HEIGHT),
                                rotation: Rotation::new(SPECTATOR_PITCH, 0.0, 0.0),
                            });
                        }
                    }
                }

                if let (Some(control), Some(ego)) = (control, state.ego_actors.first()) {
                    self.world.apply_control(*ego, &control);
                }

                let criteria = scenario.get_criteria();
                let scores = update_record(&criteria, &mut state.route_record);
                state.reporter.report(&scores);
            }
        }

        if agent_attached {
            self.world.request_tick();
        }
        Ok(())
    }

    /// Terminate the tree, brake the ego to a halt, release the agent and
    /// the world cache. Leaves the running flag alone; the driving loop stops
    /// on its own.
    pub fn stop_scenario(&self) {
        let mut guard = self.state.lock();
        let state = &mut *guard;
        if let Some(scenario) = state.scenario.as_mut() {
            scenario.terminate();
        }
        if let Some(mut agent) = state.agent.take() {
            if let Some(ego) = state.ego_actors.first() {
                self.world.apply_control(*ego, &VehicleControl::full_stop());
            }
            agent.cleanup();
        }
        self.world.cleanup();
    }
}
