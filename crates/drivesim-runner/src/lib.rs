//! Tick-synchronized driving-scenario runner.
//!
//! [`Scenario`] composes a caller-supplied behavior subtree, a timeout guard
//! and evaluation criteria into one parallel tree; [`ScenarioManager`] owns
//! the loop that advances that tree exactly once per observed simulation
//! timestep, drives the autonomous agent, and folds the criteria's traffic
//! events into a running score.

#![forbid(unsafe_code)]

pub mod agent;
pub mod cancel;
pub mod error;
pub mod manager;
pub mod record;
pub mod scenario;
pub mod score;
pub mod statistics;

pub use agent::AgentWrapper;
pub use cancel::{cancel_on_interrupt, CancelToken};
pub use error::ScenarioError;
pub use manager::{ManagerConfig, RunTimings, ScenarioManager, ScenarioSetup};
pub use record::{Infractions, RecordStatus, RouteRecord, Scores};
pub use scenario::{CriteriaInput, Scenario, ScenarioConfig};
pub use score::{ScoreReporter, StdoutReporter};
pub use statistics::{GlobalRecord, RouteException, StatisticsManager};
