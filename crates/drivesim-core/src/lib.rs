//! Engine-agnostic driving-simulation primitives.

#![forbid(unsafe_code)]

pub mod actor;
pub mod agent;
pub mod control;
pub mod events;
pub mod geometry;
pub mod time;
pub mod world;

pub use actor::ActorId;
pub use agent::{Agent, AgentError, Track};
pub use control::VehicleControl;
pub use events::{TrafficEvent, TrafficEventType};
pub use geometry::{Location, Rotation, Transform};
pub use time::{GameClock, SimTimestamp, TickContext};
pub use world::WorldProvider;
