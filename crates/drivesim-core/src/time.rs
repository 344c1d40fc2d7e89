use serde::{Deserialize, Serialize};

/// Per-step timestamp reported by the simulation engine.
///
/// `elapsed_seconds` is the engine's own monotonically-reportable time base;
/// duplicate or out-of-order deliveries are possible and callers filter them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimTimestamp {
    pub frame: u64,
    pub elapsed_seconds: f64,
    pub delta_seconds: f64,
}

impl SimTimestamp {
    pub fn new(frame: u64, elapsed_seconds: f64, delta_seconds: f64) -> Self {
        Self {
            frame,
            elapsed_seconds,
            delta_seconds,
        }
    }
}

/// Simulation-time clock fed by engine timestamps.
///
/// Accumulates game time from the deltas between observed timestamps, so a
/// restart puts the clock back to zero regardless of the engine's own epoch.
#[derive(Debug, Clone, Default)]
pub struct GameClock {
    time: f64,
    dt: f64,
    frame: u64,
    last_elapsed: Option<f64>,
}

impl GameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_tick(&mut self, timestamp: &SimTimestamp) {
        let dt = match self.last_elapsed {
            Some(last) => (timestamp.elapsed_seconds - last).max(0.0),
            None => timestamp.delta_seconds,
        };
        self.time += dt;
        self.dt = dt;
        self.frame = timestamp.frame;
        self.last_elapsed = Some(timestamp.elapsed_seconds);
    }

    pub fn restart(&mut self) {
        *self = Self::default();
    }

    /// Seconds of simulation time since the last restart.
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn delta(&self) -> f64 {
        self.dt
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn context(&self) -> TickContext {
        TickContext {
            frame: self.frame,
            game_time: self.time,
            dt: self.dt,
        }
    }
}

/// Context handed to every behavior/criterion tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    pub frame: u64,
    pub game_time: f64,
    pub dt: f64,
}
