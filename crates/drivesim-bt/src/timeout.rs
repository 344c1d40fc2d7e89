use drivesim_core::TickContext;

use crate::node::Behavior;
use crate::status::Status;

/// Guard node bounding overall scenario duration in simulation time.
///
/// Captures the game time of its first tick and fails once the requested
/// duration has elapsed. Always present in a scenario tree.
pub struct TimeoutGuard {
    duration: f64,
    start: Option<f64>,
}

impl TimeoutGuard {
    pub fn new(duration_seconds: f64) -> Self {
        Self {
            duration: duration_seconds,
            start: None,
        }
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }
}

impl Behavior for TimeoutGuard {
    fn tick(&mut self, ctx: &TickContext) -> Status {
        let start = *self.start.get_or_insert(ctx.game_time);
        if ctx.game_time - start >= self.duration {
            Status::Failure
        } else {
            Status::Running
        }
    }

    fn terminate(&mut self, _status: Status) {
        self.start = None;
    }
}
