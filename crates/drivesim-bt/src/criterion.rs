use drivesim_core::{TickContext, TrafficEvent};

use crate::status::Status;

/// A behavior leaf specialized to observe simulation state and accumulate
/// traffic events.
///
/// Criteria normally stay `Running` for the whole scenario and record
/// violations as events; with terminate-on-failure set they report `Failure`
/// on the first violation instead, which the criteria composite propagates.
pub trait Criterion: Send {
    fn name(&self) -> &str;

    fn tick(&mut self, ctx: &TickContext) -> Status;

    fn terminate(&mut self, _status: Status) {}

    /// Events accumulated so far, in emission order.
    fn events(&self) -> &[TrafficEvent];

    fn set_terminate_on_failure(&mut self, _terminate: bool) {}
}
