use drivesim_bt::Criterion;
use drivesim_core::TrafficEventType;

use crate::record::{RouteRecord, Scores};

pub const PENALTY_COLLISION_STATIC: f64 = 0.8;
pub const PENALTY_COLLISION_VEHICLE: f64 = 0.8;
pub const PENALTY_COLLISION_PEDESTRIAN: f64 = 0.8;
pub const PENALTY_TRAFFIC_LIGHT: f64 = 0.95;
pub const PENALTY_WRONG_WAY: f64 = 0.95;
pub const PENALTY_WRONG_WAY_PER_METER: f64 = 0.99;
pub const PENALTY_SIDEWALK_INVASION: f64 = 0.85;
pub const PENALTY_SIDEWALK_INVASION_PER_METER: f64 = 0.99;
pub const PENALTY_OUTSIDE_LANE_INVASION: f64 = 0.85;
pub const PENALTY_OUTSIDE_LANE_PER_METER: f64 = 0.99;
pub const PENALTY_STOP: f64 = 0.95;

/// Recompute the current score from every event accumulated so far.
///
/// The penalty restarts at 1.0 on each call; cross-tick accumulation happens
/// only through the criteria's still-growing event lists, so the call is
/// O(total events). Infraction messages are appended on every scan. Route
/// completion latches at 100: completion-percentage events seen after a
/// route-completed event are ignored, and a percentage event without a
/// payload scores zero.
pub fn update_record(criteria: &[&dyn Criterion], record: &mut RouteRecord) -> Scores {
    let mut target_reached = false;
    let mut score_penalty = 1.0;
    let mut score_route = 0.0;

    for criterion in criteria {
        for event in criterion.events() {
            match event.kind {
                TrafficEventType::CollisionStatic => {
                    score_penalty *= PENALTY_COLLISION_STATIC;
                    record
                        .infractions
                        .collisions_layout
                        .push(event.message.clone());
                }
                TrafficEventType::CollisionVehicle => {
                    score_penalty *= PENALTY_COLLISION_VEHICLE;
                    record
                        .infractions
                        .collisions_vehicle
                        .push(event.message.clone());
                }
                TrafficEventType::CollisionPedestrian => {
                    score_penalty *= PENALTY_COLLISION_PEDESTRIAN;
                    record
                        .infractions
                        .collisions_pedestrian
                        .push(event.message.clone());
                }
                TrafficEventType::TrafficLightInfraction => {
                    score_penalty *= PENALTY_TRAFFIC_LIGHT;
                    record.infractions.red_light.push(event.message.clone());
                }
                TrafficEventType::WrongWayInfraction { distance } => {
                    score_penalty *= PENALTY_WRONG_WAY;
                    score_penalty *= PENALTY_WRONG_WAY_PER_METER.powf(distance);
                    record.infractions.wrong_way.push(event.message.clone());
                }
                TrafficEventType::RouteDeviation => {
                    record.infractions.route_dev.push(event.message.clone());
                }
                TrafficEventType::OnSidewalkInfraction { distance } => {
                    score_penalty *= PENALTY_SIDEWALK_INVASION;
                    score_penalty *= PENALTY_SIDEWALK_INVASION_PER_METER.powf(distance);
                    record
                        .infractions
                        .sidewalk_invasion
                        .push(event.message.clone());
                }
                TrafficEventType::OutsideLaneInfraction { distance } => {
                    score_penalty *= PENALTY_OUTSIDE_LANE_INVASION;
                    score_penalty *= PENALTY_OUTSIDE_LANE_PER_METER.powf(distance);
                    record
                        .infractions
                        .outside_driving_lanes
                        .push(event.message.clone());
                }
                TrafficEventType::StopInfraction => {
                    score_penalty *= PENALTY_STOP;
                    record
                        .infractions
                        .stop_infraction
                        .push(event.message.clone());
                }
                TrafficEventType::RouteCompleted => {
                    score_route = 100.0;
                    target_reached = true;
                }
                TrafficEventType::RouteCompletion { completed } => {
                    if !target_reached {
                        score_route = completed.unwrap_or(0.0);
                    }
                }
            }
        }
    }

    let scores = Scores {
        score_route,
        score_penalty,
        score_composed: (score_route * score_penalty).max(0.0),
    };
    record.scores = scores;
    scores
}

/// Whether any criterion has recorded a route-completed event.
pub fn route_completed(criteria: &[&dyn Criterion]) -> bool {
    criteria.iter().any(|criterion| {
        criterion
            .events()
            .iter()
            .any(|event| matches!(event.kind, TrafficEventType::RouteCompleted))
    })
}

/// Sink for the per-tick score line, separated from the score fold so the
/// penalty arithmetic is testable without capturing output.
pub trait ScoreReporter: Send {
    fn report(&mut self, scores: &Scores);
}

/// Prints the score line to stdout.
#[derive(Debug, Default)]
pub struct StdoutReporter;

impl ScoreReporter for StdoutReporter {
    fn report(&mut self, scores: &Scores) {
        println!(
            "[Agent score] [route={:.2}] [penalty={:.2}] [total={:.2}]",
            scores.score_route, scores.score_penalty, scores.score_composed
        );
    }
}
