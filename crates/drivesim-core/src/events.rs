use serde::{Deserialize, Serialize};

/// Category of a traffic event emitted by an evaluation criterion.
///
/// Variants carry the structured payload the scoring table needs: infraction
/// distances in meters, route completion as a percentage. A completion event
/// without a payload scores as zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TrafficEventType {
    CollisionStatic,
    CollisionVehicle,
    CollisionPedestrian,
    TrafficLightInfraction,
    WrongWayInfraction { distance: f64 },
    RouteDeviation,
    OnSidewalkInfraction { distance: f64 },
    OutsideLaneInfraction { distance: f64 },
    StopInfraction,
    RouteCompleted,
    RouteCompletion { completed: Option<f64> },
}

/// A typed, timestamped record of a rule violation or milestone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficEvent {
    pub kind: TrafficEventType,
    pub message: String,
    pub game_time: f64,
}

impl TrafficEvent {
    pub fn new(kind: TrafficEventType, message: impl Into<String>, game_time: f64) -> Self {
        Self {
            kind,
            message: message.into(),
            game_time,
        }
    }
}
