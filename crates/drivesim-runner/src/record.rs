use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Outcome classification of one route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordStatus {
    Started,
    Completed,
    Failed,
}

/// Ordered infraction messages, one list per category.
///
/// Field names double as the category keys of the serialized record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Infractions {
    pub collisions_layout: Vec<String>,
    pub collisions_vehicle: Vec<String>,
    pub collisions_pedestrian: Vec<String>,
    pub red_light: Vec<String>,
    pub wrong_way: Vec<String>,
    pub route_dev: Vec<String>,
    pub sidewalk_invasion: Vec<String>,
    pub outside_driving_lanes: Vec<String>,
    pub stop_infraction: Vec<String>,
}

impl Infractions {
    /// Per-category message counts, keyed by category name.
    pub fn counts(&self) -> BTreeMap<&'static str, usize> {
        BTreeMap::from([
            ("collisions_layout", self.collisions_layout.len()),
            ("collisions_vehicle", self.collisions_vehicle.len()),
            ("collisions_pedestrian", self.collisions_pedestrian.len()),
            ("red_light", self.red_light.len()),
            ("wrong_way", self.wrong_way.len()),
            ("route_dev", self.route_dev.len()),
            ("sidewalk_invasion", self.sidewalk_invasion.len()),
            ("outside_driving_lanes", self.outside_driving_lanes.len()),
            ("stop_infraction", self.stop_infraction.len()),
        ])
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    pub score_route: f64,
    pub score_penalty: f64,
    pub score_composed: f64,
}

/// Per-run aggregation target: infraction messages plus computed scores.
/// Reset at the start of every scenario load; owned by the manager for the
/// duration of one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRecord {
    pub route_id: Option<String>,
    pub index: Option<usize>,
    pub status: RecordStatus,
    pub infractions: Infractions,
    pub scores: Scores,
}

impl Default for RouteRecord {
    fn default() -> Self {
        Self {
            route_id: None,
            index: None,
            status: RecordStatus::Started,
            infractions: Infractions::default(),
            scores: Scores::default(),
        }
    }
}
