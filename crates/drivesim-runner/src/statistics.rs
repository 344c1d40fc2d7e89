use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ScenarioError;
use crate::record::{RecordStatus, RouteRecord, Scores};
use crate::scenario::Scenario;
use crate::score::{route_completed, update_record};

/// A route that did not complete, surfaced in the global summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteException {
    pub route_id: Option<String>,
    pub index: Option<usize>,
    pub status: RecordStatus,
}

/// Aggregate over every registered route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalRecord {
    /// Mean scores over the planned number of routes, so unfinished routes
    /// drag the average down instead of being skipped.
    pub scores: Scores,
    pub infraction_counts: BTreeMap<String, usize>,
    pub exceptions: Vec<RouteException>,
}

/// In-memory registry of per-route records for a multi-route evaluation.
#[derive(Debug, Default)]
pub struct StatisticsManager {
    records: Vec<RouteRecord>,
}

impl StatisticsManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a fresh record for the route about to run.
    pub fn set_route(&mut self, route_id: impl Into<String>, index: usize) {
        self.records.push(RouteRecord {
            route_id: Some(route_id.into()),
            index: Some(index),
            ..RouteRecord::default()
        });
    }

    pub fn records(&self) -> &[RouteRecord] {
        &self.records
    }

    /// Fold the finished scenario's criteria into the current route's record
    /// and settle its status.
    pub fn compute_route_statistics(
        &mut self,
        scenario: &Scenario,
    ) -> Result<&RouteRecord, ScenarioError> {
        let record = self.records.last_mut().ok_or(ScenarioError::EmptyRegistry)?;
        let criteria = scenario.get_criteria();
        update_record(&criteria, record);
        record.status = if route_completed(&criteria) {
            RecordStatus::Completed
        } else {
            RecordStatus::Failed
        };
        Ok(record)
    }

    /// Summarize all records. `total_routes` is the planned route count and
    /// may exceed the number of records when the evaluation was cut short.
    pub fn compute_global_statistics(&self, total_routes: usize) -> GlobalRecord {
        let divisor = total_routes.max(1) as f64;
        let mut scores = Scores::default();
        let mut infraction_counts: BTreeMap<String, usize> = BTreeMap::new();
        let mut exceptions = Vec::new();

        for record in &self.records {
            scores.score_route += record.scores.score_route;
            scores.score_penalty += record.scores.score_penalty;
            scores.score_composed += record.scores.score_composed;

            for (category, count) in record.infractions.counts() {
                *infraction_counts.entry(category.to_string()).or_insert(0) += count;
            }

            if record.status != RecordStatus::Completed {
                exceptions.push(RouteException {
                    route_id: record.route_id.clone(),
                    index: record.index,
                    status: record.status,
                });
            }
        }

        scores.score_route /= divisor;
        scores.score_penalty /= divisor;
        scores.score_composed /= divisor;

        GlobalRecord {
            scores,
            infraction_counts,
            exceptions,
        }
    }
}
