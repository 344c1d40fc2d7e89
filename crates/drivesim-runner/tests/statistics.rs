use drivesim_bt::{Criterion, Status};
use drivesim_core::{TickContext, TrafficEvent, TrafficEventType};
use drivesim_runner::{
    CriteriaInput, RecordStatus, Scenario, ScenarioConfig, ScenarioError, StatisticsManager,
};

struct StubCriterion {
    name: &'static str,
    events: Vec<TrafficEvent>,
}

impl StubCriterion {
    fn boxed(name: &'static str, kinds: Vec<TrafficEventType>) -> Box<dyn Criterion> {
        let events = kinds
            .into_iter()
            .map(|kind| TrafficEvent::new(kind, format!("{name} event"), 1.0))
            .collect();
        Box::new(Self { name, events })
    }
}

impl Criterion for StubCriterion {
    fn name(&self) -> &str {
        self.name
    }

    fn tick(&mut self, _ctx: &TickContext) -> Status {
        Status::Running
    }

    fn events(&self) -> &[TrafficEvent] {
        &self.events
    }
}

fn scenario_with_events(kinds: Vec<TrafficEventType>) -> Scenario {
    let criteria = CriteriaInput::List(vec![StubCriterion::boxed("stub", kinds)]);
    Scenario::new(None, Some(criteria), "stats", ScenarioConfig::default()).unwrap()
}

#[test]
fn route_statistics_without_a_registered_route_fail() {
    let mut stats = StatisticsManager::new();
    let scenario = scenario_with_events(Vec::new());
    let err = stats.compute_route_statistics(&scenario).unwrap_err();
    assert!(matches!(err, ScenarioError::EmptyRegistry));
}

#[test]
fn completed_route_is_marked_completed() {
    let mut stats = StatisticsManager::new();
    stats.set_route("RouteScenario_0", 0);
    let scenario = scenario_with_events(vec![TrafficEventType::RouteCompleted]);

    let record = stats.compute_route_statistics(&scenario).unwrap();
    assert_eq!(record.status, RecordStatus::Completed);
    assert_eq!(record.scores.score_route, 100.0);
}

#[test]
fn unfinished_route_is_marked_failed() {
    let mut stats = StatisticsManager::new();
    stats.set_route("RouteScenario_1", 1);
    let scenario = scenario_with_events(vec![
        TrafficEventType::RouteCompletion {
            completed: Some(40.0),
        },
        TrafficEventType::CollisionVehicle,
    ]);

    let record = stats.compute_route_statistics(&scenario).unwrap();
    assert_eq!(record.status, RecordStatus::Failed);
    assert_eq!(record.scores.score_route, 40.0);
    assert_eq!(record.infractions.collisions_vehicle.len(), 1);
}

#[test]
fn global_statistics_average_over_the_planned_route_count() {
    let mut stats = StatisticsManager::new();

    stats.set_route("RouteScenario_0", 0);
    let completed = scenario_with_events(vec![TrafficEventType::RouteCompleted]);
    stats.compute_route_statistics(&completed).unwrap();

    stats.set_route("RouteScenario_1", 1);
    let failed = scenario_with_events(vec![
        TrafficEventType::RouteCompletion {
            completed: Some(50.0),
        },
        TrafficEventType::StopInfraction,
    ]);
    stats.compute_route_statistics(&failed).unwrap();

    // Three routes were planned but the evaluation stopped after two.
    let global = stats.compute_global_statistics(3);

    assert!((global.scores.score_route - 150.0 / 3.0).abs() < 1e-9);
    assert_eq!(global.infraction_counts["stop_infraction"], 1);
    assert_eq!(global.infraction_counts["collisions_vehicle"], 0);
    assert_eq!(global.exceptions.len(), 1);
    assert_eq!(
        global.exceptions[0].route_id.as_deref(),
        Some("RouteScenario_1")
    );
    assert_eq!(global.exceptions[0].status, RecordStatus::Failed);
}

#[test]
fn global_statistics_on_an_empty_registry_are_zero() {
    let stats = StatisticsManager::new();
    let global = stats.compute_global_statistics(0);
    assert_eq!(global.scores.score_composed, 0.0);
    assert!(global.exceptions.is_empty());
}
