use std::fmt;

use drivesim_bt::{Criterion, Node, ParallelPolicy, Status, TimeoutGuard};
use drivesim_core::TickContext;

use crate::error::ScenarioError;

pub const DEFAULT_TIMEOUT_SECONDS: f64 = 60.0;

const CRITERIA_TREE_NAME: &str = "Test Criteria";
const TIMEOUT_NODE_NAME: &str = "TimeOut";

#[derive(Debug, Clone, Copy)]
pub struct ScenarioConfig {
    pub timeout_seconds: f64,
    /// When set, criteria report failure on their first violation, ending
    /// the scenario instead of merely recording the event.
    pub terminate_on_failure: bool,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            terminate_on_failure: false,
        }
    }
}

/// Evaluation criteria handed to a scenario: either a pre-built parallel
/// composite or a flat ordered list of criterion leaves.
pub enum CriteriaInput {
    Tree(Node),
    List(Vec<Box<dyn Criterion>>),
}

/// One test run's behavior tree: scripted behavior (optional), timeout guard
/// (always present) and criteria evaluator (optional), composed under a
/// "succeed as soon as one child succeeds" root.
pub struct Scenario {
    name: String,
    timeout: f64,
    tree: Node,
    criteria_index: Option<usize>,
}

impl fmt::Debug for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scenario")
            .field("name", &self.name)
            .field("timeout", &self.timeout)
            .field("status", &self.tree.status())
            .finish_non_exhaustive()
    }
}

impl Scenario {
    pub fn new(
        behavior: Option<Node>,
        criteria: Option<CriteriaInput>,
        name: impl Into<String>,
        config: ScenarioConfig,
    ) -> Result<Self, ScenarioError> {
        let name = name.into();
        if !(config.timeout_seconds > 0.0) {
            return Err(ScenarioError::InvalidTimeout(config.timeout_seconds));
        }

        let criteria_tree = match criteria {
            None => None,
            Some(CriteriaInput::Tree(tree)) => {
                if !tree.is_composite() {
                    return Err(ScenarioError::CriteriaNotComposite {
                        name: tree.name().to_string(),
                    });
                }
                Some(tree)
            }
            Some(CriteriaInput::List(list)) => {
                let children = list
                    .into_iter()
                    .map(|mut criterion| {
                        criterion.set_terminate_on_failure(config.terminate_on_failure);
                        Node::criterion(criterion)
                    })
                    .collect();
                Some(Node::parallel(
                    CRITERIA_TREE_NAME,
                    ParallelPolicy::SuccessOnAll,
                    children,
                ))
            }
        };

        // Fixed child order: behavior, timeout, criteria.
        let mut children = Vec::new();
        if let Some(behavior) = behavior {
            children.push(behavior);
        }
        children.push(Node::behavior(
            TIMEOUT_NODE_NAME,
            TimeoutGuard::new(config.timeout_seconds),
        ));
        let criteria_index = criteria_tree.as_ref().map(|_| children.len());
        if let Some(tree) = criteria_tree {
            children.push(tree);
        }

        Ok(Self {
            name: name.clone(),
            timeout: config.timeout_seconds,
            tree: Node::parallel(name, ParallelPolicy::SuccessOnOne, children),
            criteria_index,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn timeout_seconds(&self) -> f64 {
        self.timeout
    }

    pub fn status(&self) -> Status {
        self.tree.status()
    }

    pub fn tree(&self) -> &Node {
        &self.tree
    }

    /// Advance the whole scenario tree by exactly one step.
    pub fn tick_once(&mut self, ctx: &TickContext) -> Status {
        self.tree.tick_once(ctx)
    }

    /// Every criterion leaf of the criteria subtree. A degenerate criteria
    /// composite (no children) yields an empty list, never the composite.
    pub fn get_criteria(&self) -> Vec<&dyn Criterion> {
        let Some(index) = self.criteria_index else {
            return Vec::new();
        };
        self.tree.children()[index]
            .leaves()
            .into_iter()
            .filter_map(|node| node.as_criterion())
            .collect()
    }

    /// Set every leaf of the scenario tree to INVALID. Idempotent; the tree
    /// is never reused afterwards.
    pub fn terminate(&mut self) {
        for leaf in self.tree.leaves_mut() {
            leaf.terminate(Status::Invalid);
        }
    }
}
