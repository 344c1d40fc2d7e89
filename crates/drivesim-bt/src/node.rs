use std::collections::VecDeque;

use drivesim_core::TickContext;

use crate::criterion::Criterion;
use crate::status::Status;

/// Policy a parallel composite applies over its child statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParallelPolicy {
    /// Succeed as soon as one child succeeds.
    SuccessOnOne,
    /// Keep running until every child has succeeded; any failure propagates.
    SuccessOnAll,
}

/// Externally-supplied scripted behavior, advanced one step per tick.
pub trait Behavior: Send {
    fn tick(&mut self, ctx: &TickContext) -> Status;

    /// Transition imposed from outside (`Invalid` on scenario teardown).
    fn terminate(&mut self, _status: Status) {}
}

/// One node of a scenario tree: a leaf behavior, a criterion leaf, or a
/// parallel composite over children.
pub struct Node {
    name: String,
    status: Status,
    kind: NodeKind,
}

enum NodeKind {
    Behavior(Box<dyn Behavior>),
    Criterion(Box<dyn Criterion>),
    Parallel {
        policy: ParallelPolicy,
        children: Vec<Node>,
    },
}

impl Node {
    pub fn behavior(name: impl Into<String>, behavior: impl Behavior + 'static) -> Self {
        Self {
            name: name.into(),
            status: Status::Invalid,
            kind: NodeKind::Behavior(Box::new(behavior)),
        }
    }

    pub fn criterion(criterion: Box<dyn Criterion>) -> Self {
        Self {
            name: criterion.name().to_string(),
            status: Status::Invalid,
            kind: NodeKind::Criterion(criterion),
        }
    }

    pub fn parallel(
        name: impl Into<String>,
        policy: ParallelPolicy,
        children: Vec<Node>,
    ) -> Self {
        Self {
            name: name.into(),
            status: Status::Invalid,
            kind: NodeKind::Parallel { policy, children },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_composite(&self) -> bool {
        matches!(self.kind, NodeKind::Parallel { .. })
    }

    pub fn policy(&self) -> Option<ParallelPolicy> {
        match &self.kind {
            NodeKind::Parallel { policy, .. } => Some(*policy),
            _ => None,
        }
    }

    /// Children of a composite; empty slice for leaves.
    pub fn children(&self) -> &[Node] {
        match &self.kind {
            NodeKind::Parallel { children, .. } => children,
            _ => &[],
        }
    }

    pub fn children_mut(&mut self) -> &mut [Node] {
        match &mut self.kind {
            NodeKind::Parallel { children, .. } => children,
            _ => &mut [],
        }
    }

    pub fn as_criterion(&self) -> Option<&dyn Criterion> {
        match &self.kind {
            NodeKind::Criterion(criterion) => Some(criterion.as_ref()),
            _ => None,
        }
    }

    /// Advance the subtree by exactly one step.
    ///
    /// Composites tick every non-terminal child, then resolve their own
    /// status from the policy. Terminal child statuses latch: a concluded
    /// criterion is not re-ticked.
    pub fn tick_once(&mut self, ctx: &TickContext) -> Status {
        let status = match &mut self.kind {
            NodeKind::Behavior(behavior) => behavior.tick(ctx),
            NodeKind::Criterion(criterion) => criterion.tick(ctx),
            NodeKind::Parallel { policy, children } => {
                tick_parallel(*policy, children, ctx)
            }
        };
        self.status = status;
        status
    }

    /// Impose a status on this node, invoking the leaf's terminate hook.
    pub fn terminate(&mut self, status: Status) {
        match &mut self.kind {
            NodeKind::Behavior(behavior) => behavior.terminate(status),
            NodeKind::Criterion(criterion) => criterion.terminate(status),
            NodeKind::Parallel { .. } => {}
        }
        self.status = status;
    }

    /// Every leaf reachable from this node, in document order.
    ///
    /// Explicit worklist traversal: composites are expanded, never collected,
    /// so a childless composite yields an empty set.
    pub fn leaves(&self) -> Vec<&Node> {
        let mut queue = VecDeque::from([self]);
        let mut leaves = Vec::new();
        while let Some(node) = queue.pop_front() {
            if let NodeKind::Parallel { children, .. } = &node.kind {
                queue.extend(children.iter());
                continue;
            }
            leaves.push(node);
        }
        leaves
    }

    pub fn leaves_mut(&mut self) -> Vec<&mut Node> {
        let mut queue: VecDeque<&mut Node> = VecDeque::new();
        queue.push_back(self);
        let mut leaves = Vec::new();
        while let Some(node) = queue.pop_front() {
            if node.is_composite() {
                queue.extend(node.children_mut().iter_mut());
                continue;
            }
            leaves.push(node);
        }
        leaves
    }
}

fn tick_parallel(policy: ParallelPolicy, children: &mut [Node], ctx: &TickContext) -> Status {
    // An empty composite never concludes on its own; a sibling timeout guard
    // still bounds the run.
    if children.is_empty() {
        return Status::Running;
    }

    for child in children.iter_mut() {
        if !child.status.is_terminal() {
            child.tick_once(ctx);
        }
    }

    if children.iter().any(|c| c.status == Status::Failure) {
        return Status::Failure;
    }

    match policy {
        ParallelPolicy::SuccessOnOne => {
            if children.iter().any(|c| c.status == Status::Success) {
                Status::Success
            } else {
                Status::Running
            }
        }
        ParallelPolicy::SuccessOnAll => {
            if children.iter().all(|c| c.status == Status::Success) {
                Status::Success
            } else {
                Status::Running
            }
        }
    }
}
