/// Status of a behavior-tree node.
///
/// Fresh nodes start `Invalid`; scenario teardown imposes `Invalid` again on
/// every leaf, after which a tree is never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Invalid,
    Running,
    Success,
    Failure,
}

impl Status {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Success | Status::Failure)
    }

    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }
}
