use serde::{Deserialize, Serialize};

/// Stable identifier for a simulated actor.
///
/// Deterministic runs require stable ordering, so the handle is a plain
/// numeric ID rather than an opaque engine pointer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ActorId(pub u64);

impl ActorId {
    pub fn stable_id(self) -> u64 {
        self.0
    }
}

impl From<u64> for ActorId {
    fn from(id: u64) -> Self {
        ActorId(id)
    }
}
