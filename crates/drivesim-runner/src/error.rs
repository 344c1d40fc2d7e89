use thiserror::Error;

/// Configuration errors, fatal at construction/load time. No recovery is
/// attempted; runtime evaluation errors propagate as `anyhow` instead.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("scenario timeout must be positive, got {0}")]
    InvalidTimeout(f64),

    #[error("criteria tree root {name:?} is not a composite")]
    CriteriaNotComposite { name: String },

    #[error("an agent is attached but the scenario has no ego actor")]
    NoEgoActor,

    #[error("no scenario loaded")]
    NotLoaded,

    #[error("route registry is empty")]
    EmptyRegistry,
}
