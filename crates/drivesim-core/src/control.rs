use serde::{Deserialize, Serialize};

/// One control command applied to the controlled vehicle for one step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleControl {
    pub throttle: f64,
    pub steer: f64,
    pub brake: f64,
    pub hand_brake: bool,
    pub reverse: bool,
}

impl Default for VehicleControl {
    fn default() -> Self {
        Self {
            throttle: 0.0,
            steer: 0.0,
            brake: 0.0,
            hand_brake: false,
            reverse: false,
        }
    }
}

impl VehicleControl {
    /// Full-brake command, used when a run is torn down mid-drive.
    pub fn full_stop() -> Self {
        Self {
            brake: 1.0,
            ..Self::default()
        }
    }
}
