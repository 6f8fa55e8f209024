//! Vehicle state carried by each telemetry datagram.

/// Identity rotation in (w, x, y, z) order
pub const IDENTITY_ORIENTATION: [f32; 4] = [1.0, 0.0, 0.0, 0.0];

/// Snapshot of the simulated vehicle at one instant.
///
/// Fields are set independently and never validated: the quaternion need
/// not be unit length and the battery may go negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleState {
    /// Position [x, y, z]
    pub position: [f32; 3],
    /// Orientation quaternion [w, x, y, z]
    pub orientation: [f32; 4],
    /// Battery level
    pub battery: f32,
}

impl VehicleState {
    pub fn new(position: [f32; 3], orientation: [f32; 4], battery: f32) -> Self {
        Self {
            position,
            orientation,
            battery,
        }
    }

    pub fn with_position(mut self, position: [f32; 3]) -> Self {
        self.position = position;
        self
    }

    pub fn with_orientation(mut self, orientation: [f32; 4]) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_battery(mut self, battery: f32) -> Self {
        self.battery = battery;
        self
    }
}

impl Default for VehicleState {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            orientation: IDENTITY_ORIENTATION,
            battery: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity_at_origin() {
        let state = VehicleState::default();
        assert_eq!(state.position, [0.0, 0.0, 0.0]);
        assert_eq!(state.orientation, [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(state.battery, 0.0);
    }

    #[test]
    fn test_fields_set_independently() {
        let state = VehicleState::default()
            .with_battery(-5.0)
            .with_orientation([2.0, 0.0, 0.0, 0.0]);

        // No normalization, no clamping
        assert_eq!(state.battery, -5.0);
        assert_eq!(state.orientation, [2.0, 0.0, 0.0, 0.0]);
        assert_eq!(state.position, [0.0, 0.0, 0.0]);

        let moved = state.with_position([1.0, 2.0, 3.0]);
        assert_eq!(moved.position, [1.0, 2.0, 3.0]);
        assert_eq!(moved.battery, -5.0);
    }
}
