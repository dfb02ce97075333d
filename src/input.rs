//! Held-key state for one frame.

/// Which controls are held this frame.
///
/// Filled in by the window layer and consumed by
/// [`CameraController`](crate::camera::CameraController). Opposing controls
/// held together cancel out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    // Translation
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,

    // Rotation
    pub roll_left: bool,
    pub roll_right: bool,
    pub pitch_up: bool,
    pub pitch_down: bool,
    pub yaw_left: bool,
    pub yaw_right: bool,

    /// Set for the single frame in which the print-camera key went down.
    pub print_camera: bool,
}

impl InputState {
    /// Whether any movement or rotation control is held.
    pub fn is_moving(&self) -> bool {
        self.forward
            || self.back
            || self.left
            || self.right
            || self.up
            || self.down
            || self.roll_left
            || self.roll_right
            || self.pitch_up
            || self.pitch_down
            || self.yaw_left
            || self.yaw_right
    }
}
