//! Free-flying camera built on an orthonormal basis.
//!
//! # Coordinate System
//!
//! World space is **right-handed** with +Z up. The camera does not store
//! angles; it stores its origin and three unit axes directly:
//! - `u`: forward, the direction the camera looks
//! - `v`: left
//! - `w`: up
//!
//! In camera space these axes become +X, +Y and +Z respectively, so depth is
//! measured along +X.
//!
//! # Orientation
//!
//! Rotations are applied around the camera's *own* axes with Rodrigues'
//! formula (see [`Mat4::rotation_axis`]), so there is no gimbal lock and no
//! pitch limit:
//! - **Roll**: around `u`
//! - **Pitch**: around `v`
//! - **Yaw**: around `w`
//!
//! Repeated rotations accumulate floating-point drift; the basis is not
//! re-orthonormalized.

use log::info;

use crate::input::InputState;
use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;

/// Origin plus forward/left/up unit vectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateSystem {
    /// Origin (camera position in world space).
    pub o: Vec3,
    /// Forward.
    pub u: Vec3,
    /// Left.
    pub v: Vec3,
    /// Up.
    pub w: Vec3,
}

impl Default for CoordinateSystem {
    /// The world basis: at the origin, looking along +X with +Z up.
    fn default() -> Self {
        Self {
            o: Vec3::ZERO,
            u: Vec3::X,
            v: Vec3::Y,
            w: Vec3::Z,
        }
    }
}

impl CoordinateSystem {
    /// Builds a basis at `position` looking toward `target`.
    ///
    /// `up` only needs to be roughly up: the resulting `w` is re-derived so
    /// that all three axes are mutually orthogonal. `up` must not be parallel
    /// to the view direction (the basis degenerates to NaN).
    pub fn look_at(position: Vec3, target: Vec3, up: Vec3) -> Self {
        let u = (target - position).normalize();
        let v = up.cross(u).normalize();
        let w = u.cross(v).normalize();
        Self { o: position, u, v, w }
    }

    // =========================================================================
    // Movement
    // =========================================================================

    /// Moves the origin along the current axes: `du` forward, `dv` left and
    /// `dw` up.
    pub fn translate(&mut self, du: f32, dv: f32, dw: f32) {
        self.o = self.o + self.u * du + self.v * dv + self.w * dw;
    }

    // =========================================================================
    // Orientation
    // =========================================================================

    /// Rolls around the forward axis. `u` is unchanged.
    pub fn rotate_u(&mut self, angle: f32) {
        let rotation = Mat4::rotation_axis(angle, self.u);
        self.v = rotation.transform(self.v);
        self.w = rotation.transform(self.w);
    }

    /// Pitches around the left axis. Positive angles tip the view down.
    /// `v` is unchanged.
    pub fn rotate_v(&mut self, angle: f32) {
        let rotation = Mat4::rotation_axis(angle, self.v);
        self.u = rotation.transform(self.u);
        self.w = rotation.transform(self.w);
    }

    /// Yaws around the up axis. Positive angles turn the view left.
    /// `w` is unchanged.
    pub fn rotate_w(&mut self, angle: f32) {
        let rotation = Mat4::rotation_axis(angle, self.w);
        self.u = rotation.transform(self.u);
        self.v = rotation.transform(self.v);
    }

    // =========================================================================
    // Matrix Generation
    // =========================================================================

    /// Change-of-basis matrix from world space into this coordinate system.
    ///
    /// The basis is orthonormal, so the inverse rotation is its transpose and
    /// no general inverse is needed:
    ///
    /// ```text
    /// | u.x  u.y  u.z  -u·o |
    /// | v.x  v.y  v.z  -v·o |
    /// | w.x  w.y  w.z  -w·o |
    /// |  0    0    0     1  |
    /// ```
    pub fn world_to_camera(&self) -> Mat4 {
        let Self { o, u, v, w } = *self;
        Mat4::new([
            [u.x, u.y, u.z, -u.dot(o)],
            [v.x, v.y, v.z, -v.dot(o)],
            [w.x, w.y, w.z, -w.dot(o)],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }
}

// =============================================================================
// Camera Controller
// =============================================================================

/// Maps held controls to camera motion.
#[derive(Debug, Clone)]
pub struct CameraController {
    /// Movement speed in units per second.
    pub move_speed: f32,
    /// Rotation speed in radians per second.
    pub turn_speed: f32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self {
            move_speed: 8.0,
            turn_speed: 1.0,
        }
    }
}

impl CameraController {
    pub fn new(move_speed: f32, turn_speed: f32) -> Self {
        Self {
            move_speed,
            turn_speed,
        }
    }

    /// Applies one frame of input to `camera`.
    ///
    /// # Input Mapping
    /// - W/S: Move forward/backward
    /// - Q/E: Move left/right
    /// - Space/Shift: Move up/down
    /// - Right/Left arrows: Roll right/left
    /// - Up/Down arrows: Pitch down/up
    /// - A/D: Yaw left/right
    /// - P: Log the camera basis
    pub fn update(&self, camera: &mut CoordinateSystem, input: &InputState, delta_time: f32) {
        let step = self.move_speed * delta_time;
        let turn = self.turn_speed * delta_time;

        let du = axis(input.forward, input.back) * step;
        let dv = axis(input.left, input.right) * step;
        let dw = axis(input.up, input.down) * step;
        if du != 0.0 || dv != 0.0 || dw != 0.0 {
            camera.translate(du, dv, dw);
        }

        let roll = axis(input.roll_right, input.roll_left);
        if roll != 0.0 {
            camera.rotate_u(roll * turn);
        }
        let pitch = axis(input.pitch_down, input.pitch_up);
        if pitch != 0.0 {
            camera.rotate_v(pitch * turn);
        }
        let yaw = axis(input.yaw_left, input.yaw_right);
        if yaw != 0.0 {
            camera.rotate_w(yaw * turn);
        }

        if input.print_camera {
            let CoordinateSystem { o, u, w, .. } = *camera;
            info!(
                "camera at ({:.3}, {:.3}, {:.3}) facing ({:.3}, {:.3}, {:.3}) up ({:.3}, {:.3}, {:.3})",
                o.x, o.y, o.z, u.x, u.y, u.z, w.x, w.y, w.z
            );
        }
    }
}

/// `+1` when only `positive` is held, `-1` when only `negative` is, else 0.
fn axis(positive: bool, negative: bool) -> f32 {
    positive as i8 as f32 - negative as i8 as f32
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    fn assert_vec_eq(a: Vec3, b: Vec3) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-5);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-5);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-5);
    }

    fn assert_orthonormal(cs: &CoordinateSystem) {
        for axis in [cs.u, cs.v, cs.w] {
            assert_relative_eq!(axis.magnitude(), 1.0, epsilon = 1e-5);
        }
        assert_relative_eq!(cs.u.dot(cs.v), 0.0, epsilon = 1e-5);
        assert_relative_eq!(cs.u.dot(cs.w), 0.0, epsilon = 1e-5);
        assert_relative_eq!(cs.v.dot(cs.w), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn look_at_builds_forward_left_up() {
        let cs = CoordinateSystem::look_at(Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0), Vec3::Z);
        assert_vec_eq(cs.u, Vec3::X);
        assert_vec_eq(cs.v, Vec3::Y);
        assert_vec_eq(cs.w, Vec3::Z);
    }

    #[test]
    fn look_at_is_orthonormal_for_skewed_up() {
        let cs = CoordinateSystem::look_at(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-4.0, 0.5, 1.0),
            Vec3::new(0.3, 0.2, 1.0),
        );
        assert_orthonormal(&cs);
        // Up stays on the same side as the hint.
        assert!(cs.w.dot(Vec3::new(0.3, 0.2, 1.0)) > 0.0);
    }

    #[test]
    fn translate_moves_along_own_axes() {
        let mut cs = CoordinateSystem::look_at(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0), Vec3::Z);
        // Forward is +Y, left is -X, up is +Z.
        cs.translate(2.0, 1.0, 3.0);
        assert_vec_eq(cs.o, Vec3::new(-1.0, 2.0, 3.0));
    }

    #[test]
    fn rotate_u_keeps_forward_axis() {
        let mut cs = CoordinateSystem::look_at(
            Vec3::ZERO,
            Vec3::new(1.0, 1.0, 0.5),
            Vec3::Z,
        );
        let forward = cs.u;
        cs.rotate_u(0.8);
        assert_eq!(cs.u, forward);
        assert_orthonormal(&cs);
    }

    #[test]
    fn rotate_v_keeps_left_axis() {
        let mut cs = CoordinateSystem::default();
        cs.rotate_v(FRAC_PI_2);
        assert_eq!(cs.v, Vec3::Y);
        // Pitching down by a quarter turn points forward at the floor.
        assert_vec_eq(cs.u, Vec3::new(0.0, 0.0, -1.0));
        assert_vec_eq(cs.w, Vec3::X);
    }

    #[test]
    fn rotate_w_turns_left() {
        let mut cs = CoordinateSystem::default();
        cs.rotate_w(FRAC_PI_2);
        assert_eq!(cs.w, Vec3::Z);
        assert_vec_eq(cs.u, Vec3::Y);
        assert_vec_eq(cs.v, Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn world_to_camera_maps_origin_and_axes() {
        let cs = CoordinateSystem::look_at(
            Vec3::new(0.0, -17.5, -15.0),
            Vec3::new(1.0, -17.5, -15.0),
            Vec3::Z,
        );
        let view = cs.world_to_camera();

        assert_vec_eq(view * cs.o, Vec3::ZERO);
        // Three units ahead, one to the left, two up.
        let p = cs.o + cs.u * 3.0 + cs.v * 1.0 + cs.w * 2.0;
        assert_vec_eq(view * p, Vec3::new(3.0, 1.0, 2.0));
        assert_relative_eq!((view * p).w, 1.0);
    }

    #[test]
    fn controller_scales_by_delta_time() {
        let controller = CameraController::new(8.0, 1.0);
        let mut cs = CoordinateSystem::default();
        let input = InputState {
            forward: true,
            up: true,
            ..Default::default()
        };
        controller.update(&mut cs, &input, 0.5);
        assert_vec_eq(cs.o, Vec3::new(4.0, 0.0, 4.0));
    }

    #[test]
    fn controller_opposing_keys_cancel() {
        let controller = CameraController::default();
        let mut cs = CoordinateSystem::default();
        let input = InputState {
            left: true,
            right: true,
            yaw_left: true,
            yaw_right: true,
            ..Default::default()
        };
        controller.update(&mut cs, &input, 1.0);
        assert_eq!(cs, CoordinateSystem::default());
    }

    #[test]
    fn controller_yaw_left_uses_turn_speed() {
        let controller = CameraController::new(8.0, 2.0);
        let mut cs = CoordinateSystem::default();
        let input = InputState {
            yaw_left: true,
            ..Default::default()
        };
        controller.update(&mut cs, &input, FRAC_PI_2 / 2.0);
        assert_vec_eq(cs.u, Vec3::Y);
    }

    #[test]
    fn controller_roll_right_tips_left_axis_up() {
        let controller = CameraController::default();
        let mut cs = CoordinateSystem::default();
        let input = InputState {
            roll_right: true,
            ..Default::default()
        };
        let t = 0.3;
        controller.update(&mut cs, &input, t);
        assert_vec_eq(cs.u, Vec3::X);
        assert_vec_eq(cs.v, Vec3::new(0.0, t.cos(), t.sin()));
        assert_vec_eq(cs.w, Vec3::new(0.0, -t.sin(), t.cos()));
    }

    #[test]
    fn controller_roll_left_tips_left_axis_down() {
        let controller = CameraController::default();
        let mut cs = CoordinateSystem::default();
        let input = InputState {
            roll_left: true,
            ..Default::default()
        };
        let t = 0.3;
        controller.update(&mut cs, &input, t);
        assert_vec_eq(cs.v, Vec3::new(0.0, t.cos(), -t.sin()));
    }

    #[test]
    fn controller_pitch_down_points_forward_below_horizon() {
        let controller = CameraController::default();
        let mut cs = CoordinateSystem::default();
        let input = InputState {
            pitch_down: true,
            ..Default::default()
        };
        let t = 0.25;
        controller.update(&mut cs, &input, t);
        assert!(cs.u.z < 0.0);
        assert_vec_eq(cs.u, Vec3::new(t.cos(), 0.0, -t.sin()));
        assert_eq!(cs.v, Vec3::Y);
    }

    #[test]
    fn controller_pitch_up_points_forward_above_horizon() {
        let controller = CameraController::default();
        let mut cs = CoordinateSystem::default();
        let input = InputState {
            pitch_up: true,
            ..Default::default()
        };
        controller.update(&mut cs, &input, 0.25);
        assert!(cs.u.z > 0.0);
    }
}
