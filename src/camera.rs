use glam::{Mat4, Vec3};

use crate::config::{CameraConfig, MovementMode};
use crate::core::controller::Button;

/// Held state of the four movement keys
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MovementState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl MovementState {
    const fn to_direction(positive: bool, negative: bool) -> f32 {
        match (positive, negative) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    /// (along front, along right)
    const fn velocity(&self) -> (f32, f32) {
        (
            Self::to_direction(self.forward, self.backward),
            Self::to_direction(self.right, self.left),
        )
    }

    /// Set the flag for a movement key. Returns false for keys that do not move the camera.
    pub fn set(&mut self, button: Button, held: bool) -> bool {
        match button {
            Button::KeyW => self.forward = held,
            Button::KeyS => self.backward = held,
            Button::KeyA => self.left = held,
            Button::KeyD => self.right = held,
            _ => return false,
        }
        true
    }
}

/// Baseline for turning absolute pointer positions into deltas
#[derive(Debug, Clone, Copy)]
pub struct PointerTracker {
    pub last_x: f32,
    pub last_y: f32,
    first_sample: bool,
}

impl PointerTracker {
    pub fn new(last_x: f32, last_y: f32) -> Self {
        Self {
            last_x,
            last_y,
            first_sample: true,
        }
    }

    /// Delta from the previous sample; `None` for the first sample after activation
    pub fn sample(&mut self, x: f32, y: f32) -> Option<(f32, f32)> {
        let delta = (!self.first_sample).then(|| (x - self.last_x, y - self.last_y));
        self.first_sample = false;
        self.last_x = x;
        self.last_y = y;
        delta
    }

    /// Treat the next sample as a fresh baseline
    pub fn reset(&mut self) {
        self.first_sample = true;
    }
}

/// What the host should do after a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResponse {
    Moved,
    Exit,
    Ignored,
}

/// Eye, target and up vector for a look-at view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl ViewTransform {
    pub fn matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// First-person camera driven by WASD and pointer motion.
///
/// Angles are kept in degrees. `front` is derived from yaw/pitch on every
/// pointer move and is always unit length.
#[derive(Debug, Clone)]
pub struct FpsCamera {
    pub position: Vec3,
    front: Vec3,
    yaw: f32,
    pitch: f32,
    movement: MovementState,
    pointer: PointerTracker,
    speed: f32,
    mode: MovementMode,
    sensitivity: f32,
    pitch_min: f32,
    pitch_max: f32,
}

impl FpsCamera {
    pub const UP: Vec3 = Vec3::Y;

    pub fn new(config: &CameraConfig) -> Self {
        let pitch = config.pitch.clamp(config.pitch_min, config.pitch_max);
        Self {
            position: Vec3::from_array(config.position),
            front: front_from_angles(config.yaw, pitch),
            yaw: config.yaw,
            pitch,
            movement: MovementState::default(),
            pointer: PointerTracker::new(config.initial_pointer[0], config.initial_pointer[1]),
            speed: config.movement_speed,
            mode: config.movement_mode,
            sensitivity: config.mouse_sensitivity,
            pitch_min: config.pitch_min,
            pitch_max: config.pitch_max,
        }
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.front.cross(Self::UP).normalize()
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    /// Called when the pointer (re)gains focus so the next sample is a baseline
    pub fn activate_pointer(&mut self) {
        self.pointer.reset();
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        let Some((dx, dy)) = self.pointer.sample(x, y) else {
            return;
        };

        // Screen Y grows downwards, pitch grows upwards
        self.yaw += dx * self.sensitivity;
        self.pitch = (self.pitch - dy * self.sensitivity).clamp(self.pitch_min, self.pitch_max);
        self.front = front_from_angles(self.yaw, self.pitch);
    }

    pub fn movement(&self) -> MovementState {
        self.movement
    }

    /// Drop every held movement key, e.g. when key releases can no longer arrive
    pub fn release_movement(&mut self) {
        self.movement = MovementState::default();
    }

    pub fn on_key_event(&mut self, button: Button, pressed: bool) -> KeyResponse {
        if button == Button::Escape {
            return if pressed { KeyResponse::Exit } else { KeyResponse::Ignored };
        }
        if self.movement.set(button, pressed) {
            KeyResponse::Moved
        } else {
            KeyResponse::Ignored
        }
    }

    /// Apply held keys once and return the new position
    pub fn tick(&mut self, delta_time: f32) -> Vec3 {
        let step = match self.mode {
            MovementMode::PerFrame => self.speed,
            MovementMode::PerSecond => self.speed * delta_time,
        };
        let (forward, strafe) = self.movement.velocity();

        if forward != 0.0 {
            self.position += self.front * forward * step;
        }
        if strafe != 0.0 {
            self.position += self.right() * strafe * step;
        }
        self.position
    }

    pub fn view(&self) -> ViewTransform {
        ViewTransform {
            eye: self.position,
            target: self.position + self.front,
            up: Self::UP,
        }
    }
}

fn front_from_angles(yaw_degrees: f32, pitch_degrees: f32) -> Vec3 {
    let (yaw, pitch) = (yaw_degrees.to_radians(), pitch_degrees.to_radians());
    Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> FpsCamera {
        FpsCamera::new(&CameraConfig::default())
    }

    #[test]
    fn default_camera_looks_down_negative_z() {
        let cam = camera();
        assert!((cam.front() - Vec3::NEG_Z).length() < 1e-5);
        assert_eq!(cam.position, Vec3::new(0.0, 2.0, 8.0));
    }

    #[test]
    fn first_sample_only_sets_baseline() {
        let mut tracker = PointerTracker::new(400.0, 300.0);
        assert_eq!(tracker.sample(900.0, 10.0), None);
        assert_eq!(tracker.sample(910.0, 5.0), Some((10.0, -5.0)));
        assert_eq!((tracker.last_x, tracker.last_y), (910.0, 5.0));
    }

    #[test]
    fn pointer_up_raises_pitch() {
        let mut cam = camera();
        cam.on_pointer_move(100.0, 100.0);
        cam.on_pointer_move(100.0, 50.0);
        assert!((cam.pitch() - 5.0).abs() < 1e-4);
        assert!(cam.front().y > 0.0);
    }

    #[test]
    fn escape_press_requests_exit() {
        let mut cam = camera();
        assert_eq!(cam.on_key_event(Button::Escape, true), KeyResponse::Exit);
        assert_eq!(cam.on_key_event(Button::Escape, false), KeyResponse::Ignored);
        assert_eq!(cam.movement(), MovementState::default());
    }

    #[test]
    fn released_movement_stops_walking() {
        let mut cam = camera();
        cam.on_key_event(Button::KeyW, true);
        cam.on_key_event(Button::KeyD, true);
        cam.release_movement();

        let start = cam.position;
        assert_eq!(cam.tick(0.016), start);
        assert_eq!(cam.movement(), MovementState::default());
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut cam = camera();
        cam.on_key_event(Button::KeyW, true);
        cam.on_key_event(Button::KeyS, true);
        let start = cam.position;
        assert_eq!(cam.tick(0.016), start);
    }

    #[test]
    fn per_second_mode_scales_by_delta() {
        let config = CameraConfig {
            movement_mode: MovementMode::PerSecond,
            movement_speed: 10.0,
            ..CameraConfig::default()
        };
        let mut cam = FpsCamera::new(&config);
        cam.on_key_event(Button::KeyW, true);
        let start = cam.position;
        let end = cam.tick(0.5);
        assert!(((end - start).length() - 5.0).abs() < 1e-4);
    }
}
