//! Damped orbit camera controls.
//!
//! The camera orbits `target` on a sphere. Pointer drags and wheel notches
//! accumulate a pending rotation/zoom; `update` applies it to the camera.
//! With damping enabled only `damping_factor` of the pending rotation is
//! applied per update and the remainder decays, which gives the camera its
//! glide after the pointer is released.

use crate::camera::Camera;
use crate::constants::{DAMPING_FACTOR, POLAR_EPSILON, ROTATE_SPEED, ZOOM_BASE, ZOOM_SPEED};
use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};

/// Spherical coordinates with `phi` measured from +Y and `theta` around Y
/// starting at +Z.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spherical {
    pub radius: f32,
    pub phi: f32,
    pub theta: f32,
}

impl Spherical {
    pub fn from_vec3(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self::default();
        }
        Self {
            radius,
            theta: v.x.atan2(v.z),
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    pub fn to_vec3(self) -> Vec3 {
        let sin_phi_r = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_r * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_r * self.theta.cos(),
        )
    }
}

#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,
    pending: Spherical,
    scale: f32,
    drag_from: Option<Vec2>,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            enable_damping: true,
            damping_factor: DAMPING_FACTOR,
            rotate_speed: ROTATE_SPEED,
            zoom_speed: ZOOM_SPEED,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            min_polar_angle: 0.0,
            max_polar_angle: PI,
            pending: Spherical::default(),
            scale: 1.0,
            drag_from: None,
        }
    }
}

impl OrbitControls {
    pub fn with_damping(damping_factor: f32) -> Self {
        Self {
            damping_factor,
            ..Self::default()
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_from.is_some()
    }

    pub fn begin_drag(&mut self, pointer: Vec2) {
        self.drag_from = Some(pointer);
    }

    /// Rotate by the pointer travel since the last call. `viewport_height`
    /// is in the same units as `pointer`.
    pub fn drag_to(&mut self, pointer: Vec2, viewport_height: f32) {
        let Some(from) = self.drag_from else {
            return;
        };
        if viewport_height > 0.0 {
            let delta = (pointer - from) * self.rotate_speed;
            self.rotate_left(TAU * delta.x / viewport_height);
            self.rotate_up(TAU * delta.y / viewport_height);
        }
        self.drag_from = Some(pointer);
    }

    pub fn end_drag(&mut self) {
        self.drag_from = None;
    }

    /// Wheel input: negative `delta_y` (scroll up) moves closer.
    pub fn zoom(&mut self, delta_y: f32) {
        let step = ZOOM_BASE.powf(self.zoom_speed);
        if delta_y < 0.0 {
            self.scale *= step;
        } else if delta_y > 0.0 {
            self.scale /= step;
        }
    }

    pub fn rotate_left(&mut self, angle: f32) {
        self.pending.theta -= angle;
    }

    pub fn rotate_up(&mut self, angle: f32) {
        self.pending.phi -= angle;
    }

    /// Apply pending motion to `camera`. Returns true if the eye moved.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        let offset = camera.eye - self.target;
        let mut s = Spherical::from_vec3(offset);

        if self.enable_damping {
            s.theta += self.pending.theta * self.damping_factor;
            s.phi += self.pending.phi * self.damping_factor;
        } else {
            s.theta += self.pending.theta;
            s.phi += self.pending.phi;
        }

        s.phi = s
            .phi
            .clamp(self.min_polar_angle, self.max_polar_angle)
            .clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
        s.radius = (s.radius * self.scale).clamp(self.min_distance, self.max_distance);

        let eye = self.target + s.to_vec3();

        if self.enable_damping {
            self.pending.theta *= 1.0 - self.damping_factor;
            self.pending.phi *= 1.0 - self.damping_factor;
        } else {
            self.pending = Spherical::default();
        }
        self.scale = 1.0;

        let moved = eye.distance_squared(camera.eye) > f32::EPSILON;
        camera.eye = eye;
        camera.target = self.target;
        moved
    }
}
