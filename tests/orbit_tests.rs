// Host-side tests for the damped orbit controls.

use glam::{Vec2, Vec3};
use globe_core::orbit::{OrbitControls, Spherical};
use globe_core::Camera;

fn camera() -> Camera {
    Camera::new(Vec3::new(0.0, 0.0, 15.0), 75.0, 1.0, 0.1, 1000.0)
}

#[test]
fn spherical_round_trip_keeps_the_point() {
    let v = Vec3::new(3.0, -4.0, 12.0);
    let back = Spherical::from_vec3(v).to_vec3();
    assert!((back - v).length() < 1e-4);
}

#[test]
fn idle_controls_leave_the_camera_alone() {
    let mut cam = camera();
    let mut controls = OrbitControls::default();
    assert!(!controls.update(&mut cam));
    assert!((cam.eye - Vec3::new(0.0, 0.0, 15.0)).length() < 1e-4);
}

#[test]
fn damping_applies_a_fraction_and_converges() {
    let mut cam = camera();
    let mut controls = OrbitControls::with_damping(0.05);
    controls.rotate_left(1.0);

    assert!(controls.update(&mut cam));
    let first = Spherical::from_vec3(cam.eye).theta;
    assert!((first + 0.05).abs() < 1e-4, "first step {first}");

    for _ in 0..600 {
        controls.update(&mut cam);
    }
    let settled = Spherical::from_vec3(cam.eye);
    assert!((settled.theta + 1.0).abs() < 1e-3, "settled at {}", settled.theta);
    assert!((settled.radius - 15.0).abs() < 1e-3);
    // motion has died out
    assert!(!controls.update(&mut cam));
}

#[test]
fn without_damping_rotation_is_applied_at_once() {
    let mut cam = camera();
    let mut controls = OrbitControls::default();
    controls.enable_damping = false;
    controls.rotate_left(0.5);
    controls.update(&mut cam);
    assert!((Spherical::from_vec3(cam.eye).theta + 0.5).abs() < 1e-4);
    assert!(!controls.update(&mut cam));
}

#[test]
fn wheel_up_zooms_in_and_wheel_down_zooms_out() {
    let mut cam = camera();
    let mut controls = OrbitControls::default();
    controls.zoom(-120.0);
    controls.update(&mut cam);
    assert!((cam.eye.length() - 15.0 * 0.95).abs() < 1e-3);

    let mut cam = camera();
    controls.zoom(120.0);
    controls.update(&mut cam);
    assert!((cam.eye.length() - 15.0 / 0.95).abs() < 1e-3);
}

#[test]
fn zoom_respects_distance_limits() {
    let mut cam = camera();
    let mut controls = OrbitControls::default();
    controls.min_distance = 14.5;
    controls.zoom(-1.0);
    controls.zoom(-1.0);
    controls.update(&mut cam);
    assert!((cam.eye.length() - 14.5).abs() < 1e-3);
}

#[test]
fn polar_angle_is_clamped_short_of_the_poles() {
    let mut cam = camera();
    let mut controls = OrbitControls::default();
    controls.enable_damping = false;
    controls.rotate_up(-10.0);
    controls.update(&mut cam);
    assert!(cam.eye.is_finite());
    assert!(cam.eye.y < -14.9);
    assert!((cam.eye.length() - 15.0).abs() < 1e-3);
}

#[test]
fn dragging_rotates_by_pointer_travel() {
    let mut cam = camera();
    let mut controls = OrbitControls::default();
    controls.enable_damping = false;
    assert!(!controls.is_dragging());

    // moving without a drag does nothing
    controls.drag_to(Vec2::new(50.0, 0.0), 600.0);
    assert!(!controls.update(&mut cam));

    controls.begin_drag(Vec2::new(0.0, 0.0));
    assert!(controls.is_dragging());
    controls.drag_to(Vec2::new(60.0, 0.0), 600.0);
    controls.end_drag();
    assert!(!controls.is_dragging());
    controls.update(&mut cam);
    let theta = Spherical::from_vec3(cam.eye).theta;
    assert!((theta + std::f32::consts::TAU * 0.1).abs() < 1e-4);
}
