// Host-side tests for marker picking through the camera.

use glam::{Vec2, Vec3};
use globe_core::picking::{intersect_spheres, ray_sphere, Ray};
use globe_core::scene::SceneModel;
use globe_core::{Atlas, GlobeConfig};

fn scene(atlas: &Atlas) -> SceneModel {
    SceneModel::new(atlas, &GlobeConfig::default(), 16.0 / 9.0)
}

/// NDC of a world-space point as seen by the scene camera.
fn project(scene: &SceneModel, p: Vec3) -> Vec2 {
    let clip = scene.camera.view_projection() * p.extend(1.0);
    Vec2::new(clip.x / clip.w, clip.y / clip.w)
}

#[test]
fn ray_sphere_intersection_basic() {
    let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 5.0), 2.0);
    assert!((t.unwrap() - 3.0).abs() < 1e-6);
}

#[test]
fn ray_sphere_intersection_miss() {
    assert!(ray_sphere(Vec3::ZERO, Vec3::X, Vec3::new(0.0, 0.0, 5.0), 2.0).is_none());
}

#[test]
fn ray_sphere_behind_origin_is_ignored() {
    assert!(ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -5.0), 2.0).is_none());
}

#[test]
fn hits_are_sorted_nearest_first() {
    let ray = Ray {
        origin: Vec3::ZERO,
        dir: Vec3::Z,
    };
    let hits = intersect_spheres(
        &ray,
        [("far", Vec3::new(0.0, 0.0, 9.0)), ("near", Vec3::new(0.0, 0.0, 3.0))],
        1.0,
    );
    let tags: Vec<&str> = hits.iter().map(|h| h.tag).collect();
    assert_eq!(tags, ["near", "far"]);
    assert!(hits[0].distance < hits[1].distance);
}

#[test]
fn clicking_a_front_facing_marker_picks_its_city() {
    let atlas = Atlas::builtin().unwrap();
    let scene = scene(&atlas);
    let la = atlas.id_of("Los Angeles").unwrap();
    let marker = scene.markers().iter().find(|m| m.city == la).unwrap();
    // LA faces the default camera on +Z
    assert!(marker.local_position.z > 0.0);

    let ndc = project(&scene, scene.marker_world_position(marker));
    assert_eq!(scene.pick(ndc), Some(la));
}

#[test]
fn markers_behind_the_globe_are_still_pickable() {
    let atlas = Atlas::builtin().unwrap();
    let scene = scene(&atlas);
    let tokyo = atlas.id_of("Tokyo").unwrap();
    let marker = scene.markers().iter().find(|m| m.city == tokyo).unwrap();
    assert!(marker.local_position.z < 0.0);

    let ndc = project(&scene, scene.marker_world_position(marker));
    assert_eq!(scene.pick(ndc), Some(tokyo));
}

#[test]
fn the_globe_itself_never_produces_a_hit() {
    let atlas = Atlas::builtin().unwrap();
    let scene = scene(&atlas);
    // straight at the globe centre, no marker on that line
    assert_eq!(scene.pick(Vec2::ZERO), None);
    assert!(scene.hits_at(Vec2::ZERO).is_empty());
}

#[test]
fn empty_space_is_a_miss() {
    let atlas = Atlas::builtin().unwrap();
    let scene = scene(&atlas);
    assert_eq!(scene.pick(Vec2::new(0.95, 0.95)), None);
    assert_eq!(scene.pick(Vec2::new(-0.95, -0.95)), None);
}

#[test]
fn camera_ray_starts_at_the_eye() {
    let atlas = Atlas::builtin().unwrap();
    let scene = scene(&atlas);
    let ray = scene.camera.ray_from_ndc(Vec2::ZERO);
    assert_eq!(ray.origin, scene.camera.eye);
    assert!((ray.dir - Vec3::NEG_Z).length() < 1e-5);
}
