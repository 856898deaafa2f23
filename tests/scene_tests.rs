// Host-side tests for marker placement and highlighting.

use globe_core::scene::SceneModel;
use globe_core::{Atlas, GlobeConfig};

#[test]
fn one_marker_per_city_on_the_surface() {
    let atlas = Atlas::builtin().unwrap();
    let cfg = GlobeConfig::default();
    let scene = SceneModel::new(&atlas, &cfg, 1.0);
    assert_eq!(scene.markers().len(), atlas.len());
    for (marker, (id, _)) in scene.markers().iter().zip(atlas.iter()) {
        assert_eq!(marker.city, id);
        assert!((marker.local_position.length() - cfg.globe_radius).abs() < 1e-4);
    }
}

#[test]
fn camera_starts_on_positive_z() {
    let atlas = Atlas::builtin().unwrap();
    let cfg = GlobeConfig::default();
    let scene = SceneModel::new(&atlas, &cfg, 1.0);
    assert_eq!(scene.camera.eye, glam::Vec3::new(0.0, 0.0, cfg.camera_distance));
    assert_eq!(scene.camera.target, glam::Vec3::ZERO);
}

#[test]
fn highlighted_marker_uses_the_selected_colour() {
    let atlas = Atlas::builtin().unwrap();
    let cfg = GlobeConfig::default();
    let mut scene = SceneModel::new(&atlas, &cfg, 1.0);
    let seattle = atlas.id_of("Seattle").unwrap();

    let plain = scene.marker_instances();
    assert!(plain.iter().all(|m| m.color[..3] == cfg.marker_color));
    assert!(plain.iter().all(|m| m.position[3] == cfg.marker_radius));

    scene.set_highlighted(Some(seattle));
    assert_eq!(scene.highlighted(), Some(seattle));
    let lit = scene.marker_instances();
    assert_eq!(lit[seattle.0].color[..3], cfg.marker_selected_color);
    assert_eq!(
        lit.iter().filter(|m| m.color[..3] == cfg.marker_color).count(),
        atlas.len() - 1
    );

    scene.set_highlighted(None);
    assert_eq!(scene.marker_instances(), plain);
}

#[test]
fn markers_follow_the_globe_transform() {
    let atlas = Atlas::builtin().unwrap();
    let cfg = GlobeConfig::default();
    let mut scene = SceneModel::new(&atlas, &cfg, 16.0 / 9.0);
    let spin = glam::Mat4::from_rotation_y(1.2);
    scene.globe_model = spin;

    for marker in scene.markers() {
        let world = scene.marker_world_position(marker);
        let expected = spin.transform_point3(marker.local_position);
        assert!((world - expected).length() < 1e-5);
        assert!((world - marker.local_position).length() > 1e-2);

        let clip = scene.camera.view_projection() * world.extend(1.0);
        let ndc = glam::Vec2::new(clip.x / clip.w, clip.y / clip.w);
        assert_eq!(scene.pick(ndc), Some(marker.city));
    }
}

#[test]
fn rotated_globe_moves_markers_away_from_their_old_spot() {
    let atlas = Atlas::builtin().unwrap();
    let cfg = GlobeConfig::default();
    let mut scene = SceneModel::new(&atlas, &cfg, 16.0 / 9.0);
    let la = atlas.id_of("Los Angeles").unwrap();
    let marker = *scene.markers().iter().find(|m| m.city == la).unwrap();

    let clip = scene.camera.view_projection() * marker.local_position.extend(1.0);
    let old_ndc = glam::Vec2::new(clip.x / clip.w, clip.y / clip.w);
    assert_eq!(scene.pick(old_ndc), Some(la));

    scene.globe_model = glam::Mat4::from_rotation_y(std::f32::consts::PI);
    assert_ne!(scene.pick(old_ndc), Some(la));
}
