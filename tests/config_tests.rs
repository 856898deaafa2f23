// Host-side tests for mount configuration parsing and validation.

use globe_core::constants::*;
use globe_core::{ConfigError, GlobeConfig, TextureKind};

#[test]
fn defaults_match_constants() {
    let cfg = GlobeConfig::default();
    assert_eq!(cfg.globe_radius, GLOBE_RADIUS);
    assert_eq!(cfg.globe_segments, GLOBE_SEGMENTS);
    assert_eq!(cfg.marker_radius, MARKER_RADIUS);
    assert_eq!(cfg.camera_distance, CAMERA_DISTANCE);
    assert_eq!(cfg.damping_factor, DAMPING_FACTOR);
    assert_eq!(cfg.textures.url(TextureKind::Color), EARTH_COLOR_URL);
    assert_eq!(cfg.textures.url(TextureKind::Bump), EARTH_BUMP_URL);
    assert_eq!(cfg.textures.url(TextureKind::Specular), EARTH_SPECULAR_URL);
    assert!(cfg.validate().is_ok());
}

#[test]
fn empty_object_is_the_default() {
    assert_eq!(GlobeConfig::from_json("{}").unwrap(), GlobeConfig::default());
}

#[test]
fn partial_json_overrides_only_named_keys() {
    let cfg = GlobeConfig::from_json(
        r#"{"camera_distance": 20.0, "textures": {"color": "/night.jpg"}}"#,
    )
    .unwrap();
    assert_eq!(cfg.camera_distance, 20.0);
    assert_eq!(cfg.globe_radius, GLOBE_RADIUS);
    assert_eq!(cfg.textures.color, "/night.jpg");
    assert_eq!(cfg.textures.bump, EARTH_BUMP_URL);
}

#[test]
fn invalid_values_are_rejected() {
    for json in [
        r#"{"globe_radius": 0.0}"#,
        r#"{"marker_radius": -1.0}"#,
        r#"{"globe_segments": 2}"#,
        r#"{"damping_factor": 0.0}"#,
        r#"{"damping_factor": 1.5}"#,
        r#"{"camera_fov_deg": 180.0}"#,
        r#"{"camera_near": 10.0, "camera_far": 5.0}"#,
        r#"{"camera_distance": 4.0}"#,
    ] {
        assert!(
            matches!(GlobeConfig::from_json(json), Err(ConfigError::Invalid(_))),
            "{json}"
        );
    }
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(
        GlobeConfig::from_json("{camera_distance"),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        GlobeConfig::from_json(r#"{"camera_distance": "far"}"#),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn texture_labels_name_each_map() {
    let labels: Vec<&str> = TextureKind::ALL.iter().map(|k| k.label()).collect();
    assert_eq!(labels, ["Earth texture", "Earth bump map", "Earth specular map"]);
}
