// Host-side tests for lat/lon projection onto the globe.

use globe_core::constants::GLOBE_RADIUS;
use globe_core::projection::{lat_lon_to_position, lat_lon_to_vec3};
use globe_core::Atlas;

const R: f64 = 5.0;

#[test]
fn north_pole_is_straight_up() {
    let p = lat_lon_to_position(90.0, 0.0, R);
    assert_eq!(p.y, R);
    assert!(p.x.abs() < 1e-12 && p.z.abs() < 1e-12);
}

#[test]
fn south_pole_is_straight_down() {
    let p = lat_lon_to_position(-90.0, 45.0, R);
    assert_eq!(p.y, -R);
    assert!(p.x.abs() < 1e-12 && p.z.abs() < 1e-12);
}

#[test]
fn equator_prime_meridian_lies_on_positive_x() {
    let p = lat_lon_to_position(0.0, 0.0, R);
    assert!((p.x - R).abs() < 1e-12);
    assert!(p.y.abs() < 1e-12);
    assert!(p.z.abs() < 1e-12);
}

#[test]
fn equator_antimeridian_lies_on_negative_x() {
    let p = lat_lon_to_position(0.0, -180.0, R);
    assert!((p.x + R).abs() < 1e-12);
    assert!(p.y.abs() < 1e-12);
    assert!(p.z.abs() < 1e-12);
    // +180 and -180 are the same meridian
    let q = lat_lon_to_position(0.0, 180.0, R);
    assert!((p - q).length() < 1e-9);
}

#[test]
fn east_of_prime_meridian_has_negative_z() {
    let p = lat_lon_to_position(0.0, 90.0, R);
    assert!((p.z + R).abs() < 1e-12);
    assert!(p.x.abs() < 1e-12);
}

#[test]
fn every_city_sits_on_the_globe_surface() {
    let atlas = Atlas::builtin().unwrap();
    for (_, city) in atlas.iter() {
        let p = lat_lon_to_position(city.lat, city.lon, R);
        assert!((p.length() - R).abs() < 1e-9, "{} off surface", city.name);
        let q = lat_lon_to_vec3(city.lat, city.lon, GLOBE_RADIUS);
        assert!((q.length() - GLOBE_RADIUS).abs() < 1e-4);
    }
}

#[test]
fn projection_is_deterministic() {
    let a = lat_lon_to_position(35.6762, 139.6503, R);
    let b = lat_lon_to_position(35.6762, 139.6503, R);
    assert_eq!(a, b);
}
