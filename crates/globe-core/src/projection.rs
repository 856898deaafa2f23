use glam::{DVec3, Vec3};
use std::f64::consts::PI;

/// Project a latitude/longitude pair (degrees) onto a sphere of `radius`.
///
/// Computed in f64 so marker placement is reproducible bit for bit:
/// `phi = (90 - lat)·π/180`, `theta = (lon + 180)·π/180`,
/// `(x, y, z) = (-r·sinφ·cosθ, r·cosφ, r·sinφ·sinθ)`.
pub fn lat_lon_to_position(lat: f64, lon: f64, radius: f64) -> DVec3 {
    let phi = (90.0 - lat) * (PI / 180.0);
    let theta = (lon + 180.0) * (PI / 180.0);
    DVec3::new(
        -radius * phi.sin() * theta.cos(),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    )
}

/// Single-precision variant used for GPU data and picking.
#[inline]
pub fn lat_lon_to_vec3(lat: f64, lon: f64, radius: f32) -> Vec3 {
    lat_lon_to_position(lat, lon, radius as f64).as_vec3()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_precision_matches_double() {
        let d = lat_lon_to_position(52.52, 13.405, 5.0);
        let f = lat_lon_to_vec3(52.52, 13.405, 5.0);
        assert!((d.as_vec3() - f).length() < 1e-6);
    }
}
