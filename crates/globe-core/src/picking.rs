use glam::{Vec2, Vec3};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length.
    pub dir: Vec3,
}

impl Ray {
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// One ray/sphere intersection, tagged with whatever the sphere stands for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit<T> {
    pub tag: T,
    pub distance: f32,
}

/// Canvas-relative CSS pixel coordinates to normalized device coordinates.
///
/// Returns `None` for a zero-sized canvas.
#[inline]
pub fn ndc_from_css(x: f32, y: f32, width: f32, height: f32) -> Option<Vec2> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    Some(Vec2::new((x / width) * 2.0 - 1.0, -(y / height) * 2.0 + 1.0))
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Intersect `ray` with equally sized spheres; hits come back nearest first.
pub fn intersect_spheres<T, I>(ray: &Ray, spheres: I, radius: f32) -> SmallVec<[Hit<T>; 4]>
where
    T: Copy,
    I: IntoIterator<Item = (T, Vec3)>,
{
    let mut hits: SmallVec<[Hit<T>; 4]> = spheres
        .into_iter()
        .filter_map(|(tag, center)| {
            ray_sphere(ray.origin, ray.dir, center, radius).map(|distance| Hit { tag, distance })
        })
        .collect();
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ndc_corners() {
        assert_eq!(ndc_from_css(0.0, 0.0, 200.0, 100.0), Some(Vec2::new(-1.0, 1.0)));
        assert_eq!(ndc_from_css(200.0, 100.0, 200.0, 100.0), Some(Vec2::new(1.0, -1.0)));
        assert_eq!(ndc_from_css(100.0, 50.0, 200.0, 100.0), Some(Vec2::ZERO));
        assert_eq!(ndc_from_css(1.0, 1.0, 0.0, 100.0), None);
    }
}
