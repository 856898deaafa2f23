//! Platform-free half of the Scene Manager: camera, orbit controls, markers
//! and hit testing. The web front-end pairs this with its GPU state.

use crate::atlas::{Atlas, CityId};
use crate::camera::Camera;
use crate::config::GlobeConfig;
use crate::orbit::OrbitControls;
use crate::picking::{intersect_spheres, Hit};
use crate::projection::lat_lon_to_vec3;
use glam::{Mat4, Vec2, Vec3};
use smallvec::SmallVec;

/// A city's point on the globe, in the globe's local space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub city: CityId,
    pub local_position: Vec3,
}

/// Per-instance data for drawing one marker.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MarkerInstance {
    pub position: [f32; 4], // xyz = local position, w = radius
    pub color: [f32; 4],
}

pub struct SceneModel {
    pub camera: Camera,
    pub controls: OrbitControls,
    /// Parent transform of the markers; identity unless the host rotates it.
    pub globe_model: Mat4,
    markers: Vec<Marker>,
    marker_radius: f32,
    marker_color: [f32; 3],
    marker_selected_color: [f32; 3],
    highlighted: Option<CityId>,
}

impl SceneModel {
    pub fn new(atlas: &Atlas, config: &GlobeConfig, aspect: f32) -> Self {
        let camera = Camera::new(
            Vec3::new(0.0, 0.0, config.camera_distance),
            config.camera_fov_deg,
            aspect,
            config.camera_near,
            config.camera_far,
        );
        let markers = atlas
            .iter()
            .map(|(city, c)| Marker {
                city,
                local_position: lat_lon_to_vec3(c.lat, c.lon, config.globe_radius),
            })
            .collect();
        Self {
            camera,
            controls: OrbitControls::with_damping(config.damping_factor),
            globe_model: Mat4::IDENTITY,
            markers,
            marker_radius: config.marker_radius,
            marker_color: config.marker_color,
            marker_selected_color: config.marker_selected_color,
            highlighted: None,
        }
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn marker_world_position(&self, marker: &Marker) -> Vec3 {
        self.globe_model.transform_point3(marker.local_position)
    }

    pub fn set_highlighted(&mut self, city: Option<CityId>) {
        self.highlighted = city;
    }

    pub fn highlighted(&self) -> Option<CityId> {
        self.highlighted
    }

    /// Advance the orbit controls one frame.
    pub fn advance(&mut self) -> bool {
        self.controls.update(&mut self.camera)
    }

    /// All markers under an NDC point, nearest first.
    pub fn hits_at(&self, ndc: Vec2) -> SmallVec<[Hit<CityId>; 4]> {
        let ray = self.camera.ray_from_ndc(ndc);
        intersect_spheres(
            &ray,
            self.markers
                .iter()
                .map(|m| (m.city, self.marker_world_position(m))),
            self.marker_radius,
        )
    }

    /// City of the nearest marker under an NDC point. Only markers are
    /// tested; the globe body never blocks or produces a hit.
    pub fn pick(&self, ndc: Vec2) -> Option<CityId> {
        self.hits_at(ndc).first().map(|h| h.tag)
    }

    pub fn marker_instances(&self) -> Vec<MarkerInstance> {
        self.markers
            .iter()
            .map(|m| {
                let rgb = if self.highlighted == Some(m.city) {
                    self.marker_selected_color
                } else {
                    self.marker_color
                };
                MarkerInstance {
                    position: m.local_position.extend(self.marker_radius).to_array(),
                    color: [rgb[0], rgb[1], rgb[2], 1.0],
                }
            })
            .collect()
    }
}
