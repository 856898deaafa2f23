//! Mount-time configuration.
//!
//! Every field has a default from `constants`, so hosts only pass the keys
//! they want to override, e.g. `{"camera_distance": 20.0}`.

use crate::constants::*;
use crate::error::ConfigError;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextureKind {
    Color,
    Bump,
    Specular,
}

impl TextureKind {
    pub const ALL: [TextureKind; 3] = [TextureKind::Color, TextureKind::Bump, TextureKind::Specular];

    pub fn label(self) -> &'static str {
        match self {
            TextureKind::Color => "Earth texture",
            TextureKind::Bump => "Earth bump map",
            TextureKind::Specular => "Earth specular map",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TextureUrls {
    pub color: String,
    pub bump: String,
    pub specular: String,
}

impl Default for TextureUrls {
    fn default() -> Self {
        Self {
            color: EARTH_COLOR_URL.to_string(),
            bump: EARTH_BUMP_URL.to_string(),
            specular: EARTH_SPECULAR_URL.to_string(),
        }
    }
}

impl TextureUrls {
    pub fn url(&self, kind: TextureKind) -> &str {
        match kind {
            TextureKind::Color => &self.color,
            TextureKind::Bump => &self.bump,
            TextureKind::Specular => &self.specular,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GlobeConfig {
    pub globe_radius: f32,
    pub globe_segments: u32,
    pub bump_scale: f32,
    pub specular_color: [f32; 3],
    pub shininess: f32,
    pub marker_radius: f32,
    pub marker_segments: u32,
    pub marker_color: [f32; 3],
    pub marker_selected_color: [f32; 3],
    pub camera_fov_deg: f32,
    pub camera_near: f32,
    pub camera_far: f32,
    pub camera_distance: f32,
    pub damping_factor: f32,
    pub ambient_color: [f32; 3],
    pub ambient_intensity: f32,
    pub point_light_color: [f32; 3],
    pub point_light_intensity: f32,
    pub point_light_position: [f32; 3],
    pub textures: TextureUrls,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            globe_radius: GLOBE_RADIUS,
            globe_segments: GLOBE_SEGMENTS,
            bump_scale: BUMP_SCALE,
            specular_color: SPECULAR_COLOR,
            shininess: SHININESS,
            marker_radius: MARKER_RADIUS,
            marker_segments: MARKER_SEGMENTS,
            marker_color: MARKER_COLOR,
            marker_selected_color: MARKER_SELECTED_COLOR,
            camera_fov_deg: CAMERA_FOV_DEG,
            camera_near: CAMERA_NEAR,
            camera_far: CAMERA_FAR,
            camera_distance: CAMERA_DISTANCE,
            damping_factor: DAMPING_FACTOR,
            ambient_color: AMBIENT_COLOR,
            ambient_intensity: AMBIENT_INTENSITY,
            point_light_color: POINT_LIGHT_COLOR,
            point_light_intensity: POINT_LIGHT_INTENSITY,
            point_light_position: POINT_LIGHT_POSITION,
            textures: TextureUrls::default(),
        }
    }
}

impl GlobeConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: GlobeConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.globe_radius > 0.0) {
            return Err(ConfigError::Invalid("globe_radius must be positive"));
        }
        if !(self.marker_radius > 0.0) {
            return Err(ConfigError::Invalid("marker_radius must be positive"));
        }
        if self.globe_segments < 3 || self.marker_segments < 3 {
            return Err(ConfigError::Invalid("sphere segments must be at least 3"));
        }
        if !(self.damping_factor > 0.0 && self.damping_factor <= 1.0) {
            return Err(ConfigError::Invalid("damping_factor must be in (0, 1]"));
        }
        if !(self.camera_fov_deg > 0.0 && self.camera_fov_deg < 180.0) {
            return Err(ConfigError::Invalid("camera_fov_deg must be in (0, 180)"));
        }
        if !(self.camera_near > 0.0 && self.camera_near < self.camera_far) {
            return Err(ConfigError::Invalid("camera_near must be positive and below camera_far"));
        }
        if !(self.camera_distance > self.globe_radius) {
            return Err(ConfigError::Invalid("camera_distance must exceed globe_radius"));
        }
        Ok(())
    }
}
