// Shared scene tuning constants. `GlobeConfig::default()` is built from these.

// Globe body
pub const GLOBE_RADIUS: f32 = 5.0;
pub const GLOBE_SEGMENTS: u32 = 64; // width and height segments of the sphere
pub const BUMP_SCALE: f32 = 0.05;
pub const SPECULAR_COLOR: [f32; 3] = [0.5, 0.5, 0.5]; // "grey"
pub const SHININESS: f32 = 30.0;

// Markers
pub const MARKER_RADIUS: f32 = 0.1; // also the ray-sphere radius for picking
pub const MARKER_SEGMENTS: u32 = 16;
pub const MARKER_COLOR: [f32; 3] = [1.0, 0.0, 0.0];
pub const MARKER_SELECTED_COLOR: [f32; 3] = [1.0, 0.85, 0.1];

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_DISTANCE: f32 = 15.0; // eye starts at (0, 0, CAMERA_DISTANCE)

// Orbit controls
pub const DAMPING_FACTOR: f32 = 0.05;
pub const ROTATE_SPEED: f32 = 1.0;
pub const ZOOM_SPEED: f32 = 1.0;
pub const ZOOM_BASE: f32 = 0.95; // per wheel notch, raised to ZOOM_SPEED
pub const POLAR_EPSILON: f32 = 1e-6;

// Lights
pub const AMBIENT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const POINT_LIGHT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const POINT_LIGHT_INTENSITY: f32 = 1.0;
pub const POINT_LIGHT_POSITION: [f32; 3] = [10.0, 10.0, 10.0];

// Assets
pub const EARTH_COLOR_URL: &str = "/earth_texture.jpg";
pub const EARTH_BUMP_URL: &str = "/earth_bumpmap.jpg";
pub const EARTH_SPECULAR_URL: &str = "/earth_specular.jpg";

// Host page
pub const DEFAULT_CONTAINER_ID: &str = "globe-root";
pub const CITY_SELECTED_EVENT: &str = "globe:city-selected";
