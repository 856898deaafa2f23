// Web front-end constants: DOM hooks, status text and clear color.

// DOM
pub const CANVAS_CLASS: &str = "globe-canvas";
pub const PANEL_CLASS: &str = "globe-panel";
pub const STATUS_CLASS: &str = "globe-status";
pub const CANVAS_STYLE: &str = "display: block; width: 100%; height: 100%; touch-action: none;";
pub const CONTAINER_STYLE: &str = "position: relative; width: 100vw; height: 100vh; overflow: hidden;";

// Setup stages shown on the status line
pub const STATUS_INITIALIZING: &str = "Initializing...";
pub const STATUS_SCENE: &str = "Setting up scene...";
pub const STATUS_GLOBE: &str = "Creating globe...";
pub const STATUS_CONTROLS: &str = "Setting up camera and controls...";
pub const STATUS_MARKERS: &str = "Adding city markers...";
pub const STATUS_INTERACTIVITY: &str = "Setting up interactivity...";
pub const STATUS_LOOP: &str = "Starting animation loop...";
pub const STATUS_COMPLETE: &str = "Globe setup complete.";
pub const STATUS_CLEANUP: &str = "Cleaning up...";

// Rendering
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
pub const TEXTURE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;
