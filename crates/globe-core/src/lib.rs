pub mod atlas;
pub mod camera;
pub mod config;
pub mod constants;
pub mod error;
pub mod keys;
pub mod markup;
pub mod mesh;
pub mod mounts;
pub mod orbit;
pub mod picking;
pub mod projection;
pub mod scene;
pub mod selection;
pub mod teardown;

pub static CITIES_JSON: &str = include_str!("../data/cities.json");

pub use atlas::*;
pub use camera::*;
pub use config::*;
pub use error::*;
pub use selection::*;
