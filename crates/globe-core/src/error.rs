use thiserror::Error;

/// Problems found while loading or indexing the city dataset.
#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("failed to parse city dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate city name `{0}`")]
    DuplicateCity(String),
    #[error("city `{name}` has latitude {lat} outside [-90, 90]")]
    LatitudeOutOfRange { name: String, lat: f64 },
    #[error("city `{name}` has longitude {lon} outside [-180, 180]")]
    LongitudeOutOfRange { name: String, lon: f64 },
    #[error("city `{0}` has no events")]
    NoEvents(String),
    #[error("event `{event}` of city `{city}` has no photos")]
    NoPhotos { city: String, event: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse globe config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid globe config: {0}")]
    Invalid(&'static str),
}
