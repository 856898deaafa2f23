//! City dataset and its name index.
//!
//! The dataset is immutable once loaded. Every city gets a dense [`CityId`]
//! that markers and the selection state carry instead of the name, so the
//! name lookup happens once at load time.

use crate::error::AtlasError;
use fnv::FnvHashMap;
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Event {
    pub name: String,
    pub description: String,
    pub date: String,
    pub photos: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct City {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub overview: String,
    pub events: Vec<Event>,
    pub attractions: Vec<String>,
    pub cuisine: Vec<String>,
    pub transport: String,
}

/// Index of a city within its [`Atlas`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CityId(pub usize);

#[derive(Debug)]
pub struct Atlas {
    cities: Vec<City>,
    by_name: FnvHashMap<String, CityId>,
}

impl Atlas {
    /// The dataset compiled into the crate.
    pub fn builtin() -> Result<Self, AtlasError> {
        Self::from_json(crate::CITIES_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, AtlasError> {
        let cities: Vec<City> = serde_json::from_str(json)?;
        Self::from_cities(cities)
    }

    pub fn from_cities(cities: Vec<City>) -> Result<Self, AtlasError> {
        let mut by_name = FnvHashMap::default();
        for (i, city) in cities.iter().enumerate() {
            validate_city(city)?;
            if by_name.insert(city.name.clone(), CityId(i)).is_some() {
                return Err(AtlasError::DuplicateCity(city.name.clone()));
            }
        }
        log::debug!("[atlas] indexed {} cities", cities.len());
        Ok(Self { cities, by_name })
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn get(&self, id: CityId) -> Option<&City> {
        self.cities.get(id.0)
    }

    pub fn id_of(&self, name: &str) -> Option<CityId> {
        self.by_name.get(name).copied()
    }

    pub fn by_name(&self, name: &str) -> Option<&City> {
        self.id_of(name).and_then(|id| self.get(id))
    }

    pub fn name_of(&self, id: CityId) -> Option<&str> {
        self.get(id).map(|c| c.name.as_str())
    }

    /// Cities in dataset order, paired with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (CityId, &City)> {
        self.cities.iter().enumerate().map(|(i, c)| (CityId(i), c))
    }

    pub fn event_count(&self, id: CityId) -> usize {
        self.get(id).map_or(0, |c| c.events.len())
    }

    pub fn photo_count(&self, id: CityId, event: usize) -> usize {
        self.get(id)
            .and_then(|c| c.events.get(event))
            .map_or(0, |e| e.photos.len())
    }
}

fn validate_city(city: &City) -> Result<(), AtlasError> {
    if !(-90.0..=90.0).contains(&city.lat) {
        return Err(AtlasError::LatitudeOutOfRange {
            name: city.name.clone(),
            lat: city.lat,
        });
    }
    if !(-180.0..=180.0).contains(&city.lon) {
        return Err(AtlasError::LongitudeOutOfRange {
            name: city.name.clone(),
            lon: city.lon,
        });
    }
    if city.events.is_empty() {
        return Err(AtlasError::NoEvents(city.name.clone()));
    }
    if let Some(ev) = city.events.iter().find(|e| e.photos.is_empty()) {
        return Err(AtlasError::NoPhotos {
            city: city.name.clone(),
            event: ev.name.clone(),
        });
    }
    Ok(())
}
