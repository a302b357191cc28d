use crate::map::consts::{DEFAULT_LOCATION_IMAGE, FIXED_LOCATION_IMAGE};
use crate::map::models::{InvalidCoordinate, LatLng, Location};
use rand::Rng;
use serde::Deserialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// Source of ground-truth locations for new rounds.
pub trait LocationProvider: Send + Sync {
    fn next_location(&self) -> Location;
}

/// Always hands out the same location.
#[derive(Clone, Debug)]
pub struct FixedLocation {
    location: Location,
}

impl FixedLocation {
    pub fn new(location: Location) -> Self {
        Self { location }
    }
}

impl Default for FixedLocation {
    fn default() -> Self {
        Self::new(Location {
            position: LatLng {
                lat: 48.8566,
                lng: 2.3522,
            },
            image: FIXED_LOCATION_IMAGE.to_string(),
        })
    }
}

impl LocationProvider for FixedLocation {
    fn next_location(&self) -> Location {
        self.location.clone()
    }
}

#[derive(Debug, Error)]
pub enum LocationsError {
    #[error("Failed to read the locations file: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to deserialize line {line} of the locations file: {source}")]
    Parse {
        line: usize,
        source: serde_json::Error,
    },
    #[error("Line {line} of the locations file holds an invalid location: {source}")]
    InvalidCoordinate {
        line: usize,
        source: InvalidCoordinate,
    },
    #[error("The locations file contains no locations.")]
    Empty,
}

#[derive(Deserialize)]
struct LocationRecord {
    lat: f64,
    lng: f64,
    #[serde(default = "default_image")]
    image: String,
}

fn default_image() -> String {
    DEFAULT_LOCATION_IMAGE.to_string()
}

/// Picks a random location out of a fixed pool for every round.
#[derive(Clone, Debug)]
pub struct LocationPool {
    locations: Vec<Location>,
}

impl LocationPool {
    pub fn new(locations: Vec<Location>) -> Result<Self, LocationsError> {
        if locations.is_empty() {
            return Err(LocationsError::Empty);
        }
        Ok(Self { locations })
    }

    /// Loads a newline-delimited JSON file, one `{"lat", "lng", "image"}` object per line.
    /// Blank lines are skipped.
    pub fn from_file(path: &Path) -> Result<Self, LocationsError> {
        let file_reader = BufReader::new(File::open(path)?);
        let mut locations = Vec::new();
        for (index, line) in file_reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let line_number = index + 1;
            let record: LocationRecord =
                serde_json::from_str(&line).map_err(|source| LocationsError::Parse {
                    line: line_number,
                    source,
                })?;
            let position = LatLng::new(record.lat, record.lng).map_err(|source| {
                LocationsError::InvalidCoordinate {
                    line: line_number,
                    source,
                }
            })?;
            locations.push(Location {
                position,
                image: record.image,
            });
        }
        Self::new(locations)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }
}

impl LocationProvider for LocationPool {
    fn next_location(&self) -> Location {
        let mut rng = rand::thread_rng();
        let index = rng.gen_range(0..self.locations.len());
        self.locations[index].clone()
    }
}
