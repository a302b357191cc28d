use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Error)]
#[error("Coordinate ({lat}, {lng}) is out of range.")]
pub struct InvalidCoordinate {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Builds a coordinate, rejecting latitudes outside of `[-90, 90]`, longitudes outside of
    /// `[-180, 180]` and non-finite values.
    pub fn new(lat: f64, lng: f64) -> Result<Self, InvalidCoordinate> {
        LatLng { lat, lng }.validated()
    }

    pub fn validated(self) -> Result<Self, InvalidCoordinate> {
        if (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng) {
            Ok(self)
        } else {
            Err(InvalidCoordinate {
                lat: self.lat,
                lng: self.lng,
            })
        }
    }
}

/// A ground-truth point together with the picture shown to the player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub position: LatLng,
    pub image: String,
}
