/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;
/// Half of the great circle, the largest distance two points can be apart.
pub const MAX_DISTANCE_KM: f64 = std::f64::consts::PI * EARTH_RADIUS_KM;
pub const MAX_SCORE: f64 = 2000.0;
pub const SCORE_DECAY_BASE: f64 = 1.65;

pub const DEFAULT_LOCATION_IMAGE: &str = "/placeholder-image.jpg";
pub const FIXED_LOCATION_IMAGE: &str = "/random-game-location.jpg";
