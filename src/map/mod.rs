use consts::{EARTH_RADIUS_KM, MAX_SCORE, SCORE_DECAY_BASE};
use models::LatLng;

pub mod consts;
pub mod locations;
pub mod models;

/// Great-circle distance between two points, in kilometers (haversine formula).
pub fn distance_km(a: LatLng, b: LatLng) -> f64 {
    let phi_1 = a.lat.to_radians();
    let phi_2 = b.lat.to_radians();
    let delta_phi = (b.lat - a.lat).to_radians();
    let delta_lambda = (b.lng - a.lng).to_radians();
    let h = (delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    // Rounding can push `h` a hair above 1 for antipodal points.
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Game points awarded for a guess that landed `distance_km` away from the target.
pub fn points(distance_km: f64) -> u64 {
    (MAX_SCORE * SCORE_DECAY_BASE.powf(-distance_km * 1e-3)) as u64
}
