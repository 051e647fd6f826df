//! Great-circle distance between coordinates.

/// Mean Earth radius used for distance calculations
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distance in kilometres between two `(lat, lng)` points given in degrees.
///
/// Uses the spherical law of cosines. The cosine is clamped to `[-1, 1]` so rounding
/// error on identical or antipodal points never produces `NaN`.
pub fn distance_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    if from == to {
        return 0.0;
    }

    let (lat1, lng1) = (from.0.to_radians(), from.1.to_radians());
    let (lat2, lng2) = (to.0.to_radians(), to.1.to_radians());

    let cos_angle = lat1.cos() * lat2.cos() * (lng2 - lng1).cos() + lat1.sin() * lat2.sin();

    EARTH_RADIUS_KM * cos_angle.clamp(-1.0, 1.0).acos()
}

/// Whether `(lat, lng)` lies within valid degree ranges.
pub fn is_valid_coordinate(lat: f64, lng: f64) -> bool {
    lat.is_finite()
        && lng.is_finite()
        && (-90.0..=90.0).contains(&lat)
        && (-180.0..=180.0).contains(&lng)
}
