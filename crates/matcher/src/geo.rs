//! Great-circle distance between reported coordinates.

/// Mean earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometres between two `(latitude, longitude)` pairs
/// given in degrees.
pub fn haversine_km(a: (f64, f64), b: (f64, f64)) -> f64 {
    let (lat1, lon1) = (a.0.to_radians(), a.1.to_radians());
    let (lat2, lon2) = (b.0.to_radians(), b.1.to_radians());
    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

/// Tiered proximity score for a distance in kilometres.
pub fn geo_proximity(distance_km: f64) -> f64 {
    if distance_km < 1.0 {
        1.0
    } else if distance_km < 5.0 {
        0.8
    } else if distance_km < 20.0 {
        0.5
    } else if distance_km < 100.0 {
        0.2
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_point_is_zero_km() {
        let p = (40.7829, -73.9654);
        assert!(haversine_km(p, p).abs() < 1e-9);
    }

    #[test]
    fn paris_to_london_is_about_344_km() {
        let paris = (48.8566, 2.3522);
        let london = (51.5074, -0.1278);
        let d = haversine_km(paris, london);
        assert!((d - 343.5).abs() < 2.0, "got {d}");
        assert!((haversine_km(london, paris) - d).abs() < 1e-9);
    }

    #[test]
    fn proximity_tiers() {
        assert_eq!(geo_proximity(0.2), 1.0);
        assert_eq!(geo_proximity(1.0), 0.8);
        assert_eq!(geo_proximity(19.9), 0.5);
        assert_eq!(geo_proximity(20.0), 0.2);
        assert_eq!(geo_proximity(250.0), 0.0);
    }
}
