//! Unit-vector ↔ longitude/latitude conversion.

use panchang_time::normalize_360;

/// Unit vector for a direction given as longitude/latitude in degrees.
///
/// Longitude is measured in the x-y plane from +x toward +y; latitude is
/// elevation above that plane.
pub fn lon_lat_to_unit(lon_deg: f64, lat_deg: f64) -> [f64; 3] {
    let (sin_lon, cos_lon) = lon_deg.to_radians().sin_cos();
    let (sin_lat, cos_lat) = lat_deg.to_radians().sin_cos();
    [cos_lat * cos_lon, cos_lat * sin_lon, sin_lat]
}

/// Longitude [0, 360) and latitude [-90, 90] in degrees of a vector.
///
/// The zero vector maps to (0, 0).
pub fn unit_to_lon_lat(v: &[f64; 3]) -> (f64, f64) {
    let [x, y, z] = *v;
    let rxy = x.hypot(y);
    if rxy == 0.0 && z == 0.0 {
        return (0.0, 0.0);
    }
    let lon = normalize_360(y.atan2(x).to_degrees());
    let lat = z.atan2(rxy).to_degrees();
    (lon, lat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axes() {
        let v = lon_lat_to_unit(0.0, 0.0);
        assert!((v[0] - 1.0).abs() < 1e-15);
        let v = lon_lat_to_unit(90.0, 0.0);
        assert!((v[1] - 1.0).abs() < 1e-15);
        let v = lon_lat_to_unit(0.0, 90.0);
        assert!((v[2] - 1.0).abs() < 1e-15);
    }

    #[test]
    fn round_trip() {
        for &(lon, lat) in &[(0.0, 0.0), (123.4, -45.6), (359.9, 89.0), (200.0, -10.0)] {
            let (l, b) = unit_to_lon_lat(&lon_lat_to_unit(lon, lat));
            assert!((l - lon).abs() < 1e-9, "lon {lon} -> {l}");
            assert!((b - lat).abs() < 1e-9, "lat {lat} -> {b}");
        }
    }

    #[test]
    fn zero_vector() {
        assert_eq!(unit_to_lon_lat(&[0.0, 0.0, 0.0]), (0.0, 0.0));
    }
}
