use geo::Coord;

pub const APPROX_EARTH_RADIUS_M: f64 = 6_371_000.0;

/// get the distance in meters between two coordinates stored on road
/// network nodes. coordinates are assumed to be in the WGS84 Coordinate
/// System.
pub fn coord_distance_meters(src: Coord<f32>, dst: Coord<f32>) -> Result<f64, String> {
    haversine_distance_meters(src.x as f64, src.y as f64, dst.x as f64, dst.y as f64)
}

/// haversine distance formula, based on the one published to rosetta code.
/// https://rosettacode.org/wiki/Haversine_formula#Rust
/// computes the great circle distance between two points in meters.
/// assumes input data is in WGS84 projection (aka EPSG:4326 CRS)
pub fn haversine_distance_meters(
    src_x: f64,
    src_y: f64,
    dst_x: f64,
    dst_y: f64,
) -> Result<f64, String> {
    if !(-180.0..=180.0).contains(&src_x) {
        return Err(format!("src x value not in range [-180, 180]: {}", src_x));
    }
    if !(-180.0..=180.0).contains(&dst_x) {
        return Err(format!("dst x value not in range [-180, 180]: {}", dst_x));
    }
    if !(-90.0..=90.0).contains(&src_y) {
        return Err(format!("src y value not in range [-90, 90]: {}", src_y));
    }
    if !(-90.0..=90.0).contains(&dst_y) {
        return Err(format!("dst y value not in range [-90, 90]: {}", dst_y));
    }

    let lat1 = src_y.to_radians();
    let lat2 = dst_y.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (dst_x - src_x).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + (d_lon / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
    let c = 2.0 * a.sqrt().asin();
    Ok(APPROX_EARTH_RADIUS_M * c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_one_degree_longitude_at_equator() {
        let distance = haversine_distance_meters(0.0, 0.0, 1.0, 0.0).unwrap();
        // one degree of arc on the approximated sphere
        let expected = APPROX_EARTH_RADIUS_M * std::f64::consts::PI / 180.0;
        assert_relative_eq!(distance, expected, max_relative = 1e-9);
    }

    #[test]
    fn test_symmetry() {
        let ab = haversine_distance_meters(-105.20423, 39.71221, -105.22927, 39.75842).unwrap();
        let ba = haversine_distance_meters(-105.22927, 39.75842, -105.20423, 39.71221).unwrap();
        assert_relative_eq!(ab, ba, max_relative = 1e-12);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(haversine_distance_meters(-200.0, 0.0, 0.0, 0.0).is_err());
        assert!(haversine_distance_meters(0.0, 91.0, 0.0, 0.0).is_err());
    }
}
