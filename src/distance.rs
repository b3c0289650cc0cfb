//! Great-circle distance between two points on a sphere.

/// Earth radius in kilometres used for every benchmark answer.
pub const EARTH_RADIUS: f64 = 6372.8;

/// A pair of `(longitude, latitude)` points, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pair {
    /// Longitude of the first point
    pub x0: f64,
    /// Latitude of the first point
    pub y0: f64,
    /// Longitude of the second point
    pub x1: f64,
    /// Latitude of the second point
    pub y1: f64,
}

impl Pair {
    /// Distance between the two points on a sphere of [`EARTH_RADIUS`].
    #[must_use]
    pub fn distance(&self) -> f64 {
        haversine(self.x0, self.y0, self.x1, self.y1, EARTH_RADIUS)
    }
}

/// Haversine distance between `(x0, y0)` and `(x1, y1)`, x being longitude and
/// y latitude in degrees, on a sphere of the given radius.
#[must_use]
pub fn haversine(x0: f64, y0: f64, x1: f64, y1: f64, radius: f64) -> f64 {
    let d_lat = (y1 - y0).to_radians();
    let d_lon = (x1 - x0).to_radians();
    let lat0 = y0.to_radians();
    let lat1 = y1.to_radians();

    let a = square((d_lat / 2.0).sin())
        + lat0.cos() * lat1.cos() * square((d_lon / 2.0).sin());
    let c = 2.0 * a.sqrt().asin();

    radius * c
}

const fn square(v: f64) -> f64 {
    v * v
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn assert_close(got: f64, expected: f64) {
        assert!(
            (got - expected).abs() <= 1e-6,
            "expected {expected}, got {got}"
        );
    }

    #[test]
    fn test_same_point_is_zero() {
        assert_close(haversine(12.5, -33.0, 12.5, -33.0, EARTH_RADIUS), 0.0);
    }

    #[test]
    fn test_antipodal_on_equator() {
        assert_close(haversine(0.0, 0.0, 180.0, 0.0, EARTH_RADIUS), EARTH_RADIUS * PI);
        assert_close(haversine(0.0, 0.0, 0.0, 90.0, 1.0), PI / 2.0);
    }

    #[test]
    fn test_reference_pairs() {
        let pair = Pair {
            x0: -140.956_195,
            y0: -85.010_687,
            x1: -136.088_660,
            y1: -82.266_397,
        };
        assert_close(pair.distance(), 310.804_579_751_213_3);

        let pair = Pair {
            x0: 46.781_777,
            y0: 76.594_807,
            x1: 97.042_218,
            y1: 77.936_222,
        };
        assert_close(pair.distance(), 1_202.558_280_578_180_8);
    }

    #[test]
    fn test_symmetric() {
        let a = haversine(-15.1, -52.0, -27.7, -44.8, EARTH_RADIUS);
        let b = haversine(-27.7, -44.8, -15.1, -52.0, EARTH_RADIUS);
        assert_close(a, b);
    }
}
