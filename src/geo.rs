//! Approximate distance between nearby coordinates.
//!
//! Treats a small patch of the earth as flat and takes the Euclidean distance
//! in degrees, shrinking longitude by the cosine of the latitude:
//!
//! ```text
//! d = 110.25 * sqrt(Δlat² + (Δlng * cos(lat_b))²)      [km]
//! ```
//!
//! [`approx_distance_km`] passes `lat_b` to `cos` exactly as stored, in
//! degrees, so results stay comparable with distances already computed that
//! way. The correction factor is then `|cos(lat_b rad)|`, which only tracks
//! the true scale by accident. [`approx_distance_km_radians`] converts to
//! radians first and is the geometrically correct form.
//!
//! Both are much cheaper than haversine. Error grows with separation and near
//! the poles.
//!
//! # References
//!
//! - [Computing distance between coordinates can be simple and fast](http://jonisalonen.com/2014/computing-distance-between-coordinates-can-be-simple-and-fast/)

/// Length of one degree of latitude at the equator, in kilometers.
pub const DEGREE_LENGTH_KM: f64 = 110.25;

/// A point on the earth, in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    /// Latitude in degrees.
    pub lat: f32,
    /// Longitude in degrees.
    pub lng: f32,
}

impl Coord {
    /// Create a coordinate from latitude and longitude in degrees.
    #[must_use]
    pub const fn new(lat: f32, lng: f32) -> Self {
        Self { lat, lng }
    }
}

impl From<(f32, f32)> for Coord {
    fn from((lat, lng): (f32, f32)) -> Self {
        Self { lat, lng }
    }
}

/// Approximate distance in kilometers between `a` and `b`.
///
/// The longitude correction is `cos(b.lat)` with the latitude taken as
/// radians without conversion. See the module docs; use
/// [`approx_distance_km_radians`] for the converted form.
///
/// The correction uses `b`'s latitude only, so the result is not symmetric.
///
/// ```rust
/// use simetra::geo::{approx_distance_km, Coord};
///
/// let a = Coord::new(37.765492, -122.431229);
/// let b = Coord::new(37.767487, -122.429633);
/// assert!((approx_distance_km(a, b) - 0.2813).abs() < 1e-3);
/// ```
#[inline]
#[must_use]
pub fn approx_distance_km(a: Coord, b: Coord) -> f64 {
    planar_km(a, b, f64::from(b.lat).cos())
}

/// Like [`approx_distance_km`], but converts `b.lat` from degrees to radians
/// before taking the cosine.
///
/// ```rust
/// use simetra::geo::{approx_distance_km_radians, Coord};
///
/// let a = Coord::new(37.765492, -122.431229);
/// let b = Coord::new(37.767487, -122.429633);
/// assert!((approx_distance_km_radians(a, b) - 0.2602).abs() < 1e-3);
/// ```
#[inline]
#[must_use]
pub fn approx_distance_km_radians(a: Coord, b: Coord) -> f64 {
    planar_km(a, b, f64::from(b.lat).to_radians().cos())
}

#[inline]
fn planar_km(a: Coord, b: Coord, lng_scale: f64) -> f64 {
    // Deltas in f32, then widened.
    let x = f64::from(a.lat - b.lat);
    let y = f64::from(a.lng - b.lng) * lng_scale;
    DEGREE_LENGTH_KM * (x * x + y * y).sqrt()
}
