//! Position structure for KML coordinates

/// A geographic position
///
/// Latitude comes first here, while KML writes tuples as
/// `longitude,latitude[,altitude]`. Use `from_kml_tuple` when building a
/// position from KML fields so the two orders are never mixed up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Altitude in meters
    pub altitude: f64,
}

impl Position {
    /// Create a new position
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Position { latitude, longitude, altitude }
    }

    /// Create a position from fields in KML tuple order (longitude, latitude, altitude)
    pub fn from_kml_tuple(longitude: f64, latitude: f64, altitude: f64) -> Self {
        Position::new(latitude, longitude, altitude)
    }

    /// True when latitude and longitude are both numbers
    ///
    /// Altitude does not count: an unreadable altitude still leaves a
    /// usable horizontal position.
    pub fn is_valid(&self) -> bool {
        !self.latitude.is_nan() && !self.longitude.is_nan()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.latitude, self.longitude, self.altitude)
    }
}
