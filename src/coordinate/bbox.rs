//! Bounding box covering a set of positions

use super::position::Position;

/// A geographic bounding box in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Southern edge
    pub min_latitude: f64,
    /// Western edge
    pub min_longitude: f64,
    /// Northern edge
    pub max_latitude: f64,
    /// Eastern edge
    pub max_longitude: f64,
}

impl BoundingBox {
    /// Create a new bounding box
    pub fn new(min_latitude: f64, min_longitude: f64, max_latitude: f64, max_longitude: f64) -> Self {
        BoundingBox {
            min_latitude,
            min_longitude,
            max_latitude,
            max_longitude,
        }
    }

    /// Smallest box containing every valid position
    ///
    /// Positions with a NaN latitude or longitude are ignored. Returns `None` when no valid
    /// position remains. Boxes crossing the antimeridian are not detected.
    pub fn from_positions<'a, I>(positions: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Position>,
    {
        let mut bbox: Option<BoundingBox> = None;
        for position in positions.into_iter().filter(|p| p.is_valid()) {
            bbox = Some(match bbox {
                None => BoundingBox::new(position.latitude, position.longitude,
                                         position.latitude, position.longitude),
                Some(b) => BoundingBox::new(
                    b.min_latitude.min(position.latitude),
                    b.min_longitude.min(position.longitude),
                    b.max_latitude.max(position.latitude),
                    b.max_longitude.max(position.longitude),
                ),
            });
        }
        bbox
    }

    /// Get the width of the bounding box in degrees of longitude
    pub fn width(&self) -> f64 {
        self.max_longitude - self.min_longitude
    }

    /// Get the height of the bounding box in degrees of latitude
    pub fn height(&self) -> f64 {
        self.max_latitude - self.min_latitude
    }

    /// Get the center of the bounding box at altitude 0
    pub fn center(&self) -> Position {
        Position::new(
            self.min_latitude + self.height() / 2.0,
            self.min_longitude + self.width() / 2.0,
            0.0,
        )
    }

    /// Check if this bounding box contains a position (altitude is ignored)
    pub fn contains(&self, position: &Position) -> bool {
        position.latitude >= self.min_latitude && position.latitude <= self.max_latitude &&
            position.longitude >= self.min_longitude && position.longitude <= self.max_longitude
    }
}
