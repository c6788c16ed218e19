use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validates that the coordinates are within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }

    /// Leaflet's `[lat, lng]` array form
    pub fn to_array(&self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lat, self.lng)
    }
}

/// Represents a bounding box of geographical coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Creates bounds from individual coordinates
    pub fn from_coords(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self::new(LatLng::new(south, west), LatLng::new(north, east))
    }

    /// Smallest bounds covering every point, `None` for an empty iterator
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = LatLng>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Self::new(first, first);
        for point in points {
            bounds.extend(&point);
        }
        Some(bounds)
    }

    /// Checks if the bounds contain a point
    pub fn contains(&self, point: &LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }

    /// Extends the bounds to include a point
    pub fn extend(&mut self, point: &LatLng) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    /// Gets the center point of the bounds
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }

    /// Leaflet's `[[south, west], [north, east]]` form
    pub fn to_array(&self) -> [[f64; 2]; 2] {
        [self.south_west.to_array(), self.north_east.to_array()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lat_lng_validity() {
        assert!(LatLng::new(40.4168, -3.7038).is_valid());
        assert!(LatLng::new(90.0, 180.0).is_valid());
        assert!(!LatLng::new(91.0, 0.0).is_valid());
        assert!(!LatLng::new(0.0, -180.5).is_valid());
    }

    #[test]
    fn test_display() {
        assert_eq!(LatLng::new(40.4168, -3.7038).to_string(), "40.4168, -3.7038");
    }

    #[test]
    fn test_bounds_from_points() {
        let bounds = LatLngBounds::from_points(vec![
            LatLng::new(40.0, -4.0),
            LatLng::new(41.0, -3.0),
            LatLng::new(40.5, -3.5),
        ])
        .unwrap();

        assert_eq!(bounds.south_west, LatLng::new(40.0, -4.0));
        assert_eq!(bounds.north_east, LatLng::new(41.0, -3.0));
        assert_eq!(bounds.center(), LatLng::new(40.5, -3.5));
        assert!(bounds.contains(&LatLng::new(40.2, -3.9)));
        assert!(LatLngBounds::from_points(Vec::new()).is_none());
    }

    #[test]
    fn test_bounds_from_coords() {
        let bounds = LatLngBounds::from_coords(40.3, -3.8, 40.5, -3.6);
        assert_eq!(bounds.south_west, LatLng::new(40.3, -3.8));
        assert_eq!(bounds.north_east, LatLng::new(40.5, -3.6));
        assert_eq!(bounds.to_array(), [[40.3, -3.8], [40.5, -3.6]]);
    }
}
