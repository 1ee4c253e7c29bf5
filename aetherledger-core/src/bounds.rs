use aetherledger_schemas::hotspot::LatLng;
use serde::{Deserialize, Serialize};

/// A latitude/longitude rectangle given by its south-west and north-east
/// corners. Does not handle spans across the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl GeoBounds {
    pub fn from_point(point: LatLng) -> Self {
        Self {
            south_west: point,
            north_east: point,
        }
    }

    /// Smallest bounds covering every position, or `None` for an empty input.
    pub fn covering<I>(positions: I) -> Option<Self>
    where
        I: IntoIterator<Item = LatLng>,
    {
        let mut iter = positions.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::from_point(first), |bounds, p| bounds.extend(p)))
    }

    pub fn extend(self, point: LatLng) -> Self {
        Self {
            south_west: LatLng::new(
                self.south_west.lat.min(point.lat),
                self.south_west.lng.min(point.lng),
            ),
            north_east: LatLng::new(
                self.north_east.lat.max(point.lat),
                self.north_east.lng.max(point.lng),
            ),
        }
    }

    pub fn contains(&self, point: LatLng) -> bool {
        (self.south_west.lat..=self.north_east.lat).contains(&point.lat)
            && (self.south_west.lng..=self.north_east.lng).contains(&point.lng)
    }

    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }

    /// Grows each side by `fraction` of the current span.
    pub fn padded(&self, fraction: f64) -> Self {
        let lat_pad = (self.north_east.lat - self.south_west.lat) * fraction;
        let lng_pad = (self.north_east.lng - self.south_west.lng) * fraction;
        Self {
            south_west: LatLng::new(self.south_west.lat - lat_pad, self.south_west.lng - lng_pad),
            north_east: LatLng::new(self.north_east.lat + lat_pad, self.north_east.lng + lng_pad),
        }
    }
}
