use std::collections::HashMap;

use serde::{ser::SerializeMap, Serialize, Serializer};
use stationhub_error::{HubResult, StoreError};
use tracing::debug;

use crate::{
    database::{coord_bits, great_circle_distance, GeoPoint, Station},
    engine::Storage,
};

/// Centre point and radius of a search, already validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_km: f64,
}

/// A station together with its distance to the query point, in km.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationWithDistance {
    #[serde(flatten)]
    pub station: Station,
    pub distance: f64,
}

/// Stations sharing one exact longitude inside a latitude group.
#[derive(Debug, Clone, PartialEq)]
pub struct LongitudeGroup {
    pub longitude: f64,
    pub stations: Vec<StationWithDistance>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LatitudeGroup {
    pub latitude: f64,
    pub longitudes: Vec<LongitudeGroup>,
}

/// Search result: latitude -> longitude -> stations.
///
/// Groups keep the order in which their coordinate first appears in the
/// distance-sorted sequence. Serializes as nested JSON objects keyed by the
/// coordinate rendered as a string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RadiusGroups {
    pub groups: Vec<LatitudeGroup>,
}

impl RadiusQuery {
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

impl RadiusGroups {
    /// Groups an already sorted sequence.
    pub fn from_sorted(stations: Vec<StationWithDistance>) -> Self {
        let mut groups: Vec<LatitudeGroup> = Vec::new();
        let mut lat_index: HashMap<u64, usize> = HashMap::new();

        for entry in stations {
            let lat = entry.station.latitude + 0.0;
            let lon = entry.station.longitude + 0.0;

            let idx = *lat_index.entry(coord_bits(lat)).or_insert_with(|| {
                groups.push(LatitudeGroup {
                    latitude: lat,
                    longitudes: Vec::new(),
                });
                groups.len() - 1
            });

            let longitudes = &mut groups[idx].longitudes;
            match longitudes
                .iter_mut()
                .find(|g| coord_bits(g.longitude) == coord_bits(lon))
            {
                Some(group) => group.stations.push(entry),
                None => longitudes.push(LongitudeGroup {
                    longitude: lon,
                    stations: vec![entry],
                }),
            }
        }

        Self { groups }
    }

    /// Total number of stations across all groups.
    pub fn len(&self) -> usize {
        self.stations().count()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Stations in group order.
    pub fn stations(&self) -> impl Iterator<Item = &StationWithDistance> {
        self.groups
            .iter()
            .flat_map(|lat| lat.longitudes.iter())
            .flat_map(|lon| lon.stations.iter())
    }
}

/// Finds every station within `query.radius_km` of the centre point.
///
/// Distances use the spherical law of cosines with R = 6371 km. A station
/// exactly at the radius is included. Results are sorted by ascending
/// distance, ties keeping store order, then grouped by coordinate.
pub fn find_within_radius(
    store: &dyn Storage,
    query: &RadiusQuery,
) -> HubResult<RadiusGroups> {
    let stations = store
        .list_stations()
        .map_err(|e| StoreError::backend("retrieve stations", e))?;
    let total = stations.len();
    let center = query.center();

    let mut within: Vec<StationWithDistance> = stations
        .into_iter()
        .map(|station| {
            let distance = great_circle_distance(center, station.point());
            StationWithDistance { station, distance }
        })
        .filter(|s| s.distance <= query.radius_km)
        .collect();

    within.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    debug!(
        latitude = query.latitude,
        longitude = query.longitude,
        radius_km = query.radius_km,
        scanned = total,
        matched = within.len(),
        "Radius search finished"
    );
    Ok(RadiusGroups::from_sorted(within))
}

////////////////////////////////////////////////////////////////////////////////
// Сериализация
////////////////////////////////////////////////////////////////////////////////

impl Serialize for RadiusGroups {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(&group.latitude.to_string(), group)?;
        }
        map.end()
    }
}

impl Serialize for LatitudeGroup {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.longitudes.len()))?;
        for group in &self.longitudes {
            map.serialize_entry(&group.longitude.to_string(), &group.stations)?;
        }
        map.end()
    }
}
