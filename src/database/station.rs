use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{geo::GeoPoint, CompanyId};

/// Identifier of a [`Station`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub u64);

/// A charging location owned by exactly one company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub company_id: CompanyId,
    pub address: String,
}

/// Validated data for creating or replacing a station.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStation {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub company_id: CompanyId,
    pub address: String,
}

impl StationId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StationId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(StationId)
    }
}

impl From<u64> for StationId {
    fn from(id: u64) -> Self {
        StationId(id)
    }
}

impl super::RecordId for StationId {
    const ENTITY: &'static str = "Station";
}

impl Station {
    pub fn from_new(id: StationId, new: NewStation) -> Self {
        Self {
            id,
            name: new.name,
            latitude: new.latitude,
            longitude: new.longitude,
            company_id: new.company_id,
            address: new.address,
        }
    }

    /// Station coordinates as a [`GeoPoint`].
    pub fn point(&self) -> GeoPoint {
        GeoPoint {
            lon: self.longitude,
            lat: self.latitude,
        }
    }
}
