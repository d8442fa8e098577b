use std::{
    collections::BTreeSet,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use stationhub_error::StoreError;

use super::storage::{Storage, StoreResult};
use crate::database::{Company, CompanyId, NewCompany, NewStation, Station, StationId};

/// Companies and stations kept in concurrent hash maps.
pub struct InMemoryStore {
    pub companies: Arc<DashMap<CompanyId, Company>>,
    pub stations: Arc<DashMap<StationId, Station>>,
    next_company_id: AtomicU64,
    next_station_id: AtomicU64,
}

/// Full contents of a store, used for snapshots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub companies: Vec<Company>,
    pub stations: Vec<Station>,
    pub next_company_id: u64,
    pub next_station_id: u64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            companies: Arc::new(DashMap::new()),
            stations: Arc::new(DashMap::new()),
            next_company_id: AtomicU64::new(1),
            next_station_id: AtomicU64::new(1),
        }
    }

    /// Rebuilds a store from a snapshot. Id sequences never go below the
    /// largest id present.
    pub fn from_dataset(dataset: Dataset) -> Self {
        let max_company = dataset.companies.iter().map(|c| c.id.0).max().unwrap_or(0);
        let max_station = dataset.stations.iter().map(|s| s.id.0).max().unwrap_or(0);

        let store = Self::new();
        store
            .next_company_id
            .store(dataset.next_company_id.max(max_company + 1), Ordering::SeqCst);
        store
            .next_station_id
            .store(dataset.next_station_id.max(max_station + 1), Ordering::SeqCst);

        for company in dataset.companies {
            store.companies.insert(company.id, company);
        }
        for station in dataset.stations {
            store.stations.insert(station.id, station);
        }
        store
    }

    /// Copies the current contents out, sorted by id.
    pub fn export(&self) -> Dataset {
        Dataset {
            companies: self.sorted_companies(),
            stations: self.sorted_stations(),
            next_company_id: self.next_company_id.load(Ordering::SeqCst),
            next_station_id: self.next_station_id.load(Ordering::SeqCst),
        }
    }

    fn sorted_companies(&self) -> Vec<Company> {
        let mut companies: Vec<Company> = self.companies.iter().map(|e| e.value().clone()).collect();
        companies.sort_by_key(|c| c.id);
        companies
    }

    fn sorted_stations(&self) -> Vec<Station> {
        let mut stations: Vec<Station> = self.stations.iter().map(|e| e.value().clone()).collect();
        stations.sort_by_key(|s| s.id);
        stations
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for InMemoryStore {
    fn get_company(&self, id: CompanyId) -> StoreResult<Option<Company>> {
        Ok(self.companies.get(&id).map(|entry| entry.value().clone()))
    }

    fn list_companies(&self) -> StoreResult<Vec<Company>> {
        Ok(self.sorted_companies())
    }

    fn insert_company(&self, company: NewCompany) -> StoreResult<Company> {
        let id = CompanyId(self.next_company_id.fetch_add(1, Ordering::SeqCst));
        let company = Company::from_new(id, company);
        self.companies.insert(id, company.clone());
        Ok(company)
    }

    fn update_company(&self, id: CompanyId, company: NewCompany) -> StoreResult<Company> {
        match self.companies.get_mut(&id) {
            Some(mut entry) => {
                *entry = Company::from_new(id, company);
                Ok(entry.value().clone())
            }
            None => Err(StoreError::CompanyNotFound { id: id.0 }),
        }
    }

    fn delete_company(&self, id: CompanyId) -> StoreResult<bool> {
        Ok(self.companies.remove(&id).is_some())
    }

    fn get_children(&self, id: CompanyId) -> StoreResult<Vec<Company>> {
        let mut children: Vec<Company> = self
            .companies
            .iter()
            .filter(|entry| entry.parent_company_id == Some(id))
            .map(|entry| entry.value().clone())
            .collect();
        children.sort_by_key(|c| c.id);
        Ok(children)
    }

    fn company_count(&self) -> StoreResult<usize> {
        Ok(self.companies.len())
    }

    fn get_station(&self, id: StationId) -> StoreResult<Option<Station>> {
        Ok(self.stations.get(&id).map(|entry| entry.value().clone()))
    }

    fn list_stations(&self) -> StoreResult<Vec<Station>> {
        Ok(self.sorted_stations())
    }

    fn insert_station(&self, station: NewStation) -> StoreResult<Station> {
        let id = StationId(self.next_station_id.fetch_add(1, Ordering::SeqCst));
        let station = Station::from_new(id, station);
        self.stations.insert(id, station.clone());
        Ok(station)
    }

    fn update_station(&self, id: StationId, station: NewStation) -> StoreResult<Station> {
        match self.stations.get_mut(&id) {
            Some(mut entry) => {
                *entry = Station::from_new(id, station);
                Ok(entry.value().clone())
            }
            None => Err(StoreError::StationNotFound { id: id.0 }),
        }
    }

    fn delete_station(&self, id: StationId) -> StoreResult<bool> {
        Ok(self.stations.remove(&id).is_some())
    }

    fn stations_by_company_ids(&self, ids: &BTreeSet<CompanyId>) -> StoreResult<Vec<Station>> {
        let mut stations: Vec<Station> = self
            .stations
            .iter()
            .filter(|entry| ids.contains(&entry.company_id))
            .map(|entry| entry.value().clone())
            .collect();
        stations.sort_by_key(|s| s.id);
        Ok(stations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(name: &str, parent: Option<u64>) -> NewCompany {
        NewCompany {
            name: name.to_string(),
            parent_company_id: parent.map(CompanyId),
        }
    }

    fn station(name: &str, company_id: u64, lat: f64, lon: f64) -> NewStation {
        NewStation {
            name: name.to_string(),
            latitude: lat,
            longitude: lon,
            company_id: CompanyId(company_id),
            address: "12 Market Street".to_string(),
        }
    }

    /// Ids are assigned sequentially starting at 1.
    #[test]
    fn test_insert_assigns_sequential_ids() {
        let store = InMemoryStore::new();
        let a = store.insert_company(company("Alpha Power", None)).unwrap();
        let b = store.insert_company(company("Beta Charge", Some(1))).unwrap();
        assert_eq!(a.id, CompanyId(1));
        assert_eq!(b.id, CompanyId(2));

        let s = store.insert_station(station("North Hub", 1, 1.0, 2.0)).unwrap();
        assert_eq!(s.id, StationId(1));
    }

    #[test]
    fn test_update_replaces_fields() {
        let store = InMemoryStore::new();
        store.insert_company(company("Alpha Power", None)).unwrap();
        store.insert_company(company("Beta Charge", Some(1))).unwrap();

        let updated = store
            .update_company(CompanyId(2), company("Beta Renamed", None))
            .unwrap();
        assert_eq!(updated.name, "Beta Renamed");
        assert!(updated.is_root());
        assert_eq!(store.get_company(CompanyId(2)).unwrap(), Some(updated));
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let store = InMemoryStore::new();
        let err = store
            .update_company(CompanyId(9), company("Ghost Corp", None))
            .unwrap_err();
        assert!(matches!(err, StoreError::CompanyNotFound { id: 9 }));

        let err = store
            .update_station(StationId(4), station("Nowhere", 1, 0.0, 0.0))
            .unwrap_err();
        assert!(matches!(err, StoreError::StationNotFound { id: 4 }));
    }

    /// Deleting a parent keeps its children and stations.
    #[test]
    fn test_delete_does_not_cascade() {
        let store = InMemoryStore::new();
        store.insert_company(company("Alpha Power", None)).unwrap();
        store.insert_company(company("Beta Charge", Some(1))).unwrap();
        store.insert_station(station("North Hub", 1, 1.0, 2.0)).unwrap();

        assert!(store.delete_company(CompanyId(1)).unwrap());
        assert!(!store.delete_company(CompanyId(1)).unwrap());
        assert_eq!(store.company_count().unwrap(), 1);
        assert_eq!(store.list_stations().unwrap().len(), 1);
        assert_eq!(
            store.get_company(CompanyId(2)).unwrap().unwrap().parent_company_id,
            Some(CompanyId(1))
        );
    }

    #[test]
    fn test_children_and_station_queries() {
        let store = InMemoryStore::new();
        store.insert_company(company("Alpha Power", None)).unwrap();
        store.insert_company(company("Beta Charge", Some(1))).unwrap();
        store.insert_company(company("Gamma Volt", Some(1))).unwrap();
        store.insert_company(company("Delta Grid", Some(2))).unwrap();

        let children: Vec<u64> = store
            .get_children(CompanyId(1))
            .unwrap()
            .into_iter()
            .map(|c| c.id.0)
            .collect();
        assert_eq!(children, vec![2, 3]);

        store.insert_station(station("Station One", 3, 1.0, 1.0)).unwrap();
        store.insert_station(station("Station Two", 4, 2.0, 2.0)).unwrap();
        store.insert_station(station("Station Six", 1, 3.0, 3.0)).unwrap();

        let ids: BTreeSet<CompanyId> = [CompanyId(1), CompanyId(4)].into_iter().collect();
        let found: Vec<u64> = store
            .stations_by_company_ids(&ids)
            .unwrap()
            .into_iter()
            .map(|s| s.id.0)
            .collect();
        assert_eq!(found, vec![2, 3]);
    }

    #[test]
    fn test_export_and_restore() {
        let store = InMemoryStore::new();
        store.insert_company(company("Alpha Power", None)).unwrap();
        store.insert_company(company("Beta Charge", Some(1))).unwrap();
        store.delete_company(CompanyId(2)).unwrap();
        store.insert_station(station("North Hub", 1, 1.0, 2.0)).unwrap();

        let dataset = store.export();
        assert_eq!(dataset.next_company_id, 3);

        let restored = InMemoryStore::from_dataset(dataset.clone());
        assert_eq!(restored.export(), dataset);

        // deleted ids are not reused
        let next = restored.insert_company(company("Gamma Volt", None)).unwrap();
        assert_eq!(next.id, CompanyId(3));
    }

    #[test]
    fn test_restore_repairs_stale_sequence() {
        let dataset = Dataset {
            companies: vec![Company {
                id: CompanyId(5),
                name: "Legacy Energy".into(),
                parent_company_id: None,
            }],
            stations: vec![],
            next_company_id: 0,
            next_station_id: 0,
        };
        let store = InMemoryStore::from_dataset(dataset);
        let next = store.insert_company(company("Fresh Start", None)).unwrap();
        assert_eq!(next.id, CompanyId(6));
        let s = store.insert_station(station("First Light", 5, 0.0, 0.0)).unwrap();
        assert_eq!(s.id, StationId(1));
    }
}
