use std::collections::BTreeSet;

use tracing::info;

use super::{InMemoryStore, InPersistentStore, Storage, StoreResult};
use crate::{
    config::{StorageConfig, StorageKind},
    database::{Company, CompanyId, NewCompany, NewStation, Station, StationId},
};

pub enum StorageEngine {
    InMemory(InMemoryStore),
    InPersistent(InPersistentStore),
}

impl StorageEngine {
    /// Initialize storage engine based on the passed configuration.
    pub fn initialize(config: &StorageConfig) -> StoreResult<Self> {
        let engine = match config.kind {
            StorageKind::Memory => Self::InMemory(InMemoryStore::new()),
            StorageKind::Persistent => {
                Self::InPersistent(InPersistentStore::open(&config.snapshot_path)?)
            }
        };
        info!(kind = %engine.kind(), "Storage engine initialized");
        Ok(engine)
    }

    /// Gets a reference to the specific storage via the `Storage` common trait.
    pub fn get_store(&self) -> &dyn Storage {
        match self {
            Self::InMemory(store) => store,
            Self::InPersistent(store) => store,
        }
    }

    pub fn kind(&self) -> StorageKind {
        match self {
            Self::InMemory(_) => StorageKind::Memory,
            Self::InPersistent(_) => StorageKind::Persistent,
        }
    }
}

impl Default for StorageEngine {
    fn default() -> Self {
        Self::InMemory(InMemoryStore::new())
    }
}

impl Storage for StorageEngine {
    fn get_company(&self, id: CompanyId) -> StoreResult<Option<Company>> {
        self.get_store().get_company(id)
    }

    fn list_companies(&self) -> StoreResult<Vec<Company>> {
        self.get_store().list_companies()
    }

    fn insert_company(&self, company: NewCompany) -> StoreResult<Company> {
        self.get_store().insert_company(company)
    }

    fn update_company(&self, id: CompanyId, company: NewCompany) -> StoreResult<Company> {
        self.get_store().update_company(id, company)
    }

    fn delete_company(&self, id: CompanyId) -> StoreResult<bool> {
        self.get_store().delete_company(id)
    }

    fn get_children(&self, id: CompanyId) -> StoreResult<Vec<Company>> {
        self.get_store().get_children(id)
    }

    fn company_count(&self) -> StoreResult<usize> {
        self.get_store().company_count()
    }

    fn get_station(&self, id: StationId) -> StoreResult<Option<Station>> {
        self.get_store().get_station(id)
    }

    fn list_stations(&self) -> StoreResult<Vec<Station>> {
        self.get_store().list_stations()
    }

    fn insert_station(&self, station: NewStation) -> StoreResult<Station> {
        self.get_store().insert_station(station)
    }

    fn update_station(&self, id: StationId, station: NewStation) -> StoreResult<Station> {
        self.get_store().update_station(id, station)
    }

    fn delete_station(&self, id: StationId) -> StoreResult<bool> {
        self.get_store().delete_station(id)
    }

    fn stations_by_company_ids(&self, ids: &BTreeSet<CompanyId>) -> StoreResult<Vec<Station>> {
        self.get_store().stations_by_company_ids(ids)
    }
}
