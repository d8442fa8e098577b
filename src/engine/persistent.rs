use std::{collections::BTreeSet, fs, path::PathBuf};

use parking_lot::Mutex;
use stationhub_error::StoreError;
use tracing::{debug, info};

use super::{
    memory::{Dataset, InMemoryStore},
    storage::{Storage, StoreResult},
};
use crate::database::{Company, CompanyId, NewCompany, NewStation, Station, StationId};

/// In-memory tables mirrored to a JSON snapshot after every mutation.
///
/// The snapshot is written to a sibling temp file and renamed over the
/// previous one, so a crash leaves either the old or the new dataset.
pub struct InPersistentStore {
    tables: InMemoryStore,
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl InPersistentStore {
    /// Opens the snapshot at `path`, starting empty if the file does not exist.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let tables = match fs::read(&path) {
            Ok(bytes) => {
                let dataset: Dataset =
                    serde_json::from_slice(&bytes).map_err(|e| StoreError::CorruptedSnapshot {
                        path: path.display().to_string(),
                        reason: e.to_string(),
                    })?;
                info!(
                    path = %path.display(),
                    companies = dataset.companies.len(),
                    stations = dataset.stations.len(),
                    "Loaded snapshot"
                );
                InMemoryStore::from_dataset(dataset)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "No snapshot found, starting empty");
                InMemoryStore::new()
            }
            Err(e) => {
                return Err(StoreError::CorruptedSnapshot {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })
            }
        };

        Ok(Self {
            tables,
            path,
            write_lock: Mutex::new(()),
        })
    }

    /// Writes the current dataset to disk.
    pub fn persist(&self) -> StoreResult<()> {
        let _guard = self.write_lock.lock();
        let dataset = self.tables.export();
        let snapshot_err = |reason: String| StoreError::Snapshot {
            path: self.path.display().to_string(),
            reason,
        };

        let bytes = serde_json::to_vec_pretty(&dataset).map_err(|e| snapshot_err(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| snapshot_err(e.to_string()))?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &bytes).map_err(|e| snapshot_err(e.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|e| snapshot_err(e.to_string()))?;

        debug!(path = %self.path.display(), bytes = bytes.len(), "Snapshot written");
        Ok(())
    }

    fn persisted<T>(&self, result: StoreResult<T>) -> StoreResult<T> {
        let value = result?;
        self.persist()?;
        Ok(value)
    }
}

impl Storage for InPersistentStore {
    fn get_company(&self, id: CompanyId) -> StoreResult<Option<Company>> {
        self.tables.get_company(id)
    }

    fn list_companies(&self) -> StoreResult<Vec<Company>> {
        self.tables.list_companies()
    }

    fn insert_company(&self, company: NewCompany) -> StoreResult<Company> {
        self.persisted(self.tables.insert_company(company))
    }

    fn update_company(&self, id: CompanyId, company: NewCompany) -> StoreResult<Company> {
        self.persisted(self.tables.update_company(id, company))
    }

    fn delete_company(&self, id: CompanyId) -> StoreResult<bool> {
        let removed = self.tables.delete_company(id)?;
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    fn get_children(&self, id: CompanyId) -> StoreResult<Vec<Company>> {
        self.tables.get_children(id)
    }

    fn company_count(&self) -> StoreResult<usize> {
        self.tables.company_count()
    }

    fn get_station(&self, id: StationId) -> StoreResult<Option<Station>> {
        self.tables.get_station(id)
    }

    fn list_stations(&self) -> StoreResult<Vec<Station>> {
        self.tables.list_stations()
    }

    fn insert_station(&self, station: NewStation) -> StoreResult<Station> {
        self.persisted(self.tables.insert_station(station))
    }

    fn update_station(&self, id: StationId, station: NewStation) -> StoreResult<Station> {
        self.persisted(self.tables.update_station(id, station))
    }

    fn delete_station(&self, id: StationId) -> StoreResult<bool> {
        let removed = self.tables.delete_station(id)?;
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    fn stations_by_company_ids(&self, ids: &BTreeSet<CompanyId>) -> StoreResult<Vec<Station>> {
        self.tables.stations_by_company_ids(ids)
    }
}
