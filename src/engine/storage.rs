use std::collections::BTreeSet;

use stationhub_error::StoreError;

use crate::database::{Company, CompanyId, NewCompany, NewStation, Station, StationId};

pub type StoreResult<T> = Result<T, StoreError>;

/// Record store for companies and stations.
///
/// Listing methods return records in ascending id order. Methods take
/// `&self`: implementations handle their own interior locking.
pub trait Storage: Send + Sync {
    fn get_company(&self, id: CompanyId) -> StoreResult<Option<Company>>;
    fn list_companies(&self) -> StoreResult<Vec<Company>>;
    fn insert_company(&self, company: NewCompany) -> StoreResult<Company>;
    /// Replaces every mutable field. Fails with `CompanyNotFound` if `id` is absent.
    fn update_company(&self, id: CompanyId, company: NewCompany) -> StoreResult<Company>;
    /// Returns `false` when nothing was removed. Children and stations are kept.
    fn delete_company(&self, id: CompanyId) -> StoreResult<bool>;
    /// Direct children of `id`.
    fn get_children(&self, id: CompanyId) -> StoreResult<Vec<Company>>;
    fn company_count(&self) -> StoreResult<usize>;

    fn get_station(&self, id: StationId) -> StoreResult<Option<Station>>;
    fn list_stations(&self) -> StoreResult<Vec<Station>>;
    fn insert_station(&self, station: NewStation) -> StoreResult<Station>;
    /// Fails with `StationNotFound` if `id` is absent.
    fn update_station(&self, id: StationId, station: NewStation) -> StoreResult<Station>;
    fn delete_station(&self, id: StationId) -> StoreResult<bool>;
    /// Stations owned by any company in `ids`.
    fn stations_by_company_ids(&self, ids: &BTreeSet<CompanyId>) -> StoreResult<Vec<Station>>;

    fn company_exists(&self, id: CompanyId) -> StoreResult<bool> {
        Ok(self.get_company(id)?.is_some())
    }
}
