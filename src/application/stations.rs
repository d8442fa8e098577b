use stationhub_error::{HubResult, ResultExt, StoreError};
use tracing::debug;

use super::resolve_descendants;
use crate::{
    database::{CompanyId, Station},
    engine::Storage,
};

/// Stations owned by `company_id` or any of its descendants, in store order.
///
/// Fails with `CompanyNotFound` before touching the hierarchy when the
/// company does not exist.
pub fn stations_for_company_tree(
    store: &dyn Storage,
    company_id: CompanyId,
) -> HubResult<Vec<Station>> {
    if !store.company_exists(company_id)? {
        return Err(StoreError::CompanyNotFound {
            id: company_id.get(),
        }
        .into());
    }

    let mut owners = resolve_descendants(store, company_id)?;
    owners.insert(company_id);

    let stations = store
        .stations_by_company_ids(&owners)
        .context("Loading stations of company tree")?;

    debug!(
        company_id = %company_id,
        companies = owners.len(),
        stations = stations.len(),
        "Aggregated stations for company tree"
    );
    Ok(stations)
}
