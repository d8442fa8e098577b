use stationhub_error::{HubResult, ResultExt, StoreError, ValidationError};

use super::{CommandExecute, StationForm, Validate};
use crate::{
    database::{NewStation, Station, StationId},
    engine::{Storage, StorageEngine},
};

/// Команда `GET /api/station`.
#[derive(Debug)]
pub struct ListStationsCommand;

/// Команда `POST /api/station`.
#[derive(Debug)]
pub struct CreateStationCommand {
    pub form: StationForm,
}

/// Команда `GET /api/station/{id}`.
#[derive(Debug)]
pub struct GetStationCommand {
    pub id: StationId,
}

/// Команда `PUT /api/station/{id}`: заменяет все поля станции.
#[derive(Debug)]
pub struct UpdateStationCommand {
    pub id: StationId,
    pub form: StationForm,
}

/// Команда `DELETE /api/station/{id}`.
#[derive(Debug)]
pub struct DeleteStationCommand {
    pub id: StationId,
}

impl CommandExecute for ListStationsCommand {
    type Output = Vec<Station>;

    fn execute(
        &self,
        store: &StorageEngine,
    ) -> HubResult<Vec<Station>> {
        store
            .list_stations()
            .map_err(|e| StoreError::backend("retrieve stations", e).into())
    }

    fn command_name(&self) -> &'static str {
        "LIST_STATIONS"
    }
}

impl CommandExecute for CreateStationCommand {
    type Output = Station;

    fn execute(
        &self,
        store: &StorageEngine,
    ) -> HubResult<Station> {
        let station = self.form.clone().validate()?;
        ensure_owner_exists(store, &station)?;
        store.insert_station(station).context("Creating station")
    }

    fn command_name(&self) -> &'static str {
        "CREATE_STATION"
    }
}

impl CommandExecute for GetStationCommand {
    type Output = Station;

    fn execute(
        &self,
        store: &StorageEngine,
    ) -> HubResult<Station> {
        find_station(store, self.id)
    }

    fn command_name(&self) -> &'static str {
        "GET_STATION"
    }
}

impl CommandExecute for UpdateStationCommand {
    type Output = Station;

    fn execute(
        &self,
        store: &StorageEngine,
    ) -> HubResult<Station> {
        find_station(store, self.id)?;
        let station = self.form.clone().validate()?;
        ensure_owner_exists(store, &station)?;
        store
            .update_station(self.id, station)
            .with_context(|| format!("Updating station {}", self.id))
    }

    fn command_name(&self) -> &'static str {
        "UPDATE_STATION"
    }
}

impl CommandExecute for DeleteStationCommand {
    type Output = ();

    fn execute(
        &self,
        store: &StorageEngine,
    ) -> HubResult<()> {
        if store.delete_station(self.id)? {
            Ok(())
        } else {
            Err(StoreError::StationNotFound { id: self.id.get() }.into())
        }
    }

    fn command_name(&self) -> &'static str {
        "DELETE_STATION"
    }
}

fn find_station(
    store: &StorageEngine,
    id: StationId,
) -> HubResult<Station> {
    store
        .get_station(id)?
        .ok_or_else(|| StoreError::StationNotFound { id: id.get() }.into())
}

fn ensure_owner_exists(
    store: &StorageEngine,
    station: &NewStation,
) -> HubResult<()> {
    if !store.company_exists(station.company_id)? {
        return Err(ValidationError::UnknownCompany {
            field: "company_id",
            id: station.company_id.get(),
        }
        .into());
    }
    Ok(())
}
