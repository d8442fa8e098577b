use stationhub_error::HubResult;

use super::{CommandExecute, RadiusParams, Validate};
use crate::{
    application::{find_within_radius, RadiusGroups},
    engine::StorageEngine,
};

/// Команда `GET /api/stations-within-radius?latitude=&longitude=&radius=`
///
/// Ищет станции в радиусе `radius` км от точки и группирует их по
/// координатам. Радиус `0` возвращает только станции в точности в этой точке.
#[derive(Debug)]
pub struct StationsWithinRadiusCommand {
    pub params: RadiusParams,
}

impl CommandExecute for StationsWithinRadiusCommand {
    type Output = RadiusGroups;

    fn execute(
        &self,
        store: &StorageEngine,
    ) -> HubResult<RadiusGroups> {
        let query = self.params.clone().validate()?;
        find_within_radius(store, &query)
    }

    fn command_name(&self) -> &'static str {
        "STATIONS_WITHIN_RADIUS"
    }
}
