use rand::{seq::SliceRandom, Rng};
use tracing::info;

use super::{Storage, StoreResult};
use crate::database::{CompanyId, NewCompany, NewStation};

const ROOT_COMPANIES: usize = 5;
const CHILDREN_OF_FIRST: usize = 10;
const CHILDREN_OF_SECOND: usize = 7;
const STATIONS: usize = 20;

const NAME_HEADS: &[&str] = &[
    "Volt", "Ampere", "Ohm", "Tesla", "Faraday", "Current", "Spark", "Dynamo", "Solar", "Nordic",
];
const NAME_TAILS: &[&str] = &[
    "Energy", "Charging", "Power", "Mobility", "Grid", "Networks", "Electric", "Systems",
];
const STREETS: &[&str] = &[
    "Market", "Harbour", "Station", "Mill", "Church", "Park", "Bridge", "Meadow", "Quarry",
];
const STREET_KINDS: &[&str] = &["Street", "Road", "Avenue", "Lane", "Way"];

/// Numbers of records created by [`seed_demo_data`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub companies: usize,
    pub stations: usize,
}

/// Fills an empty store with demo data: five root companies, ten children
/// of the first, seven children of the second and twenty stations at
/// random coordinates owned by random seeded companies.
///
/// Does nothing if the store already holds companies.
pub fn seed_demo_data<R: Rng>(
    store: &dyn Storage,
    rng: &mut R,
) -> StoreResult<SeedReport> {
    if store.company_count()? > 0 {
        info!("Store already populated, skipping demo data");
        return Ok(SeedReport::default());
    }

    let mut ids = Vec::with_capacity(ROOT_COMPANIES + CHILDREN_OF_FIRST + CHILDREN_OF_SECOND);
    for _ in 0..ROOT_COMPANIES {
        ids.push(insert_company(store, rng, None)?);
    }
    let (first, second) = (ids[0], ids[1]);
    for _ in 0..CHILDREN_OF_FIRST {
        ids.push(insert_company(store, rng, Some(first))?);
    }
    for _ in 0..CHILDREN_OF_SECOND {
        ids.push(insert_company(store, rng, Some(second))?);
    }

    for _ in 0..STATIONS {
        let company_id = *ids.choose(rng).unwrap_or(&first);
        store.insert_station(NewStation {
            name: format!("{} Station", pick(rng, NAME_HEADS)),
            latitude: rng.gen_range(-90.0..=90.0),
            longitude: rng.gen_range(-180.0..=180.0),
            company_id,
            address: format!(
                "{} {} {}",
                rng.gen_range(1..=250),
                pick(rng, STREETS),
                pick(rng, STREET_KINDS)
            ),
        })?;
    }

    let report = SeedReport {
        companies: ids.len(),
        stations: STATIONS,
    };
    info!(companies = report.companies, stations = report.stations, "Demo data seeded");
    Ok(report)
}

fn insert_company<R: Rng>(
    store: &dyn Storage,
    rng: &mut R,
    parent: Option<CompanyId>,
) -> StoreResult<CompanyId> {
    let name = format!("{} {}", pick(rng, NAME_HEADS), pick(rng, NAME_TAILS));
    let company = store.insert_company(NewCompany {
        name,
        parent_company_id: parent,
    })?;
    Ok(company.id)
}

fn pick<R: Rng>(
    rng: &mut R,
    items: &[&'static str],
) -> &'static str {
    items.choose(rng).copied().unwrap_or("Demo")
}
