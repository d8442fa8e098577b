//! Генераторы данных для бенчмарков.

use rand::{rngs::SmallRng, Rng, SeedableRng};
use stationhub::{CompanyId, InMemoryStore, NewCompany, NewStation, Storage, StoreResult};

const SEED: u64 = 0x5eed;

/// Хранилище с одной компанией и `count` станциями, равномерно
/// разбросанными по сфере.
pub fn store_with_stations(count: usize) -> StoreResult<InMemoryStore> {
    let store = InMemoryStore::new();
    let owner = store.insert_company(NewCompany {
        name: "Benchmark Owner".into(),
        parent_company_id: None,
    })?;

    let mut rng = SmallRng::seed_from_u64(SEED);
    for i in 0..count {
        store.insert_station(NewStation {
            name: format!("Station {i}"),
            latitude: rng.gen_range(-90.0..=90.0),
            longitude: rng.gen_range(-180.0..=180.0),
            company_id: owner.id,
            address: "Benchmark street".into(),
        })?;
    }
    Ok(store)
}

/// Полное `fanout`-арное дерево глубины `depth`, по одной станции на
/// компанию. Возвращает хранилище и корень.
pub fn company_tree(
    fanout: usize,
    depth: usize,
) -> StoreResult<(InMemoryStore, CompanyId)> {
    let store = InMemoryStore::new();
    let root = add_company(&store, None)?;

    let mut level = vec![root];
    for _ in 0..depth {
        let mut next = Vec::with_capacity(level.len() * fanout);
        for parent in &level {
            for _ in 0..fanout {
                next.push(add_company(&store, Some(*parent))?);
            }
        }
        level = next;
    }
    Ok((store, root))
}

/// Цепочка из `len` компаний, каждая дочерняя для предыдущей.
pub fn company_chain(len: usize) -> StoreResult<(InMemoryStore, CompanyId)> {
    let store = InMemoryStore::new();
    let root = add_company(&store, None)?;
    let mut parent = root;
    for _ in 1..len {
        parent = add_company(&store, Some(parent))?;
    }
    Ok((store, root))
}

fn add_company(
    store: &InMemoryStore,
    parent: Option<CompanyId>,
) -> StoreResult<CompanyId> {
    let company = store.insert_company(NewCompany {
        name: "Benchmark company".into(),
        parent_company_id: parent,
    })?;
    store.insert_station(NewStation {
        name: format!("Station of {}", company.id),
        latitude: 0.0,
        longitude: 0.0,
        company_id: company.id,
        address: "Benchmark street".into(),
    })?;
    Ok(company.id)
}
