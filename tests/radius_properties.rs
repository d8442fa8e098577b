//! Property-based tests для поиска станций в радиусе.
//!
//! Генерируют случайные наборы станций и точки запроса и проверяют, что
//! результат не зависит от порядка вызовов и не выходит за радиус.

use proptest::prelude::*;
use stationhub::{
    find_within_radius, great_circle_distance, CompanyId, GeoPoint, InMemoryStore, NewCompany,
    NewStation, RadiusQuery, Storage,
};

const PROPTEST_CASES: u32 = 256;

// ============================================================================
// ГЕНЕРАТОРЫ
// ============================================================================

fn point_strategy() -> impl Strategy<Value = (f64, f64)> {
    (-90.0f64..=90.0, -180.0f64..=180.0)
}

fn points_strategy() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec(point_strategy(), 0..40)
}

fn store_with(points: &[(f64, f64)]) -> InMemoryStore {
    let store = InMemoryStore::new();
    let owner = store
        .insert_company(NewCompany {
            name: "Property Owner".into(),
            parent_company_id: None,
        })
        .unwrap();

    for (i, (lat, lon)) in points.iter().enumerate() {
        store
            .insert_station(NewStation {
                name: format!("Station {i}"),
                latitude: *lat,
                longitude: *lon,
                company_id: owner.id,
                address: "Generated address".into(),
            })
            .unwrap();
    }
    store
}

// ============================================================================
// СВОЙСТВА
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

    /// Ни одна станция в ответе не дальше радиуса, и каждая станция в
    /// пределах радиуса попала в ответ.
    #[test]
    fn prop_radius_filter_is_exact(
        points in points_strategy(),
        center in point_strategy(),
        radius in 0.0f64..20_100.0,
    ) {
        let store = store_with(&points);
        let query = RadiusQuery { latitude: center.0, longitude: center.1, radius_km: radius };
        let groups = find_within_radius(&store, &query).unwrap();

        for found in groups.stations() {
            prop_assert!(found.distance <= radius);
        }

        let center = GeoPoint::new(center.0, center.1);
        let expected = points
            .iter()
            .filter(|(lat, lon)| great_circle_distance(center, GeoPoint::new(*lat, *lon)) <= radius)
            .count();
        prop_assert_eq!(groups.len(), expected);
    }

    /// Станции внутри ответа упорядочены по неубыванию расстояния.
    #[test]
    fn prop_results_sorted_by_distance(
        points in points_strategy(),
        center in point_strategy(),
    ) {
        let store = store_with(&points);
        let query = RadiusQuery { latitude: center.0, longitude: center.1, radius_km: 25_000.0 };
        let groups = find_within_radius(&store, &query).unwrap();

        // внутри каждой группы порядок совпадает с порядком сортировки
        for lat_group in &groups.groups {
            for lon_group in &lat_group.longitudes {
                let distances: Vec<f64> = lon_group.stations.iter().map(|s| s.distance).collect();
                prop_assert!(distances.windows(2).all(|w| w[0] <= w[1]));
            }
        }
        prop_assert_eq!(groups.len(), points.len());
    }

    /// Повторный запрос к неизменному хранилищу даёт тот же JSON.
    #[test]
    fn prop_search_is_idempotent(
        points in points_strategy(),
        center in point_strategy(),
        radius in 0.0f64..20_100.0,
    ) {
        let store = store_with(&points);
        let query = RadiusQuery { latitude: center.0, longitude: center.1, radius_km: radius };

        let first = serde_json::to_string(&find_within_radius(&store, &query).unwrap()).unwrap();
        let second = serde_json::to_string(&find_within_radius(&store, &query).unwrap()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_distance_is_symmetric(a in point_strategy(), b in point_strategy()) {
        let a = GeoPoint::new(a.0, a.1);
        let b = GeoPoint::new(b.0, b.1);

        let ab = great_circle_distance(a, b);
        let ba = great_circle_distance(b, a);
        prop_assert!(ab.is_finite());
        prop_assert!((ab - ba).abs() < 1e-9);
    }

    /// При нулевом радиусе возвращаются только станции в точке запроса.
    #[test]
    fn prop_zero_radius_matches_exact_coordinate(
        points in points_strategy(),
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!points.is_empty());
        let (lat, lon) = points[pick.index(points.len())];
        let store = store_with(&points);

        let query = RadiusQuery { latitude: lat, longitude: lon, radius_km: 0.0 };
        let groups = find_within_radius(&store, &query).unwrap();

        prop_assert!(!groups.is_empty());
        for found in groups.stations() {
            prop_assert_eq!(found.distance, 0.0);
            prop_assert_eq!(found.station.latitude, lat);
            prop_assert_eq!(found.station.longitude, lon);
        }
    }

    /// Станция ровно на границе радиуса включается в ответ.
    #[test]
    fn prop_boundary_station_included(
        station in point_strategy(),
        center in point_strategy(),
    ) {
        let store = store_with(&[station]);
        let radius = great_circle_distance(
            GeoPoint::new(center.0, center.1),
            GeoPoint::new(station.0, station.1),
        );

        let query = RadiusQuery { latitude: center.0, longitude: center.1, radius_km: radius };
        let groups = find_within_radius(&store, &query).unwrap();
        prop_assert_eq!(groups.len(), 1);
    }
}

#[test]
fn test_company_id_unused_by_search() {
    // станции без существующей компании тоже участвуют в поиске
    let store = InMemoryStore::new();
    store
        .insert_station(NewStation {
            name: "Detached station".into(),
            latitude: 1.0,
            longitude: 1.0,
            company_id: CompanyId(404),
            address: "Nowhere street".into(),
        })
        .unwrap();

    let query = RadiusQuery {
        latitude: 1.0,
        longitude: 1.0,
        radius_km: 1.0,
    };
    assert_eq!(find_within_radius(&store, &query).unwrap().len(), 1);
}
