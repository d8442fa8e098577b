use crate::database::GeoPoint;

/// Средний радиус Земли, километры.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Расстояние по большой окружности (сферическая теорема косинусов), км.
///
/// Аргумент `acos` ограничивается отрезком `[-1, 1]`: для почти совпадающих
/// точек погрешность округления иначе даёт `NaN`. Для совпадающих координат
/// результат ровно `0`.
pub fn great_circle_distance(
    from: GeoPoint,
    to: GeoPoint,
) -> f64 {
    if from.key() == to.key() {
        return 0.0;
    }

    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let dlon = to.lon.to_radians() - from.lon.to_radians();

    let cos_angle = lat1.cos() * lat2.cos() * dlon.cos() + lat1.sin() * lat2.sin();

    EARTH_RADIUS_KM * cos_angle.clamp(-1.0, 1.0).acos()
}

/// Формула гаверсинуса на той же сфере, км.
pub fn haversine_distance(
    from: GeoPoint,
    to: GeoPoint,
) -> f64 {
    let dlat = (to.lat - from.lat).to_radians();
    let dlon = (to.lon - from.lon).to_radians();
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();

    let a = (dlat * 0.5).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon * 0.5).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
