/// Географическая точка (долгота и широта, градусы).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl GeoPoint {
    pub fn new(
        lat: f64,
        lon: f64,
    ) -> Self {
        Self { lon, lat }
    }

    /// Ключ для точного сравнения координат: `-0.0` и `0.0` совпадают.
    pub fn key(&self) -> (u64, u64) {
        (coord_bits(self.lat), coord_bits(self.lon))
    }
}

/// Битовое представление координаты, `-0.0` нормализуется в `0.0`.
pub fn coord_bits(value: f64) -> u64 {
    (value + 0.0).to_bits()
}
