//! Входные формы API и их проверка.
//!
//! Формы десериализуются из JSON-тела или query-строки с опциональными
//! полями, а [`Validate`] превращает их в типизированные значения или
//! возвращает [`ValidationError`]. Проверки, требующие хранилища (например,
//! существование компании), выполняются в самих командах.

use serde::Deserialize;
use serde_json::Value as JsonValue;
use stationhub_error::{HubResult, StoreError, ValidationError};

use crate::{
    application::RadiusQuery,
    database::{CompanyId, NewCompany, NewStation, RecordId},
};

/// Минимальная длина имени и адреса.
pub const MIN_TEXT_LEN: usize = 5;

pub trait Validate {
    type Output;

    fn validate(self) -> HubResult<Self::Output>;
}

/// Тело запроса создания/обновления компании.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanyForm {
    pub name: Option<JsonValue>,
    #[serde(default, alias = "parentId")]
    pub parent_company_id: Option<JsonValue>,
}

/// Тело запроса создания/обновления станции.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StationForm {
    pub name: Option<JsonValue>,
    pub latitude: Option<JsonValue>,
    pub longitude: Option<JsonValue>,
    pub company_id: Option<JsonValue>,
    pub address: Option<JsonValue>,
}

/// Параметры поиска по радиусу из query-строки.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RadiusParams {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub radius: Option<String>,
}

impl Validate for CompanyForm {
    type Output = NewCompany;

    fn validate(self) -> HubResult<NewCompany> {
        let name = text_field("name", self.name)?;
        let parent_company_id = optional_id("parent_company_id", self.parent_company_id)?;
        Ok(NewCompany {
            name,
            parent_company_id,
        })
    }
}

impl Validate for StationForm {
    type Output = NewStation;

    fn validate(self) -> HubResult<Self::Output> {
        let name = text_field("name", self.name)?;
        let latitude = coordinate("latitude", self.latitude)?;
        let longitude = coordinate("longitude", self.longitude)?;
        let company_id = optional_id("company_id", self.company_id)?
            .ok_or(ValidationError::Missing {
                field: "company_id",
            })?;
        let address = text_field("address", self.address)?;

        Ok(NewStation {
            name,
            latitude,
            longitude,
            company_id,
            address,
        })
    }
}

impl Validate for RadiusParams {
    type Output = RadiusQuery;

    fn validate(self) -> HubResult<RadiusQuery> {
        let latitude = query_number("latitude", self.latitude)?;
        let longitude = query_number("longitude", self.longitude)?;
        // любое конечное число: отрицательный радиус просто ничего не находит
        let radius_km = query_number("radius", self.radius)?;

        Ok(RadiusQuery {
            latitude,
            longitude,
            radius_km,
        })
    }
}

/// Разбирает идентификатор из сегмента пути. Сегмент, который не может
/// быть идентификатором, означает отсутствующую запись.
pub fn parse_id<T: RecordId>(raw: &str) -> HubResult<T> {
    raw.trim().parse::<T>().map_err(|_| {
        StoreError::UnresolvedKey {
            entity: T::ENTITY,
            raw: raw.to_string(),
        }
        .into()
    })
}

fn text_field(
    field: &'static str,
    value: Option<JsonValue>,
) -> HubResult<String> {
    let text = match value {
        None | Some(JsonValue::Null) => return Err(ValidationError::Missing { field }.into()),
        Some(JsonValue::String(s)) => s,
        Some(_) => return Err(ValidationError::NotString { field }.into()),
    };

    if text.trim().is_empty() {
        return Err(ValidationError::Missing { field }.into());
    }
    if text.chars().count() < MIN_TEXT_LEN {
        return Err(ValidationError::TooShort { field, min: MIN_TEXT_LEN }.into());
    }
    Ok(text)
}

fn number(
    field: &'static str,
    value: JsonValue,
) -> Result<f64, ValidationError> {
    let parsed = match value {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed
        .filter(|v| v.is_finite())
        .ok_or(ValidationError::NotNumeric { field })
}

fn coordinate(
    field: &'static str,
    value: Option<JsonValue>,
) -> HubResult<f64> {
    match value {
        None | Some(JsonValue::Null) => Err(ValidationError::Missing { field }.into()),
        Some(v) => Ok(number(field, v)?),
    }
}

fn optional_id(
    field: &'static str,
    value: Option<JsonValue>,
) -> HubResult<Option<CompanyId>> {
    let id = match value {
        None | Some(JsonValue::Null) => return Ok(None),
        Some(JsonValue::Number(n)) => n.as_u64(),
        Some(JsonValue::String(s)) => s.trim().parse::<u64>().ok(),
        Some(_) => None,
    };
    match id {
        Some(id) => Ok(Some(CompanyId(id))),
        None => Err(ValidationError::UnknownCompany { field, id: 0 }.into()),
    }
}

fn query_number(
    field: &'static str,
    value: Option<String>,
) -> HubResult<f64> {
    match value {
        Some(raw) if !raw.trim().is_empty() => Ok(number(field, JsonValue::String(raw))?),
        _ => Err(ValidationError::Missing { field }.into()),
    }
}
