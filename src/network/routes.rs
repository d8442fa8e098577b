use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::json;

use super::ApiError;
use crate::{
    command::{
        parse_id, run_command, ChildStationsCommand, CommandExecute, CompanyForm,
        CreateCompanyCommand, CreateStationCommand, DeleteCompanyCommand, DeleteStationCommand,
        GetCompanyCommand, GetStationCommand, ListCompaniesCommand, ListStationsCommand,
        RadiusParams, StationForm, StationsWithinRadiusCommand, UpdateCompanyCommand,
        UpdateStationCommand,
    },
    engine::StorageEngine,
};

type Store = web::Data<StorageEngine>;

/// Registers every endpoint under `/api` plus `/health`.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health).service(
        web::scope("/api")
            .service(list_companies)
            .service(create_company)
            .service(get_company)
            .service(update_company)
            .service(delete_company)
            .service(child_stations)
            .service(list_stations)
            .service(create_station)
            .service(get_station)
            .service(update_station)
            .service(delete_station)
            .service(stations_within_radius),
    );
}

/// Runs a command on the blocking pool.
async fn execute<C>(
    store: Store,
    command: C,
) -> Result<C::Output, ApiError>
where
    C: CommandExecute + Send + 'static,
    C::Output: Send + 'static,
{
    web::block(move || run_command(&command, &store))
        .await
        .map_err(|e| ApiError::internal(format!("blocking task failed: {e}")))?
        .map_err(ApiError::from)
}

#[get("/health")]
async fn health(store: Store) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "storage": store.kind().to_string(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[get("/company")]
async fn list_companies(store: Store) -> Result<HttpResponse, ApiError> {
    let companies = execute(store, ListCompaniesCommand).await?;
    Ok(HttpResponse::Ok().json(companies))
}

#[post("/company")]
async fn create_company(
    store: Store,
    body: web::Json<CompanyForm>,
) -> Result<HttpResponse, ApiError> {
    let command = CreateCompanyCommand {
        form: body.into_inner(),
    };
    let company = execute(store, command).await?;
    Ok(HttpResponse::Created().json(company))
}

#[get("/company/{id}")]
async fn get_company(
    store: Store,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path)?;
    let company = execute(store, GetCompanyCommand { id }).await?;
    Ok(HttpResponse::Ok().json(company))
}

#[put("/company/{id}")]
async fn update_company(
    store: Store,
    path: web::Path<String>,
    body: web::Json<CompanyForm>,
) -> Result<HttpResponse, ApiError> {
    let command = UpdateCompanyCommand {
        id: parse_id(&path)?,
        form: body.into_inner(),
    };
    let company = execute(store, command).await?;
    Ok(HttpResponse::Ok().json(company))
}

#[delete("/company/{id}")]
async fn delete_company(
    store: Store,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path)?;
    execute(store, DeleteCompanyCommand { id }).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[get("/child-stations/{company_id}")]
async fn child_stations(
    store: Store,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let company_id = parse_id(&path)?;
    let stations = execute(store, ChildStationsCommand { company_id }).await?;
    Ok(HttpResponse::Ok().json(stations))
}

#[get("/station")]
async fn list_stations(store: Store) -> Result<HttpResponse, ApiError> {
    let stations = execute(store, ListStationsCommand).await?;
    Ok(HttpResponse::Ok().json(stations))
}

#[post("/station")]
async fn create_station(
    store: Store,
    body: web::Json<StationForm>,
) -> Result<HttpResponse, ApiError> {
    let command = CreateStationCommand {
        form: body.into_inner(),
    };
    let station = execute(store, command).await?;
    Ok(HttpResponse::Created().json(station))
}

#[get("/station/{id}")]
async fn get_station(
    store: Store,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path)?;
    let station = execute(store, GetStationCommand { id }).await?;
    Ok(HttpResponse::Ok().json(station))
}

#[put("/station/{id}")]
async fn update_station(
    store: Store,
    path: web::Path<String>,
    body: web::Json<StationForm>,
) -> Result<HttpResponse, ApiError> {
    let command = UpdateStationCommand {
        id: parse_id(&path)?,
        form: body.into_inner(),
    };
    let station = execute(store, command).await?;
    Ok(HttpResponse::Ok().json(station))
}

#[delete("/station/{id}")]
async fn delete_station(
    store: Store,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path)?;
    execute(store, DeleteStationCommand { id }).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[get("/stations-within-radius")]
async fn stations_within_radius(
    store: Store,
    query: web::Query<RadiusParams>,
) -> Result<HttpResponse, ApiError> {
    let command = StationsWithinRadiusCommand {
        params: query.into_inner(),
    };
    let groups = execute(store, command).await?;
    Ok(HttpResponse::Ok().json(groups))
}
