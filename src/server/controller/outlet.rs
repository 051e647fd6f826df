use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        outlet::{
            LocationOutletsDto, NearbyOutletsDto, OutletServicesDto, OutletsDto, SingleOutletDto,
        },
    },
    server::{
        controller::{
            extract::{AppPath, AppQuery},
            param::{CategoryLocationParam, NearbyQueryParam, SearchParam},
        },
        error::AppError,
        model::outlet::{NearbyParam, Outlet},
        service::outlet::{parse_categories, OutletService},
        state::AppState,
    },
};

/// Tag for grouping outlet endpoints in OpenAPI documentation
pub static OUTLET_TAG: &str = "outlet";

pub const NO_OUTLETS_IN_LOCATION: &str = "No outlets found in this location.";

fn outlets_dto(outlets: Vec<Outlet>) -> OutletsDto {
    OutletsDto {
        outlets: outlets.into_iter().map(Outlet::into_dto).collect(),
    }
}

/// List every outlet.
#[utoipa::path(
    get,
    path = "/outlets",
    tag = OUTLET_TAG,
    responses(
        (status = 200, description = "All outlets", body = OutletsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_outlets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let outlets = OutletService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(outlets_dto(outlets))))
}

/// Search outlets by name.
///
/// Matches any outlet whose name contains the query, ignoring case.
#[utoipa::path(
    get,
    path = "/outlets/search",
    tag = OUTLET_TAG,
    params(SearchParam),
    responses(
        (status = 200, description = "Outlets whose name matches", body = OutletsDto),
        (status = 400, description = "Missing query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_outlets(
    State(state): State<AppState>,
    AppQuery(param): AppQuery<SearchParam>,
) -> Result<impl IntoResponse, AppError> {
    let outlets = OutletService::new(&state.db).search(&param.query).await?;

    Ok((StatusCode::OK, Json(outlets_dto(outlets))))
}

/// Find outlets matching both categories and a location.
///
/// Returns outlets whose address contains the location and that offer at least one of
/// the comma-separated categories.
#[utoipa::path(
    get,
    path = "/outlets/category/location",
    tag = OUTLET_TAG,
    params(CategoryLocationParam),
    responses(
        (status = 200, description = "Matching outlets", body = OutletsDto),
        (status = 400, description = "Missing categories or location", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_outlets_by_category_and_location(
    State(state): State<AppState>,
    AppQuery(param): AppQuery<CategoryLocationParam>,
) -> Result<impl IntoResponse, AppError> {
    let categories = parse_categories(&param.categories);

    let outlets = OutletService::new(&state.db)
        .by_categories_and_location(&categories, &param.location)
        .await?;

    Ok((StatusCode::OK, Json(outlets_dto(outlets))))
}

/// Find outlets by location.
///
/// Matches any outlet whose address contains the location, ignoring case. When nothing
/// matches, a message is returned instead of an empty list.
#[utoipa::path(
    get,
    path = "/outlets/location/{location}",
    tag = OUTLET_TAG,
    params(
        ("location" = String, Path, description = "Text contained in the outlet address")
    ),
    responses(
        (status = 200, description = "Matching outlets or a not-found message", body = LocationOutletsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_outlets_by_location(
    State(state): State<AppState>,
    AppPath(location): AppPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let outlets = OutletService::new(&state.db).by_location(&location).await?;

    let dto = if outlets.is_empty() {
        LocationOutletsDto::Message(MessageDto {
            message: NO_OUTLETS_IN_LOCATION.to_string(),
        })
    } else {
        LocationOutletsDto::Outlets(outlets_dto(outlets))
    };

    Ok((StatusCode::OK, Json(dto)))
}

/// Find outlets near a point.
///
/// Returns geocoded outlets within `radius_km` of the point, nearest first, each with
/// its distance in kilometres.
#[utoipa::path(
    get,
    path = "/outlets/nearby",
    tag = OUTLET_TAG,
    params(NearbyQueryParam),
    responses(
        (status = 200, description = "Outlets within the radius", body = NearbyOutletsDto),
        (status = 400, description = "Invalid coordinates or radius", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_nearby_outlets(
    State(state): State<AppState>,
    AppQuery(param): AppQuery<NearbyQueryParam>,
) -> Result<impl IntoResponse, AppError> {
    let nearby = OutletService::new(&state.db)
        .nearby(NearbyParam {
            lat: param.lat,
            lng: param.lng,
            radius_km: param.radius_km,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(NearbyOutletsDto {
            outlets: nearby.into_iter().map(|outlet| outlet.into_dto()).collect(),
        }),
    ))
}

/// Get a single outlet.
#[utoipa::path(
    get,
    path = "/outlets/{outlet_id}",
    tag = OUTLET_TAG,
    params(
        ("outlet_id" = i32, Path, description = "Outlet ID")
    ),
    responses(
        (status = 200, description = "The outlet", body = SingleOutletDto),
        (status = 404, description = "Outlet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_outlet(
    State(state): State<AppState>,
    AppPath(outlet_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let outlet = OutletService::new(&state.db).get_by_id(outlet_id).await?;

    Ok((
        StatusCode::OK,
        Json(SingleOutletDto {
            outlet: outlet.into_dto(),
        }),
    ))
}

/// Find outlets by category.
///
/// Accepts one or more comma-separated categories and returns outlets offering any of
/// them, each outlet once.
#[utoipa::path(
    get,
    path = "/outlets/category/{categories}",
    tag = OUTLET_TAG,
    params(
        ("categories" = String, Path, description = "Comma-separated category names, e.g. `24 Hours,WiFi`")
    ),
    responses(
        (status = 200, description = "Outlets offering any of the categories", body = OutletsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_outlets_by_category(
    State(state): State<AppState>,
    AppPath(categories): AppPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let categories = parse_categories(&categories);

    let outlets = OutletService::new(&state.db)
        .by_categories(&categories)
        .await?;

    Ok((StatusCode::OK, Json(outlets_dto(outlets))))
}

/// List the services offered by an outlet.
#[utoipa::path(
    get,
    path = "/outlets/{outlet_id}/services",
    tag = OUTLET_TAG,
    params(
        ("outlet_id" = i32, Path, description = "Outlet ID")
    ),
    responses(
        (status = 200, description = "Services of the outlet", body = OutletServicesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_outlet_services(
    State(state): State<AppState>,
    AppPath(outlet_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let services = OutletService::new(&state.db).services(outlet_id).await?;

    Ok((
        StatusCode::OK,
        Json(OutletServicesDto {
            outlet_id,
            services,
        }),
    ))
}
