// src/handlers/locality.rs

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{
    common::{
        error::{ApiError, AppError},
        web,
    },
    config::AppState,
    models::locality::Locality,
    services::locality_service,
};

// ---
// Payload: CreateLocalityPayload
// ---
// No corpo o campo chega como locality_id; a resposta serializa como id.
#[derive(Debug, Deserialize)]
pub struct CreateLocalityPayload {
    pub locality_id: Option<i32>,
    pub locality_name: Option<String>,
    pub province_name: Option<String>,
    pub country_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    pub id: Option<String>,
}

// ---
// Handler: create
// ---
pub async fn create(
    State(app_state): State<AppState>,
    payload: Result<Json<CreateLocalityPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) =
        payload.map_err(|rejection| ApiError::new(StatusCode::NOT_FOUND, rejection.body_text()))?;

    let missing = [
        (payload.locality_id.unwrap_or_default() <= 0, "field required: id"),
        (
            payload.locality_name.as_deref().unwrap_or_default().is_empty(),
            "field required: locality_name",
        ),
        (
            payload.province_name.as_deref().unwrap_or_default().is_empty(),
            "field required: province_name",
        ),
        (
            payload.country_name.as_deref().unwrap_or_default().is_empty(),
            "field required: country_name",
        ),
    ];
    for (absent, message) in missing {
        if absent {
            return Err(ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, message));
        }
    }

    let locality = Locality {
        id: payload.locality_id.unwrap_or_default(),
        locality_name: payload.locality_name.unwrap_or_default(),
        province_name: payload.province_name.unwrap_or_default(),
        country_name: payload.country_name.unwrap_or_default(),
    };

    let locality = app_state
        .locality_service
        .create(locality)
        .await
        .map_err(|err| {
            let status = match &err {
                AppError::Conflict(_) => StatusCode::CONFLICT,
                _ => StatusCode::UNPROCESSABLE_ENTITY,
            };
            ApiError::new(status, err.to_string())
        })?;

    Ok(web::success(StatusCode::CREATED, locality))
}

// ---
// Handler: report_sellers
// ---
pub async fn report_sellers(
    State(app_state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let id = match query.id {
        Some(raw) => Some(raw.parse::<i32>().map_err(|_| {
            ApiError::new(StatusCode::NOT_FOUND, locality_service::ERR_SELLERS_REPORT_ID)
        })?),
        None => None,
    };

    let rows = app_state
        .locality_service
        .sellers_report(id)
        .await
        .map_err(|err| ApiError::new(StatusCode::NOT_FOUND, err.to_string()))?;

    Ok(web::success(StatusCode::OK, rows))
}

// ---
// Handler: report_carries
// ---
pub async fn report_carries(
    State(app_state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let id = match query.id {
        Some(raw) => Some(raw.parse::<i32>().map_err(|_| {
            ApiError::new(StatusCode::NOT_FOUND, locality_service::ERR_CARRIES_REPORT_ID)
        })?),
        None => None,
    };

    let rows = app_state
        .locality_service
        .carries_report(id)
        .await
        .map_err(|err| ApiError::new(StatusCode::NOT_FOUND, err.to_string()))?;

    Ok(web::success(StatusCode::OK, rows))
}
