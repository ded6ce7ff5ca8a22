// src/handlers/product.rs

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
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
    models::product::{Product, ProductPatch},
    services::product_service,
};

// ---
// Payload: CreateProductPayload
// ---
#[derive(Debug, Deserialize)]
pub struct CreateProductPayload {
    pub description: Option<String>,
    pub expiration_rate: Option<i32>,
    pub freezing_rate: Option<i32>,
    pub height: Option<f32>,
    pub length: Option<f32>,
    pub netweight: Option<f32>,
    pub product_code: Option<String>,
    pub recommended_freezing_temperature: Option<f32>,
    pub width: Option<f32>,
    pub product_type_id: Option<i32>,
    pub seller_id: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    pub id: Option<String>,
}

// ---
// Handler: get_all
// ---
pub async fn get_all(State(app_state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let products = app_state
        .product_service
        .get_all()
        .await
        .map_err(|err| ApiError::new(StatusCode::NOT_FOUND, err.to_string()))?;

    Ok(web::success(StatusCode::OK, products))
}

// ---
// Handler: get
// ---
pub async fn get(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: i32 = id
        .parse()
        .map_err(|_| ApiError::new(StatusCode::BAD_REQUEST, "invalid id"))?;

    let product = app_state
        .product_service
        .get(id)
        .await
        .map_err(|err| ApiError::new(StatusCode::NOT_FOUND, err.to_string()))?;

    Ok(web::success(StatusCode::OK, product))
}

// ---
// Handler: create
// ---
pub async fn create(
    State(app_state): State<AppState>,
    payload: Result<Json<CreateProductPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) =
        payload.map_err(|rejection| ApiError::new(StatusCode::BAD_REQUEST, rejection.body_text()))?;

    // A primeira falha encerra a checagem, na ordem do contrato público.
    let missing = [
        (
            payload.description.as_deref().unwrap_or_default().is_empty(),
            "description is required",
        ),
        (payload.expiration_rate.is_none(), "expiration_rate is required"),
        (payload.freezing_rate.is_none(), "freezing_rate is required"),
        (payload.height.is_none(), "height is required"),
        (payload.length.is_none(), "length is required"),
        (payload.netweight.is_none(), "netweight is required"),
        (
            payload.product_code.as_deref().unwrap_or_default().is_empty(),
            "product code is required",
        ),
        (
            payload.recommended_freezing_temperature.is_none(),
            "recommended_freezing_temperature is required",
        ),
        (payload.width.is_none(), "width is required"),
        (payload.product_type_id.is_none(), "product_type_id is required"),
        (payload.seller_id.is_none(), "seller_id is required"),
    ];
    for (absent, message) in missing {
        if absent {
            return Err(ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, message));
        }
    }

    let product = Product {
        id: 0,
        description: payload.description.unwrap_or_default(),
        expiration_rate: payload.expiration_rate.unwrap_or_default(),
        freezing_rate: payload.freezing_rate.unwrap_or_default(),
        height: payload.height.unwrap_or_default(),
        length: payload.length.unwrap_or_default(),
        netweight: payload.netweight.unwrap_or_default(),
        product_code: payload.product_code.unwrap_or_default(),
        recommended_freezing_temperature: payload
            .recommended_freezing_temperature
            .unwrap_or_default(),
        width: payload.width.unwrap_or_default(),
        product_type_id: payload.product_type_id.unwrap_or_default(),
        seller_id: payload.seller_id.unwrap_or_default(),
    };

    let product = app_state
        .product_service
        .save(product)
        .await
        .map_err(|err| {
            let status = match &err {
                AppError::Conflict(_) => StatusCode::CONFLICT,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            ApiError::new(status, err.to_string())
        })?;

    Ok(web::success(StatusCode::CREATED, product))
}

// ---
// Handler: update
// ---
pub async fn update(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ProductPatch>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id: i32 = id
        .parse()
        .map_err(|_| ApiError::new(StatusCode::BAD_REQUEST, "invalid id"))?;
    let Json(patch) =
        payload.map_err(|rejection| ApiError::new(StatusCode::BAD_REQUEST, rejection.body_text()))?;

    let product = app_state
        .product_service
        .update(id, patch)
        .await
        .map_err(|err| ApiError::new(StatusCode::NOT_FOUND, err.to_string()))?;

    Ok(web::success(StatusCode::OK, product))
}

// ---
// Handler: delete
// ---
pub async fn delete(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: i32 = id
        .parse()
        .map_err(|_| ApiError::new(StatusCode::BAD_REQUEST, "invalid id"))?;

    app_state.product_service.delete(id).await.map_err(|err| {
        let status = match &err {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        ApiError::new(status, err.to_string())
    })?;

    Ok(web::success(StatusCode::NO_CONTENT, ()))
}

// ---
// Handler: report_records
// ---
pub async fn report_records(
    State(app_state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let id = match query.id {
        Some(raw) => Some(raw.parse::<i32>().map_err(|_| {
            ApiError::new(StatusCode::NOT_FOUND, product_service::ERR_REPORT_ID)
        })?),
        None => None,
    };

    let rows = app_state
        .product_service
        .record_counts(id)
        .await
        .map_err(|err| ApiError::new(StatusCode::NOT_FOUND, err.to_string()))?;

    Ok(web::success(StatusCode::OK, rows))
}
