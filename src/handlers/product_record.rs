// src/handlers/product_record.rs

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    common::{
        error::{ApiError, AppError},
        web,
    },
    config::AppState,
    models::product_record::ProductRecord,
};

// ---
// Payload: CreateProductRecordPayload
// ---
#[derive(Debug, Deserialize)]
pub struct CreateProductRecordPayload {
    pub last_update_date: Option<String>,
    pub purchase_price: Option<f64>,
    pub sale_price: Option<f64>,
    pub products_id: Option<i32>,
}

// ---
// Handler: create
// ---
pub async fn create(
    State(app_state): State<AppState>,
    payload: Result<Json<CreateProductRecordPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) =
        payload.map_err(|rejection| ApiError::new(StatusCode::BAD_REQUEST, rejection.body_text()))?;

    let missing = [
        (
            payload
                .last_update_date
                .as_deref()
                .unwrap_or_default()
                .is_empty(),
            "last_update_date is required",
        ),
        (payload.purchase_price.is_none(), "purchase_price is required"),
        (payload.sale_price.is_none(), "sale_price is required"),
        (payload.products_id.is_none(), "products_id is required"),
    ];
    for (absent, message) in missing {
        if absent {
            return Err(ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, message));
        }
    }

    let last_update_date = NaiveDate::parse_from_str(
        payload.last_update_date.as_deref().unwrap_or_default(),
        "%Y-%m-%d",
    )
    .map_err(|_| {
        ApiError::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "invalid date example 2008-01-02",
        )
    })?;

    let record = ProductRecord {
        id: 0,
        last_update_date,
        purchase_price: payload.purchase_price.unwrap_or_default(),
        sale_price: payload.sale_price.unwrap_or_default(),
        products_id: payload.products_id.unwrap_or_default(),
    };

    let record = app_state
        .product_record_service
        .save(record)
        .await
        .map_err(|err| {
            let status = match &err {
                AppError::Conflict(_) => StatusCode::CONFLICT,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            ApiError::new(status, err.to_string())
        })?;

    // A rota de criação responde 200, não 201.
    Ok(web::success(StatusCode::OK, record))
}
