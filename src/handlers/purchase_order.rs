// src/handlers/purchase_order.rs

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::{
    common::{error::ApiError, web},
    config::AppState,
    models::purchase_order::PurchaseOrder,
};

// ---
// Payload: CreatePurchaseOrderPayload
// ---
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePurchaseOrderPayload {
    #[validate(
        required(message = "order_number is required"),
        length(min = 1, message = "order_number is required")
    )]
    pub order_number: Option<String>,
    #[validate(required(message = "order_date is required"))]
    pub order_date: Option<DateTime<Utc>>,
    #[validate(
        required(message = "tracking_code is required"),
        length(min = 1, message = "tracking_code is required")
    )]
    pub tracking_code: Option<String>,
    #[validate(required(message = "buyer_id is required"))]
    pub buyer_id: Option<i32>,
    #[validate(required(message = "product_record_id is required"))]
    pub product_record_id: Option<i32>,
    #[serde(default)]
    pub order_status_id: i32,
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
    payload: Result<Json<CreatePurchaseOrderPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
    })?;

    if let Err(errors) = payload.validate() {
        return Err(ApiError::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            web::validation_message(&errors),
        ));
    }

    // O DATETIME do MySQL não representa nada antes de 1000-01-01.
    let order_date = payload.order_date.unwrap_or_default();
    let floor = NaiveDate::from_ymd_opt(1000, 1, 1)
        .unwrap_or(NaiveDate::MIN)
        .and_time(NaiveTime::MIN)
        .and_utc();
    if order_date <= floor {
        return Err(ApiError::new(
            StatusCode::BAD_REQUEST,
            "the date is not a date of the dates range",
        ));
    }

    let order = PurchaseOrder {
        id: 0,
        order_number: payload.order_number.unwrap_or_default(),
        order_date,
        tracking_code: payload.tracking_code.unwrap_or_default(),
        buyer_id: payload.buyer_id.unwrap_or_default(),
        product_record_id: payload.product_record_id.unwrap_or_default(),
        order_status_id: payload.order_status_id,
    };

    let order = app_state
        .purchase_order_service
        .save(order)
        .await
        .map_err(|err| ApiError::new(StatusCode::CONFLICT, err.to_string()))?;

    Ok(web::success(StatusCode::CREATED, order))
}

// ---
// Handler: report_by_buyer
// ---
pub async fn report_by_buyer(
    State(app_state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let id = match query.id {
        Some(raw) => Some(raw.parse::<i32>().map_err(|_| {
            ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, "invalid id format")
        })?),
        None => None,
    };

    let reports = app_state
        .purchase_order_service
        .report_by_buyer(id)
        .await
        .map_err(|_| ApiError::new(StatusCode::NOT_FOUND, "there is no purchase orders"))?;

    // Com filtro, comprador sem pedidos responde 404; sem filtro, lista vazia.
    if id.is_some() && reports.is_empty() {
        return Err(ApiError::new(
            StatusCode::NOT_FOUND,
            "there is no purchase orders",
        ));
    }

    Ok(web::success(StatusCode::OK, reports))
}
