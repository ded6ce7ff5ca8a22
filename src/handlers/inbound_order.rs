// src/handlers/inbound_order.rs

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    common::{error::ApiError, web},
    config::AppState,
    models::inbound_order::InboundOrder,
};

// ---
// Payload: CreateInboundOrderPayload
// ---
#[derive(Debug, Deserialize)]
pub struct CreateInboundOrderPayload {
    pub order_date: Option<String>,
    pub order_number: Option<String>,
    pub employee_id: Option<i32>,
    pub product_batch_id: Option<i32>,
    pub warehouse_id: Option<i32>,
}

// ---
// Handler: get_all
// ---
pub async fn get_all(State(app_state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let orders = app_state
        .inbound_order_service
        .get_all()
        .await
        .map_err(|err| ApiError::new(StatusCode::NOT_FOUND, err.to_string()))?;

    Ok(web::success(StatusCode::OK, orders))
}

// ---
// Handler: create
// ---
pub async fn create(
    State(app_state): State<AppState>,
    payload: Result<Json<CreateInboundOrderPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
    })?;

    // Mensagens desta rota ficaram em espanhol.
    let missing = [
        (
            payload.order_date.as_deref().unwrap_or_default().is_empty(),
            "El campo: Order_date es requerido",
        ),
        (
            payload.order_number.as_deref().unwrap_or_default().is_empty(),
            "El campo: Order_number es requerido",
        ),
        (
            payload.employee_id.unwrap_or_default() == 0,
            "El campo: Employee_id es requerido",
        ),
        (
            payload.product_batch_id.unwrap_or_default() == 0,
            "El campo: Product_batch_id es requerido",
        ),
        (
            payload.warehouse_id.unwrap_or_default() == 0,
            "El campo: Warehouse_id es requerido",
        ),
    ];
    for (absent, message) in missing {
        if absent {
            return Err(ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, message));
        }
    }

    let order_date = NaiveDate::parse_from_str(
        payload.order_date.as_deref().unwrap_or_default(),
        "%Y-%m-%d",
    )
    .map_err(|_| {
        ApiError::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "invalid date example 2008-01-02",
        )
    })?;

    let order = InboundOrder {
        id: 0,
        order_date,
        order_number: payload.order_number.unwrap_or_default(),
        employee_id: payload.employee_id.unwrap_or_default(),
        product_batch_id: payload.product_batch_id.unwrap_or_default(),
        warehouse_id: payload.warehouse_id.unwrap_or_default(),
    };

    let order = app_state
        .inbound_order_service
        .save(order)
        .await
        .map_err(|err| ApiError::new(StatusCode::CONFLICT, err.to_string()))?;

    Ok(web::success(StatusCode::CREATED, order))
}
