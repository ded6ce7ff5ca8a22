// src/handlers/warehouse.rs

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{
    common::{error::ApiError, web},
    config::AppState,
    models::warehouse::{Warehouse, WarehousePatch},
};

// ---
// Payload: CreateWarehousePayload
// ---
#[derive(Debug, Deserialize)]
pub struct CreateWarehousePayload {
    pub address: Option<String>,
    pub telephone: Option<String>,
    pub warehouse_code: Option<String>,
    pub minimum_capacity: Option<i32>,
    pub minimum_temperature: Option<i32>,
}

impl CreateWarehousePayload {
    // A mensagem de erro lista os campos em PascalCase, na ordem do struct.
    fn empty_fields(&self) -> Vec<&'static str> {
        let mut empty = Vec::new();
        if self.address.as_deref().unwrap_or_default().is_empty() {
            empty.push("Address");
        }
        if self.telephone.as_deref().unwrap_or_default().is_empty() {
            empty.push("Telephone");
        }
        if self.warehouse_code.as_deref().unwrap_or_default().is_empty() {
            empty.push("WarehouseCode");
        }
        if self.minimum_capacity.is_none() {
            empty.push("MinimumCapacity");
        }
        if self.minimum_temperature.is_none() {
            empty.push("MinimumTemperature");
        }
        empty
    }
}

// ---
// Handler: get_all
// ---
pub async fn get_all(State(app_state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let warehouses = app_state
        .warehouse_service
        .get_all()
        .await
        .map_err(|err| ApiError::new(StatusCode::NOT_FOUND, err.to_string()))?;

    Ok(web::success(StatusCode::OK, warehouses))
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

    let warehouse = app_state
        .warehouse_service
        .get(id)
        .await
        .map_err(|err| ApiError::new(StatusCode::NOT_FOUND, err.to_string()))?;

    Ok(web::success(StatusCode::OK, warehouse))
}

// ---
// Handler: create
// ---
pub async fn create(
    State(app_state): State<AppState>,
    payload: Result<Json<CreateWarehousePayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
    })?;

    let empty = payload.empty_fields();
    if !empty.is_empty() {
        return Err(ApiError::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("empty fields: {}", empty.join(", ")),
        ));
    }

    let minimum_capacity = payload.minimum_capacity.unwrap_or_default();
    if minimum_capacity < 0 {
        return Err(ApiError::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "minimum capacity must be greater than 0",
        ));
    }
    let minimum_temperature = payload.minimum_temperature.unwrap_or_default();
    if !(-10..=20).contains(&minimum_temperature) {
        return Err(ApiError::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "minimum temperature must be between -10 and 20",
        ));
    }

    let warehouse = Warehouse {
        id: 0,
        address: payload.address.unwrap_or_default(),
        telephone: payload.telephone.unwrap_or_default(),
        warehouse_code: payload.warehouse_code.unwrap_or_default(),
        minimum_capacity,
        minimum_temperature,
    };

    let warehouse = app_state
        .warehouse_service
        .save(warehouse)
        .await
        .map_err(|err| ApiError::new(StatusCode::CONFLICT, err.to_string()))?;

    Ok(web::success(StatusCode::CREATED, warehouse))
}

// ---
// Handler: update
// ---
pub async fn update(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<WarehousePatch>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id: i32 = id
        .parse()
        .map_err(|_| ApiError::new(StatusCode::BAD_REQUEST, "invalid id"))?;
    let Json(patch) = payload.map_err(|rejection| {
        ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
    })?;

    if let Some(minimum_capacity) = patch.minimum_capacity {
        if minimum_capacity < 0 {
            return Err(ApiError::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                "minimum capacity must be greater than 0",
            ));
        }
    }
    if let Some(minimum_temperature) = patch.minimum_temperature {
        if !(-10..=20).contains(&minimum_temperature) {
            return Err(ApiError::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                "minimum temperature must be between -10 and 20",
            ));
        }
    }

    let warehouse = app_state
        .warehouse_service
        .update(id, patch)
        .await
        .map_err(|err| ApiError::new(StatusCode::NOT_FOUND, err.to_string()))?;

    Ok(web::success(StatusCode::OK, warehouse))
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

    app_state
        .warehouse_service
        .delete(id)
        .await
        .map_err(|err| ApiError::new(StatusCode::NOT_FOUND, err.to_string()))?;

    Ok(web::success(StatusCode::NO_CONTENT, ()))
}
