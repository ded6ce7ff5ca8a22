// src/handlers/employee.rs

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
    models::employee::Employee,
};

// ---
// Payload: CreateEmployeePayload
// ---
#[derive(Debug, Deserialize)]
pub struct CreateEmployeePayload {
    pub card_number_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub warehouse_id: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateEmployeePayload {
    pub card_number_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub warehouse_id: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    pub id: Option<String>,
}

// ---
// Handler: get_all
// ---
pub async fn get_all(State(app_state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let employees = app_state
        .employee_service
        .get_all()
        .await
        .map_err(|err| ApiError::new(StatusCode::NOT_FOUND, err.to_string()))?;

    Ok(web::success(StatusCode::OK, employees))
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

    let employee = app_state
        .employee_service
        .get(id)
        .await
        .map_err(|err| ApiError::new(StatusCode::NOT_FOUND, err.to_string()))?;

    Ok(web::success(StatusCode::OK, employee))
}

// ---
// Handler: create
// ---
pub async fn create(
    State(app_state): State<AppState>,
    payload: Result<Json<CreateEmployeePayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
    })?;

    let missing = [
        (
            payload.card_number_id.as_deref().unwrap_or_default().is_empty(),
            "card_number_id is required",
        ),
        (
            payload.first_name.as_deref().unwrap_or_default().is_empty(),
            "first_name is required",
        ),
        (
            payload.last_name.as_deref().unwrap_or_default().is_empty(),
            "last_name is required",
        ),
    ];
    for (absent, message) in missing {
        if absent {
            return Err(ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, message));
        }
    }

    let warehouse_id = payload.warehouse_id.unwrap_or(0);
    if warehouse_id < 0 {
        return Err(ApiError::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "WareHouseID cannot be negative",
        ));
    }

    let employee = Employee {
        id: 0,
        card_number_id: payload.card_number_id.unwrap_or_default(),
        first_name: payload.first_name.unwrap_or_default(),
        last_name: payload.last_name.unwrap_or_default(),
        warehouse_id,
    };

    let employee = app_state
        .employee_service
        .save(employee)
        .await
        .map_err(|err| {
            let status = match &err {
                AppError::Conflict(_) => StatusCode::CONFLICT,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            ApiError::new(status, err.to_string())
        })?;

    Ok(web::success(StatusCode::CREATED, employee))
}

// ---
// Handler: update
// ---
pub async fn update(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateEmployeePayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id: i32 = id
        .parse()
        .map_err(|_| ApiError::new(StatusCode::BAD_REQUEST, "invalid id"))?;
    let Json(payload) = payload.map_err(|rejection| {
        ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
    })?;

    // O crachá identifica o funcionário, então o PATCH não pode trocá-lo.
    if payload
        .card_number_id
        .as_deref()
        .is_some_and(|card| !card.is_empty())
    {
        return Err(ApiError::new(
            StatusCode::BAD_REQUEST,
            "card_number_id field cannot be updated",
        ));
    }

    let employee = app_state
        .employee_service
        .update(
            id,
            payload.first_name.as_deref(),
            payload.last_name.as_deref(),
            payload.warehouse_id,
        )
        .await
        .map_err(|err| {
            let status = match &err {
                AppError::NotFound(_) => StatusCode::NOT_FOUND,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            ApiError::new(status, err.to_string())
        })?;

    Ok(web::success(StatusCode::OK, employee))
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

    app_state.employee_service.delete(id).await.map_err(|err| {
        let status = match &err {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        ApiError::new(status, err.to_string())
    })?;

    Ok(web::success(StatusCode::NO_CONTENT, ()))
}

// ---
// Handler: report_inbound_orders
// ---
pub async fn report_inbound_orders(
    State(app_state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let id = match query.id {
        Some(raw) => Some(raw.parse::<i32>().map_err(|_| {
            ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, "invalid id format")
        })?),
        None => None,
    };

    let rows = app_state
        .employee_service
        .report_inbound_orders(id)
        .await
        .map_err(|err| {
            let status = match &err {
                AppError::NotFound(_) => StatusCode::NOT_FOUND,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            ApiError::new(status, err.to_string())
        })?;

    Ok(web::success(StatusCode::OK, rows))
}
