// src/handlers/section.rs

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
    models::section::{Section, SectionPatch},
};

// ---
// Payload: CreateSectionPayload
// ---
#[derive(Debug, Deserialize)]
pub struct CreateSectionPayload {
    #[serde(default)]
    pub section_number: i32,
    #[serde(default)]
    pub current_temperature: i32,
    #[serde(default)]
    pub minimum_temperature: i32,
    #[serde(default)]
    pub current_capacity: i32,
    #[serde(default)]
    pub minimum_capacity: i32,
    #[serde(default)]
    pub maximum_capacity: i32,
    #[serde(default)]
    pub warehouse_id: i32,
    #[serde(default)]
    pub product_type_id: i32,
}

// ---
// Handler: get_all
// ---
pub async fn get_all(State(app_state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let sections = app_state
        .section_service
        .get_all()
        .await
        .map_err(|err| ApiError::new(StatusCode::NOT_FOUND, err.to_string()))?;

    Ok(web::success(StatusCode::OK, sections))
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
        .map_err(|_| ApiError::new(StatusCode::NOT_FOUND, "invalid id"))?;

    // Seção ausente responde 409 nesta rota, não 404.
    let section = app_state
        .section_service
        .get(id)
        .await
        .map_err(|err| ApiError::new(StatusCode::CONFLICT, err.to_string()))?;

    Ok(web::success(StatusCode::OK, section))
}

// ---
// Handler: create
// ---
pub async fn create(
    State(app_state): State<AppState>,
    payload: Result<Json<CreateSectionPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
    })?;

    let section = Section {
        id: 0,
        section_number: payload.section_number,
        current_temperature: payload.current_temperature,
        minimum_temperature: payload.minimum_temperature,
        current_capacity: payload.current_capacity,
        minimum_capacity: payload.minimum_capacity,
        maximum_capacity: payload.maximum_capacity,
        warehouse_id: payload.warehouse_id,
        product_type_id: payload.product_type_id,
    };

    let section = app_state
        .section_service
        .save(section)
        .await
        .map_err(|err| ApiError::new(StatusCode::CONFLICT, err.to_string()))?;

    Ok(web::success(StatusCode::CREATED, section))
}

// ---
// Handler: update
// ---
pub async fn update(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<SectionPatch>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id: i32 = id
        .parse()
        .map_err(|_| ApiError::new(StatusCode::NOT_FOUND, "invalid id"))?;
    let Json(patch) =
        payload.map_err(|rejection| ApiError::new(StatusCode::NOT_FOUND, rejection.body_text()))?;

    let section = app_state
        .section_service
        .update(id, patch)
        .await
        .map_err(|err| ApiError::new(StatusCode::NOT_FOUND, err.to_string()))?;

    Ok(web::success(StatusCode::OK, section))
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
        .map_err(|_| ApiError::new(StatusCode::CONFLICT, "invalid id"))?;

    app_state
        .section_service
        .delete(id)
        .await
        .map_err(|err| ApiError::new(StatusCode::NOT_FOUND, err.to_string()))?;

    Ok(web::success(StatusCode::NO_CONTENT, ()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use serde_json::json;

    use crate::{
        config::AppState,
        mocks::{self, MockSectionRepository},
        models::section::Section,
        routes,
        services::SectionService,
    };

    fn seeded_state() -> AppState {
        let mut state = mocks::test_state();
        state.section_service = SectionService::new(Arc::new(MockSectionRepository::with_data(
            vec![Section {
                id: 1,
                section_number: 10,
                current_temperature: 15,
                minimum_temperature: 5,
                current_capacity: 20,
                minimum_capacity: 10,
                maximum_capacity: 50,
                warehouse_id: 1,
                product_type_id: 1,
            }],
        )));
        state
    }

    #[tokio::test]
    async fn create_responds_created_with_saved_section() {
        let app = routes::api_router(mocks::test_state());

        let (status, body) = mocks::send(
            app,
            mocks::json_request(
                "POST",
                "/api/v1/sections",
                json!({
                    "section_number": 10,
                    "current_temperature": 15,
                    "minimum_temperature": 5,
                    "current_capacity": 20,
                    "minimum_capacity": 10,
                    "maximum_capacity": 50,
                    "warehouse_id": 1,
                    "product_type_id": 1
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["id"], 1);
        assert_eq!(body["data"]["section_number"], 10);
    }

    #[tokio::test]
    async fn create_duplicate_section_number_conflicts() {
        let app = routes::api_router(seeded_state());

        let (status, body) = mocks::send(
            app,
            mocks::json_request(
                "POST",
                "/api/v1/sections",
                json!({"section_number": 10, "warehouse_id": 1}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["message"], "section already exists");
    }

    #[tokio::test]
    async fn get_with_malformed_id_is_not_found() {
        let app = routes::api_router(mocks::test_state());

        let (status, _) = mocks::send(app, mocks::request("GET", "/api/v1/sections/abc")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn get_missing_section_conflicts() {
        let app = routes::api_router(mocks::test_state());

        let (status, body) = mocks::send(app, mocks::request("GET", "/api/v1/sections/9")).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["message"], "section not found");
    }

    #[tokio::test]
    async fn delete_with_malformed_id_conflicts() {
        let app = routes::api_router(mocks::test_state());

        let (status, body) =
            mocks::send(app, mocks::request("DELETE", "/api/v1/sections/abc")).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["message"], "invalid id");
    }

    #[tokio::test]
    async fn patch_treats_zero_as_absent() {
        let app = routes::api_router(seeded_state());

        let (status, body) = mocks::send(
            app,
            mocks::json_request(
                "PATCH",
                "/api/v1/sections/1",
                json!({"current_capacity": 0, "maximum_capacity": 80}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["current_capacity"], 20);
        assert_eq!(body["data"]["maximum_capacity"], 80);
    }
}
